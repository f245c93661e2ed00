/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::kind::ModeledErrorKind;

/// Maps wire error codes to a service's error kinds
///
/// Entries are consulted in registration order and the first one whose code equals the response
/// code wins. Codes nothing is registered for map to the fallback kind. A registry is built once
/// per client and never modified afterwards.
#[derive(Clone, Debug)]
pub struct ErrorRegistry<K> {
    entries: Vec<(&'static str, K)>,
    fallback: K,
}

impl<K: ModeledErrorKind> Default for ErrorRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ModeledErrorKind> ErrorRegistry<K> {
    /// An empty registry: every code maps to the `Unhandled` kind
    pub fn new() -> Self {
        ErrorRegistry {
            entries: Vec::new(),
            fallback: K::unhandled(),
        }
    }

    /// A registry holding every modeled kind of `K`, in declaration order
    pub fn modeled() -> Self {
        K::modeled()
            .iter()
            .fold(Self::new(), |registry, kind| match kind.code() {
                Some(code) => registry.register(code, *kind),
                None => registry,
            })
    }

    pub fn register(mut self, code: &'static str, kind: K) -> Self {
        self.entries.push((code, kind));
        self
    }

    /// Map a (sanitized) error code to an error kind
    pub fn dispatch(&self, code: Option<&str>) -> K {
        code.and_then(|code| {
            self.entries
                .iter()
                .find(|(registered, _)| *registered == code)
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> K {
        self.fallback
    }

    pub fn contains(&self, kind: K) -> bool {
        self.entries.iter().any(|(_, registered)| *registered == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, K)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::kind::test::TestErrorKind;
    use crate::kind::ModeledErrorKind;
    use crate::registry::ErrorRegistry;

    #[test]
    fn every_modeled_code_round_trips() {
        let registry = ErrorRegistry::<TestErrorKind>::modeled();
        for kind in TestErrorKind::modeled() {
            if *kind == TestErrorKind::Shadowed {
                continue;
            }
            assert_eq!(registry.dispatch(kind.code()), *kind);
        }
    }

    #[test]
    fn first_registration_wins() {
        let registry = ErrorRegistry::<TestErrorKind>::modeled();
        assert_eq!(
            registry.dispatch(Some("NotFoundException")),
            TestErrorKind::NotFound
        );
        assert!(registry.contains(TestErrorKind::Shadowed));
    }

    #[test]
    fn unknown_codes_fall_back() {
        let registry = ErrorRegistry::<TestErrorKind>::modeled();
        assert_eq!(
            registry.dispatch(Some("SomethingNewException")),
            TestErrorKind::Unhandled
        );
        assert_eq!(registry.dispatch(None), TestErrorKind::Unhandled);
        assert_eq!(
            ErrorRegistry::<TestErrorKind>::new().dispatch(Some("NotFoundException")),
            TestErrorKind::Unhandled
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        let registry = ErrorRegistry::<TestErrorKind>::new()
            .register("InvalidInputException", TestErrorKind::Invalid);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.dispatch(Some("invalidinputexception")),
            TestErrorKind::Unhandled
        );
    }
}
