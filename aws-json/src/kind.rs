/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::retry::ErrorKind;
use std::fmt::Debug;

/// A member of a service's closed set of error kinds
///
/// Implementations are generated by [`error_kinds!`](crate::error_kinds). Every set has an
/// `Unhandled` member: it has no wire code and is produced for any code the service client does
/// not know about.
pub trait ModeledErrorKind: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every kind that has a wire code, in declaration order
    fn modeled() -> &'static [Self];

    /// The fallback kind
    fn unhandled() -> Self;

    /// The wire string of this kind, e.g. `EntityNotFoundException`
    fn code(&self) -> Option<&'static str>;

    /// The HTTP status the service usually pairs with this kind
    fn status_hint(&self) -> Option<u16>;

    fn retry_kind(&self) -> Option<ErrorKind>;
}

/// Declare the error kinds of a service
///
/// Each kind lists its wire code, its usual HTTP status and its retry classification (a variant of
/// [`smithy_types::retry::ErrorKind`]). An `Unhandled` variant is always added.
///
/// ```rust
/// aws_json::error_kinds! {
///     /// Errors returned by the Example service
///     pub enum ExampleErrorKind {
///         NotFound("NotFoundException", 404, ClientError),
///         Throttled("ThrottlingException", 429, ThrottlingError),
///     }
/// }
///
/// use aws_json::ModeledErrorKind;
/// assert_eq!(ExampleErrorKind::NotFound.code(), Some("NotFoundException"));
/// assert_eq!(ExampleErrorKind::Unhandled.code(), None);
/// assert_eq!(ExampleErrorKind::modeled().len(), 2);
/// ```
#[macro_export]
macro_rules! error_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($code:literal, $status:literal, $retry:ident)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// An error the client does not know about
            ///
            /// The raw code and message are available from the error metadata.
            Unhandled,
        }

        impl $crate::ModeledErrorKind for $name {
            fn modeled() -> &'static [Self] {
                &[$($name::$variant,)*]
            }

            fn unhandled() -> Self {
                $name::Unhandled
            }

            fn code(&self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($code),)*
                    $name::Unhandled => None,
                }
            }

            fn status_hint(&self) -> Option<u16> {
                match self {
                    $($name::$variant => Some($status),)*
                    $name::Unhandled => None,
                }
            }

            fn retry_kind(&self) -> Option<$crate::reexports::smithy_types::retry::ErrorKind> {
                match self {
                    $($name::$variant => Some($crate::reexports::smithy_types::retry::ErrorKind::$retry),)*
                    $name::Unhandled => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $($name::$variant => f.write_str($code),)*
                    $name::Unhandled => f.write_str("Unhandled"),
                }
            }
        }
    };
}

#[cfg(test)]
pub(crate) mod test {
    use crate::kind::ModeledErrorKind;
    use smithy_types::retry::ErrorKind;

    crate::error_kinds! {
        pub enum TestErrorKind {
            NotFound("NotFoundException", 404, ClientError),
            Invalid("InvalidInputException", 400, ClientError),
            Internal("InternalServiceException", 500, ServerError),
            /// Shares its code with `NotFound` to exercise registration order
            Shadowed("NotFoundException", 404, ClientError),
        }
    }

    #[test]
    fn kinds_describe_themselves() {
        assert_eq!(TestErrorKind::modeled().len(), 4);
        assert_eq!(TestErrorKind::Internal.code(), Some("InternalServiceException"));
        assert_eq!(TestErrorKind::Internal.status_hint(), Some(500));
        assert_eq!(
            TestErrorKind::Internal.retry_kind(),
            Some(ErrorKind::ServerError)
        );
        assert_eq!(TestErrorKind::unhandled(), TestErrorKind::Unhandled);
        assert_eq!(TestErrorKind::Unhandled.code(), None);
        assert_eq!(TestErrorKind::NotFound.to_string(), "NotFoundException");
        assert_eq!(TestErrorKind::Unhandled.to_string(), "Unhandled");
    }
}
