/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod middleware;
pub mod provider;

use smithy_http::property_bag::PropertyBag;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub use provider::{CredentialsError, ProvideCredentials, SharedCredentialsProvider};

/// AWS SDK Credentials
///
/// An opaque struct representing credentials that may be used in an AWS SDK. The secret and the
/// session token never appear in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(Arc<Inner>);

#[derive(PartialEq, Eq)]
struct Inner {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut creds = f.debug_struct("Credentials");
        creds
            .field("access_key_id", &self.0.access_key_id)
            .field("secret_access_key", &"** redacted **");
        if self.0.session_token.is_some() {
            creds.field("session_token", &"** redacted **");
        }
        creds.finish()
    }
}

impl Credentials {
    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Credentials(Arc::new(Inner {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }))
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.0.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.0.session_token.as_deref()
    }
}

/// Install `provider` as the credentials provider of a request
pub fn set_provider(bag: &mut PropertyBag, provider: SharedCredentialsProvider) {
    bag.insert(provider);
}

/// Pin `credentials` on a request
///
/// Pinned credentials are used as-is and the credentials provider is not consulted for that
/// request.
pub fn pin_credentials(bag: &mut PropertyBag, credentials: Credentials) {
    bag.insert(credentials);
}

#[cfg(test)]
mod test {
    use crate::Credentials;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn creds_are_send_sync() {
        assert_send_sync::<Credentials>()
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::from_keys("AKID", "secret", Some("token".to_string()));
        let formatted = format!("{:?}", creds);
        assert!(formatted.contains("AKID"));
        assert!(!formatted.contains("secret\""));
        assert!(!formatted.contains("token\""));
        assert_eq!(creds.session_token(), Some("token"));
    }
}
