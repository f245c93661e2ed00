/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Credentials;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available for this provider
    #[error("the provider could not provide credentials or required configuration was not set")]
    CredentialsNotLoaded,

    /// The provider experienced an error during credential resolution
    #[error("an error occurred while loading credentials: {0}")]
    ProviderError(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("unexpected credentials error: {0}")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type Result = std::result::Result<Credentials, CredentialsError>;

pub mod future {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

    /// Future returned by [`ProvideCredentials`](super::ProvideCredentials)
    #[must_use = "futures do nothing unless polled"]
    pub struct ProvideCredentials<'a>(BoxFuture<'a, super::Result>);

    impl<'a> ProvideCredentials<'a> {
        pub fn new(future: impl Future<Output = super::Result> + Send + 'a) -> Self {
            ProvideCredentials(Box::pin(future))
        }

        pub fn ready(credentials: super::Result) -> Self {
            ProvideCredentials(Box::pin(std::future::ready(credentials)))
        }
    }

    impl Future for ProvideCredentials<'_> {
        type Output = super::Result;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            self.0.as_mut().poll(cx)
        }
    }
}

/// Asynchronous Credentials Provider
///
/// Providers are asked once per call; caching, if any, is the provider's business.
pub trait ProvideCredentials: Send + Sync + Debug {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>;
}

pub type SharedCredentialsProvider = Arc<dyn ProvideCredentials>;

impl ProvideCredentials for Credentials {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a> {
        future::ProvideCredentials::ready(Ok(self.clone()))
    }
}

/// Load credentials from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
///
/// The environment is read on every call.
#[derive(Clone, Debug)]
pub struct EnvironmentVariableCredentialsProvider {
    env: fn(&str) -> Option<String>,
}

impl Default for EnvironmentVariableCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        EnvironmentVariableCredentialsProvider {
            env: |key| std::env::var(key).ok(),
        }
    }

    #[cfg(test)]
    fn with_env(env: fn(&str) -> Option<String>) -> Self {
        EnvironmentVariableCredentialsProvider { env }
    }

    fn credentials(&self) -> Result {
        let non_empty = |key: &str| (self.env)(key).filter(|v| !v.trim().is_empty());
        let access_key = non_empty("AWS_ACCESS_KEY_ID").ok_or(CredentialsError::CredentialsNotLoaded)?;
        let secret_key = non_empty("AWS_SECRET_ACCESS_KEY")
            .or_else(|| non_empty("SECRET_ACCESS_KEY"))
            .ok_or(CredentialsError::CredentialsNotLoaded)?;
        let session_token = non_empty("AWS_SESSION_TOKEN");
        Ok(Credentials::from_keys(access_key, secret_key, session_token))
    }
}

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a> {
        future::ProvideCredentials::ready(self.credentials())
    }
}

/// The provider used when none is configured
pub fn default_provider() -> SharedCredentialsProvider {
    Arc::new(EnvironmentVariableCredentialsProvider::new())
}

#[cfg(test)]
mod test {
    use crate::provider::{
        CredentialsError, EnvironmentVariableCredentialsProvider, ProvideCredentials,
    };
    use crate::Credentials;

    #[tokio::test]
    async fn static_credentials_provide_themselves() {
        let creds = Credentials::from_keys("AKID", "secret", None);
        assert_eq!(creds.provide_credentials().await.unwrap(), creds);
    }

    #[tokio::test]
    async fn env_provider_reads_keys() {
        let provider = EnvironmentVariableCredentialsProvider::with_env(|key| match key {
            "AWS_ACCESS_KEY_ID" => Some("AKID".to_string()),
            "AWS_SECRET_ACCESS_KEY" => Some("secret".to_string()),
            "AWS_SESSION_TOKEN" => Some("token".to_string()),
            _ => None,
        });
        let creds = provider.provide_credentials().await.unwrap();
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(creds.secret_access_key(), "secret");
        assert_eq!(creds.session_token(), Some("token"));
    }

    #[tokio::test]
    async fn env_provider_requires_both_keys() {
        let provider = EnvironmentVariableCredentialsProvider::with_env(|key| match key {
            "AWS_ACCESS_KEY_ID" => Some("AKID".to_string()),
            "AWS_SECRET_ACCESS_KEY" => Some("  ".to_string()),
            _ => None,
        });
        match provider.provide_credentials().await {
            Err(CredentialsError::CredentialsNotLoaded) => {}
            other => panic!("expected CredentialsNotLoaded, got {:?}", other),
        }
    }
}
