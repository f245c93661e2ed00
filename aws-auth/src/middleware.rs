/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::provider::{CredentialsError, SharedCredentialsProvider};
use crate::Credentials;
use smithy_http::metrics::{Metric, RequestMetrics};
use smithy_http::middleware::AsyncMapRequest;
use smithy_http::operation::Request;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Middleware stage that resolves the [`Credentials`] of a request
///
/// If the property bag already holds `Credentials`, they were pinned on this request and are used
/// unchanged. Otherwise the [`SharedCredentialsProvider`] in the property bag is asked for fresh
/// credentials, which are stored in the property bag for the signer. The time spent waiting on the
/// provider is recorded as `CredentialsRequestTime`.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CredentialsStage;

impl CredentialsStage {
    pub fn new() -> Self {
        CredentialsStage
    }
}

#[derive(Debug, Error)]
pub enum CredentialsStageError {
    #[error("no credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("failed to load credentials from the credentials provider: {0}")]
    CredentialsLoadingError(#[from] CredentialsError),
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

impl AsyncMapRequest for CredentialsStage {
    type Error = CredentialsStageError;
    type Future = BoxFuture<Result<Request, Self::Error>>;

    fn apply(&self, mut request: Request) -> Self::Future {
        Box::pin(async move {
            let pinned = request.properties().contains::<Credentials>();
            if pinned {
                debug!("using credentials pinned on the request");
                return Ok(request);
            }
            let (provider, metrics) = {
                let properties = request.properties();
                (
                    properties.get::<SharedCredentialsProvider>().cloned(),
                    properties.get::<RequestMetrics>().cloned(),
                )
            };
            let provider = provider.ok_or(CredentialsStageError::MissingCredentialsProvider)?;
            let started = Instant::now();
            let credentials = provider.provide_credentials().await;
            if let Some(metrics) = metrics {
                metrics.record(Metric::CredentialsRequestTime, started.elapsed());
            }
            request.properties_mut().insert(credentials?);
            Ok(request)
        })
    }
}
