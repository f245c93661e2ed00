/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::BoxError;
use hyper::client::HttpConnector;
use hyper_rustls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use thiserror::Error;
use tower::Service;

/// The request did not complete within the connector's timeout
#[derive(Debug, Error)]
#[error("request timed out after {0:?}")]
pub struct TimedOut(pub Duration);

/// A good base connection type for most use cases
///
/// `Standard` sends requests over HTTPS with hyper and rustls. The whole response body is read
/// before the response is returned: the JSON protocols never stream. With a timeout set, a request
/// that has not produced its full response in time fails with [`TimedOut`].
#[derive(Clone)]
pub struct Standard {
    client: hyper::Client<HttpsConnector<HttpConnector>, SdkBody>,
    timeout: Option<Duration>,
}

impl fmt::Debug for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Standard")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Standard {
    pub fn https() -> Self {
        let https = HttpsConnector::with_native_roots();
        Standard {
            client: hyper::Client::builder().build::<_, SdkBody>(https),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.client.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        let response = self.client.call(req);
        let timeout = self.timeout;
        let fut = async move {
            let response = response.await?;
            let (parts, body) = response.into_parts();
            let body = hyper::body::to_bytes(body).await?;
            Ok::<_, BoxError>(http::Response::from_parts(parts, SdkBody::from(body)))
        };
        Box::pin(async move {
            match timeout {
                Some(timeout) => tokio::time::timeout(timeout, fut).await.map_err(|_| {
                    tracing::debug!(?timeout, "request timed out");
                    Box::new(TimedOut(timeout)) as BoxError
                })?,
                None => fut.await,
            }
        })
    }
}
