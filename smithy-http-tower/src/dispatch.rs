/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::body::SdkBody;
use smithy_http::metrics::{Metric, RequestMetrics};
use smithy_http::operation;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{BoxError, Layer, Service};
use tracing::trace;

/// Connects Operation driven middleware to an HTTP implementation.
///
/// Connector failures become [`SendOperationError::RequestDispatchError`]. The time spent in the
/// connector is recorded as `HttpRequestTime` when the request carries a metrics handle.
#[derive(Clone, Debug)]
pub struct DispatchService<S> {
    inner: S,
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

impl<S> Service<operation::Request> for DispatchService<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = SendOperationError;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(|e| SendOperationError::RequestDispatchError(e.into()))
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        let (req, properties) = req.into_parts();
        let metrics = properties.acquire().get::<RequestMetrics>().cloned();
        trace!(request = ?req, "dispatching request");
        let started = Instant::now();
        let future = self.inner.call(req);
        Box::pin(async move {
            let result = future
                .await
                .map_err(|e| SendOperationError::RequestDispatchError(e.into()));
            if let Some(metrics) = metrics {
                metrics.record(Metric::HttpRequestTime, started.elapsed());
            }
            match &result {
                Ok(response) => trace!(status = %response.status(), "received response"),
                Err(err) => trace!(error = ?err, "dispatch failed"),
            }
            result
        })
    }
}

#[derive(Clone, Default)]
#[non_exhaustive]
pub struct DispatchLayer;

impl DispatchLayer {
    pub fn new() -> Self {
        DispatchLayer
    }
}

impl<S> Layer<S> for DispatchLayer
where
    S: Service<http::Request<SdkBody>>,
{
    type Service = DispatchService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DispatchService { inner }
    }
}

#[cfg(test)]
mod test {
    use crate::dispatch::DispatchLayer;
    use crate::SendOperationError;
    use smithy_http::body::SdkBody;
    use smithy_http::operation;
    use tower::{BoxError, Layer, ServiceExt};

    #[tokio::test]
    async fn connector_errors_are_dispatch_errors() {
        let connector = tower::service_fn(|_req: http::Request<SdkBody>| async {
            Err::<http::Response<SdkBody>, BoxError>("connection reset by peer".into())
        });
        let svc = DispatchLayer::new().layer(connector);
        let request = operation::Request::new(http::Request::new(SdkBody::from("hello")));
        match svc.oneshot(request).await {
            Err(SendOperationError::RequestDispatchError(e)) => {
                assert_eq!(e.to_string(), "connection reset by peer")
            }
            other => panic!("expected a dispatch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn request_reaches_the_connector() {
        let connector = tower::service_fn(|req: http::Request<SdkBody>| async move {
            Ok::<_, BoxError>(http::Response::new(SdkBody::from(
                req.body().bytes().unwrap_or_default().to_vec(),
            )))
        });
        let svc = DispatchLayer::new().layer(connector);
        let request = operation::Request::new(http::Request::new(SdkBody::from("echo")));
        let response = svc.oneshot(request).await.expect("success");
        assert_eq!(response.body().bytes(), Some("echo".as_bytes()));
    }
}
