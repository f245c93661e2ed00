/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::body::SdkBody;
use smithy_http::metrics::{Metric, RequestMetrics};
use smithy_http::middleware::load_response;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::{ParseHttpResponse, ResponseFailure};
use smithy_http::result::{SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};

/// `ParseResponseService` dispatches [`Operation`](smithy_http::operation::Operation)s and parses them.
///
/// `ParseResponseService` is intended to wrap a `DispatchService` which will handle the interface between
/// services that operate on [`operation::Request`](operation::Request) and services that operate
/// on [`http::Request`](http::Request).
#[derive(Clone, Debug)]
pub struct ParseResponseService<S, O> {
    inner: S,
    _output_type: PhantomData<fn() -> O>,
}

#[derive(Debug)]
pub struct ParseResponseLayer<O> {
    _output_type: PhantomData<fn() -> O>,
}

impl<O> Default for ParseResponseLayer<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// `ParseResponseLayer` dispatches [`Operation`](smithy_http::operation::Operation)s and parses them.
impl<O> ParseResponseLayer<O> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _output_type: Default::default(),
        }
    }
}

impl<S, O> Layer<S> for ParseResponseLayer<O>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, O>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _output_type: Default::default(),
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// ParseResponseService
///
/// Generic Parameter Listing:
/// `S`: The inner service
/// `O`: The type of the response parser whose output type is `Result<T, ResponseFailure<E>>`
/// `T`: The happy path return of the response parser
/// `E`: The service error returned by the response parser
impl<S, O, T, E> Service<Operation<O>> for ParseResponseService<S, O>
where
    S: Service<operation::Request, Response = http::Response<SdkBody>, Error = SendOperationError>,
    S::Future: Send + 'static,
    O: ParseHttpResponse<SdkBody, Output = Result<T, ResponseFailure<E>>> + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Response = SdkSuccess<T>;
    type Error = SdkError<E>;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Operation<O>) -> Self::Future {
        let (req, parts) = req.into_request_response();
        let handler = parts.response_handler;
        let metrics = req.properties().get::<RequestMetrics>().cloned();
        let resp = self.inner.call(req);
        let fut = async move {
            match resp.await {
                Err(e) => Err(e.into()),
                Ok(resp) => {
                    let started = Instant::now();
                    let result = load_response(resp, &handler).await;
                    if let Some(metrics) = metrics {
                        metrics.record(Metric::ResponseProcessingTime, started.elapsed());
                    }
                    result
                }
            }
        };
        Box::pin(fut)
    }
}

#[cfg(test)]
mod test {
    use crate::dispatch::DispatchLayer;
    use crate::parse_response::ParseResponseLayer;
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{self, Operation};
    use smithy_http::response::{ParseStrictResponse, ResponseFailure};
    use smithy_http::result::SdkError;
    use tower::{BoxError, ServiceBuilder, ServiceExt};

    #[derive(Clone)]
    struct Utf8Parser;

    impl ParseStrictResponse for Utf8Parser {
        type Output = Result<String, ResponseFailure<String>>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            let body = String::from_utf8_lossy(response.body()).to_string();
            if response.status().is_success() {
                Ok(body)
            } else {
                Err(ResponseFailure::Service(body))
            }
        }
    }

    #[tokio::test]
    async fn parses_success_and_errors() {
        let connector = tower::service_fn(|req: http::Request<SdkBody>| async move {
            let status: u16 = if req.uri().path() == "/fail" { 500 } else { 200 };
            Ok::<_, BoxError>(
                http::Response::builder()
                    .status(status)
                    .body(SdkBody::from("payload"))
                    .unwrap(),
            )
        });
        let svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<Utf8Parser>::new())
            .layer(DispatchLayer::new())
            .service(connector);

        let ok = Operation::new(
            operation::Request::new(http::Request::new(SdkBody::empty())),
            Utf8Parser,
        );
        let parsed = svc.clone().oneshot(ok).await.expect("success");
        assert_eq!(parsed.parsed, "payload");

        let fail = Operation::new(
            operation::Request::new(
                http::Request::builder()
                    .uri("/fail")
                    .body(SdkBody::empty())
                    .unwrap(),
            ),
            Utf8Parser,
        );
        match svc.oneshot(fail).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "payload");
                assert_eq!(raw.status(), 500);
            }
            other => panic!("expected a service error: {:?}", other.map(|s| s.parsed)),
        }
    }
}
