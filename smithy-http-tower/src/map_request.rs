/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::middleware::{AsyncMapRequest, MapRequest};
use smithy_http::operation;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service, ServiceExt};

type BoxedResultFuture<T> = Pin<Box<dyn Future<Output = Result<T, SendOperationError>> + Send>>;

/// Tower service adapter for a [`MapRequest`]
#[derive(Debug, Clone)]
pub struct MapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[derive(Debug)]
pub struct MapRequestLayer<M> {
    mapper: M,
}

impl<M> MapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        MapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for MapRequestLayer<M>
where
    M: Clone,
{
    type Service = MapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        MapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

impl<S, M> Service<operation::Request> for MapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError>,
    S::Response: Send + 'static,
    S::Future: Send + 'static,
    M: MapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxedResultFuture<S::Response>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        match self.mapper.apply(req) {
            Err(e) => Box::pin(std::future::ready(Err(
                SendOperationError::RequestConstructionError(e.into()),
            ))),
            Ok(req) => Box::pin(self.inner.call(req)),
        }
    }
}

/// Tower service adapter for an [`AsyncMapRequest`]
///
/// The inner service is driven to readiness only after the mapper finished, so the inner service
/// must be cheap to clone.
#[derive(Debug, Clone)]
pub struct AsyncMapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[derive(Debug)]
pub struct AsyncMapRequestLayer<M> {
    mapper: M,
}

impl<M> AsyncMapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        AsyncMapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for AsyncMapRequestLayer<M>
where
    M: Clone,
{
    type Service = AsyncMapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        AsyncMapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

impl<S, M> Service<operation::Request> for AsyncMapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError> + Clone + Send + 'static,
    S::Response: Send + 'static,
    S::Future: Send + 'static,
    M: AsyncMapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxedResultFuture<S::Response>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        let mut inner = self.inner.clone();
        let mapped = self.mapper.apply(req);
        Box::pin(async move {
            let req = mapped
                .await
                .map_err(|e| SendOperationError::RequestConstructionError(e.into()))?;
            inner.ready().await?.call(req).await
        })
    }
}

#[cfg(test)]
mod test {
    use crate::map_request::{AsyncMapRequestLayer, MapRequestLayer};
    use crate::SendOperationError;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::{AsyncMapRequest, MapRequest};
    use smithy_http::operation;
    use std::future::Future;
    use std::pin::Pin;
    use tower::{Layer, ServiceExt};

    #[derive(Clone)]
    struct AddHeader;

    impl MapRequest for AddHeader {
        type Error = &'static str;

        fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
            request.augment(|mut req, props| {
                if props.get::<Reject>().is_some() {
                    return Err("rejected");
                }
                req.headers_mut()
                    .insert("x-test", http::HeaderValue::from_static("1"));
                Ok(req)
            })
        }
    }

    struct Reject;

    #[derive(Clone)]
    struct AddProperty;

    impl AsyncMapRequest for AddProperty {
        type Error = std::convert::Infallible;
        type Future = Pin<Box<dyn Future<Output = Result<operation::Request, Self::Error>> + Send>>;

        fn apply(&self, mut request: operation::Request) -> Self::Future {
            Box::pin(async move {
                tokio::task::yield_now().await;
                request.properties_mut().insert(42u32);
                Ok(request)
            })
        }
    }

    fn echo_properties() -> impl tower::Service<
        operation::Request,
        Response = (http::Request<SdkBody>, Option<u32>),
        Error = SendOperationError,
        Future = std::future::Ready<Result<(http::Request<SdkBody>, Option<u32>), SendOperationError>>,
    > + Clone {
        tower::service_fn(|req: operation::Request| {
            let (req, props) = req.into_parts();
            let value = props.acquire().get::<u32>().copied();
            std::future::ready(Ok((req, value)))
        })
    }

    #[tokio::test]
    async fn map_request_applies_mapper() {
        let svc = MapRequestLayer::for_mapper(AddHeader).layer(echo_properties());
        let request = operation::Request::new(http::Request::new(SdkBody::empty()));
        let (req, _) = svc.oneshot(request).await.expect("success");
        assert_eq!(req.headers().get("x-test").unwrap(), "1");
    }

    #[tokio::test]
    async fn map_request_errors_are_construction_failures() {
        let svc = MapRequestLayer::for_mapper(AddHeader).layer(echo_properties());
        let mut request = operation::Request::new(http::Request::new(SdkBody::empty()));
        request.properties_mut().insert(Reject);
        let err = svc.oneshot(request).await.expect_err("rejected");
        assert!(matches!(err, SendOperationError::RequestConstructionError(_)));
    }

    #[tokio::test]
    async fn async_mapper_runs_before_inner() {
        let svc = AsyncMapRequestLayer::for_mapper(AddProperty).layer(echo_properties());
        let request = operation::Request::new(http::Request::new(SdkBody::empty()));
        let (_, value) = svc.oneshot(request).await.expect("success");
        assert_eq!(value, Some(42));
    }
}
