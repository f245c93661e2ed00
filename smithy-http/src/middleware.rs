/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the core, framework agnostic, HTTP middleware interface
//! used by the clients
//!
//! smithy-http-tower provides the Tower-specific adapters.

use crate::body::SdkBody;
use crate::operation;
use crate::pin_mut;
use crate::response::{ParseHttpResponse, ResponseFailure};
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use http_body::Body;
use std::error::Error;
use std::future::Future;

type BoxError = Box<dyn Error + Send + Sync>;

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Most fundamental middleware is expressed as `MapRequest`, including
/// signing & endpoint resolution.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// [`AsyncMapRequest`] is the asynchronous counterpart of [`MapRequest`]
///
/// It is used for stages that have to wait on a collaborator, such as loading credentials.
/// Implementations must not hold the property bag lock across an `.await`.
pub trait AsyncMapRequest {
    type Error: Into<BoxError> + 'static;
    type Future: Future<Output = Result<operation::Request, Self::Error>> + Send + 'static;

    fn apply(&self, request: operation::Request) -> Self::Future;
}

/// Load a response using `handler` to parse the results.
///
/// This function is intended to be used on the response side of a middleware chain.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, ResponseFailure<E>>`
/// - `T`/`E`: the output and the service error type of `handler`
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: http_body::Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, ResponseFailure<E>>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(parsed_response, response.map(|_| SdkBody::taken()));
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(e) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| SdkBody::taken()),
                err: e.into(),
            });
        }
    };

    let response = response.map(|_| Bytes::from(body));
    tracing::trace!(response = ?response, "read response body");
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(SdkBody::from))
}

async fn read_body<B: http_body::Body>(body: B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    pin_mut!(body);
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a handler result into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, ResponseFailure<E>>,
    raw: http::Response<SdkBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(ResponseFailure::Service(err)) => Err(SdkError::ServiceError { raw, err }),
        Err(ResponseFailure::Unmarshall(err)) => Err(SdkError::ResponseError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::load_response;
    use crate::response::{ParseStrictResponse, ResponseFailure};
    use crate::result::SdkError;
    use bytes::Bytes;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<String, ResponseFailure<u16>>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if !response.status().is_success() {
                return Err(ResponseFailure::Service(response.status().as_u16()));
            }
            String::from_utf8(response.body().to_vec()).map_err(ResponseFailure::unmarshall)
        }
    }

    #[tokio::test]
    async fn success_keeps_raw_body() {
        let response = http::Response::new(SdkBody::from("hello"));
        let result = load_response(response, &StatusParser)
            .await
            .expect("success");
        assert_eq!(result.parsed, "hello");
        assert_eq!(result.raw.body().bytes(), Some("hello".as_bytes()));
    }

    #[tokio::test]
    async fn parser_error_is_service_error() {
        let response = http::Response::builder()
            .status(404)
            .body(SdkBody::from("{}"))
            .unwrap();
        match load_response(response, &StatusParser).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, 404);
                assert_eq!(raw.status(), 404);
            }
            other => panic!("unexpected result: {:?}", other.map(|s| s.parsed)),
        }
    }

    #[tokio::test]
    async fn unmarshall_failure_is_response_error() {
        let response = http::Response::new(SdkBody::from(vec![0xff, 0xfe]));
        match load_response(response, &StatusParser).await {
            Err(err @ SdkError::ResponseError { .. }) => {
                assert!(err.is_client_side());
                assert_eq!(err.raw_response().map(|raw| raw.status()), Some(http::StatusCode::OK));
            }
            other => panic!("unexpected result: {:?}", other.map(|s| s.parsed)),
        }
    }

    #[tokio::test]
    async fn unreadable_body_is_response_error() {
        let response = http::Response::new(SdkBody::taken());
        let result = load_response(response, &StatusParser).await;
        assert!(matches!(result, Err(SdkError::ResponseError { .. })));
    }
}
