/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error responses of JSON protocol services

use crate::kind::ModeledErrorKind;
use http::HeaderMap;
use serde_json::Value;
use smithy_types::error::ErrorMetadata;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Reduce a raw error code to the name of the error shape
///
/// Services may qualify codes with a namespace (`aws.glue#EntityNotFoundException`) and append
/// extra data after a colon (`EntityNotFoundException:http://internal.amazon.com/...`).
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.rfind('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn string_field<'a>(body: Option<&'a Value>, fields: &[&str]) -> Option<&'a str> {
    let body = body?;
    fields
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
}

/// Parse the generic parts of an error response
///
/// The code is read from the `x-amzn-errortype` header, then from the body's `__type` or `code`
/// fields. The message comes from `message`, `Message` or `errorMessage`. A body that is not JSON
/// yields no code and no message; the status and request id are kept either way.
pub fn parse_generic_error(status: u16, headers: &HeaderMap, body: &[u8]) -> smithy_types::Error {
    let body: Option<Value> = serde_json::from_slice(body).ok();
    let header_code = headers
        .get(ERROR_TYPE_HEADER)
        .and_then(|v| v.to_str().ok());
    let code = header_code
        .or_else(|| string_field(body.as_ref(), &["__type", "code"]))
        .map(sanitize_error_code);
    let message = string_field(body.as_ref(), &["message", "Message", "errorMessage"]);

    let mut err = smithy_types::Error::builder().status(status);
    if let Some(request_id) = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        err = err.request_id(request_id);
    }
    err.set_code(code.map(str::to_string));
    err.set_message(message.map(str::to_string));
    err.build()
}

/// The error type of a service
///
/// Pairs a kind from the service's closed set with the generic metadata of the response. Errors
/// that never came from an error response, like a success response that could not be parsed,
/// have the `Unhandled` kind and carry their cause as `source`.
#[derive(Debug)]
pub struct ServiceError<K> {
    kind: K,
    meta: smithy_types::Error,
    source: Option<BoxError>,
}

impl<K: ModeledErrorKind> ServiceError<K> {
    pub fn new(kind: K, meta: smithy_types::Error) -> Self {
        ServiceError {
            kind,
            meta,
            source: None,
        }
    }

    /// An error that cannot be attributed to a modeled kind
    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        ServiceError {
            kind: K::unhandled(),
            meta: Default::default(),
            source: Some(err.into()),
        }
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn is(&self, kind: K) -> bool {
        self.kind == kind
    }

    pub fn is_unhandled(&self) -> bool {
        self.kind == K::unhandled()
    }

    pub fn status(&self) -> Option<u16> {
        self.meta.status()
    }
}

impl<K> ErrorMetadata for ServiceError<K> {
    fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }
}

impl<K: ModeledErrorKind> ProvideErrorKind for ServiceError<K> {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        self.kind
            .retry_kind()
            .or_else(|| self.meta.retryable_error_kind())
    }

    fn code(&self) -> Option<&str> {
        self.meta.code().or_else(|| self.kind.code())
    }
}

impl<K: ModeledErrorKind> fmt::Display for ServiceError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = ProvideErrorKind::code(self).unwrap_or("Unhandled");
        match (self.meta.message(), &self.source) {
            (Some(message), _) => write!(f, "{}: {}", code, message),
            (None, Some(source)) => write!(f, "{}: {}", code, source),
            (None, None) => write!(f, "{}", code),
        }
    }
}

impl<K: ModeledErrorKind> Error for ServiceError<K> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

#[cfg(test)]
mod test {
    use crate::error::{parse_generic_error, sanitize_error_code, ServiceError};
    use crate::kind::test::TestErrorKind;
    use http::HeaderMap;
    use smithy_types::error::ErrorMetadata;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};

    #[test]
    fn error_code_sanitization() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[test]
    fn header_code_wins_over_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-errortype", "EntityNotFoundException".parse().unwrap());
        headers.insert("x-amzn-requestid", "1234".parse().unwrap());
        let err = parse_generic_error(
            400,
            &headers,
            br#"{"__type": "aws.glue#InvalidInputException", "Message": "table t is missing"}"#,
        );
        assert_eq!(err.code(), Some("EntityNotFoundException"));
        assert_eq!(err.message(), Some("table t is missing"));
        assert_eq!(err.request_id(), Some("1234"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn body_fields_are_consulted_in_order() {
        let headers = HeaderMap::new();
        let err = parse_generic_error(
            400,
            &headers,
            br#"{"code": "LegacyCode", "__type": "ns#ModernCode", "errorMessage": "m1", "message": "m2"}"#,
        );
        assert_eq!(err.code(), Some("ModernCode"));
        assert_eq!(err.message(), Some("m2"));

        let err = parse_generic_error(400, &headers, br#"{"code": "LegacyCode", "errorMessage": "m1"}"#);
        assert_eq!(err.code(), Some("LegacyCode"));
        assert_eq!(err.message(), Some("m1"));
    }

    #[test]
    fn unparseable_bodies_keep_status() {
        let err = parse_generic_error(503, &HeaderMap::new(), b"<html>Service Unavailable</html>");
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn service_error_display_and_kind() {
        let meta = smithy_types::Error::builder()
            .code("NotFoundException")
            .message("no such thing")
            .status(404)
            .build();
        let err = ServiceError::new(TestErrorKind::NotFound, meta);
        assert!(err.is(TestErrorKind::NotFound));
        assert_eq!(err.to_string(), "NotFoundException: no such thing");
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ClientError));

        let unhandled = ServiceError::<TestErrorKind>::unhandled("expected value at line 1 column 1");
        assert!(unhandled.is_unhandled());
        assert_eq!(
            unhandled.to_string(),
            "Unhandled: expected value at line 1 column 1"
        );
        assert!(std::error::Error::source(&unhandled).is_some());
    }

    #[test]
    fn unhandled_errors_keep_the_raw_code() {
        let meta = smithy_types::Error::builder()
            .code("BrandNewException")
            .message("something new")
            .status(503)
            .build();
        let err = ServiceError::new(TestErrorKind::Unhandled, meta);
        assert_eq!(ProvideErrorKind::code(&err), Some("BrandNewException"));
        assert_eq!(err.message(), Some("something new"));
        assert_eq!(
            err.retryable_error_kind(),
            Some(ErrorKind::ThrottlingError)
        );
    }
}
