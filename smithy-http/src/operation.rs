/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::{PropertyBag, SharedPropertyBag};
use std::borrow::Cow;
use std::sync::MutexGuard;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// Clock skew correction applied to the signing time, in seconds
///
/// A positive offset moves the signing time forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeOffset(pub i64);

/// An error that occurred while turning a typed input into a request.
///
/// Build errors are always raised before anything is sent over the network.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("`{field}` was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("`{field}` was invalid. {details}")]
    InvalidField { field: &'static str, details: String },
    #[error("failed to serialize input: {0}")]
    SerializationError(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to construct the HTTP request: {0}")]
    Other(#[from] http::Error),
}

impl BuildError {
    pub fn missing_field(field: &'static str) -> Self {
        BuildError::MissingField {
            field,
            details: "this field is required",
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A request envelope paired with the handler that will parse its response
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.request.properties_mut().insert(metadata.clone());
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }
}

/// The request envelope
///
/// Pairs the HTTP request with a property bag holding everything middleware needs to finish the
/// request: region, endpoint, credentials, time offset, metrics. An envelope belongs to a single
/// call and is never shared with another.
#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    properties: SharedPropertyBag,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: SharedPropertyBag::new(),
        }
    }

    pub fn from_parts(inner: http::Request<SdkBody>, properties: SharedPropertyBag) -> Self {
        Request { inner, properties }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut self.properties.acquire_mut();
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.properties.acquire_mut()
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.properties.acquire()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    /// Clone the envelope.
    ///
    /// The clone shares its property bag with the original.
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method())
            .version(self.inner.version())
            .body(cloned_body)
            .ok()?;
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, SharedPropertyBag) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.acquire().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn metadata_is_visible_to_middleware() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let op = Operation::new(request, ()).with_metadata(Metadata::new("GetTable", "glue"));
        assert_eq!(op.metadata().map(|m| m.name()), Some("GetTable"));
        assert_eq!(
            op.properties().get::<Metadata>().map(|m| m.service()),
            Some("glue")
        );
    }

    #[test]
    fn build_error_messages() {
        assert_eq!(
            BuildError::missing_field("name").to_string(),
            "`name` was missing. this field is required"
        );
    }
}
