/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Trait to retrieve error metadata from a service error
pub trait ErrorMetadata {
    /// Returns error metadata, which includes the error code, message and request ID.
    fn meta(&self) -> &Error;

    /// Returns the error code if it's available.
    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Returns the error message, if there is one.
    fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    /// Returns the request ID the service assigned to the failed call, if there is one.
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

/// Generic Error type
///
/// Every error response a service returns is first parsed into this type. Service crates then
/// pair it with a typed error kind. When the error code is not modeled by the service, this is
/// all the information the caller gets, so the raw `code` and `message` are kept verbatim.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    status: Option<u16>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request id.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Sets the HTTP status code of the response that carried the error.
    pub fn status(mut self, status: u16) -> Self {
        self.inner.status = Some(status);
        self
    }

    pub fn set_message(&mut self, message: Option<String>) -> &mut Self {
        self.inner.message = message;
        self
    }

    pub fn set_code(&mut self, code: Option<String>) -> &mut Self {
        self.inner.code = code;
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID the error occurred for, if it's available.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the HTTP status of the error response, if known.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        self.status.and_then(ErrorKind::from_status)
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        if let Some(status) = &self.status {
            fmt.field("status", status);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}
