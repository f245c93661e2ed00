/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This module defines types that describe when a failed call may be retried.
//!
//! The clients in this workspace never retry on their own. These types only classify errors so
//! that a caller-level retry policy can make its own decision.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// This is a connection level error such as a socket timeout, socket connect error,
    /// tls negotiation timeout etc...
    ///
    /// Typically these should never be applied for non-idempotent request types
    /// since in this scenario, it's impossible to know whether the operation had
    /// a side effect on the server.
    TransientError,

    /// An error where the server explicitly told the client to back off, such as a 429 or 503 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that could be retried.
    ServerError,

    /// The request itself was invalid. Repeating it unchanged will fail again.
    ClientError,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled and the error kind
    /// depends on an HTTP status code), return `None`.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

impl ErrorKind {
    /// Classify an error purely by its HTTP status code.
    ///
    /// Used for errors whose code is not modeled by the service.
    pub fn from_status(status: u16) -> Option<ErrorKind> {
        match status {
            429 | 503 => Some(ErrorKind::ThrottlingError),
            500..=599 => Some(ErrorKind::ServerError),
            400..=499 => Some(ErrorKind::ClientError),
            _ => None,
        }
    }
}
