/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful response from a call, along with the raw HTTP response
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<SdkBody>,
    pub parsed: O,
}

/// Failed call
///
/// `ConstructionFailure`, `DispatchFailure` and `ResponseError` are client-side failures: the
/// service never produced a modeled answer. `ServiceError` is the only variant that carries an
/// error the service itself returned.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<SdkBody>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        raw: http::Response<SdkBody>,
        err: E,
    },
}

impl<E> SdkError<E> {
    /// True when the failure happened on this side of the wire
    pub fn is_client_side(&self) -> bool {
        !matches!(self, SdkError::ServiceError { .. })
    }

    /// Returns the service error, if the service returned one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Consumes the error, returning the service error if there is one.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// The raw HTTP response, when one was received
    pub fn raw_response(&self) -> Option<&http::Response<SdkBody>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response error: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
