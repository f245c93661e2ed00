/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Failure reported by a response handler
///
/// `Service` carries an error the service returned. `Unmarshall` means a success response could
/// not be read into the operation output: it surfaces as a client-side
/// [`SdkError::ResponseError`](crate::result::SdkError::ResponseError).
#[derive(Debug)]
pub enum ResponseFailure<E> {
    Service(E),
    Unmarshall(BoxError),
}

impl<E> ResponseFailure<E> {
    pub fn unmarshall(err: impl Into<BoxError>) -> Self {
        ResponseFailure::Unmarshall(err.into())
    }
}

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps the parsing code pure and sync:
/// reading the body off the wire is the caller's job, and the parser only sees the loaded
/// bytes. This also makes parsers trivially testable with a hand-built `http::Response`.
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<GetTableOutput, ResponseFailure<glue::Error>>`
    type Output;

    /// Parse an HTTP response without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP response from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// `ParseStrictResponse` enables operations that _never_ need to stream the body incrementally to
/// have cleaner implementations. There is a blanket implementation of `ParseHttpResponse` for it.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}
