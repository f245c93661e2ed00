/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use smithy_http::result::SdkError;
use tower::BoxError;

/// Failure while an operation travels down the middleware stack
///
/// The split matters to callers: a construction error means nothing was sent, while a dispatch
/// error means the transport failed and the request MAY have reached the service.
#[derive(Debug)]
pub enum SendOperationError {
    /// A middleware stage rejected the request (eg. no region, credentials could not be loaded)
    RequestConstructionError(BoxError),

    /// The connector failed before an HTTP response was received
    RequestDispatchError(BoxError),
}

/// Convert a `SendOperationError` into an `SdkError`
impl<E> From<SendOperationError> for SdkError<E> {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestDispatchError(e) => SdkError::DispatchFailure(e),
            SendOperationError::RequestConstructionError(e) => SdkError::ConstructionFailure(e),
        }
    }
}
