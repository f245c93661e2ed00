/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::error_kinds! {
    /// Errors returned by Kinesis Video Signaling
    pub enum ErrorKind {
        /// The client is calling too fast
        ClientLimitExceeded("ClientLimitExceededException", 400, ThrottlingError),
        /// The value for an input parameter is invalid
        InvalidArgument("InvalidArgumentException", 400, ClientError),
        /// The specified client is invalid
        InvalidClient("InvalidClientException", 400, ClientError),
        /// The caller is not authorized to perform this operation
        NotAuthorized("NotAuthorizedException", 401, ClientError),
        /// The specified resource is not found
        ResourceNotFound("ResourceNotFoundException", 404, ClientError),
        /// The client session has expired. Reconnect to continue.
        SessionExpired("SessionExpiredException", 400, ClientError),
    }
}

/// Error type returned by every Kinesis Video Signaling operation
pub type Error = aws_json::ServiceError<ErrorKind>;
