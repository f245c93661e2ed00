/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::error_kinds! {
    /// Errors returned by CodeBuild
    pub enum ErrorKind {
        /// An AWS service limit was exceeded for the calling AWS account
        AccountLimitExceeded("AccountLimitExceededException", 400, ClientError),
        /// The input value that was provided is not valid
        InvalidInput("InvalidInputException", 400, ClientError),
        /// There was a problem with the underlying OAuth provider
        OAuthProvider("OAuthProviderException", 400, ClientError),
        /// The specified AWS resource cannot be created, because an AWS resource with the same
        /// settings already exists
        ResourceAlreadyExists("ResourceAlreadyExistsException", 400, ClientError),
        /// The specified AWS resource cannot be found
        ResourceNotFound("ResourceNotFoundException", 400, ClientError),
    }
}

/// Error type returned by every CodeBuild operation
pub type Error = aws_json::ServiceError<ErrorKind>;
