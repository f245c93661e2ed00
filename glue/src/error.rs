/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::error_kinds! {
    /// Errors returned by Glue
    pub enum ErrorKind {
        /// Access to a resource was denied
        AccessDenied("AccessDeniedException", 400, ClientError),
        /// A resource to be created or added already exists
        AlreadyExists("AlreadyExistsException", 400, ClientError),
        /// Two processes are trying to modify a resource simultaneously
        ConcurrentModification("ConcurrentModificationException", 400, ClientError),
        /// Too many jobs are being run concurrently
        ConcurrentRunsExceeded("ConcurrentRunsExceededException", 400, ThrottlingError),
        /// A specified condition was not satisfied
        ConditionCheckFailure("ConditionCheckFailureException", 400, ClientError),
        /// The specified crawler is not running
        CrawlerNotRunning("CrawlerNotRunningException", 400, ClientError),
        /// The operation cannot be performed because the crawler is already running
        CrawlerRunning("CrawlerRunningException", 400, ClientError),
        /// The specified crawler is stopping
        CrawlerStopping("CrawlerStoppingException", 400, ClientError),
        /// A specified entity does not exist
        EntityNotFound("EntityNotFoundException", 400, ClientError),
        /// An encryption operation failed
        GlueEncryption("GlueEncryptionException", 400, ClientError),
        /// The same unique identifier was associated with two different records
        IdempotentParameterMismatch("IdempotentParameterMismatchException", 400, ClientError),
        /// The workflow is in an invalid state to perform a requested operation
        IllegalWorkflowState("IllegalWorkflowStateException", 400, ClientError),
        /// An internal service error occurred
        InternalService("InternalServiceException", 500, ServerError),
        /// The input provided was not valid
        InvalidInput("InvalidInputException", 400, ClientError),
        /// The machine learning transform is not ready to run
        MLTransformNotReady("MLTransformNotReadyException", 400, ClientError),
        /// There is no applicable schedule
        NoSchedule("NoScheduleException", 400, ClientError),
        /// The operation timed out
        OperationTimeout("OperationTimeoutException", 400, ServerError),
        /// A resource numerical limit was exceeded
        ResourceNumberLimitExceeded("ResourceNumberLimitExceededException", 400, ClientError),
        /// The specified scheduler is not running
        SchedulerNotRunning("SchedulerNotRunningException", 400, ClientError),
        /// The specified scheduler is already running
        SchedulerRunning("SchedulerRunningException", 400, ClientError),
        /// The specified scheduler is transitioning
        SchedulerTransitioning("SchedulerTransitioningException", 400, ClientError),
        /// A value could not be validated
        Validation("ValidationException", 400, ClientError),
        /// There was a version conflict
        VersionMismatch("VersionMismatchException", 400, ClientError),
    }
}

/// Error type returned by every Glue operation
pub type Error = aws_json::ServiceError<ErrorKind>;

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use aws_json::{ErrorRegistry, ModeledErrorKind};

    #[test]
    fn every_code_dispatches_to_its_kind() {
        let registry = ErrorRegistry::<ErrorKind>::modeled();
        assert_eq!(registry.len(), ErrorKind::modeled().len());
        for kind in ErrorKind::modeled() {
            assert_eq!(registry.dispatch(kind.code()), *kind);
        }
        assert_eq!(
            registry.dispatch(Some("TotallyNewException")),
            ErrorKind::Unhandled
        );
        assert_eq!(registry.dispatch(None), ErrorKind::Unhandled);
    }

    #[test]
    fn kinds_display_their_code() {
        assert_eq!(
            ErrorKind::EntityNotFound.to_string(),
            "EntityNotFoundException"
        );
        assert_eq!(ErrorKind::InternalService.status_hint(), Some(500));
    }
}
