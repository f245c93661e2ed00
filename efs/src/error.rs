/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::error_kinds! {
    /// Errors returned by EFS
    pub enum ErrorKind {
        AccessPointAlreadyExists("AccessPointAlreadyExists", 409, ClientError),
        AccessPointLimitExceeded("AccessPointLimitExceeded", 403, ClientError),
        AccessPointNotFound("AccessPointNotFound", 404, ClientError),
        /// The request is malformed or contains an error such as an invalid parameter value
        BadRequest("BadRequest", 400, ClientError),
        /// The service timed out trying to fulfill the request
        DependencyTimeout("DependencyTimeout", 504, ServerError),
        /// The file system already exists with the creation token that was provided
        FileSystemAlreadyExists("FileSystemAlreadyExists", 409, ClientError),
        /// The file system still has mount targets
        FileSystemInUse("FileSystemInUse", 409, ClientError),
        /// The calling account has reached its limit of file systems
        FileSystemLimitExceeded("FileSystemLimitExceeded", 403, ClientError),
        FileSystemNotFound("FileSystemNotFound", 404, ClientError),
        /// The file system's life cycle state is not `available`
        IncorrectFileSystemLifeCycleState("IncorrectFileSystemLifeCycleState", 409, ClientError),
        IncorrectMountTargetState("IncorrectMountTargetState", 409, ClientError),
        /// There is not enough capacity to provision the requested throughput
        InsufficientThroughputCapacity("InsufficientThroughputCapacity", 503, ServerError),
        InternalServerError("InternalServerError", 500, ServerError),
        InvalidPolicy("InvalidPolicyException", 400, ClientError),
        /// The requested IP address is already in use in the subnet
        IpAddressInUse("IpAddressInUse", 409, ClientError),
        /// The mount target would violate a restriction of the file system's mount targets
        MountTargetConflict("MountTargetConflict", 409, ClientError),
        MountTargetNotFound("MountTargetNotFound", 404, ClientError),
        /// The calling account has reached its limit of elastic network interfaces
        NetworkInterfaceLimitExceeded("NetworkInterfaceLimitExceeded", 409, ClientError),
        NoFreeAddressesInSubnet("NoFreeAddressesInSubnet", 409, ClientError),
        PolicyNotFound("PolicyNotFound", 404, ClientError),
        /// More than five security groups were provided for a mount target
        SecurityGroupLimitExceeded("SecurityGroupLimitExceeded", 400, ClientError),
        SecurityGroupNotFound("SecurityGroupNotFound", 400, ClientError),
        SubnetNotFound("SubnetNotFound", 400, ClientError),
        /// The throughput mode or amount of provisioned throughput cannot be changed yet
        ThroughputLimitExceeded("ThroughputLimitExceeded", 400, ClientError),
        TooManyRequests("TooManyRequests", 429, ThrottlingError),
        UnsupportedAvailabilityZone("UnsupportedAvailabilityZone", 400, ClientError),
    }
}

/// Error type returned by every EFS operation
pub type Error = aws_json::ServiceError<ErrorKind>;
