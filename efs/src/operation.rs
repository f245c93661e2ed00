/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::ErrorKind;
use crate::{input, output};
use aws_json::descriptor::OperationDescriptor;
use aws_json::JsonOperation;

macro_rules! rest_operation {
    (
        $(#[$meta:meta])*
        $name:ident($input:ident, $output:ident, $builder:ident) {
            http: $method:literal $uri:literal,
            legacy: $legacy:literal,
            errors: [$($error:ident),* $(,)?]
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            _private: (),
        }

        impl $name {
            pub const DESCRIPTOR: OperationDescriptor<ErrorKind> = OperationDescriptor {
                name: stringify!($name),
                service: &crate::SERVICE,
                method: $method,
                uri: $uri,
                errors: &[$(ErrorKind::$error),*],
                legacy: $legacy,
            };

            pub fn builder() -> input::$builder::Builder {
                input::$builder::Builder::default()
            }
        }

        impl JsonOperation for $name {
            type Input = input::$input;
            type Output = output::$output;
            type Kind = ErrorKind;

            fn descriptor() -> OperationDescriptor<ErrorKind> {
                Self::DESCRIPTOR
            }
        }
    };
}

rest_operation! {
    /// Creates a new, empty file system
    CreateFileSystem(CreateFileSystemInput, CreateFileSystemOutput, create_file_system_input) {
        http: "POST" "/2015-02-01/file-systems",
        legacy: false,
        errors: [
            BadRequest,
            InternalServerError,
            FileSystemAlreadyExists,
            FileSystemLimitExceeded,
            InsufficientThroughputCapacity,
            ThroughputLimitExceeded,
        ]
    }
}

rest_operation! {
    /// Returns the description of a specific file system, or of all file systems owned by the
    /// caller in the region, one page at a time
    DescribeFileSystems(DescribeFileSystemsInput, DescribeFileSystemsOutput, describe_file_systems_input) {
        http: "GET" "/2015-02-01/file-systems",
        legacy: false,
        errors: [BadRequest, InternalServerError, FileSystemNotFound]
    }
}

rest_operation! {
    /// Deletes a file system. Its mount targets must be deleted first.
    DeleteFileSystem(DeleteFileSystemInput, DeleteFileSystemOutput, delete_file_system_input) {
        http: "DELETE" "/2015-02-01/file-systems/{FileSystemId}",
        legacy: false,
        errors: [BadRequest, InternalServerError, FileSystemNotFound, FileSystemInUse]
    }
}

rest_operation! {
    /// Creates a mount target for a file system in a subnet
    CreateMountTarget(CreateMountTargetInput, CreateMountTargetOutput, create_mount_target_input) {
        http: "POST" "/2015-02-01/mount-targets",
        legacy: false,
        errors: [
            BadRequest,
            InternalServerError,
            FileSystemNotFound,
            IncorrectFileSystemLifeCycleState,
            MountTargetConflict,
            SubnetNotFound,
            NoFreeAddressesInSubnet,
            IpAddressInUse,
            NetworkInterfaceLimitExceeded,
            SecurityGroupLimitExceeded,
            SecurityGroupNotFound,
            UnsupportedAvailabilityZone,
        ]
    }
}

rest_operation! {
    /// Creates or overwrites tags of a file system. Superseded by [`TagResource`].
    CreateTags(CreateTagsInput, CreateTagsOutput, create_tags_input) {
        http: "POST" "/2015-02-01/create-tags/{FileSystemId}",
        legacy: true,
        errors: [BadRequest, InternalServerError, FileSystemNotFound]
    }
}

rest_operation! {
    /// Deletes tags of a file system
    DeleteTags(DeleteTagsInput, DeleteTagsOutput, delete_tags_input) {
        http: "POST" "/2015-02-01/delete-tags/{FileSystemId}",
        legacy: true,
        errors: [BadRequest, InternalServerError, FileSystemNotFound]
    }
}

rest_operation! {
    /// Creates a tag for an EFS resource: a file system or an access point
    TagResource(TagResourceInput, TagResourceOutput, tag_resource_input) {
        http: "POST" "/2015-02-01/resource-tags/{ResourceId}",
        legacy: false,
        errors: [BadRequest, InternalServerError, FileSystemNotFound, AccessPointNotFound]
    }
}

rest_operation! {
    ListTagsForResource(ListTagsForResourceInput, ListTagsForResourceOutput, list_tags_for_resource_input) {
        http: "GET" "/2015-02-01/resource-tags/{ResourceId}",
        legacy: false,
        errors: [BadRequest, InternalServerError, FileSystemNotFound, AccessPointNotFound]
    }
}
