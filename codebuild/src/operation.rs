/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::ErrorKind;
use crate::{input, output};
use aws_json::descriptor::OperationDescriptor;
use aws_json::JsonOperation;

macro_rules! json_operation {
    (
        $(#[$meta:meta])*
        $name:ident($input:ident, $output:ident, $builder:ident) {
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
                method: "POST",
                uri: "/",
                errors: &[$(ErrorKind::$error),*],
                legacy: false,
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

json_operation! {
    /// Gets information about one or more builds
    BatchGetBuilds(BatchGetBuildsInput, BatchGetBuildsOutput, batch_get_builds_input) {
        errors: [InvalidInput]
    }
}

json_operation! {
    /// Creates a build project
    CreateProject(CreateProjectInput, CreateProjectOutput, create_project_input) {
        errors: [InvalidInput, ResourceAlreadyExists, AccountLimitExceeded]
    }
}

json_operation! {
    /// Deletes a build project. Its builds are not deleted.
    DeleteProject(DeleteProjectInput, DeleteProjectOutput, delete_project_input) {
        errors: [InvalidInput]
    }
}

json_operation! {
    /// Gets a list of build project names, with each name representing a single build project
    ListProjects(ListProjectsInput, ListProjectsOutput, list_projects_input) {
        errors: [InvalidInput]
    }
}

json_operation! {
    /// Starts running a build
    StartBuild(StartBuildInput, StartBuildOutput, start_build_input) {
        errors: [InvalidInput, ResourceNotFound, AccountLimitExceeded]
    }
}

json_operation! {
    StopBuild(StopBuildInput, StopBuildOutput, stop_build_input) {
        errors: [InvalidInput, ResourceNotFound]
    }
}
