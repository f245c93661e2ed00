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
    /// Creates a new database in a Data Catalog
    CreateDatabase(CreateDatabaseInput, CreateDatabaseOutput, create_database_input) {
        errors: [
            InvalidInput,
            AlreadyExists,
            ResourceNumberLimitExceeded,
            InternalService,
            OperationTimeout,
            GlueEncryption,
            ConcurrentModification,
        ]
    }
}

json_operation! {
    /// Retrieves the definition of a specified database
    GetDatabase(GetDatabaseInput, GetDatabaseOutput, get_database_input) {
        errors: [InvalidInput, EntityNotFound, InternalService, OperationTimeout, GlueEncryption]
    }
}

json_operation! {
    /// Creates a new table definition in the Data Catalog
    CreateTable(CreateTableInput, CreateTableOutput, create_table_input) {
        errors: [
            AlreadyExists,
            InvalidInput,
            EntityNotFound,
            ResourceNumberLimitExceeded,
            InternalService,
            OperationTimeout,
            GlueEncryption,
            ConcurrentModification,
        ]
    }
}

json_operation! {
    /// Retrieves the `Table` definition in a Data Catalog for a specified table
    GetTable(GetTableInput, GetTableOutput, get_table_input) {
        errors: [EntityNotFound, InvalidInput, InternalService, OperationTimeout, GlueEncryption]
    }
}

json_operation! {
    /// Removes a table definition from the Data Catalog
    DeleteTable(DeleteTableInput, DeleteTableOutput, delete_table_input) {
        errors: [
            EntityNotFound,
            InvalidInput,
            InternalService,
            OperationTimeout,
            ConcurrentModification,
        ]
    }
}

json_operation! {
    /// Starts a job run using a job definition
    StartJobRun(StartJobRunInput, StartJobRunOutput, start_job_run_input) {
        errors: [
            InvalidInput,
            EntityNotFound,
            InternalService,
            OperationTimeout,
            ResourceNumberLimitExceeded,
            ConcurrentRunsExceeded,
        ]
    }
}

json_operation! {
    /// Retrieves the metadata for a given job run
    GetJobRun(GetJobRunInput, GetJobRunOutput, get_job_run_input) {
        errors: [InvalidInput, EntityNotFound, InternalService, OperationTimeout]
    }
}

json_operation! {
    /// Starts a crawl using the specified crawler, regardless of what is scheduled
    StartCrawler(StartCrawlerInput, StartCrawlerOutput, start_crawler_input) {
        errors: [EntityNotFound, CrawlerRunning, OperationTimeout]
    }
}
