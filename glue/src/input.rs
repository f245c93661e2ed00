/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{make_operation, Config};
use crate::model::{DatabaseInput, TableInput};
use crate::operation;
use aws_json::serialize::JsonRequest;
use aws_json::ParseJsonResponse;
use serde::Serialize;
use smithy_http::operation::{BuildError, Operation};
use std::collections::BTreeMap;

/// See [`CreateDatabaseInput`](crate::input::CreateDatabaseInput)
pub mod create_database_input {
    use crate::model::DatabaseInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateDatabaseInput`](crate::input::CreateDatabaseInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_input: Option<DatabaseInput>,
    }

    impl Builder {
        /// The ID of the Data Catalog. Defaults to the account ID.
        pub fn catalog_id(mut self, inp: impl Into<String>) -> Self {
            self.catalog_id = Some(inp.into());
            self
        }

        pub fn database_input(mut self, inp: DatabaseInput) -> Self {
            self.database_input = Some(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::CreateDatabaseInput, BuildError> {
            Ok(crate::input::CreateDatabaseInput {
                catalog_id: self.catalog_id,
                database_input: self
                    .database_input
                    .ok_or_else(|| BuildError::missing_field("database_input"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatabaseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_input: DatabaseInput,
}

impl JsonRequest for CreateDatabaseInput {}

impl CreateDatabaseInput {
    pub fn builder() -> create_database_input::Builder {
        create_database_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::CreateDatabase>>, BuildError> {
        make_operation::<operation::CreateDatabase>(self, conf)
    }
}

/// See [`GetDatabaseInput`](crate::input::GetDatabaseInput)
pub mod get_database_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`GetDatabaseInput`](crate::input::GetDatabaseInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        name: Option<String>,
    }

    impl Builder {
        pub fn catalog_id(mut self, inp: impl Into<String>) -> Self {
            self.catalog_id = Some(inp.into());
            self
        }

        /// The name of the database to retrieve
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::GetDatabaseInput, BuildError> {
            Ok(crate::input::GetDatabaseInput {
                catalog_id: self.catalog_id,
                name: self.name.ok_or_else(|| BuildError::missing_field("name"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabaseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub name: String,
}

impl JsonRequest for GetDatabaseInput {}

impl GetDatabaseInput {
    pub fn builder() -> get_database_input::Builder {
        get_database_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::GetDatabase>>, BuildError> {
        make_operation::<operation::GetDatabase>(self, conf)
    }
}

/// See [`CreateTableInput`](crate::input::CreateTableInput)
pub mod create_table_input {
    use crate::model::TableInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateTableInput`](crate::input::CreateTableInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        table_input: Option<TableInput>,
    }

    impl Builder {
        pub fn catalog_id(mut self, inp: impl Into<String>) -> Self {
            self.catalog_id = Some(inp.into());
            self
        }

        /// The catalog database in which to create the new table
        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.database_name = Some(inp.into());
            self
        }

        pub fn table_input(mut self, inp: TableInput) -> Self {
            self.table_input = Some(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::CreateTableInput, BuildError> {
            Ok(crate::input::CreateTableInput {
                catalog_id: self.catalog_id,
                database_name: self
                    .database_name
                    .ok_or_else(|| BuildError::missing_field("database_name"))?,
                table_input: self
                    .table_input
                    .ok_or_else(|| BuildError::missing_field("table_input"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_input: TableInput,
}

impl JsonRequest for CreateTableInput {}

impl CreateTableInput {
    pub fn builder() -> create_table_input::Builder {
        create_table_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::CreateTable>>, BuildError> {
        make_operation::<operation::CreateTable>(self, conf)
    }
}

/// See [`GetTableInput`](crate::input::GetTableInput)
pub mod get_table_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`GetTableInput`](crate::input::GetTableInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        name: Option<String>,
    }

    impl Builder {
        pub fn catalog_id(mut self, inp: impl Into<String>) -> Self {
            self.catalog_id = Some(inp.into());
            self
        }

        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.database_name = Some(inp.into());
            self
        }

        /// The name of the table. For Hive compatibility, this name is entirely lowercase.
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::GetTableInput, BuildError> {
            Ok(crate::input::GetTableInput {
                catalog_id: self.catalog_id,
                database_name: self
                    .database_name
                    .ok_or_else(|| BuildError::missing_field("database_name"))?,
                name: self.name.ok_or_else(|| BuildError::missing_field("name"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTableInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub name: String,
}

impl JsonRequest for GetTableInput {}

impl GetTableInput {
    pub fn builder() -> get_table_input::Builder {
        get_table_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::GetTable>>, BuildError> {
        make_operation::<operation::GetTable>(self, conf)
    }
}

/// See [`DeleteTableInput`](crate::input::DeleteTableInput)
pub mod delete_table_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteTableInput`](crate::input::DeleteTableInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        name: Option<String>,
    }

    impl Builder {
        pub fn catalog_id(mut self, inp: impl Into<String>) -> Self {
            self.catalog_id = Some(inp.into());
            self
        }

        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.database_name = Some(inp.into());
            self
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::DeleteTableInput, BuildError> {
            Ok(crate::input::DeleteTableInput {
                catalog_id: self.catalog_id,
                database_name: self
                    .database_name
                    .ok_or_else(|| BuildError::missing_field("database_name"))?,
                name: self.name.ok_or_else(|| BuildError::missing_field("name"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub name: String,
}

impl JsonRequest for DeleteTableInput {}

impl DeleteTableInput {
    pub fn builder() -> delete_table_input::Builder {
        delete_table_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::DeleteTable>>, BuildError> {
        make_operation::<operation::DeleteTable>(self, conf)
    }
}

/// See [`StartJobRunInput`](crate::input::StartJobRunInput)
pub mod start_job_run_input {
    use smithy_http::operation::BuildError;
    use std::collections::BTreeMap;

    /// A builder for [`StartJobRunInput`](crate::input::StartJobRunInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        job_run_id: Option<String>,
        arguments: Option<BTreeMap<String, String>>,
        timeout: Option<i32>,
        max_capacity: Option<f64>,
    }

    impl Builder {
        /// The name of the job definition to use
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.job_name = Some(inp.into());
            self
        }

        /// The ID of a previous run to retry
        pub fn job_run_id(mut self, inp: impl Into<String>) -> Self {
            self.job_run_id = Some(inp.into());
            self
        }

        pub fn argument(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.arguments
                .get_or_insert_with(Default::default)
                .insert(k.into(), v.into());
            self
        }

        /// Timeout of the run, in minutes
        pub fn timeout(mut self, inp: i32) -> Self {
            self.timeout = Some(inp);
            self
        }

        pub fn max_capacity(mut self, inp: f64) -> Self {
            self.max_capacity = Some(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::StartJobRunInput, BuildError> {
            Ok(crate::input::StartJobRunInput {
                job_name: self
                    .job_name
                    .ok_or_else(|| BuildError::missing_field("job_name"))?,
                job_run_id: self.job_run_id,
                arguments: self.arguments,
                timeout: self.timeout,
                max_capacity: self.max_capacity,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartJobRunInput {
    pub job_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
}

impl JsonRequest for StartJobRunInput {}

impl StartJobRunInput {
    pub fn builder() -> start_job_run_input::Builder {
        start_job_run_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::StartJobRun>>, BuildError> {
        make_operation::<operation::StartJobRun>(self, conf)
    }
}

/// See [`GetJobRunInput`](crate::input::GetJobRunInput)
pub mod get_job_run_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`GetJobRunInput`](crate::input::GetJobRunInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        run_id: Option<String>,
        predecessors_included: Option<bool>,
    }

    impl Builder {
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.job_name = Some(inp.into());
            self
        }

        pub fn run_id(mut self, inp: impl Into<String>) -> Self {
            self.run_id = Some(inp.into());
            self
        }

        pub fn predecessors_included(mut self, inp: bool) -> Self {
            self.predecessors_included = Some(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::GetJobRunInput, BuildError> {
            Ok(crate::input::GetJobRunInput {
                job_name: self
                    .job_name
                    .ok_or_else(|| BuildError::missing_field("job_name"))?,
                run_id: self
                    .run_id
                    .ok_or_else(|| BuildError::missing_field("run_id"))?,
                predecessors_included: self.predecessors_included,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunInput {
    pub job_name: String,
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors_included: Option<bool>,
}

impl JsonRequest for GetJobRunInput {}

impl GetJobRunInput {
    pub fn builder() -> get_job_run_input::Builder {
        get_job_run_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::GetJobRun>>, BuildError> {
        make_operation::<operation::GetJobRun>(self, conf)
    }
}

/// See [`StartCrawlerInput`](crate::input::StartCrawlerInput)
pub mod start_crawler_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`StartCrawlerInput`](crate::input::StartCrawlerInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    impl Builder {
        /// Name of the crawler to start
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::StartCrawlerInput, BuildError> {
            Ok(crate::input::StartCrawlerInput {
                name: self.name.ok_or_else(|| BuildError::missing_field("name"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartCrawlerInput {
    pub name: String,
}

impl JsonRequest for StartCrawlerInput {}

impl StartCrawlerInput {
    pub fn builder() -> start_crawler_input::Builder {
        start_crawler_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::StartCrawler>>, BuildError> {
        make_operation::<operation::StartCrawler>(self, conf)
    }
}

#[cfg(test)]
mod test {
    use crate::input::{GetTableInput, StartJobRunInput};
    use pretty_assertions::assert_eq;
    use smithy_http::operation::BuildError;

    #[test]
    fn missing_required_fields_fail_the_build() {
        let err = GetTableInput::builder()
            .database_name("sales")
            .build()
            .expect_err("name is required");
        assert!(matches!(err, BuildError::MissingField { field: "name", .. }));
    }

    #[test]
    fn arguments_serialize_in_key_order() {
        let input = StartJobRunInput::builder()
            .job_name("nightly")
            .argument("--zeta", "1")
            .argument("--alpha", "2")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"JobName":"nightly","Arguments":{"--alpha":"2","--zeta":"1"}}"#
        );
    }
}
