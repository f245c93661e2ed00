/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared by Glue inputs and outputs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The structure used to create or update a database
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
}

impl DatabaseInput {
    pub fn new(name: impl Into<String>) -> Self {
        DatabaseInput {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location_uri(mut self, location_uri: impl Into<String>) -> Self {
        self.location_uri = Some(location_uri.into());
        self
    }

    pub fn parameter(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(Default::default)
            .insert(k.into(), v.into());
        self
    }
}

/// A logical grouping of tables in the Data Catalog
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Database {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location_uri: Option<String>,
    pub parameters: Option<BTreeMap<String, String>>,
    /// Seconds since the epoch
    pub create_time: Option<f64>,
    pub catalog_id: Option<String>,
}

/// A column in a table
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Column {
    pub name: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            column_type: Some(column_type.into()),
            comment: None,
        }
    }
}

/// The physical storage of table data
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

impl StorageDescriptor {
    pub fn column(mut self, column: Column) -> Self {
        self.columns.get_or_insert_with(Vec::new).push(column);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// The structure used to create or update a table
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_keys: Option<Vec<Column>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
}

impl TableInput {
    pub fn new(name: impl Into<String>) -> Self {
        TableInput {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn table_type(mut self, table_type: impl Into<String>) -> Self {
        self.table_type = Some(table_type.into());
        self
    }

    pub fn storage_descriptor(mut self, storage_descriptor: StorageDescriptor) -> Self {
        self.storage_descriptor = Some(storage_descriptor);
        self
    }

    pub fn partition_key(mut self, column: Column) -> Self {
        self.partition_keys.get_or_insert_with(Vec::new).push(column);
        self
    }
}

/// A table definition in the Data Catalog
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Table {
    pub name: Option<String>,
    pub database_name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub create_time: Option<f64>,
    pub update_time: Option<f64>,
    pub table_type: Option<String>,
    pub storage_descriptor: Option<StorageDescriptor>,
    pub partition_keys: Option<Vec<Column>>,
    pub parameters: Option<BTreeMap<String, String>>,
    pub catalog_id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum JobRunState {
    #[serde(rename = "STARTING")]
    Starting,
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "STOPPING")]
    Stopping,
    #[serde(rename = "STOPPED")]
    Stopped,
    #[serde(rename = "SUCCEEDED")]
    Succeeded,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "TIMEOUT")]
    Timeout,
    /// A state this client does not know about
    #[serde(other)]
    Unknown,
}

/// A job run
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRun {
    pub id: Option<String>,
    pub attempt: Option<i32>,
    pub previous_run_id: Option<String>,
    pub job_name: Option<String>,
    pub started_on: Option<f64>,
    pub last_modified_on: Option<f64>,
    pub completed_on: Option<f64>,
    pub job_run_state: Option<JobRunState>,
    pub arguments: Option<BTreeMap<String, String>>,
    pub error_message: Option<String>,
    pub execution_time: Option<i32>,
}

#[cfg(test)]
mod test {
    use crate::model::{JobRun, JobRunState};

    #[test]
    fn unknown_job_run_states_are_tolerated() {
        let run: JobRun = serde_json::from_str(
            r#"{"Id": "jr_1", "JobRunState": "WAITING", "Attempt": 0}"#,
        )
        .unwrap();
        assert_eq!(run.job_run_state, Some(JobRunState::Unknown));
        let run: JobRun = serde_json::from_str(r#"{"JobRunState": "SUCCEEDED"}"#).unwrap();
        assert_eq!(run.job_run_state, Some(JobRunState::Succeeded));
    }
}
