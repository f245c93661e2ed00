/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::{Deserialize, Serialize};

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Codecommit,
    Codepipeline,
    Github,
    S3,
    Bitbucket,
    GithubEnterprise,
    NoSource,
}

/// Where the source code of a build project lives
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSource {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Inline buildspec, or the path of the buildspec file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildspec: Option<String>,
}

impl ProjectSource {
    pub fn new(source_type: SourceType) -> Self {
        ProjectSource {
            source_type,
            location: None,
            buildspec: None,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn buildspec(mut self, buildspec: impl Into<String>) -> Self {
        self.buildspec = Some(buildspec.into());
        self
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactsType {
    Codepipeline,
    S3,
    NoArtifacts,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArtifacts {
    #[serde(rename = "type")]
    pub artifacts_type: ArtifactsType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProjectArtifacts {
    pub fn new(artifacts_type: ArtifactsType) -> Self {
        ProjectArtifacts {
            artifacts_type,
            location: None,
            name: None,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentType {
    LinuxContainer,
    LinuxGpuContainer,
    ArmContainer,
    #[serde(rename = "WINDOWS_SERVER_2019_CONTAINER")]
    WindowsServer2019Container,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ComputeType {
    #[serde(rename = "BUILD_GENERAL1_SMALL")]
    Small,
    #[serde(rename = "BUILD_GENERAL1_MEDIUM")]
    Medium,
    #[serde(rename = "BUILD_GENERAL1_LARGE")]
    Large,
    #[serde(rename = "BUILD_GENERAL1_2XLARGE")]
    XLarge2,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentVariableType {
    Plaintext,
    ParameterStore,
    SecretsManager,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<EnvironmentVariableType>,
}

impl EnvironmentVariable {
    pub fn plaintext(name: impl Into<String>, value: impl Into<String>) -> Self {
        EnvironmentVariable {
            name: name.into(),
            value: value.into(),
            variable_type: None,
        }
    }

    pub fn variable_type(mut self, variable_type: EnvironmentVariableType) -> Self {
        self.variable_type = Some(variable_type);
        self
    }
}

/// The build environment of a project
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEnvironment {
    #[serde(rename = "type")]
    pub environment_type: EnvironmentType,
    /// The Docker image to build in
    pub image: String,
    pub compute_type: ComputeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged_mode: Option<bool>,
}

impl ProjectEnvironment {
    pub fn new(
        environment_type: EnvironmentType,
        image: impl Into<String>,
        compute_type: ComputeType,
    ) -> Self {
        ProjectEnvironment {
            environment_type,
            image: image.into(),
            compute_type,
            environment_variables: None,
            privileged_mode: None,
        }
    }

    pub fn environment_variable(mut self, variable: EnvironmentVariable) -> Self {
        self.environment_variables
            .get_or_insert_with(Vec::new)
            .push(variable);
        self
    }

    pub fn privileged_mode(mut self, privileged_mode: bool) -> Self {
        self.privileged_mode = Some(privileged_mode);
        self
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// A build project
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub service_role: Option<String>,
    pub timeout_in_minutes: Option<i32>,
    /// Seconds since the epoch
    pub created: Option<f64>,
    pub last_modified: Option<f64>,
    pub tags: Option<Vec<Tag>>,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusType {
    Succeeded,
    Failed,
    Fault,
    TimedOut,
    InProgress,
    Stopped,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

/// A build
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub build_number: Option<i64>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub current_phase: Option<String>,
    pub build_status: Option<StatusType>,
    pub source_version: Option<String>,
    pub project_name: Option<String>,
    pub build_complete: Option<bool>,
    pub initiator: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectSortByType {
    Name,
    CreatedTime,
    LastModifiedTime,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrderType {
    Ascending,
    Descending,
}
