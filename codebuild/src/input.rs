/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{make_operation, Config};
use crate::model::{
    EnvironmentVariable, ProjectArtifacts, ProjectEnvironment, ProjectSortByType, ProjectSource,
    SortOrderType, Tag,
};
use crate::operation;
use aws_json::serialize::JsonRequest;
use aws_json::ParseJsonResponse;
use serde::Serialize;
use smithy_http::operation::{BuildError, Operation};

/// See [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
pub mod batch_get_builds_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        ids: Option<Vec<String>>,
    }

    impl Builder {
        /// Add the ID of a build to fetch
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.ids.get_or_insert_with(Vec::new).push(inp.into());
            self
        }

        pub fn ids(mut self, inp: Vec<String>) -> Self {
            self.ids = Some(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::BatchGetBuildsInput, BuildError> {
            Ok(crate::input::BatchGetBuildsInput {
                ids: self.ids.ok_or_else(|| BuildError::missing_field("ids"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetBuildsInput {
    pub ids: Vec<String>,
}

impl JsonRequest for BatchGetBuildsInput {}

impl BatchGetBuildsInput {
    pub fn builder() -> batch_get_builds_input::Builder {
        batch_get_builds_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::BatchGetBuilds>>, BuildError> {
        make_operation::<operation::BatchGetBuilds>(self, conf)
    }
}

/// See [`CreateProjectInput`](crate::input::CreateProjectInput)
pub mod create_project_input {
    use crate::model::{ProjectArtifacts, ProjectEnvironment, ProjectSource, Tag};
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateProjectInput`](crate::input::CreateProjectInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        description: Option<String>,
        source: Option<ProjectSource>,
        artifacts: Option<ProjectArtifacts>,
        environment: Option<ProjectEnvironment>,
        service_role: Option<String>,
        timeout_in_minutes: Option<i32>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        /// The name of the build project
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }

        pub fn source(mut self, inp: ProjectSource) -> Self {
            self.source = Some(inp);
            self
        }

        pub fn artifacts(mut self, inp: ProjectArtifacts) -> Self {
            self.artifacts = Some(inp);
            self
        }

        pub fn environment(mut self, inp: ProjectEnvironment) -> Self {
            self.environment = Some(inp);
            self
        }

        /// ARN of the IAM role CodeBuild assumes to run the builds
        pub fn service_role(mut self, inp: impl Into<String>) -> Self {
            self.service_role = Some(inp.into());
            self
        }

        /// From 5 to 480 minutes. Defaults to 60.
        pub fn timeout_in_minutes(mut self, inp: i32) -> Self {
            self.timeout_in_minutes = Some(inp);
            self
        }

        pub fn tag(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::CreateProjectInput, BuildError> {
            Ok(crate::input::CreateProjectInput {
                name: self.name.ok_or_else(|| BuildError::missing_field("name"))?,
                description: self.description,
                source: self
                    .source
                    .ok_or_else(|| BuildError::missing_field("source"))?,
                artifacts: self
                    .artifacts
                    .ok_or_else(|| BuildError::missing_field("artifacts"))?,
                environment: self
                    .environment
                    .ok_or_else(|| BuildError::missing_field("environment"))?,
                service_role: self
                    .service_role
                    .ok_or_else(|| BuildError::missing_field("service_role"))?,
                timeout_in_minutes: self.timeout_in_minutes,
                tags: self.tags,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: ProjectSource,
    pub artifacts: ProjectArtifacts,
    pub environment: ProjectEnvironment,
    pub service_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl JsonRequest for CreateProjectInput {}

impl CreateProjectInput {
    pub fn builder() -> create_project_input::Builder {
        create_project_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::CreateProject>>, BuildError> {
        make_operation::<operation::CreateProject>(self, conf)
    }
}

/// See [`DeleteProjectInput`](crate::input::DeleteProjectInput)
pub mod delete_project_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::DeleteProjectInput, BuildError> {
            Ok(crate::input::DeleteProjectInput {
                name: self.name.ok_or_else(|| BuildError::missing_field("name"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectInput {
    pub name: String,
}

impl JsonRequest for DeleteProjectInput {}

impl DeleteProjectInput {
    pub fn builder() -> delete_project_input::Builder {
        delete_project_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::DeleteProject>>, BuildError> {
        make_operation::<operation::DeleteProject>(self, conf)
    }
}

/// See [`ListProjectsInput`](crate::input::ListProjectsInput)
pub mod list_projects_input {
    use crate::model::{ProjectSortByType, SortOrderType};
    use smithy_http::operation::BuildError;

    /// A builder for [`ListProjectsInput`](crate::input::ListProjectsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        sort_by: Option<ProjectSortByType>,
        sort_order: Option<SortOrderType>,
        next_token: Option<String>,
    }

    impl Builder {
        pub fn sort_by(mut self, inp: ProjectSortByType) -> Self {
            self.sort_by = Some(inp);
            self
        }

        pub fn sort_order(mut self, inp: SortOrderType) -> Self {
            self.sort_order = Some(inp);
            self
        }

        /// The token returned by the previous page
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::ListProjectsInput, BuildError> {
            Ok(crate::input::ListProjectsInput {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                next_token: self.next_token,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<ProjectSortByType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl JsonRequest for ListProjectsInput {}

impl ListProjectsInput {
    pub fn builder() -> list_projects_input::Builder {
        list_projects_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::ListProjects>>, BuildError> {
        make_operation::<operation::ListProjects>(self, conf)
    }
}

/// See [`StartBuildInput`](crate::input::StartBuildInput)
pub mod start_build_input {
    use crate::model::EnvironmentVariable;
    use smithy_http::operation::BuildError;

    /// A builder for [`StartBuildInput`](crate::input::StartBuildInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        project_name: Option<String>,
        source_version: Option<String>,
        environment_variables_override: Option<Vec<EnvironmentVariable>>,
        timeout_in_minutes_override: Option<i32>,
        idempotency_token: Option<String>,
    }

    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }

        /// A commit ID, branch name or tag to build instead of the project default
        pub fn source_version(mut self, inp: impl Into<String>) -> Self {
            self.source_version = Some(inp.into());
            self
        }

        pub fn environment_variable_override(mut self, inp: EnvironmentVariable) -> Self {
            self.environment_variables_override
                .get_or_insert_with(Vec::new)
                .push(inp);
            self
        }

        pub fn timeout_in_minutes_override(mut self, inp: i32) -> Self {
            self.timeout_in_minutes_override = Some(inp);
            self
        }

        pub fn idempotency_token(mut self, inp: impl Into<String>) -> Self {
            self.idempotency_token = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::StartBuildInput, BuildError> {
            Ok(crate::input::StartBuildInput {
                project_name: self
                    .project_name
                    .ok_or_else(|| BuildError::missing_field("project_name"))?,
                source_version: self.source_version,
                environment_variables_override: self.environment_variables_override,
                timeout_in_minutes_override: self.timeout_in_minutes_override,
                idempotency_token: self.idempotency_token,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBuildInput {
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables_override: Option<Vec<EnvironmentVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_minutes_override: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

impl JsonRequest for StartBuildInput {}

impl StartBuildInput {
    pub fn builder() -> start_build_input::Builder {
        start_build_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::StartBuild>>, BuildError> {
        make_operation::<operation::StartBuild>(self, conf)
    }
}

/// See [`StopBuildInput`](crate::input::StopBuildInput)
pub mod stop_build_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`StopBuildInput`](crate::input::StopBuildInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
    }

    impl Builder {
        /// The ID of the build to stop
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::StopBuildInput, BuildError> {
            Ok(crate::input::StopBuildInput {
                id: self.id.ok_or_else(|| BuildError::missing_field("id"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopBuildInput {
    pub id: String,
}

impl JsonRequest for StopBuildInput {}

impl StopBuildInput {
    pub fn builder() -> stop_build_input::Builder {
        stop_build_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::StopBuild>>, BuildError> {
        make_operation::<operation::StopBuild>(self, conf)
    }
}
