/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{make_operation, Config};
use crate::model::{PerformanceMode, Tag, ThroughputMode};
use crate::operation;
use aws_json::serialize::JsonRequest;
use aws_json::ParseJsonResponse;
use serde::Serialize;
use smithy_http::operation::{BuildError, Operation};

/// See [`CreateFileSystemInput`](crate::input::CreateFileSystemInput)
pub mod create_file_system_input {
    use crate::model::{PerformanceMode, Tag, ThroughputMode};
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateFileSystemInput`](crate::input::CreateFileSystemInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        creation_token: Option<String>,
        performance_mode: Option<PerformanceMode>,
        encrypted: Option<bool>,
        kms_key_id: Option<String>,
        throughput_mode: Option<ThroughputMode>,
        provisioned_throughput_in_mibps: Option<f64>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        /// Up to 64 ASCII characters, used to make creation idempotent
        pub fn creation_token(mut self, inp: impl Into<String>) -> Self {
            self.creation_token = Some(inp.into());
            self
        }

        pub fn performance_mode(mut self, inp: PerformanceMode) -> Self {
            self.performance_mode = Some(inp);
            self
        }

        pub fn encrypted(mut self, inp: bool) -> Self {
            self.encrypted = Some(inp);
            self
        }

        /// The KMS key protecting the file system. Requires `encrypted`.
        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.kms_key_id = Some(inp.into());
            self
        }

        pub fn throughput_mode(mut self, inp: ThroughputMode) -> Self {
            self.throughput_mode = Some(inp);
            self
        }

        pub fn provisioned_throughput_in_mibps(mut self, inp: f64) -> Self {
            self.provisioned_throughput_in_mibps = Some(inp);
            self
        }

        pub fn tag(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::CreateFileSystemInput, BuildError> {
            Ok(crate::input::CreateFileSystemInput {
                creation_token: self
                    .creation_token
                    .ok_or_else(|| BuildError::missing_field("creation_token"))?,
                performance_mode: self.performance_mode,
                encrypted: self.encrypted,
                kms_key_id: self.kms_key_id,
                throughput_mode: self.throughput_mode,
                provisioned_throughput_in_mibps: self.provisioned_throughput_in_mibps,
                tags: self.tags,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFileSystemInput {
    pub creation_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_mode: Option<PerformanceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_mode: Option<ThroughputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput_in_mibps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl JsonRequest for CreateFileSystemInput {}

impl CreateFileSystemInput {
    pub fn builder() -> create_file_system_input::Builder {
        create_file_system_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::CreateFileSystem>>, BuildError> {
        make_operation::<operation::CreateFileSystem>(self, conf)
    }
}

/// See [`DescribeFileSystemsInput`](crate::input::DescribeFileSystemsInput)
pub mod describe_file_systems_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeFileSystemsInput`](crate::input::DescribeFileSystemsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        max_items: Option<i32>,
        marker: Option<String>,
        creation_token: Option<String>,
        file_system_id: Option<String>,
    }

    impl Builder {
        pub fn max_items(mut self, inp: i32) -> Self {
            self.max_items = Some(inp);
            self
        }

        /// The `next_marker` of the previous page
        pub fn marker(mut self, inp: impl Into<String>) -> Self {
            self.marker = Some(inp.into());
            self
        }

        pub fn creation_token(mut self, inp: impl Into<String>) -> Self {
            self.creation_token = Some(inp.into());
            self
        }

        pub fn file_system_id(mut self, inp: impl Into<String>) -> Self {
            self.file_system_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::DescribeFileSystemsInput, BuildError> {
            Ok(crate::input::DescribeFileSystemsInput {
                max_items: self.max_items,
                marker: self.marker,
                creation_token: self.creation_token,
                file_system_id: self.file_system_id,
            })
        }
    }
}

/// Every member is bound to the query string
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DescribeFileSystemsInput {
    #[serde(skip)]
    pub max_items: Option<i32>,
    #[serde(skip)]
    pub marker: Option<String>,
    #[serde(skip)]
    pub creation_token: Option<String>,
    #[serde(skip)]
    pub file_system_id: Option<String>,
}

impl JsonRequest for DescribeFileSystemsInput {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(max_items) = self.max_items {
            params.push(("MaxItems", max_items.to_string()));
        }
        if let Some(marker) = &self.marker {
            params.push(("Marker", marker.clone()));
        }
        if let Some(creation_token) = &self.creation_token {
            params.push(("CreationToken", creation_token.clone()));
        }
        if let Some(file_system_id) = &self.file_system_id {
            params.push(("FileSystemId", file_system_id.clone()));
        }
        params
    }
}

impl DescribeFileSystemsInput {
    pub fn builder() -> describe_file_systems_input::Builder {
        describe_file_systems_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::DescribeFileSystems>>, BuildError> {
        make_operation::<operation::DescribeFileSystems>(self, conf)
    }
}

/// See [`DeleteFileSystemInput`](crate::input::DeleteFileSystemInput)
pub mod delete_file_system_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteFileSystemInput`](crate::input::DeleteFileSystemInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        file_system_id: Option<String>,
    }

    impl Builder {
        pub fn file_system_id(mut self, inp: impl Into<String>) -> Self {
            self.file_system_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::DeleteFileSystemInput, BuildError> {
            Ok(crate::input::DeleteFileSystemInput {
                file_system_id: self
                    .file_system_id
                    .ok_or_else(|| BuildError::missing_field("file_system_id"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteFileSystemInput {
    #[serde(skip)]
    pub file_system_id: String,
}

impl JsonRequest for DeleteFileSystemInput {
    fn labels(&self) -> Vec<(&'static str, &str)> {
        vec![("FileSystemId", &self.file_system_id)]
    }
}

impl DeleteFileSystemInput {
    pub fn builder() -> delete_file_system_input::Builder {
        delete_file_system_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::DeleteFileSystem>>, BuildError> {
        make_operation::<operation::DeleteFileSystem>(self, conf)
    }
}

/// See [`CreateMountTargetInput`](crate::input::CreateMountTargetInput)
pub mod create_mount_target_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateMountTargetInput`](crate::input::CreateMountTargetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        file_system_id: Option<String>,
        subnet_id: Option<String>,
        ip_address: Option<String>,
        security_groups: Option<Vec<String>>,
    }

    impl Builder {
        pub fn file_system_id(mut self, inp: impl Into<String>) -> Self {
            self.file_system_id = Some(inp.into());
            self
        }

        pub fn subnet_id(mut self, inp: impl Into<String>) -> Self {
            self.subnet_id = Some(inp.into());
            self
        }

        /// A valid IPv4 address within the subnet. Assigned by EFS if unset.
        pub fn ip_address(mut self, inp: impl Into<String>) -> Self {
            self.ip_address = Some(inp.into());
            self
        }

        /// Up to five VPC security group IDs
        pub fn security_group(mut self, inp: impl Into<String>) -> Self {
            self.security_groups
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::CreateMountTargetInput, BuildError> {
            Ok(crate::input::CreateMountTargetInput {
                file_system_id: self
                    .file_system_id
                    .ok_or_else(|| BuildError::missing_field("file_system_id"))?,
                subnet_id: self
                    .subnet_id
                    .ok_or_else(|| BuildError::missing_field("subnet_id"))?,
                ip_address: self.ip_address,
                security_groups: self.security_groups,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMountTargetInput {
    pub file_system_id: String,
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
}

impl JsonRequest for CreateMountTargetInput {}

impl CreateMountTargetInput {
    pub fn builder() -> create_mount_target_input::Builder {
        create_mount_target_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::CreateMountTarget>>, BuildError> {
        make_operation::<operation::CreateMountTarget>(self, conf)
    }
}

/// See [`CreateTagsInput`](crate::input::CreateTagsInput)
pub mod create_tags_input {
    use crate::model::Tag;
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateTagsInput`](crate::input::CreateTagsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        file_system_id: Option<String>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        pub fn file_system_id(mut self, inp: impl Into<String>) -> Self {
            self.file_system_id = Some(inp.into());
            self
        }

        pub fn tag(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::CreateTagsInput, BuildError> {
            Ok(crate::input::CreateTagsInput {
                file_system_id: self
                    .file_system_id
                    .ok_or_else(|| BuildError::missing_field("file_system_id"))?,
                tags: self.tags.ok_or_else(|| BuildError::missing_field("tags"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTagsInput {
    #[serde(skip)]
    pub file_system_id: String,
    pub tags: Vec<Tag>,
}

impl JsonRequest for CreateTagsInput {
    fn labels(&self) -> Vec<(&'static str, &str)> {
        vec![("FileSystemId", &self.file_system_id)]
    }
}

impl CreateTagsInput {
    pub fn builder() -> create_tags_input::Builder {
        create_tags_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::CreateTags>>, BuildError> {
        make_operation::<operation::CreateTags>(self, conf)
    }
}

/// See [`DeleteTagsInput`](crate::input::DeleteTagsInput)
pub mod delete_tags_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteTagsInput`](crate::input::DeleteTagsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        file_system_id: Option<String>,
        tag_keys: Option<Vec<String>>,
    }

    impl Builder {
        pub fn file_system_id(mut self, inp: impl Into<String>) -> Self {
            self.file_system_id = Some(inp.into());
            self
        }

        pub fn tag_key(mut self, inp: impl Into<String>) -> Self {
            self.tag_keys.get_or_insert_with(Vec::new).push(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::DeleteTagsInput, BuildError> {
            Ok(crate::input::DeleteTagsInput {
                file_system_id: self
                    .file_system_id
                    .ok_or_else(|| BuildError::missing_field("file_system_id"))?,
                tag_keys: self
                    .tag_keys
                    .ok_or_else(|| BuildError::missing_field("tag_keys"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTagsInput {
    #[serde(skip)]
    pub file_system_id: String,
    pub tag_keys: Vec<String>,
}

impl JsonRequest for DeleteTagsInput {
    fn labels(&self) -> Vec<(&'static str, &str)> {
        vec![("FileSystemId", &self.file_system_id)]
    }
}

impl DeleteTagsInput {
    pub fn builder() -> delete_tags_input::Builder {
        delete_tags_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::DeleteTags>>, BuildError> {
        make_operation::<operation::DeleteTags>(self, conf)
    }
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    use crate::model::Tag;
    use smithy_http::operation::BuildError;

    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_id: Option<String>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        /// A file system ID or an access point ID
        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }

        pub fn tag(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn build(self) -> Result<crate::input::TagResourceInput, BuildError> {
            Ok(crate::input::TagResourceInput {
                resource_id: self
                    .resource_id
                    .ok_or_else(|| BuildError::missing_field("resource_id"))?,
                tags: self.tags.ok_or_else(|| BuildError::missing_field("tags"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    #[serde(skip)]
    pub resource_id: String,
    pub tags: Vec<Tag>,
}

impl JsonRequest for TagResourceInput {
    fn labels(&self) -> Vec<(&'static str, &str)> {
        vec![("ResourceId", &self.resource_id)]
    }
}

impl TagResourceInput {
    pub fn builder() -> tag_resource_input::Builder {
        tag_resource_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::TagResource>>, BuildError> {
        make_operation::<operation::TagResource>(self, conf)
    }
}

/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_id: Option<String>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }

    impl Builder {
        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::ListTagsForResourceInput, BuildError> {
            Ok(crate::input::ListTagsForResourceInput {
                resource_id: self
                    .resource_id
                    .ok_or_else(|| BuildError::missing_field("resource_id"))?,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListTagsForResourceInput {
    #[serde(skip)]
    pub resource_id: String,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

impl JsonRequest for ListTagsForResourceInput {
    fn labels(&self) -> Vec<(&'static str, &str)> {
        vec![("ResourceId", &self.resource_id)]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(max_results) = self.max_results {
            params.push(("MaxResults", max_results.to_string()));
        }
        if let Some(next_token) = &self.next_token {
            params.push(("NextToken", next_token.clone()));
        }
        params
    }
}

impl ListTagsForResourceInput {
    pub fn builder() -> list_tags_for_resource_input::Builder {
        list_tags_for_resource_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::ListTagsForResource>>, BuildError> {
        make_operation::<operation::ListTagsForResource>(self, conf)
    }
}
