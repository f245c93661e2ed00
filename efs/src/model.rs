/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::{Deserialize, Serialize};

/// A key-value pair attached to a file system or an access point
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceMode {
    GeneralPurpose,
    #[serde(rename = "maxIO")]
    MaxIo,
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThroughputMode {
    Bursting,
    Provisioned,
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifeCycleState {
    Creating,
    Available,
    Updating,
    Deleting,
    Deleted,
    Error,
    #[serde(other)]
    Unknown,
}

/// The latest known metered size of the data stored in a file system
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystemSize {
    /// In bytes
    pub value: i64,
    pub timestamp: Option<f64>,
    pub value_in_ia: Option<i64>,
    pub value_in_standard: Option<i64>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystemDescription {
    pub owner_id: Option<String>,
    pub creation_token: Option<String>,
    pub file_system_id: Option<String>,
    pub file_system_arn: Option<String>,
    /// Seconds since the epoch
    pub creation_time: Option<f64>,
    pub life_cycle_state: Option<LifeCycleState>,
    pub name: Option<String>,
    pub number_of_mount_targets: Option<i32>,
    pub size_in_bytes: Option<FileSystemSize>,
    pub performance_mode: Option<PerformanceMode>,
    pub encrypted: Option<bool>,
    pub kms_key_id: Option<String>,
    pub throughput_mode: Option<ThroughputMode>,
    pub provisioned_throughput_in_mibps: Option<f64>,
    pub tags: Option<Vec<Tag>>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MountTargetDescription {
    pub owner_id: Option<String>,
    pub mount_target_id: Option<String>,
    pub file_system_id: Option<String>,
    pub subnet_id: Option<String>,
    pub life_cycle_state: Option<LifeCycleState>,
    pub ip_address: Option<String>,
    pub network_interface_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub availability_zone_name: Option<String>,
    pub vpc_id: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::model::{FileSystemDescription, LifeCycleState, PerformanceMode, ThroughputMode};

    #[test]
    fn file_system_description() {
        let fs: FileSystemDescription = serde_json::from_str(
            r#"{
                "OwnerId": "123456789012",
                "CreationToken": "console-1",
                "FileSystemId": "fs-01234567",
                "CreationTime": 1.48E9,
                "LifeCycleState": "available",
                "NumberOfMountTargets": 2,
                "SizeInBytes": {"Value": 6144},
                "PerformanceMode": "maxIO",
                "ThroughputMode": "elastic",
                "Tags": [{"Key": "Name", "Value": "home"}]
            }"#,
        )
        .unwrap();
        assert_eq!(fs.life_cycle_state, Some(LifeCycleState::Available));
        assert_eq!(fs.performance_mode, Some(PerformanceMode::MaxIo));
        assert_eq!(fs.throughput_mode, Some(ThroughputMode::Unknown));
        assert_eq!(fs.size_in_bytes.map(|s| s.value), Some(6144));
    }
}
