/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Elastic File System
//!
//! EFS provides file storage for Amazon EC2 instances. File systems are mounted through mount
//! targets, one per Availability Zone.
//!
//! `CreateTags` and `DeleteTags` are kept for compatibility. New code should use `TagResource`,
//! which also tags access points.

#[cfg(feature = "client")]
mod client;
mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

#[cfg(feature = "client")]
pub use client::Client;
pub use config::Config;
pub use error::{Error, ErrorKind};

pub use aws_auth::Credentials;
pub use aws_types::Region;
pub use smithy_http::endpoint::Endpoint;

use aws_http::user_agent::ApiMetadata;
use aws_json::descriptor::{Protocol, ServiceDescriptor};

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "EFS",
    signing_name: "elasticfilesystem",
    endpoint_prefix: "elasticfilesystem",
    protocol: Protocol::RestJson1,
    api_version: "2015-02-01",
};

static API_METADATA: ApiMetadata = ApiMetadata::new("efs", env!("CARGO_PKG_VERSION"));
