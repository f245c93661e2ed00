/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Glue
//!
//! Defines the public endpoint for the Glue service: Data Catalog databases and tables, job runs
//! and crawlers.

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
    name: "Glue",
    signing_name: "glue",
    endpoint_prefix: "glue",
    protocol: Protocol::AwsJson1_1 {
        target_prefix: "AWSGlue",
    },
    api_version: "2017-03-31",
};

static API_METADATA: ApiMetadata = ApiMetadata::new("glue", env!("CARGO_PKG_VERSION"));
