/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS CodeBuild
//!
//! CodeBuild compiles source code, runs tests and produces artifacts. This crate manages build
//! projects and the builds started from them.

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
    name: "CodeBuild",
    signing_name: "codebuild",
    endpoint_prefix: "codebuild",
    protocol: Protocol::AwsJson1_1 {
        target_prefix: "CodeBuild_20161006",
    },
    api_version: "2016-10-06",
};

static API_METADATA: ApiMetadata = ApiMetadata::new("codebuild", env!("CARGO_PKG_VERSION"));
