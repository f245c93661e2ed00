/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Kinesis Video Signaling Channels
//!
//! Used together with Kinesis Video Streams signaling channels to set up WebRTC peer connections.

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
    name: "KinesisVideoSignaling",
    signing_name: "kinesisvideo",
    endpoint_prefix: "kinesisvideo",
    protocol: Protocol::RestJson1,
    api_version: "2019-12-04",
};

static API_METADATA: ApiMetadata =
    ApiMetadata::new("kinesisvideosignaling", env!("CARGO_PKG_VERSION"));
