/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::{Deserialize, Serialize};

/// The service endpoint type of an ICE server
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Service {
    #[serde(rename = "TURN")]
    Turn,
}

/// A STUN/TURN server and the credentials to use it
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IceServer {
    pub uris: Option<Vec<String>>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Seconds the username and password stay valid
    pub ttl: Option<i32>,
}
