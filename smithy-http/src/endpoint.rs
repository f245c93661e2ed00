/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::Uri;
use std::str::FromStr;
use thiserror::Error;

/// API Endpoint
///
/// The scheme and authority of every request are taken from the endpoint. If the endpoint has a
/// path, it is prepended to the request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,
}

#[non_exhaustive]
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum InvalidEndpoint {
    #[error("endpoint must contain an authority (host and optional port)")]
    EndpointMustHaveAuthority,
    #[error("the endpoint produced an invalid URI: {0}")]
    InvalidUri(String),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::new(Uri::from_static("http://localhost:8000"));
    /// ```
    ///
    /// URIs without a scheme are treated as `https`.
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &http::Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, keeping the path and query of the request
    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        let authority = self
            .uri
            .authority()
            .ok_or(InvalidEndpoint::EndpointMustHaveAuthority)?;
        let scheme = self.uri.scheme_str().unwrap_or("https");
        let base_path = self.uri.path().trim_end_matches('/');
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let joined = format!("{}://{}{}{}", scheme, authority, base_path, path_and_query);
        *uri = Uri::from_str(&joined).map_err(|err| InvalidEndpoint::InvalidUri(err.to_string()))?;
        Ok(())
    }
}
