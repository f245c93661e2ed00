/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod region;

use std::borrow::Cow;

pub use region::{Region, SigningRegion};

/// The name of the service used to sign this request
///
/// Generally, user code should never interact with `SigningService` directly. It is derived from
/// the service description, and is not always equal to the endpoint prefix (Kinesis Video
/// Signaling signs as `kinesisvideo`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningService(Cow<'static, str>);

impl AsRef<str> for SigningService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SigningService {
    pub const fn from_static(service: &'static str) -> Self {
        SigningService(Cow::Borrowed(service))
    }
}

impl From<String> for SigningService {
    fn from(service: String) -> Self {
        SigningService(Cow::Owned(service))
    }
}
