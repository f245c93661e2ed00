/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime support shared by the JSON protocol service crates.
//!
//! A service crate declares its closed set of error kinds with [`error_kinds!`], describes itself
//! with a [`ServiceDescriptor`](descriptor::ServiceDescriptor) and each action with an
//! [`OperationDescriptor`](descriptor::OperationDescriptor). Everything else, from turning an
//! input into an HTTP request to mapping an error response to a typed error, lives here.

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod operation;
pub mod registry;
pub mod serialize;

pub use crate::error::ServiceError;
pub use crate::kind::ModeledErrorKind;
pub use crate::operation::{JsonOperation, ParseJsonResponse};
pub use crate::registry::ErrorRegistry;

#[doc(hidden)]
pub mod reexports {
    pub use smithy_types;
}
