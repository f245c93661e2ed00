/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Version 4 for request/response JSON operations.
//!
//! [`signer`] implements the signing algorithm over an in-memory request. [`middleware`] exposes
//! it as a [`MapRequest`](smithy_http::middleware::MapRequest) stage that reads its inputs from the
//! request property bag.

pub mod middleware;
pub mod signer;
