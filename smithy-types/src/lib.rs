/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types used by every service client.

pub mod error;
pub mod retry;

pub use crate::error::Error;
