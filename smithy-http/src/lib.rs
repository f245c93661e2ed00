/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod body;
pub mod endpoint;
pub mod label;
pub mod metrics;
pub mod middleware;
pub mod operation;
mod pin_util;
pub mod property_bag;
pub mod response;
pub mod result;
