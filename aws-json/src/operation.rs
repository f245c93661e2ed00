/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::descriptor::OperationDescriptor;
use crate::error::{parse_generic_error, ServiceError};
use crate::kind::ModeledErrorKind;
use crate::registry::ErrorRegistry;
use crate::serialize::{serialize_request, JsonRequest};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use smithy_http::operation::{self, BuildError, Operation};
use smithy_http::response::{ParseStrictResponse, ResponseFailure};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Type-level description of one operation of a JSON service
pub trait JsonOperation: Send + Sync + 'static {
    type Input: JsonRequest;
    type Output: DeserializeOwned + Send + 'static;
    type Kind: ModeledErrorKind;

    fn descriptor() -> OperationDescriptor<Self::Kind>;
}

/// Response handler of a JSON operation
///
/// A 2xx response is deserialized into the operation output; an empty body is read as `{}`. A 2xx
/// body that does not deserialize is an unmarshalling failure, not a service error. Any other
/// status is an error response: its code is dispatched through the service's [`ErrorRegistry`].
pub struct ParseJsonResponse<Op: JsonOperation> {
    registry: Arc<ErrorRegistry<Op::Kind>>,
    _operation: PhantomData<fn() -> Op>,
}

impl<Op: JsonOperation> Clone for ParseJsonResponse<Op> {
    fn clone(&self) -> Self {
        ParseJsonResponse {
            registry: self.registry.clone(),
            _operation: PhantomData,
        }
    }
}

impl<Op: JsonOperation> fmt::Debug for ParseJsonResponse<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseJsonResponse")
            .field("operation", &Op::descriptor().name)
            .finish()
    }
}

impl<Op: JsonOperation> ParseJsonResponse<Op> {
    pub fn new(registry: Arc<ErrorRegistry<Op::Kind>>) -> Self {
        ParseJsonResponse {
            registry,
            _operation: PhantomData,
        }
    }

    pub fn descriptor(&self) -> OperationDescriptor<Op::Kind> {
        Op::descriptor()
    }

    fn parse_error(&self, response: &http::Response<Bytes>) -> ServiceError<Op::Kind> {
        let meta = parse_generic_error(
            response.status().as_u16(),
            response.headers(),
            response.body(),
        );
        let kind = self.registry.dispatch(meta.code());
        let descriptor = Op::descriptor();
        if kind != self.registry.fallback() && !descriptor.declares(&kind) {
            debug!(
                operation = descriptor.name,
                code = ?meta.code(),
                "service returned an error the operation does not declare"
            );
        }
        ServiceError::new(kind, meta)
    }
}

impl<Op: JsonOperation> ParseStrictResponse for ParseJsonResponse<Op> {
    type Output = Result<Op::Output, ResponseFailure<ServiceError<Op::Kind>>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(ResponseFailure::Service(self.parse_error(response)));
        }
        let body: &[u8] = match &response.body()[..] {
            b"" => b"{}",
            body => body,
        };
        serde_json::from_slice(body).map_err(ResponseFailure::unmarshall)
    }
}

/// Marshal `input` into an operation of `Op`
///
/// The operation carries its [`Metadata`](smithy_http::operation::Metadata). Everything else the
/// pipeline needs (region, endpoint, credentials, signing scope) is the caller's to add to the
/// property bag.
pub fn build_operation<Op: JsonOperation>(
    input: &Op::Input,
    registry: Arc<ErrorRegistry<Op::Kind>>,
) -> Result<Operation<ParseJsonResponse<Op>>, BuildError> {
    let descriptor = Op::descriptor();
    let request = operation::Request::new(serialize_request(&descriptor, input)?);
    Ok(Operation::new(request, ParseJsonResponse::new(registry)).with_metadata(descriptor.metadata()))
}
