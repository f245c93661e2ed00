/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Turning operation inputs into HTTP requests

use crate::descriptor::{OperationDescriptor, Protocol};
use http::header::CONTENT_TYPE;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::label;
use smithy_http::operation::BuildError;

/// An operation input that can be sent with a JSON protocol
///
/// The payload is the input's `Serialize` output. Members bound to URI labels or to the query
/// string must be skipped by the `Serialize` implementation and returned from
/// [`labels`](JsonRequest::labels) and [`query_params`](JsonRequest::query_params) instead.
/// Bindings are ignored by `awsJson1.1` services.
pub trait JsonRequest: Serialize {
    /// Values of the `{Label}` segments of the operation URI
    fn labels(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Query string parameters, in the order they are written
    fn query_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

const X_AMZ_TARGET: &str = "x-amz-target";

fn payload<T: Serialize>(input: &T) -> Result<Vec<u8>, BuildError> {
    serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))
}

/// Expand `{Label}` segments of `pattern` with percent-encoded values
fn expand_uri(pattern: &str, labels: &[(&'static str, &str)]) -> Result<String, BuildError> {
    let mut uri = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|end| start + end)
            .ok_or_else(|| BuildError::InvalidField {
                field: "uri",
                details: format!("unterminated label in `{}`", pattern),
            })?;
        let name = &rest[start + 1..end];
        let value = labels
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| BuildError::InvalidField {
                field: "uri",
                details: format!("no value for label `{}`", name),
            })?;
        if value.is_empty() {
            return Err(BuildError::InvalidField {
                field: "uri",
                details: format!("`{}` cannot be empty", name),
            });
        }
        uri.push_str(&rest[..start]);
        uri.push_str(&label::fmt_string(value));
        rest = &rest[end + 1..];
    }
    uri.push_str(rest);
    Ok(uri)
}

fn has_body(method: &str) -> bool {
    matches!(method, "POST" | "PUT" | "PATCH")
}

/// Build the HTTP request of `operation` for `input`
///
/// The request carries no host: the endpoint is applied later in the pipeline.
pub fn serialize_request<I, K>(
    operation: &OperationDescriptor<K>,
    input: &I,
) -> Result<http::Request<SdkBody>, BuildError>
where
    I: JsonRequest,
{
    let protocol = operation.service.protocol;
    let builder = http::Request::builder();
    let request = match protocol {
        Protocol::AwsJson1_1 { target_prefix } => builder
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, protocol.content_type())
            .header(X_AMZ_TARGET, format!("{}.{}", target_prefix, operation.name))
            .body(SdkBody::from(payload(input)?))?,
        Protocol::RestJson1 => {
            let mut query = label::Writer::new(expand_uri(operation.uri, &input.labels())?);
            for (k, v) in input.query_params() {
                query.push_kv(k, &v);
            }
            let builder = builder.method(operation.method).uri(query.build());
            if has_body(operation.method) {
                builder
                    .header(CONTENT_TYPE, protocol.content_type())
                    .body(SdkBody::from(payload(input)?))?
            } else {
                builder.body(SdkBody::empty())?
            }
        }
    };
    Ok(request)
}
