/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::operation::Metadata;

/// The wire protocol of a service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// Every operation is a `POST /` with the operation named by the `x-amz-target` header
    AwsJson1_1 { target_prefix: &'static str },
    /// Operations are bound to a method and a URI; members may be bound to labels and the query
    RestJson1,
}

impl Protocol {
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::AwsJson1_1 { .. } => "application/x-amz-json-1.1",
            Protocol::RestJson1 => "application/json",
        }
    }
}

/// Static description of a service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Service name used in logs and metrics, e.g. `Glue`
    pub name: &'static str,
    /// Name the service signs requests with, e.g. `kinesisvideo`
    pub signing_name: &'static str,
    /// First label of the default endpoint host
    pub endpoint_prefix: &'static str,
    pub protocol: Protocol,
    pub api_version: &'static str,
}

/// Static description of an operation
///
/// `errors` lists, in order, the error kinds the operation is documented to return. It is
/// informational: the service's registry dispatches every code regardless of the operation.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationDescriptor<K: 'static> {
    pub name: &'static str,
    pub service: &'static ServiceDescriptor,
    pub method: &'static str,
    pub uri: &'static str,
    pub errors: &'static [K],
    /// Kept for compatibility; a newer operation supersedes it
    pub legacy: bool,
}

impl<K> Clone for OperationDescriptor<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for OperationDescriptor<K> {}

impl<K: PartialEq> OperationDescriptor<K> {
    pub fn declares(&self, kind: &K) -> bool {
        self.errors.contains(kind)
    }
}

impl<K> OperationDescriptor<K> {
    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.name, self.service.name)
    }
}

#[cfg(test)]
mod test {
    use crate::descriptor::{OperationDescriptor, Protocol, ServiceDescriptor};
    use crate::kind::test::TestErrorKind;

    const SERVICE: ServiceDescriptor = ServiceDescriptor {
        name: "Test",
        signing_name: "test",
        endpoint_prefix: "test",
        protocol: Protocol::AwsJson1_1 {
            target_prefix: "Test_20210101",
        },
        api_version: "2021-01-01",
    };

    const GET_THING: OperationDescriptor<TestErrorKind> = OperationDescriptor {
        name: "GetThing",
        service: &SERVICE,
        method: "POST",
        uri: "/",
        errors: &[TestErrorKind::NotFound, TestErrorKind::Internal],
        legacy: false,
    };

    #[test]
    fn descriptors_declare_errors() {
        assert!(GET_THING.declares(&TestErrorKind::NotFound));
        assert!(!GET_THING.declares(&TestErrorKind::Invalid));
        let metadata = GET_THING.metadata();
        assert_eq!(metadata.name(), "GetThing");
        assert_eq!(metadata.service(), "Test");
        assert_eq!(SERVICE.protocol.content_type(), "application/x-amz-json-1.1");
    }
}
