/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::{Region, SigningRegion, SigningService};
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Overrides of the signing scope that come with an endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn new(region: Option<SigningRegion>, service: Option<SigningService>) -> Self {
        CredentialScope { region, service }
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

/// An endpoint resolved for a region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn from_endpoint(endpoint: Endpoint, credential_scope: CredentialScope) -> AwsEndpoint {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri)
    }
}

/// Resolve the endpoint of a service in a region
///
/// Only two resolvers exist: the conventional `https://{prefix}.{region}.amazonaws.com` one, and a
/// fixed [`Endpoint`], which ignores the region.
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// `https://{endpoint_prefix}.{region}.amazonaws.com`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_prefix(endpoint_prefix: &'static str) -> Self {
        DefaultAwsEndpointResolver { endpoint_prefix }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = http::Uri::from_str(&format!(
            "https://{}.{}.amazonaws.com",
            self.endpoint_prefix,
            region.as_ref()
        ))?;
        Ok(AwsEndpoint::from_endpoint(
            Endpoint::new(uri),
            CredentialScope::default(),
        ))
    }
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::from_endpoint(
            self.clone(),
            CredentialScope::default(),
        ))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug, Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver in the property bag")]
    NoEndpointResolver,
    #[error("no region in the property bag")]
    NoRegion,
    #[error("failed to resolve the endpoint: {0}")]
    EndpointResolutionError(#[source] BoxError),
    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpoint),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            props.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                props.insert::<SigningService>(signing_service.clone());
            }
            endpoint.set_endpoint(http_req.uri_mut())?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::header::HOST;
    use http::Uri;

    use aws_types::{Region, SigningRegion, SigningService};
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::{
        set_endpoint_resolver, AwsEndpoint, AwsEndpointStage, AwsEndpointStageError, BoxError,
        CredentialScope, DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };

    fn request(uri: &'static str) -> operation::Request {
        operation::Request::new(
            http::Request::builder()
                .uri(uri)
                .body(SdkBody::from(""))
                .unwrap(),
        )
    }

    #[test]
    fn default_endpoint_updates_request() {
        let mut req = request("/");
        let region = Region::new("us-east-1");
        {
            let mut props = req.properties_mut();
            props.insert(region.clone());
            props.insert(SigningService::from_static("glue"));
            set_endpoint_resolver(
                &mut props,
                Arc::new(DefaultAwsEndpointResolver::for_prefix("glue")),
            );
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.properties().get(), Some(&SigningRegion::from(region)));
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("glue"))
        );

        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://glue.us-east-1.amazonaws.com/")
        );
        assert!(req.headers().get(HOST).is_none());
    }

    #[test]
    fn fixed_endpoint_ignores_region() {
        let mut req = request("/2015-02-01/file-systems?MaxItems=5");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("eu-west-1"));
            set_endpoint_resolver(
                &mut props,
                Arc::new(Endpoint::new(Uri::from_static("http://localhost:4566"))),
            );
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("eu-west-1"))
        );
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://localhost:4566/2015-02-01/file-systems?MaxItems=5")
        );
    }

    #[derive(Debug)]
    struct ScopedResolver;

    impl ResolveAwsEndpoint for ScopedResolver {
        fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
            Ok(AwsEndpoint::from_endpoint(
                Endpoint::new(Uri::from_static("https://www.service.com")),
                CredentialScope::new(
                    Some(SigningRegion::from_static("us-east-override")),
                    Some(SigningService::from_static("kinesisvideo")),
                ),
            ))
        }
    }

    #[test]
    fn sets_service_override_when_set() {
        let mut req = request("/v1/get-ice-server-config");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-east-1"));
            props.insert(SigningService::from_static("kinesis"));
            set_endpoint_resolver(&mut props, Arc::new(ScopedResolver));
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-override"))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("kinesisvideo"))
        );
    }

    #[test]
    fn missing_region_is_an_error() {
        let mut req = request("/");
        set_endpoint_resolver(
            &mut req.properties_mut(),
            Arc::new(DefaultAwsEndpointResolver::for_prefix("codebuild")),
        );
        assert!(matches!(
            AwsEndpointStage.apply(req),
            Err(AwsEndpointStageError::NoRegion)
        ));
    }
}
