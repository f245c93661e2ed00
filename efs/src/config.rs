/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::ErrorKind;
use aws_auth::provider::default_provider;
use aws_auth::{ProvideCredentials, SharedCredentialsProvider};
use aws_endpoint::{AwsEndpointResolver, DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_json::operation::build_operation;
use aws_json::{ErrorRegistry, JsonOperation, ParseJsonResponse};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::{Region, SigningService};
use smithy_http::endpoint::Endpoint;
use smithy_http::metrics::PublishMetrics;
use smithy_http::operation::{BuildError, Operation, TimeOffset};
use std::sync::Arc;
use std::time::Duration;

/// Configuration of an EFS client
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) region: Region,
    pub(crate) endpoint_resolver: AwsEndpointResolver,
    pub(crate) credentials_provider: SharedCredentialsProvider,
    pub(crate) time_offset: TimeOffset,
    pub(crate) timeout: Option<Duration>,
    pub(crate) metrics_publisher: Option<Arc<dyn PublishMetrics>>,
    pub(crate) error_registry: Arc<ErrorRegistry<ErrorKind>>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn time_offset(&self) -> TimeOffset {
        self.time_offset
    }

    pub fn error_registry(&self) -> &ErrorRegistry<ErrorKind> {
        &self.error_registry
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<AwsEndpointResolver>,
    credentials_provider: Option<SharedCredentialsProvider>,
    time_offset: Option<TimeOffset>,
    timeout: Option<Duration>,
    metrics_publisher: Option<Arc<dyn PublishMetrics>>,
}

impl Builder {
    /// Region to send requests to. Defaults to `us-east-1`.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Send every request to `endpoint`, whatever the region
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint));
        self
    }

    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    /// Defaults to the environment variable provider
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(Arc::new(provider));
        self
    }

    /// Clock skew correction, in seconds, applied to the signing time
    pub fn time_offset(mut self, seconds: i64) -> Self {
        self.time_offset = Some(TimeOffset(seconds));
        self
    }

    /// Timeout of the default HTTPS connector
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn metrics_publisher(mut self, publisher: impl PublishMetrics + 'static) -> Self {
        self.metrics_publisher = Some(Arc::new(publisher));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self
                .region
                .unwrap_or_else(|| Region::from_static("us-east-1")),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_prefix(
                    crate::SERVICE.endpoint_prefix,
                ))
            }),
            credentials_provider: self.credentials_provider.unwrap_or_else(default_provider),
            time_offset: self.time_offset.unwrap_or_default(),
            timeout: self.timeout,
            metrics_publisher: self.metrics_publisher,
            error_registry: Arc::new(ErrorRegistry::modeled()),
        }
    }
}

/// Marshal `input` and attach everything the request pipeline needs from `conf`
pub(crate) fn make_operation<Op>(
    input: &Op::Input,
    conf: &Config,
) -> Result<Operation<ParseJsonResponse<Op>>, BuildError>
where
    Op: JsonOperation<Kind = ErrorKind>,
{
    let mut op = build_operation::<Op>(input, conf.error_registry.clone())?;
    {
        let mut properties = op.properties_mut();
        properties.insert(conf.region.clone());
        properties.insert(conf.time_offset);
        properties.insert(SigningService::from_static(crate::SERVICE.signing_name));
        properties.insert(OperationSigningConfig::default_config());
        properties.insert(AwsUserAgent::new_from_environment(crate::API_METADATA.clone()));
        aws_endpoint::set_endpoint_resolver(&mut properties, conf.endpoint_resolver.clone());
        aws_auth::set_provider(&mut properties, conf.credentials_provider.clone());
    }
    Ok(op)
}
