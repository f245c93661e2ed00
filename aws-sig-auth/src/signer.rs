/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_sigv4::http_request::{
    sign, PercentEncodingMode, SignableBody, SignableRequest, SigningParams, SigningSettings,
};
use aws_types::{SigningRegion, SigningService};
use http::header::USER_AGENT;
use std::fmt;
use std::time::SystemTime;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SigningError {
    #[error("invalid signing parameters: {0}")]
    InvalidParams(BoxError),
    #[error("request could not be signed: {0}")]
    Signing(BoxError),
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_options: SigningOptions,
}

impl OperationSigningConfig {
    /// The signing configuration used by every JSON operation
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_options: SigningOptions {
                double_uri_encode: true,
            },
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
}

impl SigningOptions {
    fn settings(&self) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.percent_encoding_mode = match self.double_uri_encode {
            true => PercentEncodingMode::Double,
            false => PercentEncodingMode::Single,
        };
        settings
    }
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

/// The hex-encoded signature added to a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(String);

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// `x-amz-date`, `x-amz-security-token` (for session credentials) and `authorization` are added
    /// to `request`. The body is passed separately because it must already be in memory.
    pub fn sign<B>(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<B>,
        body: &[u8],
    ) -> Result<Signature, SigningError> {
        let builder = SigningParams::builder()
            .access_key(credentials.access_key_id())
            .secret_key(credentials.secret_access_key())
            .region(request_config.region.as_ref())
            .service_name(request_config.service.as_ref())
            .time(request_config.request_ts)
            .settings(operation_config.signing_options.settings());
        let builder = match credentials.session_token() {
            Some(token) => builder.security_token(token),
            None => builder,
        };
        let params = builder
            .build()
            .map_err(|err| SigningError::InvalidParams(err.into()))?;

        // Proxies may rewrite the user agent
        let mut headers = request.headers().clone();
        headers.remove(USER_AGENT);
        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            &headers,
            SignableBody::Bytes(body),
        );
        let (instructions, signature) = sign(signable, &params)
            .map_err(|err| SigningError::Signing(err.into()))?
            .into_parts();
        instructions.apply_to_request(request);
        tracing::trace!(
            region = request_config.region.as_ref(),
            service = request_config.service.as_ref(),
            "signed request"
        );
        Ok(Signature(signature))
    }
}
