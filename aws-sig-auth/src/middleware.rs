/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{OperationSigningConfig, RequestConfig, SigV4Signer, SigningError};
use aws_auth::Credentials;
use aws_types::{SigningRegion, SigningService};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::{Request, TimeOffset};
use smithy_http::property_bag::PropertyBag;
use std::time::{Duration, SystemTime};
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `glue`
/// - [`Credentials`](Credentials): Resolved by the credentials stage
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
/// - [`TimeOffset`](TimeOffset): Clock skew correction, in seconds, added to the timestamp.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("no credentials in the property bag")]
    MissingCredentials,
    #[error("no signing region in the property bag")]
    MissingSigningRegion,
    #[error("no signing service in the property bag")]
    MissingSigningService,
    #[error("no signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("the request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("signing failed: {0}")]
    SigningFailure(#[from] SigningError),
}

fn request_time(config: &PropertyBag) -> SystemTime {
    let now = config
        .get::<SystemTime>()
        .copied()
        .unwrap_or_else(SystemTime::now);
    match config.get::<TimeOffset>() {
        Some(TimeOffset(offset)) if *offset >= 0 => now + Duration::from_secs(*offset as u64),
        Some(TimeOffset(offset)) => now - Duration::from_secs(offset.unsigned_abs()),
        None => now,
    }
}

/// Extract a signing config from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
fn signing_config(
    config: &PropertyBag,
) -> Result<(&OperationSigningConfig, RequestConfig, &Credentials), SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let creds = config
        .get::<Credentials>()
        .ok_or(SigningStageError::MissingCredentials)?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: request_time(config),
        region,
        service: signing_service,
    };
    Ok((operation_config, request_config, creds))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            let (operation_config, request_config, creds) = signing_config(config)?;

            // Only bodies that are already in memory can be signed
            let (parts, body) = req.into_parts();
            let mut signable_request = http::Request::from_parts(parts, ());
            {
                let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
                self.signer.sign(
                    operation_config,
                    &request_config,
                    creds,
                    &mut signable_request,
                    signable_body,
                )?;
            }
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}
