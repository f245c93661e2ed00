/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// AWS User Agent
///
/// Ths struct should be inserted into the [`PropertyBag`](smithy_http::operation::Request::properties)
/// during operation construction. [`UserAgentStage`](UserAgentStage) reads `AwsUserAgent`
/// from the property bag and sets the `User-Agent` and `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_metadata: SdkMetadata,
    api_metadata: ApiMetadata,
    os_metadata: OsMetadata,
    exec_env_metadata: Option<ExecEnvMetadata>,
}

impl AwsUserAgent {
    /// Load a User Agent configuration from the environment
    ///
    /// `ApiMetadata` provides the version & name of the specific service.
    pub fn new_from_environment(api_metadata: ApiMetadata) -> Self {
        Self::with_exec_env(api_metadata, std::env::var("AWS_EXECUTION_ENV").ok())
    }

    fn with_exec_env(api_metadata: ApiMetadata, exec_env: Option<String>) -> Self {
        AwsUserAgent {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: env!("CARGO_PKG_VERSION"),
            },
            api_metadata,
            os_metadata: OsMetadata {
                os_family: std::env::consts::OS,
            },
            exec_env_metadata: exec_env.map(|name| ExecEnvMetadata { name }),
        }
    }

    /// For test purposes, construct an environment-independent User Agent
    ///
    /// Without this, running CI on a different platform would produce different user agent strings
    pub fn for_tests() -> Self {
        Self {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: "0.123.test",
            },
            api_metadata: ApiMetadata {
                service_id: "test-service".into(),
                version: "0.123",
            },
            os_metadata: OsMetadata {
                os_family: "windows",
            },
            exec_env_metadata: None,
        }
    }

    /// Generate a new-style user agent style header
    ///
    /// This header should be set at `x-amz-user-agent`
    pub fn aws_ua_header(&self) -> String {
        let mut parts = vec![
            self.sdk_metadata.to_string(),
            self.api_metadata.to_string(),
            self.os_metadata.to_string(),
            LANG.to_string(),
        ];
        if let Some(env_meta) = &self.exec_env_metadata {
            parts.push(env_meta.to_string());
        }
        parts.join(" ")
    }

    /// Generate an old-style User-Agent header for backward compatibility
    ///
    /// This header is intended to be set at `User-Agent`
    pub fn ua_header(&self) -> String {
        format!("{} {} {}", self.sdk_metadata, self.os_metadata, LANG)
    }
}

const LANG: &str = "lang/rust";

#[derive(Clone, Copy, Debug)]
struct SdkMetadata {
    name: &'static str,
    version: &'static str,
}

impl Display for SdkMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "aws-sdk-{}/{}", self.name, self.version)
    }
}

#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

#[derive(Clone, Debug)]
struct OsMetadata {
    os_family: &'static str,
}

impl Display for OsMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let os_family = match self.os_family {
            "windows" | "linux" | "macos" | "android" | "ios" => self.os_family,
            _ => "other",
        };
        write!(f, "os/{}", os_family)
    }
}

#[derive(Clone, Debug)]
struct ExecEnvMetadata {
    name: String,
}

impl Display for ExecEnvMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exec-env/{}", &self.name)
    }
}

#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("user agent missing from property bag")]
    UserAgentMissing,
    #[error("provided user agent header was invalid")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

lazy_static::lazy_static! {
    static ref X_AMZ_USER_AGENT: HeaderName = HeaderName::from_static("x-amz-user-agent");
}

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .append(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut().append(
                X_AMZ_USER_AGENT.clone(),
                HeaderValue::try_from(ua.aws_ua_header())?,
            );

            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{ApiMetadata, AwsUserAgent, UserAgentStage, UserAgentStageError};
    use crate::user_agent::X_AMZ_USER_AGENT;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    fn make_deterministic(ua: &mut AwsUserAgent) {
        ua.sdk_metadata.version = "0.1";
        ua.os_metadata.os_family = "macos";
    }

    #[test]
    fn generate_a_valid_ua() {
        let mut ua = AwsUserAgent::with_exec_env(ApiMetadata::new("glue", "123"), None);
        make_deterministic(&mut ua);
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/glue/123 os/macos lang/rust"
        );
        assert_eq!(ua.ua_header(), "aws-sdk-rust/0.1 os/macos lang/rust");
    }

    #[test]
    fn generate_a_valid_ua_with_execution_env() {
        let mut ua = AwsUserAgent::with_exec_env(
            ApiMetadata::new("codebuild", "123"),
            Some("lambda".to_string()),
        );
        make_deterministic(&mut ua);
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/codebuild/123 os/macos lang/rust exec-env/lambda"
        );
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        assert!(matches!(
            stage.apply(req),
            Err(UserAgentStageError::UserAgentMissing)
        ));

        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.properties_mut().insert(AwsUserAgent::for_tests());
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        req.headers()
            .get(USER_AGENT)
            .expect("UA header should be set");
        assert_eq!(
            req.headers().get(&*X_AMZ_USER_AGENT).unwrap(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust"
        );
    }
}
