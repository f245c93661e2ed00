/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{make_operation, Config};
use crate::error::{Error, ErrorKind};
use crate::{input, operation, output};
use aws_hyper::conn::Standard;
use aws_hyper::SdkError;
use aws_json::{JsonOperation, ParseJsonResponse};
use smithy_http::body::SdkBody;
use smithy_http::metrics::{Metric, MetricsScope};
use smithy_http::operation::Operation;
use std::error::Error as StdError;
use std::sync::Arc;
use tower::Service;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug)]
struct Handle<C> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

/// Client for AWS CodeBuild
///
/// Clones share the configuration and the connector.
#[derive(Debug)]
pub struct Client<C = Standard> {
    handle: Arc<Handle<C>>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            handle: self.handle.clone(),
        }
    }
}

impl Client<Standard> {
    /// A client sending requests over HTTPS
    pub fn from_conf(conf: Config) -> Self {
        let conn = match conf.timeout {
            Some(timeout) => Standard::https().with_timeout(timeout),
            None => Standard::https(),
        };
        Self::from_conf_conn(conf, conn)
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        Client {
            handle: Arc::new(Handle {
                client: aws_hyper::Client::new(conn),
                conf,
            }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    /// Release this client
    ///
    /// The connector is released once the last clone is gone. Calls already in flight on other
    /// clones are not affected.
    pub fn shutdown(self) {
        tracing::debug!(service = crate::SERVICE.name, "client shut down");
    }
}

impl<C> Client<C>
where
    C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Sync
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    /// Send a prebuilt operation
    ///
    /// Useful to adjust the request before it is sent, for example to pin credentials with
    /// [`aws_auth::pin_credentials`].
    pub async fn call<Op>(
        &self,
        op: Operation<ParseJsonResponse<Op>>,
    ) -> Result<Op::Output, SdkError<Error>>
    where
        Op: JsonOperation<Kind = ErrorKind>,
    {
        let descriptor = Op::descriptor();
        let scope = MetricsScope::start(
            descriptor.service.name,
            descriptor.name,
            self.handle.conf.metrics_publisher.clone(),
        );
        self.dispatch(op, &scope).await
    }

    async fn send<Op>(&self, input: Op::Input) -> Result<Op::Output, SdkError<Error>>
    where
        Op: JsonOperation<Kind = ErrorKind>,
    {
        let descriptor = Op::descriptor();
        let scope = MetricsScope::start(
            descriptor.service.name,
            descriptor.name,
            self.handle.conf.metrics_publisher.clone(),
        );
        let op = scope
            .metrics()
            .time(Metric::RequestMarshallTime, || {
                make_operation::<Op>(&input, &self.handle.conf)
            })
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.dispatch(op, &scope).await
    }

    async fn dispatch<Op>(
        &self,
        mut op: Operation<ParseJsonResponse<Op>>,
        scope: &MetricsScope,
    ) -> Result<Op::Output, SdkError<Error>>
    where
        Op: JsonOperation<Kind = ErrorKind>,
    {
        op.properties_mut().insert(scope.metrics().clone());
        self.handle.client.call(op).await
    }

    pub async fn batch_get_builds(
        &self,
        input: input::BatchGetBuildsInput,
    ) -> Result<output::BatchGetBuildsOutput, SdkError<Error>> {
        self.send::<operation::BatchGetBuilds>(input).await
    }

    pub async fn create_project(
        &self,
        input: input::CreateProjectInput,
    ) -> Result<output::CreateProjectOutput, SdkError<Error>> {
        self.send::<operation::CreateProject>(input).await
    }

    pub async fn delete_project(
        &self,
        input: input::DeleteProjectInput,
    ) -> Result<output::DeleteProjectOutput, SdkError<Error>> {
        self.send::<operation::DeleteProject>(input).await
    }

    pub async fn list_projects(
        &self,
        input: input::ListProjectsInput,
    ) -> Result<output::ListProjectsOutput, SdkError<Error>> {
        self.send::<operation::ListProjects>(input).await
    }

    pub async fn start_build(
        &self,
        input: input::StartBuildInput,
    ) -> Result<output::StartBuildOutput, SdkError<Error>> {
        self.send::<operation::StartBuild>(input).await
    }

    pub async fn stop_build(
        &self,
        input: input::StopBuildInput,
    ) -> Result<output::StopBuildOutput, SdkError<Error>> {
        self.send::<operation::StopBuild>(input).await
    }
}
