/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The request pipeline shared by every service client.
//!
//! An [`Operation`] travels, in order, through credentials resolution, endpoint resolution,
//! user-agent injection and SigV4 signing before it is handed to the connector. The response is
//! then parsed by the operation's response handler. Nothing is retried.

pub mod conn;
#[cfg(feature = "test-util")]
pub mod test_connection;

use aws_auth::middleware::CredentialsStage;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::{ParseHttpResponse, ResponseFailure};
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::{AsyncMapRequestLayer, MapRequestLayer};
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{debug_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The client is cheap to clone: clones share the connector.
#[derive(Clone, Debug)]
pub struct Client<S> {
    inner: S,
}

impl<S> Client<S> {
    /// Construct a new `Client` with a custom connector
    pub fn new(connector: S) -> Self {
        Client { inner: connector }
    }
}

impl Client<conn::Standard> {
    /// Construct an `https` based client
    pub fn https() -> Self {
        Client {
            inner: conn::Standard::https(),
        }
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Sync
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, ResponseFailure<E>>> + Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E>(&self, input: Operation<O>) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, ResponseFailure<E>>> + Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let credentials = AsyncMapRequestLayer::for_mapper(CredentialsStage::new());
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        let inner = self.inner.clone();
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<O>::new())
            .layer(credentials)
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(signer)
            .layer(DispatchLayer::new())
            .service(inner);
        let span = match input.metadata() {
            Some(metadata) => debug_span!(
                "call",
                service = metadata.service(),
                operation = metadata.name()
            ),
            None => debug_span!("call"),
        };
        svc.ready().await?.call(input).instrument(span).await
    }
}

#[cfg(test)]
mod test {
    use crate::Client;

    #[test]
    fn client_is_send_sync() {
        fn is_send_sync<T: Send + Sync>(_: T) {}
        is_send_sync(Client::new(
            crate::test_connection::TestConnection::<&'static str>::new(vec![]),
        ));
    }
}
