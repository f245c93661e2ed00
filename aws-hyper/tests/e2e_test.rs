/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::{Standard, TimedOut};
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::{Region, SigningService};
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::Uri;
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::{ParseStrictResponse, ResponseFailure};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};
use tokio::net::TcpListener;
use tower::{BoxError, ServiceExt};

#[derive(Clone, Default)]
struct TestOperationParser {
    calls: Arc<AtomicUsize>,
}

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, ResponseFailure<String>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = String::from_utf8_lossy(response.body()).to_string();
        if response.status().is_success() {
            Ok(body)
        } else {
            Err(ResponseFailure::Service(body))
        }
    }
}

fn test_operation(parser: TestOperationParser) -> Operation<TestOperationParser> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(DefaultAwsEndpointResolver::for_prefix("test-service")),
        );
        aws_auth::set_provider(
            conf,
            Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
        );
        conf.insert(Region::new("test-region"));
        conf.insert(SigningService::from_static("test-service"));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(AwsUserAgent::for_tests());
        conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, parser)
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header("x-amz-date", "20210215T184017Z")
        .uri(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/",
        ))
        .body(SdkBody::from("request body"))
        .unwrap()
}

#[tokio::test]
async fn e2e_test() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation(TestOperationParser::default())).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    let actual = &requests[0].actual;
    let authorization = actual.headers()[AUTHORIZATION].to_str().unwrap();
    assert!(
        authorization.starts_with(
            "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, "
        ),
        "{}",
        authorization
    );
    assert!(actual.headers().contains_key(USER_AGENT));
    assert!(actual.headers().contains_key("x-amz-user-agent"));
}

#[tokio::test]
async fn service_errors_reach_the_parser() {
    let conn = TestConnection::new(vec![(
        expected_request(),
        http::Response::builder()
            .status(500)
            .body("boom")
            .unwrap(),
    )]);
    let client = Client::new(conn);
    match client.call(test_operation(TestOperationParser::default())).await {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(err, "boom");
            assert_eq!(raw.status(), 500);
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn dispatch_failures_never_reach_the_parser() {
    let conn = tower::service_fn(|_req: http::Request<SdkBody>| async {
        Err::<http::Response<SdkBody>, BoxError>("connection reset by peer".into())
    });
    let parser = TestOperationParser::default();
    let client = Client::new(conn);
    let err = client
        .call(test_operation(parser.clone()))
        .await
        .expect_err("connection reset");
    assert!(err.is_client_side());
    match err {
        SdkError::DispatchFailure(e) => assert_eq!(e.to_string(), "connection reset by peer"),
        other => panic!("expected a dispatch failure, got {:?}", other),
    }
    assert_eq!(parser.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn construction_failures_are_not_sent() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let mut op = test_operation(TestOperationParser::default());
    op.properties_mut().remove::<Region>();
    let err = client.call(op).await.expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn pinned_credentials_sign_the_request() {
    let conn = TestConnection::new(vec![(
        expected_request(),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let mut op = test_operation(TestOperationParser::default());
    aws_auth::pin_credentials(
        &mut op.properties_mut(),
        Credentials::from_keys("pinned_key", "pinned_secret", None),
    );
    client.call(op).await.expect("success");
    let requests = conn.requests();
    let actual = &requests[0].actual;
    assert!(actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .contains("Credential=pinned_key/"));
}

#[tokio::test]
async fn silent_servers_time_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });
    let request = http::Request::builder()
        .uri(format!("http://{}/", addr))
        .body(SdkBody::empty())
        .unwrap();
    let err = Standard::https()
        .with_timeout(Duration::from_millis(200))
        .oneshot(request)
        .await
        .expect_err("nothing answers");
    let timed_out = err.downcast_ref::<TimedOut>().expect("timeout error");
    assert_eq!(timed_out.0, Duration::from_millis(200));
    assert_eq!(err.to_string(), "request timed out after 200ms");
    hold.abort();
}
