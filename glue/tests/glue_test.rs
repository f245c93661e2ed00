/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::provider::{future, CredentialsError};
use aws_auth::ProvideCredentials;
use aws_hyper::conn::TimedOut;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use glue::input::{GetTableInput, StartCrawlerInput, StartJobRunInput};
use glue::operation::GetTable;
use glue::{Client, Config, Credentials, Endpoint, ErrorKind, Region};
use http::header::AUTHORIZATION;
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_http::metrics::{Metric, MetricsReport, PublishMetrics};
use smithy_types::error::ErrorMetadata;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::BoxError;

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build()
}

fn get_table(name: &str) -> GetTableInput {
    GetTableInput::builder()
        .database_name("sales")
        .name(name)
        .build()
        .expect("valid input")
}

fn get_table_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "AWSGlue.GetTable")
        .uri(Uri::from_static("https://glue.us-east-1.amazonaws.com/"))
        .body(SdkBody::from(r#"{"DatabaseName":"sales","Name":"orders"}"#))
        .unwrap()
}

#[tokio::test]
async fn get_table_success() {
    let conn = TestConnection::new(vec![(
        get_table_request(),
        http::Response::builder()
            .status(200)
            .body(r#"{"Table":{"Name":"orders","DatabaseName":"sales","CreateTime":1.61441E9,"StorageDescriptor":{"Columns":[{"Name":"id","Type":"bigint"}]}}}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .get_table(get_table("orders"))
        .await
        .expect("table exists");
    let table = output.table.expect("table is set");
    assert_eq!(table.name.as_deref(), Some("orders"));
    assert_eq!(table.create_time, Some(1.61441E9));
    let columns = table.storage_descriptor.unwrap().columns.unwrap();
    assert_eq!(columns[0].column_type.as_deref(), Some("bigint"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn entity_not_found_is_dispatched_to_its_kind() {
    let conn = TestConnection::new(vec![(
        get_table_request(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
            .header("content-type", "application/x-amz-json-1.1")
            .body(r#"{"__type":"EntityNotFoundException","message":"Table orders not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("the table does not exist");
    assert!(!err.is_client_side());
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.kind(), ErrorKind::EntityNotFound);
            assert!(GetTable::DESCRIPTOR.declares(&err.kind()));
            assert_eq!(err.message(), Some("Table orders not found"));
            assert_eq!(
                err.request_id(),
                Some("bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
            );
            assert_eq!(raw.status(), 400);
            assert_eq!(
                err.to_string(),
                "EntityNotFoundException: Table orders not found"
            );
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    let authorization = requests[0].actual.headers()[AUTHORIZATION].to_str().unwrap();
    assert!(authorization.contains("/us-east-1/glue/aws4_request"));
}

#[tokio::test]
async fn unknown_codes_fall_back_to_unhandled() {
    let conn = TestConnection::new(vec![
        (
            get_table_request(),
            http::Response::builder()
                .status(418)
                .body(r#"{"__type":"aws.glue#BrandNewException:http://internal.amazon.com/","message":"surprise"}"#)
                .unwrap(),
        ),
        (
            get_table_request(),
            http::Response::builder()
                .status(502)
                .body("<html>Bad Gateway</html>")
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn);

    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("unknown error")
        .into_service_error()
        .expect("service error");
    assert!(err.is_unhandled());
    assert_eq!(err.code(), Some("BrandNewException"));
    assert_eq!(err.message(), Some("surprise"));
    assert_eq!(err.status(), Some(418));

    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("bad gateway")
        .into_service_error()
        .expect("service error");
    assert!(err.is_unhandled());
    assert_eq!(err.code(), None);
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn connection_reset_is_a_client_side_error() {
    let conn = tower::service_fn(|_req: http::Request<SdkBody>| async {
        Err::<http::Response<SdkBody>, BoxError>("connection reset by peer".into())
    });
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("transport failure");
    assert!(err.is_client_side());
    assert!(err.service_error().is_none());
    match err {
        SdkError::DispatchFailure(e) => assert_eq!(e.to_string(), "connection reset by peer"),
        other => panic!("expected a dispatch failure, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_response_error() {
    let conn = TestConnection::new(vec![(
        get_table_request(),
        http::Response::builder()
            .status(200)
            .body("not json")
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("body is not json");
    assert!(err.is_client_side());
    assert!(err.service_error().is_none());
    match err {
        SdkError::ResponseError { raw, err } => {
            assert_eq!(raw.status(), 200);
            assert!(err.downcast_ref::<serde_json::Error>().is_some());
        }
        other => panic!("expected a response error, got {:?}", other),
    }
}

#[tokio::test]
async fn silent_endpoints_time_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .endpoint(Endpoint::new(format!("http://{}", addr).parse::<Uri>().unwrap()))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .timeout(Duration::from_millis(200))
        .build();
    let client = Client::from_conf(conf);
    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("nothing answers");
    match err {
        SdkError::DispatchFailure(e) => assert_eq!(
            e.downcast_ref::<TimedOut>().map(|timed_out| timed_out.0),
            Some(Duration::from_millis(200))
        ),
        other => panic!("expected a dispatch failure, got {:?}", other),
    }
    hold.abort();
}

#[tokio::test]
async fn empty_success_body_is_an_empty_output() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .header("x-amz-target", "AWSGlue.StartCrawler")
            .uri(Uri::from_static("https://glue.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"Name":"daily"}"#))
            .unwrap(),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    client
        .start_crawler(StartCrawlerInput::builder().name("daily").build().unwrap())
        .await
        .expect("crawler started");
    conn.assert_requests_match(&[]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_are_isolated() {
    let conn = tower::service_fn(|req: http::Request<SdkBody>| async move {
        let input: serde_json::Value =
            serde_json::from_slice(req.body().bytes().unwrap_or_default())?;
        let name = input["Name"].as_str().unwrap_or_default();
        let body = serde_json::json!({ "Table": { "Name": name } }).to_string();
        Ok::<_, BoxError>(
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(body))
                .unwrap(),
        )
    });
    let client = Client::from_conf_conn(conf(), conn);
    let calls = (0..16).map(|i| {
        let client = client.clone();
        tokio::spawn(async move {
            let name = format!("table-{}", i);
            let output = client.get_table(get_table(&name)).await.expect("success");
            assert_eq!(output.table.and_then(|t| t.name), Some(name));
        })
    });
    for call in calls.collect::<Vec<_>>() {
        call.await.expect("task completed");
    }
}

#[tokio::test]
async fn fixed_endpoint_routes_every_request() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("http://localhost:8000/"))
            .body(SdkBody::from(r#"{"DatabaseName":"sales","Name":"orders"}"#))
            .unwrap(),
        http::Response::builder().status(200).body("{}").unwrap(),
    )]);
    let conf = Config::builder()
        .region(Region::new("eu-west-1"))
        .endpoint(Endpoint::new(Uri::from_static("http://localhost:8000")))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    client
        .get_table(get_table("orders"))
        .await
        .expect("success");
    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    let authorization = requests[0].actual.headers()[AUTHORIZATION].to_str().unwrap();
    assert!(authorization.contains("/eu-west-1/glue/aws4_request"));
}

#[derive(Debug, Default)]
struct FailingProvider {
    calls: AtomicUsize,
}

impl ProvideCredentials for FailingProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        future::ProvideCredentials::ready(Err(CredentialsError::CredentialsNotLoaded))
    }
}

#[tokio::test]
async fn pinned_credentials_bypass_the_provider() {
    let provider = Arc::new(FailingProvider::default());
    let conf = Config::builder()
        .credentials_provider(SharedProvider(provider.clone()))
        .build();
    let conn = TestConnection::new(vec![(
        get_table_request(),
        http::Response::builder().status(200).body("{}").unwrap(),
    )]);
    let client = Client::from_conf_conn(conf, conn.clone());

    let mut op = get_table("orders")
        .make_operation(client.conf())
        .expect("valid operation");
    aws_auth::pin_credentials(
        &mut op.properties_mut(),
        Credentials::from_keys("PINNED", "pinned-secret", None),
    );
    client.call(op).await.expect("success");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    {
        let requests = conn.requests();
        let authorization = requests[0].actual.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(authorization.contains("Credential=PINNED/"));
    }

    // Without pinned credentials, the provider is asked and its failure stops the call
    let err = client
        .get_table(get_table("orders"))
        .await
        .expect_err("no credentials");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(conn.requests().len(), 1);
}

#[derive(Debug)]
struct SharedProvider(Arc<FailingProvider>);

impl ProvideCredentials for SharedProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a> {
        self.0.provide_credentials()
    }
}

#[derive(Clone, Debug, Default)]
struct CollectMetrics(Arc<Mutex<Vec<MetricsReport>>>);

impl PublishMetrics for CollectMetrics {
    fn publish(&self, report: &MetricsReport) {
        self.0.lock().unwrap().push(report.clone());
    }
}

#[tokio::test]
async fn metrics_are_released_when_the_call_fails() {
    let metrics = CollectMetrics::default();
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .metrics_publisher(metrics.clone())
        .build();
    let conn = tower::service_fn(|_req: http::Request<SdkBody>| async {
        Err::<http::Response<SdkBody>, BoxError>("connection reset by peer".into())
    });
    let client = Client::from_conf_conn(conf, conn);
    client
        .get_table(get_table("orders"))
        .await
        .expect_err("transport failure");

    let reports = metrics.0.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].service, "Glue");
    assert_eq!(reports[0].operation, "GetTable");
    for metric in &[
        Metric::ClientExecuteTime,
        Metric::RequestMarshallTime,
        Metric::CredentialsRequestTime,
        Metric::HttpRequestTime,
    ] {
        assert!(reports[0].timings.get(*metric).is_some(), "{:?}", metric);
    }
    assert!(reports[0]
        .timings
        .get(Metric::ResponseProcessingTime)
        .is_none());
}

#[test]
fn marshalling_is_deterministic() {
    let conf = conf();
    let input = || {
        StartJobRunInput::builder()
            .job_name("nightly")
            .argument("--source", "s3://bucket/in")
            .argument("--dest", "s3://bucket/out")
            .timeout(60)
            .build()
            .unwrap()
    };
    let first = input().make_operation(&conf).unwrap();
    let second = input().make_operation(&conf).unwrap();
    let (first, second) = (first.request().http(), second.request().http());
    assert_eq!(first.body().bytes(), second.body().bytes());
    assert_eq!(first.headers(), second.headers());
    assert_eq!(
        first.body().bytes(),
        Some(
            &br#"{"JobName":"nightly","Arguments":{"--dest":"s3://bucket/out","--source":"s3://bucket/in"},"Timeout":60}"#[..]
        )
    );
}

#[test]
fn client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
    assert_send_sync::<Config>();
}
