/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use http::header::AUTHORIZATION;
use http::Uri;
use kinesisvideosignaling::input::{GetIceServerConfigInput, SendAlexaOfferToMasterInput};
use kinesisvideosignaling::model::Service;
use kinesisvideosignaling::{Client, Config, Credentials, Endpoint, ErrorKind, Region};
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::error::ErrorMetadata;

const CHANNEL: &str = "arn:aws:kinesisvideo:us-west-2:123456789012:channel/front-door/1579807891";

fn client(conn: TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .endpoint(Endpoint::new(Uri::from_static(
            "https://r-2c136a55.kinesisvideo.us-west-2.amazonaws.com",
        )))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build();
    Client::from_conf_conn(conf, conn)
}

#[tokio::test]
async fn get_ice_server_config() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .uri(Uri::from_static(
                "https://r-2c136a55.kinesisvideo.us-west-2.amazonaws.com/v1/get-ice-server-config",
            ))
            .body(SdkBody::from(format!(
                r#"{{"ChannelARN":"{}","ClientId":"viewer-1","Service":"TURN"}}"#,
                CHANNEL
            )))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"IceServerList":[{"Uris":["turn:35-90-63-38.t-ae7dd61a.kinesisvideo.us-west-2.amazonaws.com:443?transport=udp"],"Username":"1579808191:djE6","Password":"jPUqvnXuc","Ttl":300}]}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let servers = client
        .get_ice_server_config(
            GetIceServerConfigInput::builder()
                .channel_arn(CHANNEL)
                .client_id("viewer-1")
                .service(Service::Turn)
                .build()
                .unwrap(),
        )
        .await
        .expect("ice servers")
        .ice_server_list
        .expect("list is set");
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].ttl, Some(300));
    assert_eq!(servers[0].uris.as_ref().map(|uris| uris.len()), Some(1));
    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    let authorization = requests[0].actual.headers()[AUTHORIZATION].to_str().unwrap();
    assert!(authorization.contains("/us-west-2/kinesisvideo/aws4_request"));
}

#[tokio::test]
async fn expired_sessions() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://r-2c136a55.kinesisvideo.us-west-2.amazonaws.com/v1/get-ice-server-config",
            ))
            .body(SdkBody::from(format!(r#"{{"ChannelARN":"{}"}}"#, CHANNEL)))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "SessionExpiredException")
            .body(r#"{"Message":"The session has expired."}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err = client
        .get_ice_server_config(
            GetIceServerConfigInput::builder()
                .channel_arn(CHANNEL)
                .build()
                .unwrap(),
        )
        .await
        .expect_err("session expired")
        .into_service_error()
        .expect("service error");
    assert_eq!(err.kind(), ErrorKind::SessionExpired);
    assert_eq!(err.message(), Some("The session has expired."));
}

#[tokio::test]
async fn shutdown_leaves_other_clones_working() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://r-2c136a55.kinesisvideo.us-west-2.amazonaws.com/v1/send-alexa-offer-to-master",
            ))
            .body(SdkBody::from(format!(
                r#"{{"ChannelARN":"{}","SenderClientId":"alexa-1","MessagePayload":"b2ZmZXI="}}"#,
                CHANNEL
            )))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"Answer":"YW5zd2Vy"}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let other = client.clone();
    client.shutdown();
    let output = other
        .send_alexa_offer_to_master(
            SendAlexaOfferToMasterInput::builder()
                .channel_arn(CHANNEL)
                .sender_client_id("alexa-1")
                .message_payload("b2ZmZXI=")
                .build()
                .unwrap(),
        )
        .await
        .expect("answer");
    assert_eq!(output.answer.as_deref(), Some("YW5zd2Vy"));
    other.shutdown();
    conn.assert_requests_match(&[]);
}
