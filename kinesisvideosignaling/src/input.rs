/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{make_operation, Config};
use crate::model::Service;
use crate::operation;
use aws_json::serialize::JsonRequest;
use aws_json::ParseJsonResponse;
use serde::Serialize;
use smithy_http::operation::{BuildError, Operation};

/// See [`GetIceServerConfigInput`](crate::input::GetIceServerConfigInput)
pub mod get_ice_server_config_input {
    use crate::model::Service;
    use smithy_http::operation::BuildError;

    /// A builder for [`GetIceServerConfigInput`](crate::input::GetIceServerConfigInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        channel_arn: Option<String>,
        client_id: Option<String>,
        service: Option<Service>,
        username: Option<String>,
    }

    impl Builder {
        /// The ARN of the signaling channel used for peer-to-peer connection between the master
        /// and the viewers
        pub fn channel_arn(mut self, inp: impl Into<String>) -> Self {
            self.channel_arn = Some(inp.into());
            self
        }

        pub fn client_id(mut self, inp: impl Into<String>) -> Self {
            self.client_id = Some(inp.into());
            self
        }

        pub fn service(mut self, inp: Service) -> Self {
            self.service = Some(inp);
            self
        }

        pub fn username(mut self, inp: impl Into<String>) -> Self {
            self.username = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::GetIceServerConfigInput, BuildError> {
            Ok(crate::input::GetIceServerConfigInput {
                channel_arn: self
                    .channel_arn
                    .ok_or_else(|| BuildError::missing_field("channel_arn"))?,
                client_id: self.client_id,
                service: self.service,
                username: self.username,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIceServerConfigInput {
    #[serde(rename = "ChannelARN")]
    pub channel_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl JsonRequest for GetIceServerConfigInput {}

impl GetIceServerConfigInput {
    pub fn builder() -> get_ice_server_config_input::Builder {
        get_ice_server_config_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::GetIceServerConfig>>, BuildError> {
        make_operation::<operation::GetIceServerConfig>(self, conf)
    }
}

/// See [`SendAlexaOfferToMasterInput`](crate::input::SendAlexaOfferToMasterInput)
pub mod send_alexa_offer_to_master_input {
    use smithy_http::operation::BuildError;

    /// A builder for [`SendAlexaOfferToMasterInput`](crate::input::SendAlexaOfferToMasterInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        channel_arn: Option<String>,
        sender_client_id: Option<String>,
        message_payload: Option<String>,
    }

    impl Builder {
        pub fn channel_arn(mut self, inp: impl Into<String>) -> Self {
            self.channel_arn = Some(inp.into());
            self
        }

        pub fn sender_client_id(mut self, inp: impl Into<String>) -> Self {
            self.sender_client_id = Some(inp.into());
            self
        }

        /// The base64-encoded SDP offer
        pub fn message_payload(mut self, inp: impl Into<String>) -> Self {
            self.message_payload = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<crate::input::SendAlexaOfferToMasterInput, BuildError> {
            Ok(crate::input::SendAlexaOfferToMasterInput {
                channel_arn: self
                    .channel_arn
                    .ok_or_else(|| BuildError::missing_field("channel_arn"))?,
                sender_client_id: self
                    .sender_client_id
                    .ok_or_else(|| BuildError::missing_field("sender_client_id"))?,
                message_payload: self
                    .message_payload
                    .ok_or_else(|| BuildError::missing_field("message_payload"))?,
            })
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendAlexaOfferToMasterInput {
    #[serde(rename = "ChannelARN")]
    pub channel_arn: String,
    pub sender_client_id: String,
    pub message_payload: String,
}

impl JsonRequest for SendAlexaOfferToMasterInput {}

impl SendAlexaOfferToMasterInput {
    pub fn builder() -> send_alexa_offer_to_master_input::Builder {
        send_alexa_offer_to_master_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        conf: &Config,
    ) -> Result<Operation<ParseJsonResponse<operation::SendAlexaOfferToMaster>>, BuildError> {
        make_operation::<operation::SendAlexaOfferToMaster>(self, conf)
    }
}
