/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::ErrorKind;
use crate::{input, output};
use aws_json::descriptor::OperationDescriptor;
use aws_json::JsonOperation;

macro_rules! rest_operation {
    (
        $(#[$meta:meta])*
        $name:ident($input:ident, $output:ident, $builder:ident) {
            http: $method:literal $uri:literal,
            errors: [$($error:ident),* $(,)?]
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            _private: (),
        }

        impl $name {
            pub const DESCRIPTOR: OperationDescriptor<ErrorKind> = OperationDescriptor {
                name: stringify!($name),
                service: &crate::SERVICE,
                method: $method,
                uri: $uri,
                errors: &[$(ErrorKind::$error),*],
                legacy: false,
            };

            pub fn builder() -> input::$builder::Builder {
                input::$builder::Builder::default()
            }
        }

        impl JsonOperation for $name {
            type Input = input::$input;
            type Output = output::$output;
            type Kind = ErrorKind;

            fn descriptor() -> OperationDescriptor<ErrorKind> {
                Self::DESCRIPTOR
            }
        }
    };
}

rest_operation! {
    /// Gets the ICE (Interactive Connectivity Establishment) server configuration of a
    /// signaling channel
    GetIceServerConfig(GetIceServerConfigInput, GetIceServerConfigOutput, get_ice_server_config_input) {
        http: "POST" "/v1/get-ice-server-config",
        errors: [
            InvalidClient,
            SessionExpired,
            ClientLimitExceeded,
            ResourceNotFound,
            InvalidArgument,
            NotAuthorized,
        ]
    }
}

rest_operation! {
    /// Sends an offer from an Alexa display device to the master peer of a signaling channel
    SendAlexaOfferToMaster(SendAlexaOfferToMasterInput, SendAlexaOfferToMasterOutput, send_alexa_offer_to_master_input) {
        http: "POST" "/v1/send-alexa-offer-to-master",
        errors: [ClientLimitExceeded, ResourceNotFound, InvalidArgument, NotAuthorized]
    }
}
