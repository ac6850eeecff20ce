// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the Tydom HTTP transport using wiremock.

use serde_json::json;
use tydom_bridge::accessory::{Accessory, AccessoryRegistry};
use tydom_bridge::device::{EndpointRef, PropertyUpdate};
use tydom_bridge::thermostat::Thermostat;
use tydom_bridge::transport::{Transport, TydomConfig};
use tydom_bridge::types::HeatingMode;
use tydom_bridge::{DeviceError, Error, TransportError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEVICE_ID: u64 = 1_537_640_941;
const ENDPOINT_ID: u64 = 1_537_640_941;

fn endpoint() -> EndpointRef {
    EndpointRef::new(DEVICE_ID, ENDPOINT_ID)
}

fn data_path() -> String {
    format!("/devices/{DEVICE_ID}/endpoints/{ENDPOINT_ID}/data")
}

/// Full data envelope as reported by a real gateway.
fn sample_data_envelope() -> serde_json::Value {
    json!({
        "id": DEVICE_ID,
        "endpoints": [
            {
                "id": ENDPOINT_ID,
                "error": 0,
                "data": [
                    {"name": "authorization", "validity": "expired", "value": "HEATING"},
                    {"name": "setpoint", "validity": "expired", "value": 18.5},
                    {"name": "thermicLevel", "validity": "expired", "value": null},
                    {"name": "hvacMode", "validity": "expired", "value": "NORMAL"},
                    {"name": "timeDelay", "validity": "expired", "value": 0},
                    {"name": "temperature", "validity": "expired", "value": 19.44},
                    {"name": "tempoOn", "validity": "expired", "value": false},
                    {"name": "antifrostOn", "validity": "expired", "value": false},
                    {"name": "boostOn", "validity": "expired", "value": false}
                ]
            }
        ]
    })
}

fn client_for(server: &MockServer) -> tydom_bridge::TydomClient {
    let uri = server.uri();
    let host = uri.trim_start_matches("http://");
    let (host, port) = host.split_once(':').unwrap();
    TydomConfig::new(host)
        .with_port(port.parse().unwrap())
        .into_client()
        .unwrap()
}

// ============================================================================
// Transport Tests
// ============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn fetch_data_decodes_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_data_envelope()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let data = client.fetch_data(endpoint()).await.unwrap();

        assert_eq!(data.len(), 9);
        assert_eq!(
            data.require("authorization").unwrap().as_str(),
            Some("HEATING")
        );
        assert_eq!(data.require("setpoint").unwrap().as_f64(), Some(18.5));
        assert!(data.require("thermicLevel").unwrap().is_null());
    }

    #[tokio::test]
    async fn fetch_data_unknown_endpoint_in_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": DEVICE_ID,
                "endpoints": [{"id": 999, "error": 0, "data": []}]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.fetch_data(endpoint()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn fetch_data_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.fetch_data(endpoint()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn fetch_metadata_decodes_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!(
                "/devices/{DEVICE_ID}/endpoints/{ENDPOINT_ID}/cmeta"
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": DEVICE_ID,
                "endpoints": [
                    {
                        "id": ENDPOINT_ID,
                        "metadata": [
                            {"name": "authorization", "type": "string", "permission": "rw", "enum_values": ["STOP", "HEATING"]},
                            {"name": "setpoint", "type": "numeric", "permission": "rw", "min": 10.0, "max": 30.0, "step": 0.5, "unit": "degC"},
                            {"name": "temperature", "type": "numeric", "permission": "r", "min": -99.9, "max": 99.9, "step": 0.01, "unit": "degC"}
                        ]
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let metadata = client.fetch_metadata(endpoint()).await.unwrap();

        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata[1].name, "setpoint");
        assert_eq!(metadata[1].min, Some(10.0));
        assert!(metadata[1].permission.can_write());
        assert!(!metadata[2].permission.can_write());
    }

    #[tokio::test]
    async fn submit_write_puts_wire_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(data_path()))
            .and(body_json(json!([{"name": "hvacMode", "value": "NORMAL"}])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let thermostat = Thermostat::new(client, endpoint());
        thermostat.set_target_mode(HeatingMode::Heat).await.unwrap();
    }
}

// ============================================================================
// Thermostat End-to-End Tests
// ============================================================================

mod thermostat {
    use super::*;

    #[tokio::test]
    async fn derives_all_characteristics_from_gateway_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_data_envelope()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let thermostat = Thermostat::new(client, endpoint());

        // 19.44 measured against an 18.5 setpoint: target HEAT, not
        // currently heating.
        assert_eq!(thermostat.current_mode().await.unwrap(), HeatingMode::Off);
        assert_eq!(thermostat.target_mode().await.unwrap(), HeatingMode::Heat);
        assert_eq!(thermostat.target_temperature().await.unwrap(), 18.5);
        assert_eq!(thermostat.current_temperature().await.unwrap(), 19.44);
    }

    #[tokio::test]
    async fn each_read_fetches_its_own_snapshot() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_data_envelope()))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let thermostat = Thermostat::new(client, endpoint());

        thermostat.current_mode().await.unwrap();
        thermostat.target_mode().await.unwrap();
        thermostat.current_temperature().await.unwrap();
    }

    #[tokio::test]
    async fn missing_temperature_fails_reads_that_need_it() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": DEVICE_ID,
                "endpoints": [
                    {
                        "id": ENDPOINT_ID,
                        "error": 0,
                        "data": [
                            {"name": "authorization", "validity": "upToDate", "value": "HEATING"},
                            {"name": "setpoint", "validity": "upToDate", "value": 18.5},
                            {"name": "hvacMode", "validity": "upToDate", "value": "NORMAL"}
                        ]
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let thermostat = Thermostat::new(client, endpoint());

        for err in [
            thermostat.current_mode().await.unwrap_err(),
            thermostat.current_temperature().await.unwrap_err(),
        ] {
            assert!(matches!(
                err,
                Error::Device(DeviceError::MissingProperty { ref name }) if name == "temperature"
            ));
        }

        // Reads not needing `temperature` still succeed.
        assert_eq!(thermostat.target_mode().await.unwrap(), HeatingMode::Heat);
    }

    #[tokio::test]
    async fn set_target_temperature_is_fire_and_forget() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(data_path()))
            .and(body_json(json!([{"name": "setpoint", "value": 21.0}])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let thermostat = Thermostat::new(client, endpoint());

        // No GET follows the PUT; completion means submission, not
        // confirmation.
        thermostat.set_target_temperature(21.0).await.unwrap();
    }
}

// ============================================================================
// Push Pipeline Tests
// ============================================================================

mod push {
    use super::*;

    #[tokio::test]
    async fn push_updates_refresh_cache_while_reads_stay_fresh() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(data_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_data_envelope()))
            .mount(&mock_server)
            .await;

        let registry = AccessoryRegistry::new();
        registry.register(Accessory::new("Living Room", endpoint()));

        // Push channel reports a new setpoint before any read happens.
        registry
            .dispatch_push_updates(endpoint(), &[PropertyUpdate::new("setpoint", 21.0)])
            .unwrap();

        let accessory = registry.get(endpoint()).unwrap();
        let service = accessory.thermostat_service().unwrap();
        assert_eq!(service.target_temperature(), Some(21.0));
        assert!(service.current_temperature().is_none());

        // An explicit read still reflects the gateway snapshot, not the
        // pushed cache.
        let client = client_for(&mock_server);
        let thermostat = Thermostat::new(client, endpoint());
        assert_eq!(thermostat.target_temperature().await.unwrap(), 18.5);
    }

    #[tokio::test]
    async fn mode_properties_never_applied_from_push() {
        let registry = AccessoryRegistry::new();
        registry.register(Accessory::new("Living Room", endpoint()));

        registry
            .dispatch_push_updates(
                endpoint(),
                &[
                    PropertyUpdate::new("authorization", "STOP"),
                    PropertyUpdate::new("hvacMode", "STOP"),
                    PropertyUpdate::new("temperature", 17.2),
                ],
            )
            .unwrap();

        let accessory = registry.get(endpoint()).unwrap();
        let service = accessory.thermostat_service().unwrap();
        assert_eq!(service.current_temperature(), Some(17.2));
        assert!(service.target_temperature().is_none());
    }
}
