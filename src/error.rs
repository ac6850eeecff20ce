// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `tydom_bridge` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! device data derivation, transport communication, wire parsing, and
//! accessory-model invariants.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when bridging
/// a Tydom thermostat to the accessory model.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while deriving state from device data.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// Error occurred during transport communication.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred while parsing a device response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Invariant violation in the accessory-model layer.
    #[error("accessory error: {0}")]
    Accessory(#[from] AccessoryError),
}

/// Errors related to device data and state derivation.
///
/// These errors surface when a snapshot does not contain what a
/// characteristic read requires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// A required named property is absent from the snapshot.
    #[error("missing `{name}` data item")]
    MissingProperty {
        /// Name of the absent property.
        name: String,
    },

    /// A property is present but its value has the wrong type.
    #[error("property `{name}` is not {expected}")]
    InvalidValue {
        /// Name of the offending property.
        name: String,
        /// Description of the expected value type.
        expected: &'static str,
    },
}

impl DeviceError {
    /// Creates a `MissingProperty` error for the given property name.
    #[must_use]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingProperty { name: name.into() }
    }
}

/// Errors related to transport communication with the Tydom gateway.
///
/// These propagate unchanged through get/set operations; the core performs
/// no retry or backoff.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the gateway failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to parsing Tydom responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response envelope did not contain the requested endpoint.
    #[error("endpoint {endpoint_id} not found in response for device {device_id}")]
    UnknownEndpoint {
        /// The device identifier that was queried.
        device_id: u64,
        /// The endpoint identifier that was queried.
        endpoint_id: u64,
    },

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Invariant violations in the accessory-model layer.
///
/// These indicate programming errors, not recoverable runtime conditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessoryError {
    /// The accessory is expected to carry a service but does not.
    #[error("unexpected missing `{service}` service in accessory")]
    MissingService {
        /// Name of the absent service.
        service: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_error_display() {
        let err = DeviceError::missing("setpoint");
        assert_eq!(err.to_string(), "missing `setpoint` data item");
    }

    #[test]
    fn error_from_device_error() {
        let device_err = DeviceError::missing("temperature");
        let err: Error = device_err.into();
        assert!(matches!(
            err,
            Error::Device(DeviceError::MissingProperty { .. })
        ));
    }

    #[test]
    fn invalid_value_display() {
        let err = DeviceError::InvalidValue {
            name: "setpoint".to_string(),
            expected: "numeric",
        };
        assert_eq!(err.to_string(), "property `setpoint` is not numeric");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnknownEndpoint {
            device_id: 1_537_640_941,
            endpoint_id: 7,
        };
        assert_eq!(
            err.to_string(),
            "endpoint 7 not found in response for device 1537640941"
        );
    }

    #[test]
    fn accessory_error_display() {
        let err = AccessoryError::MissingService {
            service: "Thermostat".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected missing `Thermostat` service in accessory"
        );
    }
}
