// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The thermostat state translator.
//!
//! [`Thermostat`] sits between the device property set and the accessory
//! model. Each characteristic read triggers its own full-snapshot fetch and
//! derives the value fresh; nothing from the read path is cached. Each
//! characteristic write translates into a single property write and
//! completes on successful submission, without waiting for the device to
//! confirm the new state through the push channel.
//!
//! # Examples
//!
//! ```no_run
//! use tydom_bridge::device::EndpointRef;
//! use tydom_bridge::thermostat::Thermostat;
//! use tydom_bridge::transport::TydomConfig;
//! use tydom_bridge::types::HeatingMode;
//!
//! #[tokio::main]
//! async fn main() -> tydom_bridge::Result<()> {
//!     let client = TydomConfig::new("192.168.1.30")
//!         .with_credentials("001A25123456", "password")
//!         .into_client()?;
//!
//!     let endpoint = EndpointRef::new(1_537_640_941, 1_537_640_941);
//!     let thermostat = Thermostat::new(client, endpoint);
//!
//!     let target = thermostat.target_temperature().await?;
//!     thermostat.set_target_mode(HeatingMode::Heat).await?;
//!
//!     Ok(())
//! }
//! ```

mod command;
pub mod derive;

pub use command::{target_mode_write, target_temperature_write};

use std::sync::Arc;

use crate::device::EndpointRef;
use crate::error::Error;
use crate::transport::Transport;
use crate::types::HeatingMode;

/// Bidirectional state translator for one thermostat endpoint.
///
/// The translator is stateless apart from its transport handle: reads
/// return freshly derived values to the caller and cache nothing, avoiding
/// a dual-writer hazard with the push applier in the accessory layer.
#[derive(Debug)]
pub struct Thermostat<T: Transport> {
    transport: Arc<T>,
    endpoint: EndpointRef,
}

impl<T: Transport> Clone for Thermostat<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint,
        }
    }
}

impl<T: Transport> Thermostat<T> {
    /// Creates a translator for the given transport and endpoint.
    pub fn new(transport: T, endpoint: EndpointRef) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoint,
        }
    }

    /// Creates a translator sharing an existing transport handle.
    pub fn with_shared_transport(transport: Arc<T>, endpoint: EndpointRef) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Returns the endpoint this translator is bound to.
    #[must_use]
    pub fn endpoint(&self) -> EndpointRef {
        self.endpoint
    }

    // ========== Read Path ==========

    /// Fetches a snapshot and derives the current heating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or a required property is absent.
    pub async fn current_mode(&self) -> Result<HeatingMode, Error> {
        tracing::debug!(endpoint = %self.endpoint, "get CurrentHeatingCoolingState");
        let data = self.transport.fetch_data(self.endpoint).await?;
        derive::current_mode(&data).map_err(Error::Device)
    }

    /// Fetches a snapshot and derives the target heating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or a required property is absent.
    pub async fn target_mode(&self) -> Result<HeatingMode, Error> {
        tracing::debug!(endpoint = %self.endpoint, "get TargetHeatingCoolingState");
        let data = self.transport.fetch_data(self.endpoint).await?;
        derive::target_mode(&data).map_err(Error::Device)
    }

    /// Fetches a snapshot and returns the target temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or `setpoint` is absent.
    pub async fn target_temperature(&self) -> Result<f64, Error> {
        tracing::debug!(endpoint = %self.endpoint, "get TargetTemperature");
        let data = self.transport.fetch_data(self.endpoint).await?;
        derive::target_temperature(&data).map_err(Error::Device)
    }

    /// Fetches a snapshot and returns the current temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or `temperature` is absent.
    pub async fn current_temperature(&self) -> Result<f64, Error> {
        tracing::debug!(endpoint = %self.endpoint, "get CurrentTemperature");
        let data = self.transport.fetch_data(self.endpoint).await?;
        derive::current_temperature(&data).map_err(Error::Device)
    }

    // ========== Write Path ==========

    /// Translates a target mode into an `hvacMode` write and submits it.
    ///
    /// Fire-and-forget relative to device confirmation: completion means
    /// the gateway accepted the write, not that the device applied it.
    ///
    /// # Errors
    ///
    /// Returns error if the submission fails.
    pub async fn set_target_mode(&self, mode: HeatingMode) -> Result<(), Error> {
        tracing::debug!(endpoint = %self.endpoint, %mode, "set TargetHeatingCoolingState");
        let write = command::target_mode_write(mode);
        self.transport
            .submit_write(self.endpoint, std::slice::from_ref(&write))
            .await
    }

    /// Translates a target temperature into a `setpoint` write and submits it.
    ///
    /// # Errors
    ///
    /// Returns error if the submission fails.
    pub async fn set_target_temperature(&self, value: f64) -> Result<(), Error> {
        tracing::debug!(endpoint = %self.endpoint, value, "set TargetTemperature");
        let write = command::target_temperature_write(value);
        self.transport
            .submit_write(self.endpoint, std::slice::from_ref(&write))
            .await
    }
}
