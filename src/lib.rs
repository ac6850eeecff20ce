// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `TydomBridge` - A Rust library bridging Tydom thermostats to a
//! HomeKit-style accessory model.
//!
//! A Tydom thermostat exposes a flat list of named, typed properties
//! (`authorization`, `setpoint`, `temperature`, `hvacMode`, ...). This
//! library translates that property set into four standardized accessory
//! characteristics and back:
//!
//! - **Current Mode** (OFF/HEAT): derived from `authorization` plus whether
//!   the setpoint is above the measured temperature
//! - **Target Mode** (OFF/HEAT): derived from `authorization` and `hvacMode`
//! - **Current Temperature**: passthrough of `temperature`
//! - **Target Temperature**: passthrough of `setpoint`
//!
//! Reads fetch a fresh snapshot per characteristic and derive the value on
//! the spot. Writes translate into single property writes submitted
//! fire-and-forget. Device-initiated push updates keep the cached
//! temperature characteristics current; the mode characteristics are
//! refreshed only on read.
//!
//! # Quick Start
//!
//! ## Reading and writing characteristics
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
//!     println!("current: {}", thermostat.current_temperature().await?);
//!     thermostat.set_target_temperature(19.5).await?;
//!     thermostat.set_target_mode(HeatingMode::Heat).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Routing push updates
//!
//! ```
//! use tydom_bridge::accessory::{Accessory, AccessoryRegistry};
//! use tydom_bridge::device::{EndpointRef, PropertyUpdate};
//!
//! let registry = AccessoryRegistry::new();
//! let endpoint = EndpointRef::new(1_537_640_941, 1_537_640_941);
//! registry.register(Accessory::new("Living Room", endpoint));
//!
//! // Fed by the process consuming the gateway's push channel:
//! registry
//!     .dispatch_push_updates(endpoint, &[PropertyUpdate::new("setpoint", 20.0)])
//!     .unwrap();
//! ```

pub mod accessory;
pub mod device;
pub mod error;
pub mod thermostat;
pub mod transport;
pub mod types;

pub use accessory::{Accessory, AccessoryId, AccessoryRegistry, Characteristic, ThermostatService};
pub use device::{
    DeviceData, DeviceProperty, EndpointRef, PropertyMetadata, PropertyUpdate, PropertyValue,
    PropertyWrite,
};
pub use error::{AccessoryError, DeviceError, Error, ParseError, Result, TransportError};
pub use thermostat::Thermostat;
pub use transport::{Transport, TydomClient, TydomConfig};
pub use types::{Authorization, HeatingMode, HvacMode};
