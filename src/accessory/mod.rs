// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consumer-facing accessory model.
//!
//! An [`Accessory`] binds one thermostat endpoint to a display name, a
//! UUID, and a [`ThermostatService`] holding the transiently cached
//! characteristics. The [`AccessoryRegistry`] is the explicit lookup table
//! the push pipeline uses to route incremental device updates to the right
//! accessory.
//!
//! State split: the temperature characteristics are cached here and kept
//! fresh by push updates; the mode characteristics are derived on demand by
//! the [`thermostat`](crate::thermostat) read path and never cached. Push
//! updates to `authorization` or `hvacMode` are deliberately ignored, so a
//! mode shown between reads can lag the device.

mod registry;
mod service;

pub use registry::{Accessory, AccessoryId, AccessoryRegistry};
pub use service::{Characteristic, SubscriptionId, ThermostatService};
