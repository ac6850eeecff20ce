// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the thermostat bridge.
//!
//! This module provides type-safe representations of the value domains on
//! both sides of the bridge: the consumer-facing heating mode and the
//! device-side enumerated properties it is derived from.
//!
//! # Types
//!
//! - [`HeatingMode`] - Consumer-facing mode (OFF/HEAT only)
//! - [`Authorization`] - Device-level heating gate (STOP/HEATING)
//! - [`HvacMode`] - Device programmatic mode (NORMAL/STOP/ANTI_FROST)

mod hvac;
mod mode;

pub use hvac::{Authorization, HvacMode};
pub use mode::HeatingMode;
