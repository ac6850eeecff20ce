// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation of consumer commands into device property writes.
//!
//! Each consumer write maps to exactly one property write. The write path
//! never touches `authorization`: the gate is controlled externally (a
//! physical switch or schedule) and is not exposed as consumer-writable,
//! even though the read path consults it. That asymmetry is part of the
//! device's permission model, not an omission.

use crate::device::PropertyWrite;
use crate::types::{HeatingMode, HvacMode};

/// Translates a target mode into an `hvacMode` write.
///
/// HEAT maps to `NORMAL`; OFF maps to `STOP`. The device's `ANTI_FROST`
/// mode is never produced by the accessory.
///
/// # Examples
///
/// ```
/// use tydom_bridge::thermostat::target_mode_write;
/// use tydom_bridge::types::HeatingMode;
///
/// let write = target_mode_write(HeatingMode::Heat);
/// assert_eq!(write.name, "hvacMode");
/// assert_eq!(write.value.as_str(), Some("NORMAL"));
/// ```
#[must_use]
pub fn target_mode_write(mode: HeatingMode) -> PropertyWrite {
    let hvac_mode = match mode {
        HeatingMode::Heat => HvacMode::Normal,
        HeatingMode::Off => HvacMode::Stop,
    };
    PropertyWrite::new("hvacMode", hvac_mode.as_str())
}

/// Translates a target temperature into a `setpoint` write.
///
/// The value is passed through verbatim; bounds from the property metadata
/// are advisory and not enforced here.
#[must_use]
pub fn target_temperature_write(value: f64) -> PropertyWrite {
    PropertyWrite::new("setpoint", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_maps_to_normal() {
        let write = target_mode_write(HeatingMode::Heat);
        assert_eq!(write.name, "hvacMode");
        assert_eq!(write.value.as_str(), Some("NORMAL"));
    }

    #[test]
    fn off_maps_to_stop() {
        let write = target_mode_write(HeatingMode::Off);
        assert_eq!(write.name, "hvacMode");
        assert_eq!(write.value.as_str(), Some("STOP"));
    }

    #[test]
    fn mode_write_never_touches_authorization() {
        for mode in HeatingMode::VALID {
            assert_ne!(target_mode_write(mode).name, "authorization");
        }
    }

    #[test]
    fn temperature_write_is_verbatim() {
        let write = target_temperature_write(18.5);
        assert_eq!(write.name, "setpoint");
        assert_eq!(write.value.as_f64(), Some(18.5));
    }

    #[test]
    fn out_of_bounds_temperature_not_rejected_here() {
        // Bounds live in the metadata; the core passes anything through.
        let write = target_temperature_write(99.0);
        assert_eq!(write.value.as_f64(), Some(99.0));
    }
}
