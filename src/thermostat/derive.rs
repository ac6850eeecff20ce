// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure derivation of accessory state from a device snapshot.
//!
//! Heating modes are computed projections of the snapshot, never stored
//! fields: the device has no "current mode" property, so both modes are
//! inferred from `authorization`, `hvacMode`, `setpoint`, and `temperature`.

use crate::device::{DeviceData, PropertyValue};
use crate::error::DeviceError;
use crate::types::{Authorization, HeatingMode, HvacMode};

/// Derives the current heating mode from a snapshot.
///
/// Returns HEAT when the device is authorized to heat and the setpoint is
/// above the measured temperature, OFF otherwise. A thermostat stops
/// actively heating once the setpoint is reached even while still "on",
/// which is why the measured temperature participates here.
///
/// # Errors
///
/// Returns [`DeviceError::MissingProperty`] if `authorization`, `setpoint`,
/// or `temperature` is absent from the snapshot.
pub fn current_mode(data: &DeviceData) -> Result<HeatingMode, DeviceError> {
    let authorization = data.require("authorization")?;
    let setpoint = data.require("setpoint")?;
    let temperature = data.require("temperature")?;

    let below_setpoint = match (setpoint.as_f64(), temperature.as_f64()) {
        (Some(setpoint), Some(temperature)) => setpoint > temperature,
        // A null or non-numeric reading never compares above anything.
        _ => false,
    };

    Ok(HeatingMode::from(
        is_heating_authorized(authorization) && below_setpoint,
    ))
}

/// Derives the target heating mode from a snapshot.
///
/// Returns HEAT only for the `HEATING` + `NORMAL` combination. The device
/// also supports `STOP` and `ANTI_FROST` programmatic modes and a `STOP`
/// authorization; all of those collapse to OFF because the accessory model
/// only advertises OFF and HEAT.
///
/// # Errors
///
/// Returns [`DeviceError::MissingProperty`] if `authorization` or
/// `hvacMode` is absent from the snapshot.
pub fn target_mode(data: &DeviceData) -> Result<HeatingMode, DeviceError> {
    let authorization = data.require("authorization")?;
    let hvac_mode = data.require("hvacMode")?;

    let normal = hvac_mode
        .as_str()
        .and_then(HvacMode::from_wire)
        .is_some_and(|mode| mode == HvacMode::Normal);

    Ok(HeatingMode::from(
        is_heating_authorized(authorization) && normal,
    ))
}

/// Returns the target temperature (`setpoint`) from a snapshot, verbatim.
///
/// # Errors
///
/// Returns [`DeviceError::MissingProperty`] if `setpoint` is absent and
/// [`DeviceError::InvalidValue`] if it is present but not numeric.
pub fn target_temperature(data: &DeviceData) -> Result<f64, DeviceError> {
    numeric(data, "setpoint")
}

/// Returns the current temperature (`temperature`) from a snapshot, verbatim.
///
/// # Errors
///
/// Returns [`DeviceError::MissingProperty`] if `temperature` is absent and
/// [`DeviceError::InvalidValue`] if it is present but not numeric.
pub fn current_temperature(data: &DeviceData) -> Result<f64, DeviceError> {
    numeric(data, "temperature")
}

fn is_heating_authorized(value: &PropertyValue) -> bool {
    value
        .as_str()
        .and_then(Authorization::from_wire)
        .is_some_and(|auth| auth == Authorization::Heating)
}

fn numeric(data: &DeviceData, name: &str) -> Result<f64, DeviceError> {
    data.require(name)?
        .as_f64()
        .ok_or_else(|| DeviceError::InvalidValue {
            name: name.to_string(),
            expected: "numeric",
        })
}
