// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-side enumerated thermostat properties.

use std::fmt;

/// The device-level heating gate, carried by the `authorization` property.
///
/// This indicates whether the device is permitted to heat at all, distinct
/// from the programmatic mode ([`HvacMode`]). It is typically controlled by
/// a physical switch or schedule, not by the accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authorization {
    /// Heating is not permitted.
    Stop,
    /// Heating is permitted.
    Heating,
}

impl Authorization {
    /// Returns the Tydom wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::Heating => "HEATING",
        }
    }

    /// Parses a Tydom wire string.
    ///
    /// Returns `None` for unrecognized strings. Callers deriving a heating
    /// mode treat unrecognized values as not-heating rather than failing.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "STOP" => Some(Self::Stop),
            "HEATING" => Some(Self::Heating),
            _ => None,
        }
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The device programmatic mode, carried by the `hvacMode` property.
///
/// Only [`HvacMode::Normal`] maps to a target mode of HEAT; `STOP` and
/// `ANTI_FROST` both collapse to OFF in the accessory model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HvacMode {
    /// Regular heating according to the setpoint.
    Normal,
    /// Heating disabled.
    Stop,
    /// Minimal heating to prevent freezing.
    AntiFrost,
}

impl HvacMode {
    /// Returns the Tydom wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Stop => "STOP",
            Self::AntiFrost => "ANTI_FROST",
        }
    }

    /// Parses a Tydom wire string.
    ///
    /// Returns `None` for unrecognized strings.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "NORMAL" => Some(Self::Normal),
            "STOP" => Some(Self::Stop),
            "ANTI_FROST" => Some(Self::AntiFrost),
            _ => None,
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
