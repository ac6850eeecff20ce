// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consumer-facing heating mode.

use std::fmt;

/// Heating mode exposed through the accessory model.
///
/// HomeKit-style thermostats define four heating/cooling states (OFF, HEAT,
/// COOL, AUTO), but the bridged device can only be off or heating, so the
/// characteristics advertise the restricted [`HeatingMode::VALID`] subset.
///
/// # Examples
///
/// ```
/// use tydom_bridge::types::HeatingMode;
///
/// assert_eq!(HeatingMode::Off.as_num(), 0);
/// assert_eq!(HeatingMode::Heat.as_num(), 1);
/// assert_eq!(HeatingMode::Heat.as_str(), "HEAT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatingMode {
    /// Not heating.
    Off,
    /// Heating.
    Heat,
}

impl HeatingMode {
    /// The valid values advertised for mode characteristics.
    ///
    /// COOL and AUTO are deliberately excluded; the device supports neither.
    pub const VALID: [Self; 2] = [Self::Off, Self::Heat];

    /// Returns the mode name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Heat => "HEAT",
        }
    }

    /// Returns the numeric characteristic value (0 = OFF, 1 = HEAT).
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
        }
    }

    /// Returns `true` if this mode is HEAT.
    #[must_use]
    pub const fn is_heat(&self) -> bool {
        matches!(self, Self::Heat)
    }
}

impl fmt::Display for HeatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for HeatingMode {
    fn from(heating: bool) -> Self {
        if heating { Self::Heat } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str() {
        assert_eq!(HeatingMode::Off.as_str(), "OFF");
        assert_eq!(HeatingMode::Heat.as_str(), "HEAT");
    }

    #[test]
    fn as_num_matches_characteristic_codes() {
        assert_eq!(HeatingMode::Off.as_num(), 0);
        assert_eq!(HeatingMode::Heat.as_num(), 1);
    }

    #[test]
    fn valid_subset_excludes_cool_and_auto() {
        assert_eq!(HeatingMode::VALID.len(), 2);
        assert!(HeatingMode::VALID.iter().all(|m| m.as_num() <= 1));
    }

    #[test]
    fn from_bool() {
        assert_eq!(HeatingMode::from(true), HeatingMode::Heat);
        assert_eq!(HeatingMode::from(false), HeatingMode::Off);
    }

    #[test]
    fn display() {
        assert_eq!(HeatingMode::Heat.to_string(), "HEAT");
    }
}
