// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Descriptive per-property metadata.
//!
//! The gateway publishes metadata describing each property's type,
//! permission, and value domain. The translation core never requires it;
//! it exists to validate values at the accessory-model boundary.

use serde::Deserialize;

use super::property::PropertyValue;

/// The declared type of a device property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Numeric value with optional bounds and step.
    Numeric,
    /// Enumerated string value.
    String,
    /// Boolean flag.
    Boolean,
}

/// Read/write permission of a device property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Permission {
    /// Read-only.
    #[serde(rename = "r")]
    Read,
    /// Write-only.
    #[serde(rename = "w")]
    Write,
    /// Read-write.
    #[serde(rename = "rw")]
    ReadWrite,
}

impl Permission {
    /// Returns `true` if the property can be read.
    #[must_use]
    pub const fn can_read(&self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Returns `true` if the property can be written.
    #[must_use]
    pub const fn can_write(&self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// Descriptive metadata for one device property.
///
/// # Examples
///
/// ```
/// use tydom_bridge::device::{PropertyMetadata, PropertyValue};
///
/// let json = r#"{
///     "name": "setpoint",
///     "type": "numeric",
///     "permission": "rw",
///     "min": 10.0,
///     "max": 30.0,
///     "step": 0.5,
///     "unit": "degC"
/// }"#;
/// let meta: PropertyMetadata = serde_json::from_str(json).unwrap();
///
/// assert!(meta.accepts(&PropertyValue::Number(18.5)));
/// assert!(!meta.accepts(&PropertyValue::Number(42.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyMetadata {
    /// Property name.
    pub name: String,
    /// Declared value type.
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Read/write permission.
    pub permission: Permission,
    /// Allowed values for enumerated string properties.
    #[serde(default)]
    pub enum_values: Option<Vec<String>>,
    /// Lower bound for numeric properties.
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper bound for numeric properties.
    #[serde(default)]
    pub max: Option<f64>,
    /// Step for numeric properties.
    #[serde(default)]
    pub step: Option<f64>,
    /// Unit label (e.g. `degC`, `minute`).
    #[serde(default)]
    pub unit: Option<String>,
}

impl PropertyMetadata {
    /// Returns `true` if the value fits this property's declared domain.
    ///
    /// Advisory only: type match, enum membership, and numeric bounds are
    /// checked; step granularity is not. Null is always accepted since the
    /// gateway itself reports null for properties without a reading.
    #[must_use]
    pub fn accepts(&self, value: &PropertyValue) -> bool {
        match (self.kind, value) {
            (_, PropertyValue::Null) => true,
            (PropertyType::Numeric, PropertyValue::Number(n)) => {
                self.min.is_none_or(|min| *n >= min) && self.max.is_none_or(|max| *n <= max)
            }
            (PropertyType::String, PropertyValue::String(s)) => self
                .enum_values
                .as_ref()
                .is_none_or(|allowed| allowed.iter().any(|v| v == s)),
            (PropertyType::Boolean, PropertyValue::Bool(_)) => true,
            _ => false,
        }
    }
}
