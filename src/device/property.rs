// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device property snapshot model.

use serde::{Deserialize, Serialize};

use crate::error::DeviceError;

/// A single device property value.
///
/// Tydom properties are heterogeneous: numeric (`setpoint`), enumerated
/// strings (`hvacMode`), booleans (`boostOn`), and null when the device has
/// no reading.
///
/// # Examples
///
/// ```
/// use tydom_bridge::device::PropertyValue;
///
/// let value: PropertyValue = serde_json::from_str("18.5").unwrap();
/// assert_eq!(value.as_f64(), Some(18.5));
///
/// let value: PropertyValue = serde_json::from_str("\"HEATING\"").unwrap();
/// assert_eq!(value.as_str(), Some("HEATING"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// No value reported.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    String(String),
}

impl PropertyValue {
    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` if no value was reported.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Freshness marker reported alongside each property.
///
/// Observed but not enforced: an `expired` snapshot is still derived from
/// as-is, matching the gateway's own behavior of serving the last known
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Validity {
    /// The value reflects a recent device report.
    UpToDate,
    /// The value is stale but still the latest known.
    Expired,
    /// Any other marker the gateway may report.
    #[default]
    Unknown,
}

impl From<String> for Validity {
    fn from(marker: String) -> Self {
        match marker.as_str() {
            "upToDate" => Self::UpToDate,
            "expired" => Self::Expired,
            _ => Self::Unknown,
        }
    }
}

/// A single named device property within a snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceProperty {
    /// Property name; the lookup key within a snapshot.
    pub name: String,
    /// Freshness marker. Absent in some gateway firmwares.
    #[serde(default)]
    pub validity: Validity,
    /// The property value; null when the device has no reading.
    #[serde(default)]
    pub value: PropertyValue,
}

impl DeviceProperty {
    /// Creates a property with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            validity: Validity::Unknown,
            value: value.into(),
        }
    }
}

/// A point-in-time snapshot of all properties for one endpoint.
///
/// Snapshots are ephemeral: fetched per read, discarded after derivation.
/// Names are treated as lookup keys with first match winning, mirroring the
/// gateway's ordered data array.
///
/// # Examples
///
/// ```
/// use tydom_bridge::device::{DeviceData, DeviceProperty};
///
/// let data = DeviceData::from(vec![
///     DeviceProperty::new("setpoint", 18.5),
///     DeviceProperty::new("authorization", "HEATING"),
/// ]);
///
/// assert_eq!(data.find("setpoint").unwrap().value.as_f64(), Some(18.5));
/// assert!(data.find("hvacMode").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DeviceData(Vec<DeviceProperty>);

impl DeviceData {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the property with the given name, first match winning.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DeviceProperty> {
        self.0.iter().find(|prop| prop.name == name)
    }

    /// Returns the value of a required property.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::MissingProperty`] if no property with the
    /// given name is present.
    pub fn require(&self, name: &str) -> Result<&PropertyValue, DeviceError> {
        self.find(name)
            .map(|prop| &prop.value)
            .ok_or_else(|| DeviceError::missing(name))
    }

    /// Returns the number of properties in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the snapshot contains no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the properties in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, DeviceProperty> {
        self.0.iter()
    }
}

impl From<Vec<DeviceProperty>> for DeviceData {
    fn from(properties: Vec<DeviceProperty>) -> Self {
        Self(properties)
    }
}

impl FromIterator<DeviceProperty> for DeviceData {
    fn from_iter<I: IntoIterator<Item = DeviceProperty>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DeviceData {
    type Item = &'a DeviceProperty;
    type IntoIter = std::slice::Iter<'a, DeviceProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An incremental device-initiated property update.
///
/// Delivered outside the read path; carries no validity marker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyUpdate {
    /// Name of the changed property.
    pub name: String,
    /// The new value.
    #[serde(default)]
    pub value: PropertyValue,
}

impl PropertyUpdate {
    /// Creates an update with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An outgoing device property write.
///
/// Serialized as `{"name": ..., "value": ...}` in the PUT body sent to the
/// gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyWrite {
    /// Name of the property to write.
    pub name: String,
    /// The value to write.
    pub value: PropertyValue,
}

impl PropertyWrite {
    /// Creates a write for the given property name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
