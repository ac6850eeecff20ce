// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint addressing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of one endpoint on one Tydom device.
///
/// The gateway addresses data as `/devices/{device_id}/endpoints/{endpoint_id}`;
/// both identifiers are needed for every fetch and write, and the pair keys
/// the accessory registry.
///
/// # Examples
///
/// ```
/// use tydom_bridge::device::EndpointRef;
///
/// let endpoint = EndpointRef::new(1_537_640_941, 1_537_640_941);
/// assert_eq!(endpoint.to_string(), "1537640941/1537640941");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointRef {
    /// The Tydom device identifier.
    pub device_id: u64,
    /// The endpoint identifier within the device.
    pub endpoint_id: u64,
}

impl EndpointRef {
    /// Creates an endpoint reference.
    #[must_use]
    pub const fn new(device_id: u64, endpoint_id: u64) -> Self {
        Self {
            device_id,
            endpoint_id,
        }
    }
}

impl fmt::Display for EndpointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.device_id, self.endpoint_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let endpoint = EndpointRef::new(42, 7);
        assert_eq!(endpoint.to_string(), "42/7");
    }

    #[test]
    fn hashable_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(EndpointRef::new(1, 1), "thermostat");
        assert_eq!(map.get(&EndpointRef::new(1, 1)), Some(&"thermostat"));
        assert_eq!(map.get(&EndpointRef::new(1, 2)), None);
    }
}
