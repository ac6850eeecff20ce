// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device property model for Tydom endpoints.
//!
//! A Tydom device exposes a flat list of named, typed properties. This module
//! provides the snapshot model the translation core derives accessory state
//! from, the incremental update and write shapes, and the descriptive
//! per-property metadata.
//!
//! # Types
//!
//! - [`DeviceData`] - A point-in-time snapshot of all properties
//! - [`DeviceProperty`] - A single named property with value and validity
//! - [`PropertyValue`] - The heterogeneous value domain (numeric, string, boolean, null)
//! - [`PropertyUpdate`] / [`PropertyWrite`] - Incremental push updates and outgoing writes
//! - [`PropertyMetadata`] - Optional descriptive metadata (bounds, permissions, enums)
//! - [`EndpointRef`] - Device + endpoint addressing key

mod endpoint;
mod metadata;
mod property;

pub use endpoint::EndpointRef;
pub use metadata::{Permission, PropertyMetadata, PropertyType};
pub use property::{DeviceData, DeviceProperty, PropertyUpdate, PropertyValue, PropertyWrite, Validity};
