// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory identity and the endpoint-to-accessory lookup table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::device::{EndpointRef, PropertyMetadata, PropertyUpdate, PropertyWrite};
use crate::error::AccessoryError;

use super::service::ThermostatService;

/// Unique identifier for an accessory.
///
/// A wrapper around UUID v4 providing a distinct type for accessory
/// identification.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessoryId(Uuid);

impl AccessoryId {
    /// Creates a new unique accessory identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an accessory identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AccessoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccessoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only first 8 characters for readability
        let short = &self.0.to_string()[..8];
        write!(f, "AccessoryId({short}...)")
    }
}

impl fmt::Display for AccessoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A consumer-facing accessory bound to one thermostat endpoint.
///
/// Carries the display name and UUID shown to the consumer, the thermostat
/// service holding the cached characteristics, and the descriptive property
/// metadata used for advisory validation at this boundary.
#[derive(Debug)]
pub struct Accessory {
    id: AccessoryId,
    display_name: String,
    endpoint: EndpointRef,
    service: Option<Arc<ThermostatService>>,
    metadata: RwLock<Vec<PropertyMetadata>>,
}

impl Accessory {
    /// Creates an accessory with a thermostat service attached.
    #[must_use]
    pub fn new(display_name: impl Into<String>, endpoint: EndpointRef) -> Self {
        Self {
            id: AccessoryId::new(),
            display_name: display_name.into(),
            endpoint,
            service: Some(Arc::new(ThermostatService::new())),
            metadata: RwLock::new(Vec::new()),
        }
    }

    /// Creates an accessory whose service has not been set up.
    ///
    /// Applying push updates to such an accessory is an invariant
    /// violation and fails with [`AccessoryError::MissingService`].
    #[must_use]
    pub fn without_service(display_name: impl Into<String>, endpoint: EndpointRef) -> Self {
        Self {
            id: AccessoryId::new(),
            display_name: display_name.into(),
            endpoint,
            service: None,
            metadata: RwLock::new(Vec::new()),
        }
    }

    /// Returns the accessory identifier.
    #[must_use]
    pub fn id(&self) -> AccessoryId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the endpoint this accessory is bound to.
    #[must_use]
    pub fn endpoint(&self) -> EndpointRef {
        self.endpoint
    }

    /// Returns the thermostat service.
    ///
    /// # Errors
    ///
    /// Returns [`AccessoryError::MissingService`] if the service was never
    /// set up. This is a programming invariant violation, not a recoverable
    /// runtime condition.
    pub fn thermostat_service(&self) -> Result<&Arc<ThermostatService>, AccessoryError> {
        self.service
            .as_ref()
            .ok_or_else(|| AccessoryError::MissingService {
                service: "Thermostat".to_string(),
            })
    }

    /// Applies device-initiated push updates to the thermostat service.
    ///
    /// # Errors
    ///
    /// Returns [`AccessoryError::MissingService`] if the accessory has no
    /// thermostat service.
    pub fn apply_push_updates(&self, updates: &[PropertyUpdate]) -> Result<(), AccessoryError> {
        self.thermostat_service()?.apply_push_updates(updates);
        Ok(())
    }

    /// Replaces the stored property metadata.
    pub fn set_metadata(&self, metadata: Vec<PropertyMetadata>) {
        *self.metadata.write() = metadata;
    }

    /// Checks a write against the stored metadata, advisory only.
    ///
    /// Returns `true` when no metadata is known for the property; the
    /// translation core never blocks on this.
    #[must_use]
    pub fn accepts_write(&self, write: &PropertyWrite) -> bool {
        let metadata = self.metadata.read();
        match metadata.iter().find(|meta| meta.name == write.name) {
            Some(meta) => meta.permission.can_write() && meta.accepts(&write.value),
            None => true,
        }
    }
}

/// Lookup table mapping endpoints to accessories.
///
/// Owned by the registration layer; its lifecycle is tied to accessory
/// add/remove events rather than living as ambient global state. The push
/// pipeline uses it to route incremental updates to the right accessory.
///
/// # Examples
///
/// ```
/// use tydom_bridge::accessory::{Accessory, AccessoryRegistry};
/// use tydom_bridge::device::EndpointRef;
///
/// let registry = AccessoryRegistry::new();
/// let endpoint = EndpointRef::new(1, 1);
/// registry.register(Accessory::new("Living Room", endpoint));
///
/// assert!(registry.get(endpoint).is_some());
/// assert!(registry.remove(endpoint));
/// ```
#[derive(Debug, Default)]
pub struct AccessoryRegistry {
    accessories: RwLock<HashMap<EndpointRef, Arc<Accessory>>>,
}

impl AccessoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an accessory under its endpoint.
    ///
    /// Returns the previously registered accessory for the same endpoint,
    /// if any.
    pub fn register(&self, accessory: Accessory) -> Option<Arc<Accessory>> {
        let endpoint = accessory.endpoint();
        tracing::debug!(%endpoint, name = accessory.display_name(), "Registering accessory");
        self.accessories
            .write()
            .insert(endpoint, Arc::new(accessory))
    }

    /// Removes the accessory registered under the given endpoint.
    ///
    /// Returns `true` if an accessory was found and removed.
    pub fn remove(&self, endpoint: EndpointRef) -> bool {
        let removed = self.accessories.write().remove(&endpoint).is_some();
        if removed {
            tracing::debug!(%endpoint, "Removed accessory");
        }
        removed
    }

    /// Returns the accessory registered under the given endpoint.
    #[must_use]
    pub fn get(&self, endpoint: EndpointRef) -> Option<Arc<Accessory>> {
        self.accessories.read().get(&endpoint).cloned()
    }

    /// Returns the number of registered accessories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accessories.read().len()
    }

    /// Returns `true` if no accessories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessories.read().is_empty()
    }

    /// Routes push updates to the accessory bound to the given endpoint.
    ///
    /// Returns `Ok(false)` if no accessory is registered for the endpoint;
    /// updates for unknown endpoints are dropped, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessoryError::MissingService`] if the target accessory
    /// has no thermostat service.
    pub fn dispatch_push_updates(
        &self,
        endpoint: EndpointRef,
        updates: &[PropertyUpdate],
    ) -> Result<bool, AccessoryError> {
        match self.get(endpoint) {
            Some(accessory) => {
                accessory.apply_push_updates(updates)?;
                Ok(true)
            }
            None => {
                tracing::debug!(%endpoint, "No accessory registered for push update");
                Ok(false)
            }
        }
    }
}
