// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat service: cached characteristics and the push-update applier.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::device::PropertyUpdate;
use crate::types::HeatingMode;

/// The four characteristics of the thermostat service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Whether the device is actively heating right now.
    CurrentMode,
    /// The mode the consumer asked for.
    TargetMode,
    /// The measured temperature.
    CurrentTemperature,
    /// The setpoint.
    TargetTemperature,
}

impl Characteristic {
    /// Returns the characteristic name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentMode => "CurrentHeatingCoolingState",
            Self::TargetMode => "TargetHeatingCoolingState",
            Self::CurrentTemperature => "CurrentTemperature",
            Self::TargetTemperature => "TargetTemperature",
        }
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique identifier for a change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

type ChangeCallback = Arc<dyn Fn(Characteristic, f64) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CachedState {
    target_temperature: Option<f64>,
    current_temperature: Option<f64>,
}

/// The thermostat service of an accessory.
///
/// Holds the transiently cached temperature characteristics and applies
/// incremental push updates to them. The mode characteristics are never
/// cached here: they are derived projections served by the
/// [`Thermostat`](crate::thermostat::Thermostat) read path, so a cached
/// copy could silently diverge from the device.
///
/// The cache is mutated only by [`apply_push_updates`](Self::apply_push_updates);
/// the read path bypasses this service entirely.
///
/// # Examples
///
/// ```
/// use tydom_bridge::accessory::ThermostatService;
/// use tydom_bridge::device::PropertyUpdate;
///
/// let service = ThermostatService::new();
/// service.apply_push_updates(&[PropertyUpdate::new("setpoint", 20.0)]);
/// assert_eq!(service.target_temperature(), Some(20.0));
/// ```
#[derive(Default)]
pub struct ThermostatService {
    state: RwLock<CachedState>,
    callbacks: RwLock<HashMap<u64, ChangeCallback>>,
    next_subscription: AtomicU64,
}

impl std::fmt::Debug for ThermostatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThermostatService")
            .field("state", &*self.state.read())
            .field("callbacks", &self.callbacks.read().len())
            .finish()
    }
}

impl ThermostatService {
    /// Creates a service with no cached values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The valid values advertised for the mode characteristics.
    #[must_use]
    pub const fn valid_modes() -> &'static [HeatingMode] {
        &HeatingMode::VALID
    }

    /// Returns the cached target temperature, if a push update set one.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.state.read().target_temperature
    }

    /// Returns the cached current temperature, if a push update set one.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.state.read().current_temperature
    }

    /// Applies incremental device-initiated property updates.
    ///
    /// `setpoint` updates the cached target temperature and `temperature`
    /// updates the cached current temperature; each applied update fires
    /// the change callbacks. Every other property, including
    /// `authorization` and `hvacMode`, is ignored: the mode
    /// characteristics are refreshed only on explicit read, never on push.
    /// Updates are independent; ordering across different names does not
    /// matter.
    pub fn apply_push_updates(&self, updates: &[PropertyUpdate]) {
        for update in updates {
            match update.name.as_str() {
                "setpoint" => {
                    if let Some(value) = update.value.as_f64() {
                        self.state.write().target_temperature = Some(value);
                        self.notify(Characteristic::TargetTemperature, value);
                    }
                }
                "temperature" => {
                    if let Some(value) = update.value.as_f64() {
                        self.state.write().current_temperature = Some(value);
                        self.notify(Characteristic::CurrentTemperature, value);
                    }
                }
                other => {
                    tracing::trace!(name = other, "Ignoring push update");
                }
            }
        }
    }

    /// Registers a callback fired when a cached characteristic changes.
    pub fn on_characteristic_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Characteristic, f64) + Send + Sync + 'static,
    {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.callbacks.write().insert(id, Arc::new(callback));
        SubscriptionId(id)
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.write().remove(&id.0).is_some()
    }

    fn notify(&self, characteristic: Characteristic, value: f64) {
        tracing::debug!(%characteristic, value, "Characteristic updated from push");
        let callbacks: Vec<ChangeCallback> = self.callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(characteristic, value);
        }
    }
}
