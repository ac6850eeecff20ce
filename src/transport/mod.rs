// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for communicating with a Tydom gateway.
//!
//! The translation core only depends on the [`Transport`] trait; the
//! concrete [`TydomClient`] talks to the gateway's HTTP API. Reads fetch a
//! full snapshot of one endpoint's properties, writes submit one or more
//! property values and complete on successful submission, not on applied
//! state confirmation.

mod http;

pub use http::{TydomClient, TydomConfig};

use crate::device::{DeviceData, EndpointRef, PropertyMetadata, PropertyWrite};
use crate::error::Error;

/// Trait for transports that can read and write Tydom endpoint data.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Fetches a point-in-time snapshot of all properties for one endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network or protocol failure and
    /// [`Error::Parse`] if the response envelope cannot be decoded.
    async fn fetch_data(&self, endpoint: EndpointRef) -> Result<DeviceData, Error>;

    /// Fetches the descriptive metadata for one endpoint's properties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network or protocol failure and
    /// [`Error::Parse`] if the response envelope cannot be decoded.
    async fn fetch_metadata(&self, endpoint: EndpointRef) -> Result<Vec<PropertyMetadata>, Error>;

    /// Submits property writes to one endpoint.
    ///
    /// Completes when the gateway accepts the submission; it does not wait
    /// for the new state to be confirmed through the push channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network or protocol failure.
    async fn submit_write(&self, endpoint: EndpointRef, writes: &[PropertyWrite])
    -> Result<(), Error>;
}
