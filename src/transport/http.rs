// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport implementation for Tydom gateways.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::device::{DeviceData, EndpointRef, PropertyMetadata, PropertyWrite};
use crate::error::{Error, ParseError, TransportError};
use crate::transport::Transport;

/// Configuration for a Tydom gateway connection.
///
/// # Examples
///
/// ```
/// use tydom_bridge::transport::TydomConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = TydomConfig::new("192.168.1.30");
///
/// // With all options
/// let config = TydomConfig::new("192.168.1.30")
///     .with_port(8080)
///     .with_https()
///     .with_credentials("001A25123456", "password")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct TydomConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Option<(String, String)>,
    timeout: Duration,
}

impl TydomConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified gateway host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Tydom gateway
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets authentication credentials (gateway MAC and password).
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates a [`TydomClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<TydomClient, TransportError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(TydomClient {
            base_url,
            client,
            credentials: self.credentials,
        })
    }
}

/// Response envelope for one endpoint's data.
#[derive(Debug, Deserialize)]
struct DataEnvelope {
    #[allow(dead_code)]
    id: u64,
    endpoints: Vec<EndpointData>,
}

#[derive(Debug, Deserialize)]
struct EndpointData {
    id: u64,
    #[serde(default)]
    error: u32,
    #[serde(default)]
    data: DeviceData,
}

/// Response envelope for one endpoint's metadata.
#[derive(Debug, Deserialize)]
struct MetadataEnvelope {
    #[allow(dead_code)]
    id: u64,
    endpoints: Vec<EndpointMetadata>,
}

#[derive(Debug, Deserialize)]
struct EndpointMetadata {
    id: u64,
    #[serde(default)]
    metadata: Vec<PropertyMetadata>,
}

/// HTTP client for a Tydom gateway.
///
/// Reads and writes endpoint data through the gateway's REST API:
/// `GET /devices/{device_id}/endpoints/{endpoint_id}/data` for snapshots and
/// `PUT` on the same path for property writes.
///
/// # Examples
///
/// ```no_run
/// use tydom_bridge::device::EndpointRef;
/// use tydom_bridge::transport::{Transport, TydomConfig};
///
/// # async fn example() -> tydom_bridge::Result<()> {
/// let client = TydomConfig::new("192.168.1.30")
///     .with_credentials("001A25123456", "password")
///     .into_client()?;
///
/// let endpoint = EndpointRef::new(1_537_640_941, 1_537_640_941);
/// let data = client.fetch_data(endpoint).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TydomClient {
    base_url: String,
    client: Client,
    credentials: Option<(String, String)>,
}

impl TydomClient {
    /// Creates a client for the specified gateway host with default options.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        TydomConfig::new(host).into_client()
    }

    /// Returns the base URL of the gateway.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn data_url(&self, endpoint: EndpointRef) -> String {
        format!(
            "{}/devices/{}/endpoints/{}/data",
            self.base_url, endpoint.device_id, endpoint.endpoint_id
        )
    }

    fn metadata_url(&self, endpoint: EndpointRef) -> String {
        format!(
            "{}/devices/{}/endpoints/{}/cmeta",
            self.base_url, endpoint.device_id, endpoint.endpoint_id
        )
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TransportError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(TransportError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response)
    }
}

impl Transport for TydomClient {
    async fn fetch_data(&self, endpoint: EndpointRef) -> Result<DeviceData, Error> {
        let url = self.data_url(endpoint);

        tracing::debug!(url = %url, "Fetching endpoint data");

        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(TransportError::Http)?;
        let response = Self::check_status(response).await?;

        let body = response.text().await.map_err(TransportError::Http)?;
        let envelope: DataEnvelope = serde_json::from_str(&body).map_err(ParseError::Json)?;

        let data = envelope
            .endpoints
            .into_iter()
            .find(|ep| ep.id == endpoint.endpoint_id)
            .ok_or(ParseError::UnknownEndpoint {
                device_id: endpoint.device_id,
                endpoint_id: endpoint.endpoint_id,
            })?;

        if data.error != 0 {
            tracing::warn!(%endpoint, error = data.error, "Gateway reported endpoint error");
        }

        Ok(data.data)
    }

    async fn fetch_metadata(&self, endpoint: EndpointRef) -> Result<Vec<PropertyMetadata>, Error> {
        let url = self.metadata_url(endpoint);

        tracing::debug!(url = %url, "Fetching endpoint metadata");

        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(TransportError::Http)?;
        let response = Self::check_status(response).await?;

        let body = response.text().await.map_err(TransportError::Http)?;
        let envelope: MetadataEnvelope = serde_json::from_str(&body).map_err(ParseError::Json)?;

        let metadata = envelope
            .endpoints
            .into_iter()
            .find(|ep| ep.id == endpoint.endpoint_id)
            .ok_or(ParseError::UnknownEndpoint {
                device_id: endpoint.device_id,
                endpoint_id: endpoint.endpoint_id,
            })?;

        Ok(metadata.metadata)
    }

    async fn submit_write(
        &self,
        endpoint: EndpointRef,
        writes: &[PropertyWrite],
    ) -> Result<(), Error> {
        let url = self.data_url(endpoint);

        tracing::debug!(url = %url, count = writes.len(), "Submitting property writes");

        let response = self
            .with_auth(self.client.put(&url).json(writes))
            .send()
            .await
            .map_err(TransportError::Http)?;
        Self::check_status(response).await?;

        Ok(())
    }
}
