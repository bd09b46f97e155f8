//! Geolocation API client.
//!
//! One GET per lookup, no retries: the first failure is the answer.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use url::Url;

use super::types::{LocationRecord, Query};
use crate::config::{Config, PARAM_API_KEY, PARAM_DOMAIN, PARAM_IP_ADDRESS};
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_client;

/// Client for the ipify geolocation API.
#[derive(Clone)]
pub struct GeolocationClient {
    http: Arc<reqwest::Client>,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for GeolocationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeolocationClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeolocationClient {
    pub fn new(http: Arc<reqwest::Client>, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Builds the HTTP client and parses the endpoint from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ApiUrlError` if the endpoint is not a
    /// URL, or `HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let base_url =
            Url::parse(&config.api_url).map_err(|source| InitializationError::ApiUrlError {
                url: config.api_url.clone(),
                source,
            })?;
        let http = init_client(config)?;
        Ok(Self::new(http, base_url, config.api_key.clone()))
    }

    /// URL requested for `query`.
    ///
    /// Carries the API key and at most one of `ipAddress` / `domain`.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(PARAM_API_KEY, &self.api_key);
            match query {
                Query::SelfLookup => {}
                Query::Ip(ip) => {
                    pairs.append_pair(PARAM_IP_ADDRESS, &ip.to_string());
                }
                Query::Domain(domain) => {
                    pairs.append_pair(PARAM_DOMAIN, domain);
                }
            }
        }
        url
    }

    /// Fetches the location for `query`.
    ///
    /// # Errors
    ///
    /// - `FetchError::Transport` if no response was received
    /// - `FetchError::Status` if the API answered with a non-success status
    /// - `FetchError::MalformedResponse` if the body is not a location record
    pub async fn fetch_location(&self, query: &Query) -> Result<LocationRecord, FetchError> {
        debug!("Fetching location for {}", query);

        let response = self
            .http
            .get(self.request_url(query))
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Geolocation API returned {} for {}", status, query);
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::transport)?;
        let record: LocationRecord = serde_json::from_slice(&body).map_err(|e| {
            warn!("Unexpected geolocation response for {}: {}", query, e);
            FetchError::MalformedResponse(e)
        })?;

        info!(
            "Located {} ({}) at {}, {}",
            query, record.ip, record.location.lat, record.location.lng
        );
        Ok(record)
    }
}
