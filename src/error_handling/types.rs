//! Error type definitions.
//!
//! This module defines the errors raised while setting up the application and
//! while running a lookup.

use log::SetLoggerError;
use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

use crate::config::{FETCH_FAILED_MESSAGE, INVALID_INPUT_MESSAGE, MALFORMED_RESPONSE_MESSAGE};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API endpoint cannot be parsed.
    #[error("Invalid geolocation API URL '{url}': {source}")]
    ApiUrlError {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// A failed request to the geolocation API.
///
/// The `Display` text of every variant is safe to show to the user: it never
/// contains the request URL (and therefore never the API key).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout...).
    #[error("{0}")]
    Transport(#[source] ReqwestError),

    /// The API answered with a non-success status.
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Status(StatusCode),

    /// The API answered 2xx but the body is not a location record.
    #[error("{}", MALFORMED_RESPONSE_MESSAGE)]
    MalformedResponse(#[source] serde_json::Error),
}

impl FetchError {
    /// Wraps a transport error, dropping the request URL from its message.
    pub fn transport(error: ReqwestError) -> Self {
        FetchError::Transport(error.without_url())
    }
}

/// Why a submission ended in the error view.
#[derive(Error, Debug)]
pub enum LocateError {
    /// The text is neither an IPv4 address nor a domain name.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// The lookup itself failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LocateError {
    /// Message rendered in place of the map.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
