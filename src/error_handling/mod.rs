//! Error handling.
//!
//! This module provides the error types used throughout the application:
//! - **Initialization errors**: logger, HTTP client and endpoint setup
//! - **Fetch errors**: transport failures, non-success statuses and bodies
//!   that are not location records
//! - **Locate errors**: everything that turns a submission into the error view
//!
//! Every pipeline error renders as a user-facing message; none of them is
//! fatal to the running application.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, LocateError};

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(
            LocateError::InvalidInput.user_message(),
            "Please enter a valid IP address or domain name"
        );
    }

    #[test]
    fn test_status_error_message_hides_code() {
        let err = FetchError::Status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Problem fetching data");
    }

    #[test]
    fn test_fetch_error_passes_through_locate_error() {
        let err = LocateError::from(FetchError::Status(StatusCode::FORBIDDEN));
        assert_eq!(err.user_message(), "Problem fetching data");
    }

    #[test]
    fn test_malformed_response_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FetchError::MalformedResponse(json_err);
        assert_eq!(err.to_string(), "Problem reading location data");
    }
}
