// Shared test helpers for mocking the geolocation API.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use wiremock::MockServer;

use ip_locator::{Config, GeolocationClient, LogFormat, LogLevel};

pub const TEST_API_KEY: &str = "test-key";
pub const API_PATH: &str = "/api/v1";

/// Config pointing at the mock server.
pub fn test_config(server: &MockServer) -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        api_url: format!("{}{}", server.uri(), API_PATH),
        timeout_seconds: 5,
        user_agent: "ip_locator_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

/// Geolocation client talking to the mock server.
pub fn test_client(server: &MockServer) -> GeolocationClient {
    GeolocationClient::from_config(&test_config(server)).expect("Failed to build test client")
}

/// ipify-shaped response body.
#[allow(dead_code)] // Used by other test files
pub fn location_body(ip: &str, city: &str, lat: f64, lng: f64) -> Value {
    json!({
        "ip": ip,
        "location": {
            "country": "US",
            "region": "NY",
            "city": city,
            "lat": lat,
            "lng": lng,
            "postalCode": "10001",
            "timezone": "-05:00",
            "geonameId": 5128581
        },
        "as": {
            "asn": 64500,
            "name": "EXAMPLE-AS",
            "route": "203.0.113.0/24",
            "domain": "https://example.net",
            "type": "Cable/DSL/ISP"
        },
        "isp": "ExampleISP"
    })
}

/// The New York record used throughout the tests.
#[allow(dead_code)] // Used by other test files
pub fn new_york_body() -> Value {
    location_body("203.0.113.7", "New York", 40.7128, -74.006)
}
