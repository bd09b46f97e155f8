//! Configuration constants.
//!
//! This module defines the fixed endpoints, map settings and user-facing
//! messages used throughout the application.

/// Geolocation API endpoint (ipify).
pub const DEFAULT_API_URL: &str = "https://geo.ipify.org/api/v1";

/// Environment variable holding the ipify API key.
pub const API_KEY_ENV: &str = "IPIFY_API_KEY";
/// Environment variable overriding the API endpoint.
pub const API_URL_ENV: &str = "IPIFY_API_URL";

// Query parameter names understood by the geolocation API
pub const PARAM_API_KEY: &str = "apiKey";
pub const PARAM_IP_ADDRESS: &str = "ipAddress";
pub const PARAM_DOMAIN: &str = "domain";

/// Default User-Agent string for requests to the geolocation API.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_locator/", env!("CARGO_PKG_VERSION"));

/// Request timeout in seconds. 0 means requests never time out.
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;

// Local web UI
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

// Map settings
/// Zoom level every map is created with.
pub const MAP_ZOOM: u8 = 15;
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const MARKER_ICON_PATH: &str = "/images/icon-location.svg";
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Marker icon served at [`MARKER_ICON_PATH`].
pub const MARKER_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="46" height="56"><path fill-rule="evenodd" d="M39.263 7.673c8.897 8.812 8.966 23.168.153 32.065l-.153.153L23 56 6.737 39.89C-2.16 31.079-2.23 16.723 6.584 7.826l.153-.152c9.007-8.922 23.52-8.922 32.526 0zM23 14.435c-5.211 0-9.436 4.185-9.436 9.347S17.79 33.128 23 33.128s9.436-4.184 9.436-9.346S28.21 14.435 23 14.435z"/></svg>"##;

// User-facing messages
/// Shown when the submitted text is neither an IPv4 address nor a domain.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid IP address or domain name";
/// Shown when the API answers with a non-success status.
pub const FETCH_FAILED_MESSAGE: &str = "Problem fetching data";
/// Shown when the API answers 2xx with a body that is not a location record.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Problem reading location data";

// Detail panel labels
pub const LABEL_IP_ADDRESS: &str = "IP Address";
pub const LABEL_LOCATION: &str = "Location";
pub const LABEL_TIMEZONE: &str = "Timezone";
pub const LABEL_ISP: &str = "ISP";
