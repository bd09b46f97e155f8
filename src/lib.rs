//! ip_locator library: IP address and domain geolocation
//!
//! This library looks up where an IPv4 address or a domain name is located
//! using the ipify geolocation API and renders the answer as a map with a
//! details panel (IP, location, timezone, ISP).
//!
//! # Example
//!
//! ```no_run
//! use ip_locator::{Config, Controller, GeolocationClient, ViewState};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: "at_XXXXXXXX".to_string(),
//!     ..Default::default()
//! };
//! config.validate()?;
//!
//! let controller = Controller::new(GeolocationClient::from_config(&config)?);
//! controller.startup().await;
//! controller.submit("example.com").await;
//!
//! let page = controller.page().await;
//! if page.view_state() == ViewState::Idle {
//!     println!("{}", ip_locator::render::render_text(&page));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod app;
pub mod config;
pub mod controller;
pub mod error_handling;
pub mod geolocation;
pub mod initialization;
pub mod render;
mod utils;
pub mod validate;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use controller::{locate, Controller, SubmitOutcome};
pub use error_handling::{FetchError, LocateError};
pub use geolocation::{GeolocationClient, LocationRecord, Query};
pub use render::{Page, ViewState};
pub use validate::{classify, is_valid_domain, is_valid_ipv4};
