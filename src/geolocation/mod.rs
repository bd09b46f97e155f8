//! Geolocation lookups.
//!
//! This module provides:
//! - `LocationRecord` - the API's answer for one address
//! - `Query` - self lookup, IPv4 address or domain
//! - `GeolocationClient` - builds the request URL and fetches a record

mod client;
mod types;

pub use client::GeolocationClient;
pub use types::{AutonomousSystem, Coordinates, Location, LocationRecord, Query};
