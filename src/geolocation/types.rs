//! Geolocation data structures.
//!
//! This module defines the shape of the geolocation API response and the
//! queries that can be sent to it.

use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// What to ask the geolocation API about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The caller's own public IP (no query parameter)
    SelfLookup,
    /// An IPv4 address
    Ip(Ipv4Addr),
    /// A domain name, resolved by the API
    Domain(String),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::SelfLookup => f.write_str("own IP"),
            Query::Ip(ip) => write!(f, "ip {ip}"),
            Query::Domain(domain) => write!(f, "domain {domain}"),
        }
    }
}

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location of an IP address as reported by the API.
///
/// `lat` and `lng` are required; a response without them fails to decode.
/// Every other field falls back to an empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    /// UTC offset, e.g. "-05:00"
    #[serde(default)]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u64>,
}

/// Autonomous system announcing the IP address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutonomousSystem {
    #[serde(default)]
    pub asn: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// One geolocation API answer.
///
/// Built fresh for every successful lookup and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Dotted-quad address the location belongs to
    #[serde(default)]
    pub ip: String,
    pub location: Location,
    #[serde(default)]
    pub isp: String,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub autonomous_system: Option<AutonomousSystem>,
}

impl LocationRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.location.lat,
            lng: self.location.lng,
        }
    }
}
