//! Utility functions.
//!
//! This module provides string sanitization for terminal and HTML output.

pub mod sanitize;

pub use sanitize::{escape_html, sanitize_error_message};
