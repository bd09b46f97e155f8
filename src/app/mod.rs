//! Application surfaces driving the lookup pipeline.
//!
//! This module provides:
//! - `run_lookup` - a single lookup rendered as text, JSON or HTML
//! - `run_shell` - the interactive prompt
//! - `server` - the browser UI

mod lookup;
pub mod server;
mod shell;

pub use lookup::{run_lookup, write_output};
pub use shell::run_shell;
