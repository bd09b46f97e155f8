//! Presentation layer.
//!
//! This module provides:
//! - The page model (details panel + map view) and the render operations
//!   that update it
//! - HTML rendering for the browser UI and standalone map pages
//! - Colored text rendering for the terminal

pub mod html;
mod page;
pub mod terminal;

pub use html::{render_document, HtmlOptions};
pub use page::{
    render_details, render_error, render_map, DetailItem, DetailsPanel, MapView, MapWidget,
    Marker, Page, TileLayer, ViewState,
};
pub use terminal::render_text;
