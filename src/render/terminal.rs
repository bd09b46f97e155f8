//! Terminal rendering of a [`Page`].

use colored::*;

use crate::render::page::{MapView, Page};
use crate::utils::sanitize_error_message;

const LABEL_WIDTH: usize = 12;

/// Renders `page` as colored text for the interactive prompt and one-shot
/// lookups.
///
/// Control characters in messages and API values are dropped so they cannot
/// drive the terminal.
pub fn render_text(page: &Page) -> String {
    let mut out = String::new();

    match &page.map_view {
        MapView::Empty => {
            out.push_str(&format!("{}\n", "Locating...".dimmed()));
        }
        MapView::Error(message) => {
            out.push_str(&format!(
                "{} {}\n",
                "✖".red().bold(),
                sanitize_error_message(message).red()
            ));
        }
        MapView::Map(widget) => {
            if !page.details.hidden {
                for item in &page.details.items {
                    out.push_str(&format!(
                        "{} {}\n",
                        format!("{:<width$}", item.label, width = LABEL_WIDTH).bold(),
                        sanitize_error_message(&item.value)
                    ));
                }
            }
            out.push_str(&format!(
                "{} {}, {} (zoom {})\n",
                format!("{:<width$}", "Map", width = LABEL_WIDTH).bold(),
                widget.center.lat,
                widget.center.lng,
                widget.zoom
            ));
            out.push_str(&format!(
                "{} {}\n",
                " ".repeat(LABEL_WIDTH),
                widget.osm_link().underline().cyan()
            ));
        }
    }

    out
}
