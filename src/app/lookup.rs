//! One-shot lookup.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::controller::locate;
use crate::geolocation::GeolocationClient;
use crate::render::{render_document, render_map, render_text, HtmlOptions, Page};

/// Looks up `query` (own IP when `None`) and renders the result in `format`.
///
/// # Errors
///
/// Fails with the user-facing `LocateError` when the input is invalid or the
/// lookup fails.
pub async fn run_lookup(
    client: &GeolocationClient,
    query: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let record = locate(client, query).await?;

    let output = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&record)
                .context("Failed to serialize location record")?;
            json.push('\n');
            json
        }
        OutputFormat::Text => {
            let mut page = Page::new();
            render_map(&mut page, &record);
            render_text(&page)
        }
        OutputFormat::Html => {
            let mut page = Page::new();
            render_map(&mut page, &record);
            render_document(
                &page,
                HtmlOptions {
                    search_text: query.unwrap_or_default(),
                    interactive: false,
                },
            )
        }
    };
    Ok(output)
}

/// Writes lookup output to `path`, or to stdout when `None`.
pub fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}
