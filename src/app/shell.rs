//! Interactive prompt.
//!
//! The terminal version of the search box: every line entered is a
//! submission, and the page is printed again after each one.

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::Controller;
use crate::render::render_text;

const PROMPT: &str = "search> ";
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// Runs the prompt until EOF or an exit command.
///
/// Starts with a lookup of the caller's own IP.
pub async fn run_shell<R, W>(controller: &Controller, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        output,
        "Search for any IP address or domain (\"quit\" to leave)."
    )
    .context("Failed to write to terminal")?;

    controller.startup().await;
    print_page(controller, output).await?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}").context("Failed to write to terminal")?;
        output.flush().context("Failed to write to terminal")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(output).context("Failed to write to terminal")?;
            break;
        };
        if EXIT_COMMANDS.contains(&line.as_str()) {
            break;
        }

        let outcome = controller.submit(&line).await;
        debug!("Submission {:?} -> {:?}", line, outcome);
        print_page(controller, output).await?;
    }

    Ok(())
}

async fn print_page<W: Write>(controller: &Controller, output: &mut W) -> Result<()> {
    let page = controller.page().await;
    write!(output, "{}", render_text(&page)).context("Failed to write to terminal")
}
