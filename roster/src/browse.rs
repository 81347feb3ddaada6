//! Line-oriented interactive session for `roster browse`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::controller::ViewController;
use crate::core::state_update::ViewAction;
use crate::io::render::TableRenderer;

const HELP: &str = "commands: gender <All|male|female>, country <All|NAME>, \
sort <id|firstName|age|address.state>, page <N>, next, prev, reset, help, quit";

/// Summary of a browse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSummary {
    pub actions_applied: u32,
    pub rejected: u32,
}

/// Render the current view, then apply one action per input line and
/// re-render after each, until `quit` or end of input.
///
/// Unparseable lines are reported on `out` and skipped; the session continues.
pub fn run_browse<R: BufRead, W: Write>(
    controller: &mut ViewController,
    renderer: &TableRenderer,
    input: R,
    out: &mut W,
) -> Result<BrowseSummary> {
    let mut summary = BrowseSummary {
        actions_applied: 0,
        rejected: 0,
    };
    write_view(controller, renderer, out)?;

    for line in input.lines() {
        let line = line.context("read command")?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{}", HELP).context("write help")?;
                continue;
            }
            _ => {}
        }
        match command.parse::<ViewAction>() {
            Ok(action) => {
                controller.apply(action);
                summary.actions_applied += 1;
                write_view(controller, renderer, out)?;
            }
            Err(err) => {
                debug!(command, error = %err, "rejected command");
                summary.rejected += 1;
                writeln!(out, "error: {}", err).context("write error")?;
            }
        }
    }

    info!(
        actions = summary.actions_applied,
        rejected = summary.rejected,
        "browse session finished"
    );
    Ok(summary)
}

fn write_view<W: Write>(
    controller: &ViewController,
    renderer: &TableRenderer,
    out: &mut W,
) -> Result<()> {
    let rendered = renderer.render(controller.view(), controller.state())?;
    writeln!(out, "{}\n", rendered).context("write view")?;
    out.flush().context("flush output")
}
