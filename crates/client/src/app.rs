//! Line-oriented frontend loop.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::command::Command;
use crate::kitchen::{Kitchen, Response};
use crate::message::MessageLevel;

const PROMPT: &str = "> ";

/// Reads commands until `quit` or end of input.
///
/// After every command the new messages are printed, followed by the
/// visible panels that changed.
pub fn run<R, W>(kitchen: &mut Kitchen, input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", kitchen.render_visible())?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| kitchen.execute(command));
        match result {
            Ok(Response::Quit) => {
                tracing::info!("Session ended by player");
                writeln!(output, "Bye!")?;
                return Ok(());
            }
            Ok(Response::Text(text)) => writeln!(output, "{}", text.trim_end())?,
            Ok(Response::Done) => {}
            Err(e) => {
                tracing::debug!("Command '{}' failed: {}", line, e);
                writeln!(output, "! {e}")?;
            }
        }

        for message in kitchen.messages().borrow_mut().take_unread() {
            let prefix = match message.level {
                MessageLevel::Info => "*",
                MessageLevel::Warning => "!",
            };
            writeln!(output, "{prefix} {}", message.text)?;
        }

        let dirty = kitchen.take_dirty();
        if !dirty.is_empty() {
            writeln!(output, "{}", kitchen.render_panels(&dirty).trim_end())?;
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    tracing::info!("Input closed");
    Ok(())
}
