//! Writing query results and errors.
//!
//! Results go to stdout undecorated so they can be piped into other tools.
//! Errors go to stderr and are colored when it is a terminal.

use std::error::Error as StdError;
use std::io::Write;

use colored::Colorize;

use crate::config::OutputFormat;
use crate::error::Result;

/// Writes recipe names in `format`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_names<W: Write + ?Sized>(
    out: &mut W,
    names: &[&str],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, names)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes `error: <message>` followed by its source chain.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_error<W: Write + ?Sized>(out: &mut W, err: &dyn StdError) -> std::io::Result<()> {
    writeln!(out, "{}: {err}", "error".red().bold())?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  {}: {cause}", "caused by".dimmed())?;
        source = cause.source();
    }
    Ok(())
}
