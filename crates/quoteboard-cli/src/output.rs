//! Table and JSON renderers for a board snapshot.

use std::io::{self, Write};

use quoteboard_core::{BoardSnapshot, Row};

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    snapshot: &BoardSnapshot,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(snapshot)?
            } else {
                serde_json::to_string(snapshot)?
            };
            println!("{payload}");
            Ok(())
        }
        OutputFormat::Table => render_table(snapshot),
    }
}

fn render_table(snapshot: &BoardSnapshot) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(error) = &snapshot.error {
        writeln!(out, "error: {error}")?;
    }

    let symbol_width = snapshot
        .rows
        .iter()
        .map(|row| row.symbol.as_str().len())
        .chain(std::iter::once("SYMBOL".len()))
        .max()
        .unwrap_or(6);

    writeln!(
        out,
        "{:<symbol_width$}  {:>10}  {:>9}  {}",
        "SYMBOL", "PRICE", "CHANGE%", "STATUS"
    )?;

    for row in &snapshot.rows {
        writeln!(
            out,
            "{:<symbol_width$}  {:>10}  {:>9}  {}",
            row.symbol.as_str(),
            format_price(row),
            format_change(row),
            row.status.as_str()
        )?;
    }

    match &snapshot.last_updated {
        Some(ts) => writeln!(out, "last updated: {ts}")?,
        None => writeln!(out, "last updated: never")?,
    }

    Ok(())
}

fn format_price(row: &Row) -> String {
    match row.price {
        Some(price) => format!("{price:.2}"),
        None => String::from("-"),
    }
}

fn format_change(row: &Row) -> String {
    match row.change_percent {
        Some(change) => format!("{change:+.2}"),
        None => String::from("-"),
    }
}
