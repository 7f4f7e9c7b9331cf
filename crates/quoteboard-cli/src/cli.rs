//! CLI argument definitions for quoteboard.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `SYMBOLS` | `AAPL, MSFT, GOOGL` | Free-text comma-separated watchlist |
//! | `--sort` | `symbol` | Sort column (symbol, price, change-percent) |
//! | `--desc` | `false` | Sort descending |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--api-key` | env/`demo` | Quote provider API key |
//! | `--timeout-ms` | `5000` | Per-request timeout in ms |
//! | `--mock` | `false` | Deterministic offline quotes |
//!
//! # Examples
//!
//! ```bash
//! # Refresh the default watchlist
//! quoteboard
//!
//! # Free-text input, sorted by daily change
//! quoteboard "aapl, msft ,, brk.b" --sort change-percent --desc
//!
//! # Machine-readable output, no network
//! quoteboard AAPL,MSFT --format json --pretty --mock
//! ```

use clap::{Parser, ValueEnum};

use quoteboard_core::{SortDir, SortKey};

/// Sortable quote board for a free-text watchlist.
///
/// Fetches one quote per symbol from Alpha Vantage, classifies each response
/// (ok, rate-limited, error, no-data), and renders the resulting board.
#[derive(Debug, Parser)]
#[command(
    name = "quoteboard",
    author,
    version,
    about = "Sortable stock quote board",
    long_about = "Quoteboard fetches near-real-time quotes for a comma-separated watchlist and \
renders them as a sortable table.\n\
\n\
Each run is one refresh cycle: symbols are fetched sequentially and every \
symbol gets exactly one row, even when the provider throttles or errors. \
Per-row conditions show up inline in the status column; re-running the \
command is the only retry mechanism."
)]
pub struct Cli {
    /// Comma-separated ticker symbols, free text.
    ///
    /// Tokens are trimmed and uppercased; empty tokens are dropped and
    /// duplicates kept.
    #[arg(default_value = "AAPL, MSFT, GOOGL")]
    pub symbols: String,

    /// Column to sort the board by.
    #[arg(long, value_enum, default_value_t = SortColumn::Symbol)]
    pub sort: SortColumn,

    /// Sort descending instead of ascending.
    ///
    /// Rows without a price (non-ok statuses) sort last either way.
    #[arg(long, default_value_t = false)]
    pub desc: bool,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Quote provider API key.
    ///
    /// Falls back to the QUOTEBOARD_ALPHAVANTAGE_API_KEY environment
    /// variable, then to the provider's public "demo" key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Serve deterministic offline quotes instead of calling the provider.
    #[arg(long, default_value_t = false)]
    pub mock: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table for terminal display.
    Table,
    /// Board snapshot as a JSON object.
    Json,
}

/// Sortable board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Symbol,
    Price,
    ChangePercent,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Symbol => Self::Symbol,
            SortColumn::Price => Self::Price,
            SortColumn::ChangePercent => Self::ChangePercent,
        }
    }
}

impl Cli {
    pub fn sort_dir(&self) -> SortDir {
        if self.desc {
            SortDir::Desc
        } else {
            SortDir::Asc
        }
    }
}
