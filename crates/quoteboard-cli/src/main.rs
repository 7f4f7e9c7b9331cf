mod cli;
mod error;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use quoteboard_core::{
    parse_watchlist, Board, HttpClient, MockQuoteApi, QuoteFetcher, ReqwestHttpClient,
};

use crate::cli::Cli;
use crate::error::CliError;

const API_KEY_ENV: &str = "QUOTEBOARD_ALPHAVANTAGE_API_KEY";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    if parse_watchlist(&cli.symbols).is_empty() {
        return Err(CliError::Command(format!(
            "no symbols found in '{}'",
            cli.symbols
        )));
    }

    let http_client: Arc<dyn HttpClient> = if cli.mock {
        Arc::new(MockQuoteApi)
    } else {
        Arc::new(ReqwestHttpClient::new())
    };

    let api_key = cli.api_key.clone().unwrap_or_else(|| {
        std::env::var(API_KEY_ENV).unwrap_or_else(|_| String::from("demo"))
    });

    let fetcher = QuoteFetcher::new(http_client, api_key).with_timeout_ms(cli.timeout_ms);

    let mut board = Board::new();
    board.set_sort(cli.sort.into(), cli.sort_dir());
    board.refresh(&fetcher, &cli.symbols).await;

    let snapshot = board.snapshot();
    output::render(&snapshot, cli.format, cli.pretty)?;

    // A top-level cycle error leaves the banner set and no committed rows.
    if snapshot.error.is_some() {
        return Ok(ExitCode::from(3));
    }

    Ok(ExitCode::SUCCESS)
}
