//! Sequential quote fetch cycle.
//!
//! One HTTP GET per symbol, awaited in input order, so the row order matches
//! the watchlist order and the upstream never sees two in-flight requests
//! from the same cycle. Per-symbol transport failures become `error` rows
//! and never abort the batch.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::classify::classify;
use crate::domain::{Row, RowStatus, Symbol, UtcDateTime};
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest};

const QUOTE_ENDPOINT: &str = "https://www.alphavantage.co/query";
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Immutable result of one completed refresh cycle.
///
/// Produced as a whole and committed to the view model in one step, so an
/// overlapping cycle can only win or lose outright, never interleave.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub rows: Vec<Row>,
    pub completed_at: UtcDateTime,
}

/// Runs one refresh cycle against the quote endpoint.
#[derive(Clone)]
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    timeout_ms: u64,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn endpoint(&self, symbol: &Symbol) -> String {
        format!(
            "{QUOTE_ENDPOINT}?function=GLOBAL_QUOTE&symbol={}&apikey={}",
            urlencoding::encode(symbol.as_str()),
            self.api_key
        )
    }

    /// Fetch and classify every symbol, sequentially, in input order.
    ///
    /// The watchlist must be non-empty; the symbol normalizer's empty-input
    /// guard belongs to the caller. Normal completion always yields a
    /// [`CycleOutcome`] with one row per input symbol, even when every row is
    /// degraded.
    pub async fn run_cycle(&self, symbols: &[Symbol]) -> Result<CycleOutcome, FetchError> {
        if symbols.is_empty() {
            return Err(FetchError::EmptyWatchlist);
        }

        let mut rows = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            debug!("fetching quote for {symbol}");
            let request =
                HttpRequest::get(self.endpoint(symbol)).with_timeout_ms(self.timeout_ms);

            // Each request completes before the next is issued.
            let transport = self.http_client.execute(request).await;
            if let Err(error) = &transport {
                warn!("transport failure for {symbol}: {error}");
            }

            let classification = classify(transport.as_ref());
            if classification.status() != RowStatus::Ok {
                warn!("{symbol} classified {}", classification.status().as_str());
            }

            rows.push(Row::new(symbol.clone(), classification));
        }

        info!("refresh cycle complete: {} rows", rows.len());
        Ok(CycleOutcome {
            rows,
            completed_at: UtcDateTime::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    /// Fails requests whose URL names a poisoned symbol; answers the rest
    /// with a fixed quote payload. Records request URLs in arrival order.
    struct ScriptedHttpClient {
        poisoned: &'static str,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedHttpClient {
        fn poisoning(poisoned: &'static str) -> Self {
            Self {
                poisoned,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for ScriptedHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request.url.clone());

            let poisoned = request.url.contains(&format!("symbol={}", self.poisoned));
            Box::pin(async move {
                if poisoned {
                    Err(HttpError::new("connection reset"))
                } else {
                    Ok(HttpResponse::ok_json(
                        r#"{"Global Quote": {"05. price": "10.00", "10. change percent": "1.00%"}}"#,
                    ))
                }
            })
        }
    }

    fn watchlist(raw: &[&str]) -> Vec<Symbol> {
        raw.iter()
            .map(|s| Symbol::parse(s).expect("valid symbol"))
            .collect()
    }

    #[tokio::test]
    async fn noop_transport_yields_rate_limited_rows() {
        use crate::http_client::NoopHttpClient;

        let fetcher = QuoteFetcher::new(Arc::new(NoopHttpClient), "demo");
        let outcome = fetcher
            .run_cycle(&watchlist(&["AAPL"]))
            .await
            .expect("cycle should complete");

        // The no-op client answers "{}", the silent-throttle shape.
        assert_eq!(outcome.rows[0].status, RowStatus::RateLimited);
    }

    #[tokio::test]
    async fn empty_watchlist_is_rejected() {
        let fetcher = QuoteFetcher::new(Arc::new(ScriptedHttpClient::poisoning("NONE")), "demo");
        let error = fetcher.run_cycle(&[]).await.expect_err("must fail");
        assert_eq!(error, FetchError::EmptyWatchlist);
    }

    #[tokio::test]
    async fn one_failing_symbol_does_not_abort_the_batch() {
        let client = Arc::new(ScriptedHttpClient::poisoning("B"));
        let fetcher = QuoteFetcher::new(client.clone(), "demo");

        let outcome = fetcher
            .run_cycle(&watchlist(&["A", "B", "C"]))
            .await
            .expect("cycle should complete");

        let statuses: Vec<_> = outcome.rows.iter().map(|row| row.status).collect();
        assert_eq!(
            statuses,
            vec![RowStatus::Ok, RowStatus::Error, RowStatus::Ok]
        );
        let symbols: Vec<_> = outcome.rows.iter().map(|row| row.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn requests_are_issued_in_watchlist_order() {
        let client = Arc::new(ScriptedHttpClient::poisoning("NONE"));
        let fetcher = QuoteFetcher::new(client.clone(), "demo");

        fetcher
            .run_cycle(&watchlist(&["MSFT", "AAPL", "MSFT"]))
            .await
            .expect("cycle should complete");

        let urls = client.recorded_urls();
        assert_eq!(urls.len(), 3);
        assert!(urls[0].contains("symbol=MSFT"));
        assert!(urls[1].contains("symbol=AAPL"));
        assert!(urls[2].contains("symbol=MSFT"));
    }

    #[tokio::test]
    async fn endpoint_carries_api_key_and_function() {
        let client = Arc::new(ScriptedHttpClient::poisoning("NONE"));
        let fetcher = QuoteFetcher::new(client.clone(), "alpha-key");

        fetcher
            .run_cycle(&watchlist(&["AAPL"]))
            .await
            .expect("cycle should complete");

        let urls = client.recorded_urls();
        assert!(urls[0].contains("function=GLOBAL_QUOTE"));
        assert!(urls[0].contains("apikey=alpha-key"));
    }
}
