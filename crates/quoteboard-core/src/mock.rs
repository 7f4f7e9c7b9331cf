//! Deterministic offline quote source for `--mock` mode and tests.

use std::future::Future;
use std::pin::Pin;

use serde_json::json;

use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Answers every quote request with a provider-shaped payload whose price
/// and change are derived from the requested symbol, so repeated runs are
/// reproducible without network access or an API key.
#[derive(Debug, Default)]
pub struct MockQuoteApi;

impl HttpClient for MockQuoteApi {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let symbol = symbol_param(&request.url).unwrap_or_default();
        let seed = symbol_seed(&symbol);
        let price = 91.0 + (seed % 520) as f64 / 10.0;
        let change = (seed % 1_000) as f64 / 100.0 - 5.0;

        let body = json!({
            "Global Quote": {
                "01. symbol": symbol,
                "05. price": format!("{price:.2}"),
                "10. change percent": format!("{change:.2}%"),
            }
        });

        Box::pin(async move { Ok(HttpResponse::ok_json(body.to_string())) })
    }
}

fn symbol_param(url: &str) -> Option<String> {
    url.split(['?', '&'])
        .find_map(|piece| piece.strip_prefix("symbol="))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_owned())
        })
}

fn symbol_seed(symbol: &str) -> u64 {
    symbol.bytes().fold(11_u64, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(byte as u64)
    })
}
