//! Response classification for one symbol's quote query.
//!
//! The provider's response shapes overlap (a throttled reply can look like a
//! missing quote, an unknown symbol like an empty payload), so the decision
//! order matters. It is modeled as an explicit rule table evaluated
//! top-to-bottom rather than nested conditionals; [`rule_names`] exposes the
//! order as a testable contract.
//!
//! Classification is total: every transport result, including malformed
//! bodies, maps to exactly one outcome. Nothing here returns an error.

use serde_json::Value;

use crate::domain::RowStatus;
use crate::http_client::{HttpError, HttpResponse};

const FIELD_NOTE: &str = "Note";
const FIELD_INFORMATION: &str = "Information";
const FIELD_ERROR_MESSAGE: &str = "Error Message";
const FIELD_QUOTE: &str = "Global Quote";
const FIELD_PRICE: &str = "05. price";
const FIELD_CHANGE_PERCENT: &str = "10. change percent";

/// Outcome of classifying one response: a status plus numeric fields that
/// exist exactly when the status is `ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    status: RowStatus,
    price: Option<f64>,
    change_percent: Option<f64>,
}

impl Classification {
    pub fn ok(price: f64, change_percent: f64) -> Self {
        Self {
            status: RowStatus::Ok,
            price: Some(price),
            change_percent: Some(change_percent),
        }
    }

    pub fn rate_limited() -> Self {
        Self::degraded(RowStatus::RateLimited)
    }

    pub fn error() -> Self {
        Self::degraded(RowStatus::Error)
    }

    pub fn no_data() -> Self {
        Self::degraded(RowStatus::NoData)
    }

    fn degraded(status: RowStatus) -> Self {
        Self {
            status,
            price: None,
            change_percent: None,
        }
    }

    pub const fn status(&self) -> RowStatus {
        self.status
    }

    pub const fn price(&self) -> Option<f64> {
        self.price
    }

    pub const fn change_percent(&self) -> Option<f64> {
        self.change_percent
    }

    pub(crate) fn into_parts(self) -> (RowStatus, Option<f64>, Option<f64>) {
        (self.status, self.price, self.change_percent)
    }
}

struct Rule {
    name: &'static str,
    apply: fn(&Value) -> Option<Classification>,
}

/// Decision order for parsed bodies. First match wins.
const RULES: &[Rule] = &[
    Rule {
        name: "throttle-notice",
        apply: throttle_notice,
    },
    Rule {
        name: "provider-error",
        apply: provider_error,
    },
    Rule {
        name: "empty-body",
        apply: empty_body,
    },
    Rule {
        name: "missing-quote",
        apply: missing_quote,
    },
    Rule {
        name: "quote",
        apply: quote,
    },
];

/// Names of the body rules in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// Classify one symbol's transport result into exactly one outcome.
///
/// Transport failures, non-2xx statuses, and unparseable bodies are `error`;
/// parsed bodies fall through the rule table.
pub fn classify(transport: Result<&HttpResponse, &HttpError>) -> Classification {
    let response = match transport {
        Ok(response) => response,
        Err(_) => return Classification::error(),
    };

    if !response.is_success() {
        return Classification::error();
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => classify_body(&body),
        Err(_) => Classification::error(),
    }
}

/// Classify a parsed JSON body through the ordered rule table.
pub fn classify_body(body: &Value) -> Classification {
    for rule in RULES {
        if let Some(classification) = (rule.apply)(body) {
            return classification;
        }
    }

    // `missing-quote` and `quote` partition every body the earlier rules
    // decline, so the loop always returns.
    Classification::no_data()
}

/// Provider-level throttling field, sent as a prose "Note" or "Information".
fn throttle_notice(body: &Value) -> Option<Classification> {
    let throttled = body.get(FIELD_NOTE).is_some_and(Value::is_string)
        || body.get(FIELD_INFORMATION).is_some_and(Value::is_string);
    throttled.then(Classification::rate_limited)
}

/// Explicit provider error field.
fn provider_error(body: &Value) -> Option<Classification> {
    body.get(FIELD_ERROR_MESSAGE)
        .map(|_| Classification::error())
}

/// Entirely empty object body. The provider silently empties the payload
/// under quota exhaustion instead of erroring, so this is treated as a
/// rate-limit signal by policy rather than a genuine no-data condition.
fn empty_body(body: &Value) -> Option<Classification> {
    let empty = body.as_object().is_some_and(|object| object.is_empty());
    empty.then(Classification::rate_limited)
}

/// Quote payload absent, or present without a usable price field. Covers
/// syntactically valid but unknown symbols.
fn missing_quote(body: &Value) -> Option<Classification> {
    extract_price(body)
        .is_none()
        .then(Classification::no_data)
}

fn quote(body: &Value) -> Option<Classification> {
    extract_price(body)
        .map(|price| Classification::ok(price, extract_change_percent(body)))
}

/// Price from the quote payload; the provider sends it as a decimal string.
fn extract_price(body: &Value) -> Option<f64> {
    let field = body.get(FIELD_QUOTE)?.get(FIELD_PRICE)?;
    parse_decimal(field).filter(|price| price.is_finite())
}

/// Change percent with its trailing `%` stripped; `0.0` when absent or
/// unparseable.
fn extract_change_percent(body: &Value) -> f64 {
    body.get(FIELD_QUOTE)
        .and_then(|payload| payload.get(FIELD_CHANGE_PERCENT))
        .and_then(parse_decimal)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn parse_decimal(field: &Value) -> Option<f64> {
    if let Some(number) = field.as_f64() {
        return Some(number);
    }
    field
        .as_str()
        .and_then(|raw| raw.trim().trim_end_matches('%').trim().parse::<f64>().ok())
}
