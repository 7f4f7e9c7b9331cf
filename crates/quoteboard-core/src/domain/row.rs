use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::Symbol;

/// Closed per-row status taxonomy. Exactly one value per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStatus {
    Ok,
    RateLimited,
    Error,
    NoData,
}

impl RowStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::RateLimited => "rate-limited",
            Self::Error => "error",
            Self::NoData => "no-data",
        }
    }
}

/// Per-symbol display record produced by one refresh cycle.
///
/// `price` and `change_percent` are both present exactly when
/// `status == RowStatus::Ok`; construction from a [`Classification`] is the
/// only way to build a row, so the invariant cannot be violated. Rows are
/// recreated wholesale each cycle, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub symbol: Symbol,
    pub price: Option<f64>,
    pub change_percent: Option<f64>,
    pub status: RowStatus,
}

impl Row {
    pub fn new(symbol: Symbol, classification: Classification) -> Self {
        let (status, price, change_percent) = classification.into_parts();
        Self {
            symbol,
            price,
            change_percent,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_rows_carry_both_numeric_fields() {
        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        let row = Row::new(symbol, Classification::ok(123.45, 1.23));

        assert_eq!(row.status, RowStatus::Ok);
        assert_eq!(row.price, Some(123.45));
        assert_eq!(row.change_percent, Some(1.23));
    }

    #[test]
    fn degraded_rows_carry_no_numeric_fields() {
        let symbol = Symbol::parse("MSFT").expect("valid symbol");
        for classification in [
            Classification::rate_limited(),
            Classification::error(),
            Classification::no_data(),
        ] {
            let row = Row::new(symbol.clone(), classification);
            assert_ne!(row.status, RowStatus::Ok);
            assert_eq!(row.price, None);
            assert_eq!(row.change_percent, None);
        }
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&RowStatus::RateLimited).expect("serializable");
        assert_eq!(json, "\"rate-limited\"");
        assert_eq!(
            serde_json::to_string(&RowStatus::NoData).expect("serializable"),
            "\"no-data\""
        );
    }
}
