use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Normalized market symbol/ticker.
///
/// Uppercase, trimmed, non-empty. No registry validation is performed; a
/// syntactically plausible but unknown ticker is a `no-data` concern at
/// classification time, not a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

/// Normalize free-text watchlist input into an ordered symbol list.
///
/// Splits on `,`, trims each piece, uppercases it, and drops empty pieces.
/// Input order is preserved and duplicates are retained; a user who types
/// the same ticker twice gets two rows. An empty result means the caller
/// must skip the refresh cycle entirely.
pub fn parse_watchlist(input: &str) -> Vec<Symbol> {
    input
        .split(',')
        .filter_map(|piece| Symbol::parse(piece).ok())
        .collect()
}
