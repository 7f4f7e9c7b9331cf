//! # Domain Models
//!
//! Strongly-typed domain models for the quoteboard pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Normalized uppercase ticker |
//! | [`Row`] | Per-symbol display record for one refresh cycle |
//! | [`RowStatus`] | Closed per-row status taxonomy |
//! | [`UtcDateTime`] | RFC3339 UTC timestamp |
//!
//! Invalid states are unrepresentable: a [`Row`] carries numeric fields only
//! when its status is `ok`, enforced at construction.

mod row;
mod symbol;
mod timestamp;

pub use row::{Row, RowStatus};
pub use symbol::{parse_watchlist, Symbol};
pub use timestamp::UtcDateTime;
