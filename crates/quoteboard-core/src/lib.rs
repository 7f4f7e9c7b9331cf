//! # Quoteboard Core
//!
//! Quote retrieval and classification pipeline for the quoteboard watchlist.
//!
//! ## Overview
//!
//! This crate provides the pieces between free-text symbol input and a
//! sortable row model:
//!
//! - **Symbol normalizer** that turns comma-separated input into a watchlist
//! - **Quote classifier** mapping provider response shapes to a closed status taxonomy
//! - **Quote fetcher** running one sequential refresh cycle against Alpha Vantage
//! - **Row sorter** producing ordered views without mutating the source
//! - **Board view model** holding the refresh-cycle and sort state
//!
//! Rendering is a collaborator concern; consumers take a [`BoardSnapshot`]
//! and draw it however they like.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`board`] | View model with atomic cycle commits |
//! | [`classify`] | Ordered response-classification rules |
//! | [`domain`] | Domain types (Symbol, Row, UtcDateTime) |
//! | [`error`] | Core error types |
//! | [`fetch`] | Sequential per-symbol fetch cycle |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`mock`] | Deterministic offline quote source |
//! | [`sort`] | Sort state and pure row sorting |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quoteboard_core::{Board, MockQuoteApi, QuoteFetcher};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = QuoteFetcher::new(Arc::new(MockQuoteApi::default()), "demo");
//!     let mut board = Board::new();
//!     board.refresh(&fetcher, "aapl, msft, googl").await;
//!
//!     for row in board.snapshot().rows {
//!         println!("{} {:?} {:?}", row.symbol, row.price, row.status);
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Per-row conditions (rate limiting, unknown symbols, transport failures for
//! a single symbol) never abort a cycle; they surface as [`RowStatus`] values
//! on the affected rows. Only a failure outside the per-symbol loop becomes a
//! top-level cycle error on the board.

pub mod board;
pub mod classify;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod mock;
pub mod sort;

// Re-export commonly used types at crate root for convenience

pub use board::{Board, BoardSnapshot};
pub use classify::{classify, Classification};
pub use domain::{parse_watchlist, Row, RowStatus, Symbol, UtcDateTime};
pub use error::{FetchError, ValidationError};
pub use fetch::{CycleOutcome, QuoteFetcher};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use mock::MockQuoteApi;
pub use sort::{sort_rows, SortDir, SortKey, SortState};
