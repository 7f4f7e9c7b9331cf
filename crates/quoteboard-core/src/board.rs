//! Board view model.
//!
//! Holds everything a renderer needs: the rows of the latest completed
//! cycle, the loading/error lifecycle, the last-updated timestamp, and the
//! sort state. Cycle results arrive as one immutable [`CycleOutcome`] and
//! are committed in a single step, so overlapping cycles are last-write-wins
//! and partial updates cannot exist.

use log::debug;
use serde::Serialize;

use crate::domain::{parse_watchlist, Row, UtcDateTime};
use crate::error::FetchError;
use crate::fetch::{CycleOutcome, QuoteFetcher};
use crate::sort::{sort_rows, SortDir, SortKey, SortState};

/// View model for the quote table.
#[derive(Debug, Default)]
pub struct Board {
    rows: Vec<Row>,
    loading: bool,
    error: Option<String>,
    last_updated: Option<UtcDateTime>,
    sort: SortState,
}

/// Everything the view boundary consumes, in one value. Rows are already
/// ordered by the active sort state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub rows: Vec<Row>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<UtcDateTime>,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one refresh cycle from free-text watchlist input.
    ///
    /// An input that normalizes to an empty watchlist is a guard, not an
    /// error: no network calls are made and no state changes. Otherwise the
    /// loading flag is raised, any previous banner is cleared, and the
    /// cycle's result is committed on completion.
    pub async fn refresh(&mut self, fetcher: &QuoteFetcher, input: &str) {
        let symbols = parse_watchlist(input);
        if symbols.is_empty() {
            debug!("watchlist input normalized to nothing; skipping cycle");
            return;
        }

        self.loading = true;
        self.error = None;

        let result = fetcher.run_cycle(&symbols).await;
        self.commit(result);
    }

    /// Commit one cycle's result atomically.
    ///
    /// Success overwrites the whole row set and the timestamp; failure sets
    /// the top-level banner and leaves rows and timestamp at their previous
    /// values. The loading flag clears on both paths.
    pub fn commit(&mut self, result: Result<CycleOutcome, FetchError>) {
        match result {
            Ok(outcome) => {
                self.rows = outcome.rows;
                self.last_updated = Some(outcome.completed_at);
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
        self.loading = false;
    }

    /// Change the active sort column; re-selecting it flips direction.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn set_sort(&mut self, key: SortKey, dir: SortDir) {
        self.sort = SortState { key, dir };
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub const fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn last_updated(&self) -> Option<UtcDateTime> {
        self.last_updated
    }

    pub const fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Ordered view of the current rows; the stored rows keep fetch order.
    pub fn sorted_rows(&self) -> Vec<Row> {
        sort_rows(&self.rows, self.sort.key, self.sort.dir)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.sorted_rows(),
            loading: self.loading,
            error: self.error.clone(),
            last_updated: self.last_updated,
            sort_key: self.sort.key,
            sort_dir: self.sort.dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;
    use crate::domain::Symbol;

    fn outcome(symbols: &[&str]) -> CycleOutcome {
        CycleOutcome {
            rows: symbols
                .iter()
                .map(|s| {
                    Row::new(
                        Symbol::parse(s).expect("valid symbol"),
                        Classification::ok(1.0, 0.0),
                    )
                })
                .collect(),
            completed_at: UtcDateTime::now(),
        }
    }

    #[test]
    fn successful_commit_replaces_rows_and_sets_timestamp() {
        let mut board = Board::new();
        board.commit(Ok(outcome(&["AAPL", "MSFT"])));

        assert_eq!(board.rows().len(), 2);
        assert!(board.last_updated().is_some());
        assert!(!board.loading());
        assert_eq!(board.error(), None);
    }

    #[test]
    fn failed_commit_keeps_previous_rows_and_sets_banner() {
        let mut board = Board::new();
        board.commit(Ok(outcome(&["AAPL"])));
        let first_update = board.last_updated();

        board.commit(Err(FetchError::EmptyWatchlist));

        assert_eq!(board.rows().len(), 1, "previous rows must be retained");
        assert_eq!(board.last_updated(), first_update);
        assert!(board.error().is_some());
        assert!(!board.loading());
    }

    #[test]
    fn new_cycle_discards_previous_rows_wholesale() {
        let mut board = Board::new();
        board.commit(Ok(outcome(&["AAPL", "MSFT", "GOOGL"])));
        board.commit(Ok(outcome(&["TSLA"])));

        let symbols: Vec<_> = board.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TSLA"]);
    }

    #[test]
    fn sort_state_survives_commits() {
        let mut board = Board::new();
        board.toggle_sort(SortKey::Price);
        board.commit(Ok(outcome(&["AAPL"])));

        assert_eq!(
            board.sort_state(),
            SortState {
                key: SortKey::Price,
                dir: SortDir::Asc
            }
        );
    }

    #[test]
    fn snapshot_rows_follow_active_sort() {
        let mut board = Board::new();
        board.commit(Ok(outcome(&["MSFT", "AAPL"])));

        let snapshot = board.snapshot();
        let sorted: Vec<_> = snapshot.rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(sorted, vec!["AAPL", "MSFT"]);

        // Stored rows keep fetch order.
        let stored: Vec<_> = board.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(stored, vec!["MSFT", "AAPL"]);
    }
}
