//! Sort state and pure row ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::Row;

/// Column the board is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Symbol,
    Price,
    ChangePercent,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    const fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// Active sort column and direction. Independent of any refresh cycle and
/// untouched by row commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Symbol,
            dir: SortDir::Asc,
        }
    }
}

impl SortState {
    /// Toggling the active key flips direction; selecting a new key resets
    /// direction to ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.dir = self.dir.flipped();
        } else {
            self.key = key;
            self.dir = SortDir::Asc;
        }
    }
}

/// Produce an ordered view of `rows` without mutating the source.
///
/// Stable sort: equal keys retain their relative input order. Rows whose
/// numeric sort field is absent (any non-`ok` status) sort after all rows
/// with values, in both directions; the direction only reverses comparisons
/// between present values.
pub fn sort_rows(rows: &[Row], key: SortKey, dir: SortDir) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, key, dir));
    sorted
}

fn compare_rows(a: &Row, b: &Row, key: SortKey, dir: SortDir) -> Ordering {
    match key {
        SortKey::Symbol => dir.apply(a.symbol.as_str().cmp(b.symbol.as_str())),
        SortKey::Price => compare_numeric(a.price, b.price, dir),
        SortKey::ChangePercent => compare_numeric(a.change_percent, b.change_percent, dir),
    }
}

fn compare_numeric(a: Option<f64>, b: Option<f64>, dir: SortDir) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => dir.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
