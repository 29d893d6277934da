// Start of file: /src/models/pagination.rs

use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 500;

/// `skip`/`limit` query parameters accepted by list endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip: Some(skip), limit: Some(limit) }
    }

    /// Rows to skip; negative values clamp to zero.
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    /// Rows to return, clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Applies the window to an already ordered in-memory sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset() as usize)
            .take(self.limit() as usize)
            .collect()
    }
}


// End of file: /src/models/pagination.rs
