//! Offset/limit pagination as used by the search and filter endpoints.

/// Pagination parameters (`skip`/`limit` query arguments).
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// rows to skip before the first returned item
    pub skip: u64,
    /// maximum rows to return
    pub limit: u64,
}

impl Pagination {
    /// Build from optional query parameters, applying the endpoint defaults.
    pub fn from_query(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0), limit: limit.unwrap_or(10) }
    }

    /// Clamp the page size to a sane upper bound.
    pub fn normalize(self) -> (u64, u64) {
        (self.skip, self.limit.clamp(1, 100))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: 10 } }
}
