//! Offset-paginator contract types

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One window of results from an offset-addressable data source
///
/// Carries no cursors; the adapter derives them from the offsets it asked
/// for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet<N> {
    /// Do items exist past the end of this window?
    pub has_next_page: bool,
    /// Do items exist before the start of this window?
    pub has_previous_page: bool,
    /// Items in source order
    pub nodes: Vec<N>,
}

impl<N> ResultSet<N> {
    /// Create a result set
    pub fn new(nodes: Vec<N>, has_next_page: bool, has_previous_page: bool) -> Self {
        Self {
            has_next_page,
            has_previous_page,
            nodes,
        }
    }
}

/// Capability serving offset/limit windows over an ordered result set
///
/// The simpler contract a data source can implement instead of the full
/// cursor-based [`crate::Paginator`]; [`super::OffsetAdapter`] bridges the
/// two. `limit` of `None` means "everything from `offset` on".
#[async_trait]
pub trait OffsetSource<N>: Send + Sync {
    /// Fetch up to `limit` items starting at `offset`
    async fn fetch(&self, offset: i64, limit: Option<i64>) -> Result<ResultSet<N>>;
}
