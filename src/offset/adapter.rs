//! Offset-to-cursor adapter
//!
//! Lets an [`OffsetSource`] satisfy the [`Paginator`] contract by encoding
//! numeric offsets as opaque cursors.

use super::types::OffsetSource;
use crate::connection::{Connection, Cursor, Edge, PageInfo, PageRequest};
use crate::error::Result;
use crate::paginator::Paginator;
use async_trait::async_trait;
use tracing::trace;

/// Fallback page size applied to backward requests that carry no `last`
pub const DEFAULT_BACKWARD_LIMIT: i64 = 10;

/// Adapter turning an offset/limit data source into a cursor [`Paginator`]
///
/// Cursors produced here are offset cursors: base64 of the decimal offset of
/// each item. Page arithmetic guarantees that walking pages in either
/// direction neither duplicates nor skips records.
#[derive(Debug, Clone)]
pub struct OffsetAdapter<S> {
    source: S,
    default_backward_limit: i64,
}

impl<S> OffsetAdapter<S> {
    /// Wrap an offset source with the default backward page size
    pub fn new(source: S) -> Self {
        Self {
            source,
            default_backward_limit: DEFAULT_BACKWARD_LIMIT,
        }
    }

    /// Override the page size used for backward requests without a `last`
    ///
    /// This bounds the scan of a backward call that would otherwise have no
    /// window at all. Per-adapter, so concurrent users cannot interfere with
    /// each other.
    #[must_use]
    pub fn with_default_backward_limit(mut self, limit: i64) -> Self {
        self.default_backward_limit = limit;
        self
    }

    /// Access the wrapped source
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait]
impl<N, S> Paginator<N> for OffsetAdapter<S>
where
    N: Send + 'static,
    S: OffsetSource<N>,
{
    async fn page(&self, request: PageRequest) -> Result<Connection<N>> {
        let mut limit = request.first.or(request.last);

        // Backward paging with no explicit size must still bound the scan.
        if request.before.is_some() && request.last.is_none() {
            limit = Some(self.default_backward_limit);
        }

        let mut offset = 0;
        if let Some(after) = &request.after {
            offset = after.to_offset()? + 1;
        }
        if let Some(before) = &request.before {
            let bound = before.to_offset()?;
            let mut window = limit.unwrap_or(self.default_backward_limit);
            // A window wider than what exists before the bound would reach
            // past it and hand back duplicate nodes; shrink it instead.
            if window > bound {
                window = bound;
            }
            limit = Some(window);
            offset = bound - window;
        }
        offset = offset.max(0);

        trace!(offset, ?limit, "offset window derived");

        let result = self.source.fetch(offset, limit).await?;
        let count = result.nodes.len() as i64;

        let edges = result
            .nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| Edge::new(Cursor::Offset(offset + i as i64), node))
            .collect();

        Ok(Connection::new(
            edges,
            PageInfo {
                has_next_page: result.has_next_page,
                has_previous_page: result.has_previous_page,
                start_cursor: Some(Cursor::Offset(offset)),
                end_cursor: Some(Cursor::Offset(offset + count - 1)),
            },
        ))
    }
}
