//! Traversal drivers
//!
//! Whole-collection accumulation by repeated paginator calls, one page at a
//! time on the caller's task.
//!
//! # Overview
//!
//! Both drivers keep calling the paginator with only the bound for their
//! direction and stop when `PageInfo` reports no further pages that way.
//! They return the complete ordered edge sequence or the first error
//! encountered; partial accumulation is discarded on error. Termination
//! depends on the paginator eventually reporting completion — a paginator
//! that never does loops forever.

use crate::connection::{Cursor, Edge, PageRequest};
use crate::error::Result;
use crate::paginator::Paginator;
use tracing::debug;

/// Collect every edge from `after` (exclusive) to the end of the result set
///
/// Passing `None` starts from the very beginning. Edges come back in source
/// order, globally ascending.
pub async fn collect_forward<N, P>(paginator: &P, after: Option<Cursor>) -> Result<Vec<Edge<N>>>
where
    P: Paginator<N> + ?Sized,
{
    let mut edges = Vec::new();
    let mut after = after;
    let mut page_count = 0u64;

    loop {
        let connection = paginator.page(PageRequest::forward(after.take())).await?;
        page_count += 1;
        debug!(page = page_count, edges = connection.len(), "fetched forward page");

        let has_next = connection.page_info.has_next_page;
        after = connection.page_info.end_cursor.clone();
        edges.extend(connection.edges);

        if !has_next {
            break;
        }
    }

    Ok(edges)
}

/// Collect every edge from the start of the result set up to `before`
/// (exclusive)
///
/// Pages arrive as suffix windows walking toward the start, so each page is
/// spliced in front of the accumulation; the returned sequence is globally
/// ascending, same as [`collect_forward`].
pub async fn collect_backward<N, P>(paginator: &P, before: Cursor) -> Result<Vec<Edge<N>>>
where
    P: Paginator<N> + ?Sized,
{
    let mut edges = Vec::new();
    let mut before = Some(before);
    let mut page_count = 0u64;

    loop {
        let connection = paginator.page(PageRequest::backward(before.take())).await?;
        page_count += 1;
        debug!(page = page_count, edges = connection.len(), "fetched backward page");

        let has_previous = connection.page_info.has_previous_page;
        before = connection.page_info.start_cursor.clone();

        let mut page = connection.edges;
        page.append(&mut edges);
        edges = page;

        if !has_previous {
            break;
        }
    }

    Ok(edges)
}
