//! Offset-cursor adapter
//!
//! Bridges the gap between a plain offset/limit data source and the cursor
//! [`crate::Paginator`] contract.
//!
//! # Overview
//!
//! A source only has to answer "give me `limit` items from `offset`"; the
//! adapter derives the window from the request's cursors, clamps it at the
//! start boundary, and stamps every returned item with an offset cursor so
//! the traversal and streaming drivers can walk the source in either
//! direction.

mod adapter;
mod types;

pub use adapter::{OffsetAdapter, DEFAULT_BACKWARD_LIMIT};
pub use types::{OffsetSource, ResultSet};
