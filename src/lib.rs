//! # pagewalk
//!
//! Relay-style "Connection" pagination for arbitrary data sources: opaque
//! cursors, forward/backward traversal, and an adapter that lets a plain
//! offset/limit source speak the cursor contract.
//!
//! ## Features
//!
//! - **Connection model**: Cursor, Edge, PageInfo, Connection value types
//! - **Paginator contract**: one async trait any data source can implement
//! - **Traversal drivers**: collect a whole result set page by page, in
//!   either direction
//! - **Streaming drivers**: bounded prefetch, cooperative cancellation,
//!   implicit back-pressure
//! - **Offset adapter**: base64 offset cursors over a `(offset, limit)`
//!   source, with duplicate-free window arithmetic
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewalk::{collect_forward, OffsetAdapter, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Any `OffsetSource` becomes a cursor paginator
//!     let paginator = OffsetAdapter::new(my_database_query);
//!
//!     // Walk it to the end, ten rows per call
//!     let edges = collect_forward(&paginator, None).await?;
//!
//!     for edge in edges {
//!         println!("{} @ {}", edge.node, edge.cursor.encode());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Traversal / Streaming                 │
//! │  collect_forward  collect_backward  stream_*  (drivers)  │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ Paginator<N>
//! ┌────────────────────────────┴─────────────────────────────┐
//! │   your data source   │   FnPaginator   │  OffsetAdapter  │
//! └──────────────────────┴─────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Connection model: cursors, edges, page metadata
pub mod connection;

/// Paginator contract
pub mod paginator;

/// Whole-collection traversal drivers
pub mod traverse;

/// Streaming drivers with bounded prefetch
pub mod stream;

/// Offset-cursor adapter
pub mod offset;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{Connection, Cursor, Edge, PageInfo, PageRequest};
pub use error::{Error, Result};
pub use offset::{OffsetAdapter, OffsetSource, ResultSet, DEFAULT_BACKWARD_LIMIT};
pub use paginator::{FnPaginator, Paginator};
pub use stream::{
    stream_backward, stream_backward_with_config, stream_forward, stream_forward_with_config,
    StreamConfig, DEFAULT_PREFETCH,
};
pub use traverse::{collect_backward, collect_forward};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
