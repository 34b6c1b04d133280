//! Connection model
//!
//! Cursor, Edge, PageInfo, Connection and PageRequest value types.
//!
//! # Overview
//!
//! These are the entities every paginator produces and every driver
//! consumes. Offset cursors encode as base64 of their decimal text so they
//! stay opaque to clients while remaining cheap to derive from a numeric
//! window.

mod types;

pub use types::{Connection, Cursor, Edge, PageInfo, PageRequest};

#[cfg(test)]
mod tests;
