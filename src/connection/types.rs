//! Connection model types
//!
//! The plain value types shared by every paginator: cursors, edges, page
//! metadata and the connection itself. All of them are created fresh per
//! paginator call and never mutated afterwards.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque token marking a position in an ordered result set
///
/// Two kinds exist: a literal string token whose meaning belongs entirely to
/// the data source, and an offset cursor wrapping a numeric index. The wire
/// form of an offset cursor is base64 of its decimal text, so `Offset(9)`
/// encodes to `"OQ=="`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Literal token, passed through untouched
    Opaque(String),
    /// Numeric index into an offset-addressable result set
    Offset(i64),
}

impl Cursor {
    /// Create a literal cursor
    pub fn opaque(token: impl Into<String>) -> Self {
        Self::Opaque(token.into())
    }

    /// Encode this cursor into its wire token
    pub fn encode(&self) -> String {
        match self {
            Self::Opaque(token) => token.clone(),
            Self::Offset(offset) => STANDARD.encode(offset.to_string()),
        }
    }

    /// Decode this cursor into a numeric offset
    ///
    /// Offset cursors decode trivially. Opaque tokens are base64-decoded and
    /// parsed as decimal; any malformed token is an ordinary
    /// [`Error::CursorDecode`], never a panic.
    pub fn to_offset(&self) -> Result<i64> {
        match self {
            Self::Offset(offset) => Ok(*offset),
            Self::Opaque(token) => {
                let bytes = STANDARD
                    .decode(token)
                    .map_err(|e| Error::cursor_decode(token.as_str(), e))?;
                let text = String::from_utf8(bytes)
                    .map_err(|e| Error::cursor_decode(token.as_str(), e))?;
                text.parse()
                    .map_err(|e| Error::cursor_decode(token.as_str(), format!("{e}: '{text}'")))
            }
        }
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Tokens coming off the wire are opaque until something decodes them.
        Ok(Self::Opaque(String::deserialize(deserializer)?))
    }
}

/// One result item paired with its resumption cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Position to resume from when paging past this item
    pub cursor: Cursor,
    /// The item itself; identity is caller-defined
    pub node: N,
}

impl<N> Edge<N> {
    /// Create a new edge
    pub fn new(cursor: Cursor, node: N) -> Self {
        Self { cursor, node }
    }
}

/// Metadata describing page boundaries and the existence of further pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Do items exist after `end_cursor`?
    pub has_next_page: bool,
    /// Do items exist before `start_cursor`?
    pub has_previous_page: bool,
    /// Cursor of the first edge in the page, if any
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last edge in the page, if any
    pub end_cursor: Option<Cursor>,
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<N> {
    /// Edges in source order
    pub edges: Vec<Edge<N>>,
    /// Page boundary metadata
    pub page_info: PageInfo,
}

impl<N> Connection<N> {
    /// Create a connection from edges and page info
    pub fn new(edges: Vec<Edge<N>>, page_info: PageInfo) -> Self {
        Self { edges, page_info }
    }

    /// Number of edges in this page
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the page is empty
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Page-request arguments accepted by every paginator
///
/// `first`/`last` are page-size hints and effectively mutually exclusive per
/// call; `before`/`after` are mutually exclusive position bounds. The
/// traversal drivers only ever set the bound for their direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Take this many items from the front of the window
    pub first: Option<i64>,
    /// Take this many items from the back of the window
    pub last: Option<i64>,
    /// Only items strictly before this position
    pub before: Option<Cursor>,
    /// Only items strictly after this position
    pub after: Option<Cursor>,
}

impl PageRequest {
    /// Create an empty page request
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forward request resuming after the given cursor
    pub fn forward(after: Option<Cursor>) -> Self {
        Self {
            after,
            ..Self::default()
        }
    }

    /// Create a backward request bounded before the given cursor
    pub fn backward(before: Option<Cursor>) -> Self {
        Self {
            before,
            ..Self::default()
        }
    }

    /// Set the forward page-size hint
    #[must_use]
    pub fn with_first(mut self, first: i64) -> Self {
        self.first = Some(first);
        self
    }

    /// Set the backward page-size hint
    #[must_use]
    pub fn with_last(mut self, last: i64) -> Self {
        self.last = Some(last);
        self
    }
}
