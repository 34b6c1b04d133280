//! Paginator contract
//!
//! The capability every data source implements: map page-request arguments
//! to one [`Connection`]. Concrete sources (a database query layer, a remote
//! API client) live outside this crate; the drivers in [`crate::traverse`]
//! and [`crate::stream`] only ever consume this trait.

use crate::connection::{Connection, PageRequest};
use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Capability mapping page-request arguments to a [`Connection`]
///
/// Implementations choose how to interpret `first` vs `last`; the offset
/// adapter in [`crate::offset`] defines the canonical policy. Failures are
/// data-source-specific and propagate unchanged through the drivers.
#[async_trait]
pub trait Paginator<N>: Send + Sync {
    /// Produce one page of results
    async fn page(&self, request: PageRequest) -> Result<Connection<N>>;
}

/// Adapter letting a plain async closure act as a [`Paginator`]
///
/// ```rust,ignore
/// let paginator = FnPaginator::new(|request: PageRequest| async move {
///     db.query_page(request).await
/// });
/// ```
pub struct FnPaginator<F> {
    f: F,
}

impl<F> FnPaginator<F> {
    /// Wrap an async closure
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<N, F, Fut> Paginator<N> for FnPaginator<F>
where
    N: Send + 'static,
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Connection<N>>> + Send + 'static,
{
    async fn page(&self, request: PageRequest) -> Result<Connection<N>> {
        (self.f)(request).await
    }
}
