//! Integration tests over the full stack
//!
//! Exercises the end-to-end flow: offset source → OffsetAdapter → traversal
//! and streaming drivers, with cursors round-tripped through their wire form.

use async_trait::async_trait;
use pagewalk::{
    collect_backward, collect_forward, stream_backward, stream_forward, Cursor, Edge,
    OffsetAdapter, OffsetSource, PageRequest, Paginator, ResultSet,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Offset source over an in-memory vector, counting its calls
struct CountingSource {
    items: Vec<i64>,
    calls: AtomicU64,
}

impl CountingSource {
    fn new(items: impl IntoIterator<Item = i64>) -> Self {
        Self {
            items: items.into_iter().collect(),
            calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl OffsetSource<i64> for CountingSource {
    async fn fetch(&self, offset: i64, limit: Option<i64>) -> pagewalk::Result<ResultSet<i64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let len = self.items.len() as i64;
        let start = offset.clamp(0, len);
        let end = limit.map_or(len, |l| (start + l.max(0)).min(len));
        let nodes = self.items[start as usize..end as usize].to_vec();
        Ok(ResultSet::new(nodes, end < len, start > 0))
    }
}

/// Paginator that pins a forward page size onto the adapter
struct PagedAdapter {
    inner: OffsetAdapter<CountingSource>,
    page_size: i64,
}

#[async_trait]
impl Paginator<i64> for PagedAdapter {
    async fn page(&self, request: PageRequest) -> pagewalk::Result<pagewalk::Connection<i64>> {
        let request = if request.before.is_some() {
            request
        } else {
            request.with_first(self.page_size)
        };
        self.inner.page(request).await
    }
}

fn hundred_items(page_size: i64) -> PagedAdapter {
    PagedAdapter {
        inner: OffsetAdapter::new(CountingSource::new(1..=100)),
        page_size,
    }
}

// ============================================================================
// Traversal over the Adapter
// ============================================================================

#[tokio::test]
async fn test_forward_traversal_over_offset_adapter() {
    let paginator = hundred_items(10);

    let edges = collect_forward(&paginator, None).await.unwrap();

    let nodes: Vec<i64> = edges.iter().map(|e| e.node).collect();
    assert_eq!(nodes, (1..=100).collect::<Vec<_>>());
    // 10 full pages plus the final empty-next probe never happens: the last
    // page reports has_next_page = false
    assert_eq!(paginator.inner.source().calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_backward_traversal_reassembles_ascending() {
    let paginator = hundred_items(10);

    // One position past the last item, as a wire token
    let before = Cursor::opaque(Cursor::Offset(101).encode());
    let edges = collect_backward(&paginator, before).await.unwrap();

    let nodes: Vec<i64> = edges.iter().map(|e| e.node).collect();
    assert_eq!(nodes, (1..=100).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_forward_and_backward_agree() {
    let forward = collect_forward(&hundred_items(7), None).await.unwrap();
    let backward = collect_backward(&hundred_items(7), Cursor::Offset(100))
        .await
        .unwrap();

    let forward_nodes: Vec<i64> = forward.iter().map(|e| e.node).collect();
    let backward_nodes: Vec<i64> = backward.iter().map(|e| e.node).collect();
    assert_eq!(forward_nodes, backward_nodes);
}

// ============================================================================
// Streaming over the Adapter
// ============================================================================

#[tokio::test]
async fn test_streaming_matches_traversal_over_adapter() {
    let paginator = Arc::new(hundred_items(10));
    let collected = collect_forward(paginator.as_ref(), None).await.unwrap();

    let (tx, mut rx) = mpsc::channel::<Edge<i64>>(4);
    let driver = tokio::spawn(stream_forward(
        paginator.clone() as Arc<dyn Paginator<i64>>,
        None,
        tx,
        CancellationToken::new(),
    ));

    let mut streamed = Vec::new();
    while let Some(edge) = rx.recv().await {
        streamed.push(edge);
    }
    driver.await.unwrap().unwrap();

    assert_eq!(streamed, collected);
}

#[tokio::test]
async fn test_backward_streaming_over_adapter() {
    let paginator = Arc::new(hundred_items(10));

    let (tx, mut rx) = mpsc::channel::<Edge<i64>>(4);
    let driver = tokio::spawn(stream_backward(
        paginator as Arc<dyn Paginator<i64>>,
        Cursor::Offset(100),
        tx,
        CancellationToken::new(),
    ));

    let mut nodes = Vec::new();
    while let Some(edge) = rx.recv().await {
        nodes.push(edge.node);
    }
    driver.await.unwrap().unwrap();

    assert_eq!(nodes, (1..=100).rev().collect::<Vec<_>>());
}

// ============================================================================
// Cursor Wire-Format Round Trips
// ============================================================================

#[tokio::test]
async fn test_client_driven_paging_through_wire_tokens() {
    let paginator = hundred_items(10);

    // First page, then resume from its serialized end cursor, as a remote
    // client holding only the token string would
    let first = paginator
        .page(PageRequest::forward(None))
        .await
        .unwrap();
    let token = first.page_info.end_cursor.unwrap().encode();
    assert_eq!(token, "OQ==");

    let second = paginator
        .page(PageRequest::forward(Some(Cursor::opaque(token))))
        .await
        .unwrap();

    let nodes: Vec<i64> = second.edges.iter().map(|e| e.node).collect();
    assert_eq!(nodes, (11..=20).collect::<Vec<_>>());
}
