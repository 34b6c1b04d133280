//! Streaming drivers
//!
//! Producer/consumer variant of the traversal walk: a spawned task fetches
//! pages and fills a bounded prefetch queue while the calling task forwards
//! edges to the caller's sink, overlapping one page's fetch latency with the
//! consumer processing the prior page.
//!
//! # Overview
//!
//! The calling task waits on three events per dequeue: a cancellation signal
//! from the caller, an error from the producer, or the next queued edge.
//! Back-pressure is implicit: a full queue blocks the producer, a slow sink
//! blocks the consumer. The producer observes the cancellation token and the
//! queue closing while blocked on a full buffer, so an abandoned stream
//! never leaves a blocked task behind.

use crate::connection::{Cursor, Edge, PageRequest};
use crate::error::{Error, Result};
use crate::paginator::Paginator;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default number of edges buffered ahead of the consumer
pub const DEFAULT_PREFETCH: usize = 10;

/// Configuration for the streaming drivers
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Capacity of the intermediate prefetch queue
    pub prefetch: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            prefetch: DEFAULT_PREFETCH,
        }
    }
}

impl StreamConfig {
    /// Create a config with the default prefetch depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefetch queue capacity
    #[must_use]
    pub fn with_prefetch(mut self, prefetch: usize) -> Self {
        self.prefetch = prefetch;
        self
    }
}

/// Which way the producer walks the result set
#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Stream every edge from `after` (exclusive) to the end of the result set
/// into `output`
///
/// Returns `Ok(())` once the final page is delivered and the sink is closed,
/// the first paginator error, or [`Error::Cancelled`] when `cancel` fires.
pub async fn stream_forward<N>(
    paginator: Arc<dyn Paginator<N>>,
    after: Option<Cursor>,
    output: mpsc::Sender<Edge<N>>,
    cancel: CancellationToken,
) -> Result<()>
where
    N: Send + 'static,
{
    stream_forward_with_config(paginator, after, output, cancel, StreamConfig::default()).await
}

/// [`stream_forward`] with an explicit [`StreamConfig`]
pub async fn stream_forward_with_config<N>(
    paginator: Arc<dyn Paginator<N>>,
    after: Option<Cursor>,
    output: mpsc::Sender<Edge<N>>,
    cancel: CancellationToken,
    config: StreamConfig,
) -> Result<()>
where
    N: Send + 'static,
{
    run(paginator, after, output, cancel, config, Direction::Forward).await
}

/// Stream every edge before `before` into `output`, newest first
///
/// Pages are walked toward the start of the result set and each page's edges
/// are reversed before enqueuing, so the stream emits the walk in reverse
/// global order; collecting and reversing it reproduces the ascending
/// aggregate of [`crate::traverse::collect_backward`].
pub async fn stream_backward<N>(
    paginator: Arc<dyn Paginator<N>>,
    before: Cursor,
    output: mpsc::Sender<Edge<N>>,
    cancel: CancellationToken,
) -> Result<()>
where
    N: Send + 'static,
{
    stream_backward_with_config(paginator, before, output, cancel, StreamConfig::default()).await
}

/// [`stream_backward`] with an explicit [`StreamConfig`]
pub async fn stream_backward_with_config<N>(
    paginator: Arc<dyn Paginator<N>>,
    before: Cursor,
    output: mpsc::Sender<Edge<N>>,
    cancel: CancellationToken,
    config: StreamConfig,
) -> Result<()>
where
    N: Send + 'static,
{
    run(
        paginator,
        Some(before),
        output,
        cancel,
        config,
        Direction::Backward,
    )
    .await
}

async fn run<N>(
    paginator: Arc<dyn Paginator<N>>,
    start: Option<Cursor>,
    output: mpsc::Sender<Edge<N>>,
    cancel: CancellationToken,
    config: StreamConfig,
    direction: Direction,
) -> Result<()>
where
    N: Send + 'static,
{
    let (buffer_tx, buffer_rx) = mpsc::channel(config.prefetch.max(1));
    let (error_tx, error_rx) = oneshot::channel();

    let producer = tokio::spawn(produce(
        paginator,
        start,
        buffer_tx,
        error_tx,
        cancel.clone(),
        direction,
    ));

    let result = consume(output, buffer_rx, error_rx, cancel).await;

    if result.is_ok() {
        // Clean completion: the producer already closed the queue and is
        // about to exit. On the error paths it unwinds on its own once it
        // observes the dropped queue or the cancellation token.
        let _ = producer.await;
    }

    result
}

/// Background page-walking loop feeding the prefetch queue
async fn produce<N>(
    paginator: Arc<dyn Paginator<N>>,
    mut cursor: Option<Cursor>,
    buffer: mpsc::Sender<Edge<N>>,
    errors: oneshot::Sender<Error>,
    cancel: CancellationToken,
    direction: Direction,
) where
    N: Send + 'static,
{
    let mut page_count = 0u64;

    loop {
        let request = match direction {
            Direction::Forward => PageRequest::forward(cursor.take()),
            Direction::Backward => PageRequest::backward(cursor.take()),
        };

        let connection = match paginator.page(request).await {
            Ok(connection) => connection,
            Err(e) => {
                let _ = errors.send(e);
                return;
            }
        };

        page_count += 1;
        debug!(
            page = page_count,
            edges = connection.len(),
            ?direction,
            "prefetched page"
        );

        let has_more = match direction {
            Direction::Forward => connection.page_info.has_next_page,
            Direction::Backward => connection.page_info.has_previous_page,
        };
        cursor = match direction {
            Direction::Forward => connection.page_info.end_cursor.clone(),
            Direction::Backward => connection.page_info.start_cursor.clone(),
        };

        let mut edges = connection.edges;
        if matches!(direction, Direction::Backward) {
            edges.reverse();
        }

        for edge in edges {
            tokio::select! {
                () = cancel.cancelled() => return,
                permit = buffer.reserve() => match permit {
                    Ok(permit) => permit.send(edge),
                    // Consumer dropped the queue
                    Err(_) => return,
                },
            }
        }

        if !has_more {
            break;
        }
    }

    debug!(pages = page_count, "stream producer finished");
    // Dropping `buffer` closes the queue; the consumer reads that as success.
}

/// Foreground loop forwarding queued edges to the caller's sink
async fn consume<N>(
    output: mpsc::Sender<Edge<N>>,
    mut buffer: mpsc::Receiver<Edge<N>>,
    mut errors: oneshot::Receiver<Error>,
    cancel: CancellationToken,
) -> Result<()> {
    let mut producer_exited = false;

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                // Dropping the queue unblocks a producer stuck on a full buffer.
                drop(buffer);
                return Err(Error::cancelled("cancellation requested by caller"));
            }

            result = &mut errors, if !producer_exited => match result {
                Ok(err) => {
                    drop(buffer);
                    return Err(err);
                }
                // Producer finished without error; drain what is queued.
                Err(_) => producer_exited = true,
            },

            next = buffer.recv() => match next {
                Some(edge) => {
                    if output.send(edge).await.is_err() {
                        drop(buffer);
                        return Err(Error::cancelled("output channel closed"));
                    }
                }
                None => {
                    // Queue closed cleanly; dropping `output` closes the sink.
                    return Ok(());
                }
            },
        }
    }
}
