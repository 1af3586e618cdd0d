//! Per-chunk processing mode
//!
//! Runs the callback once per chunk, receiving the whole chunk at once.
//! Chunks are one unit each and run strictly sequentially; there is no
//! intra-chunk concurrency in this mode.

use super::engine;
use super::types::{BatchConfig, BatchOutcome};
use crate::utils::error::ErrorUtils;
use std::fmt::Display;
use std::future::Future;

/// Executor that applies an async callback to each chunk of an ordered
/// collection.
///
/// # Example
/// ```rust
/// use chunkwise::{BatchConfig, ChunkExecutor};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let executor = ChunkExecutor::new(BatchConfig::new().with_chunk_size(2));
///
/// let sums = executor
///     .execute(vec![1, 2, 3, 4, 5, 6], |chunk, _| async move {
///         Ok::<_, String>(chunk.iter().sum::<i32>())
///     })
///     .await
///     .unwrap();
///
/// assert_eq!(sums, vec![3, 7, 11]);
/// # }
/// ```
pub struct ChunkExecutor {
    config: BatchConfig,
}

impl ChunkExecutor {
    /// Create a new executor
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Process the collection one chunk at a time, aborting on the first
    /// chunk failure.
    ///
    /// Returns one result per chunk, in chunk order, produced only when
    /// every chunk succeeds. Chunks never run concurrently with each
    /// other, so the first failure is always the lowest-indexed failing
    /// chunk; it is returned to the caller unchanged and no further
    /// chunks start.
    pub async fn execute<T, R, E, F, Fut>(&self, items: Vec<T>, op: F) -> Result<Vec<R>, E>
    where
        F: Fn(Vec<T>, usize) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let op = &op;
        engine::drive(items, &self.config, |index, _, chunk| async move {
            op(chunk, index).await.map(|value| vec![value])
        })
        .await
    }

    /// Process the collection one chunk at a time, recording failures
    /// and continuing.
    ///
    /// Never fails: each chunk failure becomes a `None` slot at that
    /// chunk's position and contributes its message to the deduplicated
    /// error list.
    pub async fn execute_collecting<T, R, E, F, Fut>(
        &self,
        items: Vec<T>,
        op: F,
    ) -> BatchOutcome<R>
    where
        E: Display,
        F: Fn(Vec<T>, usize) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let op = &op;
        engine::drive_collecting(items, &self.config, |index, _, chunk| async move {
            vec![
                op(chunk, index)
                    .await
                    .map_err(|e| ErrorUtils::message_of(&e)),
            ]
        })
        .await
    }
}

impl Default for ChunkExecutor {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

/// Convenience function for per-chunk processing without creating an
/// executor. Aborts on the first failure.
pub async fn process_chunks<T, R, E, F, Fut>(
    items: Vec<T>,
    op: F,
    config: Option<BatchConfig>,
) -> Result<Vec<R>, E>
where
    F: Fn(Vec<T>, usize) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    ChunkExecutor::new(config.unwrap_or_default())
        .execute(items, op)
        .await
}

/// Convenience function for per-chunk processing without creating an
/// executor. Records failures and continues.
pub async fn process_chunks_collecting<T, R, E, F, Fut>(
    items: Vec<T>,
    op: F,
    config: Option<BatchConfig>,
) -> BatchOutcome<R>
where
    E: Display,
    F: Fn(Vec<T>, usize) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    ChunkExecutor::new(config.unwrap_or_default())
        .execute_collecting(items, op)
        .await
}
