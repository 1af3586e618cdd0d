//! Per-item processing mode
//!
//! Runs the callback once per item: concurrently within a chunk,
//! sequentially across chunks. Each callback receives the item together
//! with its position in the original collection.

use super::engine;
use super::types::{BatchConfig, BatchOutcome};
use crate::utils::error::ErrorUtils;
use futures::future::{join_all, try_join_all};
use std::fmt::Display;
use std::future::Future;

/// Executor that applies an async callback to every item of an ordered
/// collection, chunk by chunk.
///
/// # Example
/// ```rust
/// use chunkwise::{BatchConfig, ItemExecutor};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let executor = ItemExecutor::new(BatchConfig::new().with_chunk_size(100));
///
/// let doubled = executor
///     .execute(vec![1, 2, 3], |n, _| async move { Ok::<_, String>(n * 2) })
///     .await
///     .unwrap();
///
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # }
/// ```
pub struct ItemExecutor {
    config: BatchConfig,
}

impl ItemExecutor {
    /// Create a new executor
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Process every item, aborting on the first failure.
    ///
    /// Returns the callback results in item order, produced only when
    /// every item succeeds. The first failure observed within a chunk is
    /// returned to the caller unchanged; its in-flight siblings are
    /// dropped and no further chunks start. Which of several concurrent
    /// failures is observed first is a race, not item order.
    pub async fn execute<T, R, E, F, Fut>(&self, items: Vec<T>, op: F) -> Result<Vec<R>, E>
    where
        F: Fn(T, usize) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let op = &op;
        engine::drive(items, &self.config, |_, offset, chunk| async move {
            try_join_all(
                chunk
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| op(item, offset + i)),
            )
            .await
        })
        .await
    }

    /// Process every item, recording failures and continuing.
    ///
    /// Never fails: each item failure becomes a `None` slot in the
    /// outcome and contributes its message to the deduplicated error
    /// list.
    pub async fn execute_collecting<T, R, E, F, Fut>(
        &self,
        items: Vec<T>,
        op: F,
    ) -> BatchOutcome<R>
    where
        E: Display,
        F: Fn(T, usize) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let op = &op;
        engine::drive_collecting(items, &self.config, |_, offset, chunk| async move {
            let units = join_all(
                chunk
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| op(item, offset + i)),
            )
            .await;
            units
                .into_iter()
                .map(|unit| unit.map_err(|e| ErrorUtils::message_of(&e)))
                .collect::<Vec<_>>()
        })
        .await
    }
}

impl Default for ItemExecutor {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

/// Convenience function for per-item processing without creating an
/// executor. Aborts on the first failure.
pub async fn process_items<T, R, E, F, Fut>(
    items: Vec<T>,
    op: F,
    config: Option<BatchConfig>,
) -> Result<Vec<R>, E>
where
    F: Fn(T, usize) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    ItemExecutor::new(config.unwrap_or_default())
        .execute(items, op)
        .await
}

/// Convenience function for per-item processing without creating an
/// executor. Records failures and continues.
pub async fn process_items_collecting<T, R, E, F, Fut>(
    items: Vec<T>,
    op: F,
    config: Option<BatchConfig>,
) -> BatchOutcome<R>
where
    E: Display,
    F: Fn(T, usize) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    ItemExecutor::new(config.unwrap_or_default())
        .execute_collecting(items, op)
        .await
}
