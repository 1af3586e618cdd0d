//! Shared chunk-iteration engine
//!
//! Drives sequential processing of chunks with optional inter-chunk
//! throttling. Each processing mode supplies a runner that settles one
//! chunk and reports per-unit completions; the engine owns chunk
//! sequencing, pacing, progress diagnostics, and result aggregation.

use super::types::{BatchConfig, BatchOutcome};
use crate::utils::chunking::partition;
use futures::future::{join, try_join};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Per-unit completions reported by a collecting runner for one chunk,
/// in unit order, with failure messages already extracted.
pub(crate) type UnitResults<R> = Vec<Result<R, String>>;

/// Run chunks in ascending order, aborting on the first unit failure.
///
/// The runner receives the chunk index, the global offset of the chunk's
/// first item, and the chunk itself, and resolves to the chunk's results
/// in unit order or its first failure. When throttling is configured the
/// inter-chunk delay runs alongside the chunk, so the loop advances only
/// once both have settled; a failure is never held back by a pending
/// sleep.
pub(crate) async fn drive<T, R, E, F, Fut>(
    items: Vec<T>,
    config: &BatchConfig,
    runner: F,
) -> Result<Vec<R>, E>
where
    F: Fn(usize, usize, Vec<T>) -> Fut,
    Fut: Future<Output = Result<Vec<R>, E>>,
{
    let chunks = partition(items, config.chunk_size);
    let chunk_count = chunks.len();
    let mut results = Vec::new();
    let mut offset = 0;

    for (index, chunk) in chunks.into_iter().enumerate() {
        progress(config, index, chunk_count, chunk.len());
        let chunk_len = chunk.len();
        let processing = runner(index, offset, chunk);

        let chunk_results = if paced(config, index, chunk_count) {
            let pacing = async {
                sleep(config.throttle).await;
                Ok::<_, E>(())
            };
            let ((), chunk_results) = try_join(pacing, processing).await?;
            chunk_results
        } else {
            processing.await?
        };

        results.extend(chunk_results);
        offset += chunk_len;
    }

    Ok(results)
}

/// Run chunks in ascending order, recording failures and continuing.
///
/// Never fails: each unit failure becomes a `None` slot and contributes
/// its message to the deduplicated list. Throttling behaves as in
/// [`drive`].
pub(crate) async fn drive_collecting<T, R, F, Fut>(
    items: Vec<T>,
    config: &BatchConfig,
    runner: F,
) -> BatchOutcome<R>
where
    F: Fn(usize, usize, Vec<T>) -> Fut,
    Fut: Future<Output = UnitResults<R>>,
{
    let chunks = partition(items, config.chunk_size);
    let chunk_count = chunks.len();
    let mut slots: Vec<Option<R>> = Vec::new();
    let mut seen = HashSet::new();
    let mut error_messages = Vec::new();
    let mut offset = 0;

    for (index, chunk) in chunks.into_iter().enumerate() {
        progress(config, index, chunk_count, chunk.len());
        let chunk_len = chunk.len();
        let processing = runner(index, offset, chunk);

        let unit_results = if paced(config, index, chunk_count) {
            let (_, unit_results) = join(sleep(config.throttle), processing).await;
            unit_results
        } else {
            processing.await
        };

        for unit in unit_results {
            match unit {
                Ok(value) => slots.push(Some(value)),
                Err(message) => {
                    if seen.insert(message.clone()) {
                        error_messages.push(message);
                    }
                    slots.push(None);
                }
            }
        }
        offset += chunk_len;
    }

    if error_messages.is_empty() {
        BatchOutcome::Complete {
            results: slots.into_iter().flatten().collect(),
        }
    } else {
        BatchOutcome::Partial {
            results: slots,
            error_messages,
        }
    }
}

/// Whether the delay applies after this chunk. Pacing only separates
/// successive chunk starts, so the final chunk is never held open.
fn paced(config: &BatchConfig, index: usize, chunk_count: usize) -> bool {
    config.throttle > Duration::ZERO && index + 1 < chunk_count
}

fn progress(config: &BatchConfig, index: usize, chunk_count: usize, units: usize) {
    if config.diagnostics {
        debug!(
            "Processing chunk {}/{} ({} units)",
            index + 1,
            chunk_count,
            units
        );
    }
}
