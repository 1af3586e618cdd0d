//! Item-mode integration tests
//!
//! End-to-end coverage for per-item processing: ordering, indices,
//! fail-fast propagation, collecting outcomes, and intra-chunk
//! concurrency.

#[cfg(test)]
mod tests {
    use crate::common::{CallLog, TestError};
    use chunkwise::{BatchConfig, BatchOutcome, ItemExecutor, process_items};
    use std::time::{Duration, Instant};

    // ==================== Success Path ====================

    /// Doubling every item with the default configuration returns the
    /// doubled values in input order.
    #[tokio::test]
    async fn test_doubles_items_with_default_config() {
        let results = process_items(
            vec![1, 2, 3, 4, 5],
            |n, _| async move { Ok::<_, TestError>(n * 2) },
            None,
        )
        .await
        .unwrap();

        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    /// A pure callback yields identical results on repeated runs.
    #[tokio::test]
    async fn test_idempotent_for_pure_callbacks() {
        let executor = ItemExecutor::new(BatchConfig::new().with_chunk_size(3));
        let items: Vec<i32> = (0..20).collect();

        let first = executor
            .execute(items.clone(), |n, _| async move {
                Ok::<_, TestError>(n * n)
            })
            .await
            .unwrap();
        let second = executor
            .execute(items, |n, _| async move { Ok::<_, TestError>(n * n) })
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    /// Results are placed by original index even when completion order
    /// is reversed inside a chunk.
    #[tokio::test]
    async fn test_result_order_ignores_completion_order() {
        let executor = ItemExecutor::new(BatchConfig::new().with_chunk_size(4));

        // Later items finish first: sleep time decreases with the index.
        let results = executor
            .execute(vec![0u64, 1, 2, 3], |n, index| async move {
                tokio::time::sleep(Duration::from_millis(40 - 10 * n)).await;
                Ok::<_, TestError>(index)
            })
            .await
            .unwrap();

        assert_eq!(results, vec![0, 1, 2, 3]);
    }

    /// All items of a chunk run concurrently, not back to back.
    #[tokio::test]
    async fn test_items_within_chunk_run_concurrently() {
        let executor = ItemExecutor::new(BatchConfig::new().with_chunk_size(3));
        let started = Instant::now();

        executor
            .execute(vec![1, 2, 3], |_, _| async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok::<_, TestError>(())
            })
            .await
            .unwrap();

        // Sequential execution would take ~300ms.
        assert!(started.elapsed() < Duration::from_millis(250));
    }

    /// Chunks run one after another: the second chunk's items only start
    /// once the first chunk has fully settled.
    #[tokio::test]
    async fn test_chunks_run_sequentially() {
        let executor = ItemExecutor::new(BatchConfig::new().with_chunk_size(2));
        let log = CallLog::new();

        executor
            .execute(vec![0, 1, 2, 3], |_, index| {
                let log = log.clone();
                async move {
                    log.record(index);
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    Ok::<_, TestError>(())
                }
            })
            .await
            .unwrap();

        let order = log.snapshot();
        let first_chunk_done = order.iter().take(2).all(|&index| index < 2);
        let second_chunk_last = order.iter().skip(2).all(|&index| index >= 2);
        assert!(first_chunk_done && second_chunk_last, "order: {order:?}");
    }

    // ==================== Fail-Fast ====================

    /// The failing item's error value reaches the caller unchanged.
    #[tokio::test]
    async fn test_fail_fast_propagates_original_error() {
        let result = process_items(
            vec![1, 2, 3],
            |n, _| async move {
                if n == 2 {
                    Err(TestError::Boom)
                } else {
                    Ok(n)
                }
            },
            None,
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err, TestError::Boom);
        assert_eq!(err.to_string(), "boom");
    }

    /// After a failure no later chunk is started.
    #[tokio::test]
    async fn test_fail_fast_starts_no_further_chunks() {
        let log = CallLog::new();

        let result = process_items(
            (0..10).collect::<Vec<i32>>(),
            |n, index| {
                let log = log.clone();
                async move {
                    log.record(index);
                    if n == 0 {
                        Err(TestError::Item(n))
                    } else {
                        Ok(n)
                    }
                }
            },
            Some(BatchConfig::new().with_chunk_size(2)),
        )
        .await;

        assert!(result.is_err());
        assert!(log.snapshot().iter().all(|&index| index < 2));
    }

    // ==================== Collecting ====================

    /// Failing units leave holes at their positions and messages are
    /// recorded once each, in first-failure order.
    #[tokio::test]
    async fn test_collecting_holes_at_failed_positions() {
        let outcome = chunkwise::process_items_collecting(
            vec![1, 2, 3, 4, 5],
            |n, _| async move {
                if n % 2 == 0 {
                    Err(TestError::Item(n))
                } else {
                    Ok(n * 10)
                }
            },
            Some(BatchConfig::new().with_chunk_size(2)),
        )
        .await;

        assert_eq!(
            outcome,
            BatchOutcome::Partial {
                results: vec![Some(10), None, Some(30), None, Some(50)],
                error_messages: vec!["Failed: 2".to_string(), "Failed: 4".to_string()],
            }
        );
    }

    /// A fully successful collecting run is tagged complete.
    #[tokio::test]
    async fn test_collecting_success_has_no_errors() {
        let outcome = chunkwise::process_items_collecting(
            (1..=7).collect::<Vec<i32>>(),
            |n, _| async move { Ok::<_, TestError>(n) },
            Some(BatchConfig::new().with_chunk_size(3)),
        )
        .await;

        assert!(!outcome.has_errors());
        assert_eq!(outcome.into_complete(), Some(vec![1, 2, 3, 4, 5, 6, 7]));
    }

    /// Collecting mode keeps going after failures in every chunk.
    #[tokio::test]
    async fn test_collecting_processes_all_chunks_despite_failures() {
        let log = CallLog::new();

        let outcome = chunkwise::process_items_collecting(
            (0..9).collect::<Vec<i32>>(),
            |n, index| {
                let log = log.clone();
                async move {
                    log.record(index);
                    if n % 3 == 0 {
                        Err(TestError::Item(n))
                    } else {
                        Ok(n)
                    }
                }
            },
            Some(BatchConfig::new().with_chunk_size(3)),
        )
        .await;

        assert_eq!(log.count(), 9);
        assert_eq!(outcome.success_count(), 6);
        assert_eq!(
            outcome.error_messages(),
            ["Failed: 0", "Failed: 3", "Failed: 6"]
        );
    }

    // ==================== Edge Cases ====================

    /// Empty input produces an empty result in both policies.
    #[tokio::test]
    async fn test_empty_input() {
        let results = process_items(
            Vec::<i32>::new(),
            |n, _| async move { Ok::<_, TestError>(n) },
            None,
        )
        .await
        .unwrap();
        assert!(results.is_empty());

        let outcome = chunkwise::process_items_collecting(
            Vec::<i32>::new(),
            |n, _| async move { Ok::<_, TestError>(n) },
            None,
        )
        .await;
        assert_eq!(outcome, BatchOutcome::Complete { results: vec![] });
    }

    /// Progress diagnostics never change the observable result.
    #[tokio::test]
    async fn test_diagnostics_do_not_affect_results() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("chunkwise=debug")
            .try_init();

        let executor = ItemExecutor::new(
            BatchConfig::new().with_chunk_size(2).with_diagnostics(true),
        );

        let results = executor
            .execute(vec![1, 2, 3, 4, 5], |n, _| async move {
                Ok::<_, TestError>(n + 100)
            })
            .await
            .unwrap();

        assert_eq!(results, vec![101, 102, 103, 104, 105]);
    }
}
