//! # Chunkwise
//!
//! Chunked concurrent processing for ordered collections. Splits a
//! collection into fixed-size chunks and processes chunks strictly in
//! order while running each chunk's items concurrently, with optional
//! pacing between chunk starts and a collecting mode that survives
//! per-item failures.
//!
//! ## Features
//!
//! - **Two processing modes**: per-item (callback per item, concurrent
//!   within a chunk) and per-chunk (callback per whole chunk, strictly
//!   sequential)
//! - **Order preservation**: results always come back in the original
//!   input order, regardless of completion order inside a chunk
//! - **Throttling**: a minimum wall-clock spacing between chunk starts,
//!   overlapped with processing rather than added to it
//! - **Two failure policies**: fail-fast entry points return the first
//!   failure unchanged; collecting entry points record failures as holes
//!   and always return a result
//! - **No task spawning**: everything runs on the caller's future, so
//!   callbacks need no `Send` bounds
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::{BatchConfig, ItemExecutor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let executor = ItemExecutor::new(
//!         BatchConfig::new()
//!             .with_chunk_size(200)
//!             .with_throttle_secs(0.0),
//!     );
//!
//!     let results = executor
//!         .execute(vec![1, 2, 3, 4, 5], |n, _index| async move {
//!             Ok::<_, String>(n * 2)
//!         })
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(results, vec![2, 4, 6, 8, 10]);
//! }
//! ```
//!
//! ## Collecting Failures
//!
//! ```rust
//! use chunkwise::{BatchOutcome, process_items_collecting};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let outcome = process_items_collecting(
//!         vec![1, 2, 3],
//!         |n, _| async move {
//!             if n == 2 {
//!                 Err(format!("Failed: {}", n))
//!             } else {
//!                 Ok(n * 10)
//!             }
//!         },
//!         None,
//!     )
//!     .await;
//!
//!     match outcome {
//!         BatchOutcome::Partial {
//!             results,
//!             error_messages,
//!         } => {
//!             assert_eq!(results, vec![Some(10), None, Some(30)]);
//!             assert_eq!(error_messages, vec!["Failed: 2"]);
//!         }
//!         BatchOutcome::Complete { .. } => unreachable!(),
//!     }
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod core;
pub mod utils;

// Re-export main types
pub use core::batch::{
    BatchConfig, BatchOutcome, ChunkExecutor, ItemExecutor, process_chunks,
    process_chunks_collecting, process_items, process_items_collecting,
};
pub use utils::chunking::partition;
pub use utils::error::ErrorUtils;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
