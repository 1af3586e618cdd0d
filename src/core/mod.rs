//! Core functionality for chunkwise
//!
//! This module contains the chunk-iteration engine and its processing
//! modes.

pub mod batch;

// Re-export commonly used types
pub use batch::{BatchConfig, BatchOutcome, ChunkExecutor, ItemExecutor};
