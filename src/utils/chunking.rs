//! Chunk partitioning
//!
//! Splits an owned collection into fixed-size chunks while preserving
//! element order.

/// Split `items` into consecutive chunks of at most `chunk_size` elements.
///
/// Order is preserved: concatenating the returned chunks reproduces the
/// input exactly. Every chunk holds `chunk_size` elements except possibly
/// the last, which holds the remainder. An empty input yields no chunks.
/// A `chunk_size` of zero is coerced to 1.
pub fn partition<T>(items: Vec<T>, chunk_size: usize) -> Vec<Vec<T>> {
    let size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));
    let mut items = items.into_iter();

    loop {
        let chunk: Vec<T> = items.by_ref().take(size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    chunks
}
