//! Batch processing types and data structures

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for chunked batch processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of items per chunk (default: 500)
    pub chunk_size: usize,
    /// Minimum spacing between the start of successive chunks (default: none)
    pub throttle: Duration,
    /// Emit progress diagnostics while iterating chunks (default: silent)
    pub diagnostics: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            throttle: Duration::ZERO,
            diagnostics: false,
        }
    }
}

impl BatchConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the minimum spacing between chunk starts
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Set the minimum spacing between chunk starts, in seconds
    pub fn with_throttle_secs(self, seconds: f64) -> Self {
        self.with_throttle(Duration::from_secs_f64(seconds))
    }

    /// Enable or disable progress diagnostics
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Outcome of a collecting batch run
///
/// `Complete` when every unit succeeded. `Partial` when at least one unit
/// failed: `results` then has exactly one slot per unit in unit order,
/// with `None` marking the failed units, and `error_messages` holds each
/// distinct failure message once, in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome<R> {
    /// Every unit succeeded
    Complete {
        /// One result per unit, in unit order
        results: Vec<R>,
    },
    /// At least one unit failed
    Partial {
        /// One slot per unit, `None` where the unit failed
        results: Vec<Option<R>>,
        /// Distinct failure messages, in first-occurrence order
        error_messages: Vec<String>,
    },
}

impl<R> BatchOutcome<R> {
    /// Whether any unit failed
    pub fn has_errors(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }

    /// Number of units processed
    pub fn len(&self) -> usize {
        match self {
            Self::Complete { results } => results.len(),
            Self::Partial { results, .. } => results.len(),
        }
    }

    /// Whether the run processed zero units
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of units that succeeded
    pub fn success_count(&self) -> usize {
        match self {
            Self::Complete { results } => results.len(),
            Self::Partial { results, .. } => results.iter().filter(|r| r.is_some()).count(),
        }
    }

    /// The recorded failure messages (empty when complete)
    pub fn error_messages(&self) -> &[String] {
        match self {
            Self::Complete { .. } => &[],
            Self::Partial { error_messages, .. } => error_messages,
        }
    }

    /// Extract the full result list, or `None` if any unit failed
    pub fn into_complete(self) -> Option<Vec<R>> {
        match self {
            Self::Complete { results } => Some(results),
            Self::Partial { .. } => None,
        }
    }
}

// Serialized with an explicit `hasErrors` tag so callers can persist or
// log outcomes in the shape they branch on.
impl<R: Serialize> Serialize for BatchOutcome<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Complete { results } => {
                let mut state = serializer.serialize_struct("BatchOutcome", 2)?;
                state.serialize_field("hasErrors", &false)?;
                state.serialize_field("results", results)?;
                state.end()
            }
            Self::Partial {
                results,
                error_messages,
            } => {
                let mut state = serializer.serialize_struct("BatchOutcome", 3)?;
                state.serialize_field("hasErrors", &true)?;
                state.serialize_field("results", results)?;
                state.serialize_field("errorMessages", error_messages)?;
                state.end()
            }
        }
    }
}
