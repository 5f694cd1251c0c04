//! Error types for the simulation engine

use thiserror::Error;

/// Errors raised by invalid engine configuration.
///
/// Out-of-range coordinate lookups and edits are deliberately not errors;
/// the grid treats its boundary as a fixed dead border and edits outside it
/// as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("grid dimensions must be at least 1x1, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("tick interval must be between {min} and {max} ms, got {actual}")]
    InvalidInterval { actual: u64, min: u64, max: u64 },
}
