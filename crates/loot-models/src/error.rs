//! Error types for model construction.

use thiserror::Error;

/// Errors raised when building typed model values from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Rank lies outside the category's `1..=max` domain.
    #[error("rank {value} is outside 1..={max}")]
    OutOfRange { value: u8, max: u8 },
}
