//! Error types for ranking operations.

use loot_models::{ItemId, PlayerId, RankError};
use loot_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur while moving or committing ranked slots.
///
/// Everything except `Persistence` is raised before a payload is built,
/// so a rejected operation never reaches the repository.
#[derive(Error, Debug)]
pub enum RankingError {
    /// Rank outside the category's domain.
    #[error("invalid rank: {0}")]
    Rank(#[from] RankError),

    /// Two slots claim the same rank.
    #[error("duplicate rank: {0}")]
    DuplicateRank(u8),

    /// Wishlist references an item missing from the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Commit references a player missing from the roster.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Edit session committed against a different item than it was opened on.
    #[error("edit opened on item {expected} but committed to item {actual}")]
    ItemMismatch { expected: ItemId, actual: ItemId },

    /// The repository rejected the update or could not be reached.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankingError>;
