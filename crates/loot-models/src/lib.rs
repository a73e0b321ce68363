//! Core data models for the loot tracker.
//!
//! This crate provides the entity snapshots exchanged with the backing
//! store (players, items, raid days, loot grants), the typed ids and the
//! bounded `Rank` used by every ranked list.

pub mod catalog;
pub mod error;
pub mod history;
pub mod ids;
pub mod item;
pub mod player;
pub mod rank;

// Re-export main types
pub use catalog::Catalog;
pub use error::RankError;
pub use history::{LootEvent, Session};
pub use ids::{ItemId, LootEventId, PlayerId, SessionId};
pub use item::{ClassName, Item, PrioSlot};
pub use player::{Player, WishlistSlot};
pub use rank::{PrioRank, Rank, WishlistRank};
