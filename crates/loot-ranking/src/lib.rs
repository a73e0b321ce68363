//! Ranked wishlists and item priorities for the loot tracker.
//!
//! This crate provides:
//! - [`RankedList`]: sparse ranked slots with move-and-renumber
//! - [`PriorityEdit`]: edit sessions over an item's priority categories that
//!   preserve who set each unchanged value
//! - [`WishlistManager`]: validated whole-array wishlist commits
//!
//! All operations take immutable snapshots and return new values. Commits
//! are validated first and only then handed to a [`Repository`].
//!
//! # Example
//!
//! ```no_run
//! use loot_models::{ClassName, ItemId, PlayerId, PrioRank};
//! use loot_persistence::{InMemoryRepository, Snapshot};
//! use loot_ranking::{ClassEdit, WishlistManager};
//! use std::path::Path;
//!
//! let snapshot = Snapshot::load(Path::new("snapshot.json")).unwrap();
//! let repo = InMemoryRepository::from_snapshot(&snapshot);
//! let catalog = snapshot.catalog();
//! let acting = PlayerId::new(1);
//!
//! // Drag the third wishlist column to the front
//! let player = snapshot.player(acting).unwrap();
//! WishlistManager::new(&catalog).move_and_commit(player, 3, 1, &repo).unwrap();
//!
//! // Give class priority to mages at rank 1
//! let item = snapshot.item(ItemId::new(10)).unwrap();
//! let mut edit = ClassEdit::open(item).unwrap();
//! edit.set(PrioRank::first(), ClassName::new("Mage"));
//! edit.commit_to(item, acting, &catalog, &repo).unwrap();
//! ```
//!
//! [`Repository`]: loot_persistence::Repository

pub mod error;
pub mod priority;
pub mod ranked_list;
pub mod wishlist;

pub use error::{RankingError, Result};
pub use priority::{Class, ClassEdit, Individual, IndividualEdit, PriorityCategory, PriorityEdit};
pub use ranked_list::RankedList;
pub use wishlist::{Wishlist, WishlistEntry, WishlistManager};
