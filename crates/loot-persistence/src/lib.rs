//! Storage boundary for the loot tracker.
//!
//! The core computes derived views and commit payloads; this crate defines
//! where those payloads go ([`Repository`]) and how read snapshots come in
//! ([`Snapshot`]).
//!
//! # Example
//!
//! ```no_run
//! use loot_persistence::{InMemoryRepository, Repository, Snapshot};
//! use std::path::Path;
//!
//! let snapshot = Snapshot::load(Path::new("snapshot.json")).unwrap();
//! let repo = InMemoryRepository::from_snapshot(&snapshot);
//!
//! let mut player = snapshot.players[0].clone();
//! player.wishlist.clear();
//! repo.update_player(&player).unwrap();
//! ```

pub mod error;
pub mod repository;
pub mod snapshot;

pub use error::{PersistenceError, Result};
pub use repository::{InMemoryRepository, Repository};
pub use snapshot::Snapshot;
