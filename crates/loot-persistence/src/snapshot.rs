//! Read snapshots of the backing store.
//!
//! A snapshot is the complete read input for one invocation of the core.
//! Raid days and loot grants are always held most-recent-first; every
//! constructor normalizes them so window builders can rely on the order.

use std::fs;
use std::path::Path;

use loot_models::{Catalog, Item, ItemId, LootEvent, Player, PlayerId, Session};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PersistenceError, Result};

/// Immutable view of players, items, raid days and loot history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Roster.
    #[serde(default)]
    pub players: Vec<Player>,

    /// Item catalog.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Raid days, most recent first.
    #[serde(default)]
    pub sessions: Vec<Session>,

    /// Loot grants, most recent first.
    #[serde(default)]
    pub loot: Vec<LootEvent>,
}

impl Snapshot {
    /// Builds a normalized snapshot.
    pub fn new(
        players: Vec<Player>,
        items: Vec<Item>,
        sessions: Vec<Session>,
        loot: Vec<LootEvent>,
    ) -> Self {
        let mut snapshot = Self {
            players,
            items,
            sessions,
            loot,
        };
        snapshot.normalize();
        snapshot
    }

    /// Parses and normalizes a JSON snapshot document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut snapshot: Self = serde_json::from_str(json)?;
        snapshot.normalize();
        debug!(
            players = snapshot.players.len(),
            items = snapshot.items.len(),
            sessions = snapshot.sessions.len(),
            loot = snapshot.loot.len(),
            "snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Reads, parses and normalizes a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| PersistenceError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Sorts raid days and loot grants by id, highest (most recent) first.
    pub fn normalize(&mut self) {
        self.sessions.sort_by(|a, b| b.id.cmp(&a.id));
        self.loot.sort_by(|a, b| b.id.cmp(&a.id));
    }

    /// Builds a name lookup over the roster and item catalog.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.players, &self.items)
    }

    /// Finds a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Finds an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}
