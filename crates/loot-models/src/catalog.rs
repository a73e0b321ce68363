//! Id-to-name lookup over a roster and item snapshot.

use std::collections::BTreeMap;

use crate::ids::{ItemId, PlayerId};
use crate::item::Item;
use crate::player::Player;

/// Read-only index of the known players and items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    players: BTreeMap<PlayerId, String>,
    items: BTreeMap<ItemId, String>,
}

impl Catalog {
    /// Indexes the given snapshot.
    pub fn new(players: &[Player], items: &[Item]) -> Self {
        Self {
            players: players.iter().map(|p| (p.id, p.name.clone())).collect(),
            items: items.iter().map(|i| (i.id, i.name.clone())).collect(),
        }
    }

    /// Returns true if the player is on the roster.
    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// Returns true if the item is known.
    pub fn contains_item(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Display name of a player.
    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.players.get(&id).map(String::as_str)
    }

    /// Display name of an item.
    pub fn item_name(&self, id: ItemId) -> Option<&str> {
        self.items.get(&id).map(String::as_str)
    }
}
