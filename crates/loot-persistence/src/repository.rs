//! Repository boundary.
//!
//! The core never reads or writes storage itself. Commits are handed to a
//! [`Repository`] as whole-object updates; the result is success or an
//! opaque failure. No retry happens on this side.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use loot_models::{Item, ItemId, Player, PlayerId};
use tracing::{debug, info};

use crate::error::{PersistenceError, Result};
use crate::snapshot::Snapshot;

/// Storage collaborator accepting whole-entity updates.
pub trait Repository: Send + Sync {
    /// Replaces a stored player. Used for wishlist commits.
    fn update_player(&self, player: &Player) -> Result<()>;

    /// Replaces a stored item. Used for priority commits.
    fn update_item(&self, item: &Item) -> Result<()>;
}

/// Thread-safe in-process repository.
///
/// Keeps the last committed version of every entity. Updates to ids it
/// was not seeded with are rejected with `NotFound`.
#[derive(Default)]
pub struct InMemoryRepository {
    players: RwLock<HashMap<PlayerId, Player>>,
    items: RwLock<HashMap<ItemId, Item>>,
    commits: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the snapshot's players and items.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let repo = Self::new();
        if let Ok(mut players) = repo.players.write() {
            players.extend(snapshot.players.iter().map(|p| (p.id, p.clone())));
        }
        if let Ok(mut items) = repo.items.write() {
            items.extend(snapshot.items.iter().map(|i| (i.id, i.clone())));
        }
        repo
    }

    /// Returns the stored version of a player.
    pub fn player(&self, id: PlayerId) -> Option<Player> {
        self.players.read().ok()?.get(&id).cloned()
    }

    /// Returns the stored version of an item.
    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.items.read().ok()?.get(&id).cloned()
    }

    /// Number of updates accepted so far.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// When set, every update fails as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(
                "in-memory repository marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Repository for InMemoryRepository {
    fn update_player(&self, player: &Player) -> Result<()> {
        self.check_available()?;
        let mut players = self
            .players
            .write()
            .map_err(|e| PersistenceError::LockPoisoned(e.to_string()))?;

        let stored = players
            .get_mut(&player.id)
            .ok_or_else(|| PersistenceError::NotFound {
                kind: "player".to_string(),
                id: player.id.to_string(),
            })?;
        *stored = player.clone();
        self.commits.fetch_add(1, Ordering::SeqCst);

        info!(player_id = %player.id, slots = player.wishlist.len(), "player updated");
        Ok(())
    }

    fn update_item(&self, item: &Item) -> Result<()> {
        self.check_available()?;
        let mut items = self
            .items
            .write()
            .map_err(|e| PersistenceError::LockPoisoned(e.to_string()))?;

        let stored = items
            .get_mut(&item.id)
            .ok_or_else(|| PersistenceError::NotFound {
                kind: "item".to_string(),
                id: item.id.to_string(),
            })?;
        *stored = item.clone();
        self.commits.fetch_add(1, Ordering::SeqCst);

        debug!(
            item_id = %item.id,
            individual = item.individual_prio.len(),
            class = item.class_prio.len(),
            "item updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_models::{ItemId, WishlistRank, WishlistSlot};

    fn seeded() -> InMemoryRepository {
        let snapshot = Snapshot::new(
            vec![Player::new(1u64, "Aela")],
            vec![Item::new(10u64, "Lionheart Helm")],
            Vec::new(),
            Vec::new(),
        );
        InMemoryRepository::from_snapshot(&snapshot)
    }

    #[test]
    fn test_update_player_replaces_stored_copy() {
        let repo = seeded();
        let player = Player::new(1u64, "Aela").with_wishlist(vec![WishlistSlot::new(
            WishlistRank::first(),
            ItemId::new(10),
        )]);

        repo.update_player(&player).unwrap();

        assert_eq!(repo.player(PlayerId::new(1)).unwrap().wishlist.len(), 1);
        assert_eq!(repo.commit_count(), 1);
    }

    #[test]
    fn test_update_unknown_player_not_found() {
        let repo = seeded();
        let result = repo.update_player(&Player::new(2u64, "Bran"));
        assert!(matches!(result, Err(PersistenceError::NotFound { .. })));
        assert_eq!(repo.commit_count(), 0);
    }

    #[test]
    fn test_update_item_replaces_stored_copy() {
        let repo = seeded();
        let mut item = repo.item(ItemId::new(10)).unwrap();
        item.name = "Lionheart Helm (H)".to_string();

        repo.update_item(&item).unwrap();
        assert_eq!(repo.item(ItemId::new(10)).unwrap().name, "Lionheart Helm (H)");
    }

    #[test]
    fn test_unavailable_rejects_and_keeps_state() {
        let repo = seeded();
        repo.set_unavailable(true);

        let mut item = repo.item(ItemId::new(10)).unwrap();
        item.name = "changed".to_string();
        let result = repo.update_item(&item);

        assert!(matches!(result, Err(PersistenceError::Unavailable(_))));
        assert_eq!(repo.item(ItemId::new(10)).unwrap().name, "Lionheart Helm");

        repo.set_unavailable(false);
        repo.update_item(&item).unwrap();
        assert_eq!(repo.commit_count(), 1);
    }
}
