//! Wishlist management.
//!
//! A wishlist is a [`RankedList`] of item ids over ranks 1..=10. Commits
//! replace the player's whole wishlist array; there are no partial updates.

use loot_models::{Catalog, ItemId, Player, WishlistRank, WishlistSlot};
use loot_persistence::Repository;
use tracing::{debug, info};

use crate::error::{RankingError, Result};
use crate::ranked_list::RankedList;

/// A player's wishlist as a ranked list.
pub type Wishlist = RankedList<ItemId, 10>;

/// One wishlist column for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEntry {
    /// Column position.
    pub rank: WishlistRank,
    /// Wanted item, if the rank is filled.
    pub item_id: Option<ItemId>,
    /// Resolved item name, if filled and known.
    pub item_name: Option<String>,
}

/// Validates and commits wishlists against a known catalog.
pub struct WishlistManager<'a> {
    catalog: &'a Catalog,
}

impl<'a> WishlistManager<'a> {
    /// Creates a manager bound to a catalog snapshot.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Reads a player's stored wishlist.
    ///
    /// # Errors
    ///
    /// `DuplicateRank` if the stored array violates rank uniqueness.
    pub fn wishlist(&self, player: &Player) -> Result<Wishlist> {
        to_wishlist(&player.wishlist)
    }

    /// Moves one wishlist slot. See [`RankedList::move_slot`].
    pub fn move_slot(
        &self,
        wishlist: &Wishlist,
        source: WishlistRank,
        dest: WishlistRank,
    ) -> Wishlist {
        wishlist.move_slot(source, dest)
    }

    /// Checks a proposed wishlist for `player`.
    ///
    /// # Errors
    ///
    /// `UnknownPlayer`, `DuplicateRank` or `UnknownItem`.
    pub fn validate(&self, player: &Player, slots: &[WishlistSlot]) -> Result<Wishlist> {
        if !self.catalog.contains_player(player.id) {
            return Err(RankingError::UnknownPlayer(player.id));
        }

        let wishlist = to_wishlist(slots)?;
        if let Some((_, &item_id)) = wishlist
            .iter()
            .find(|(_, item_id)| !self.catalog.contains_item(**item_id))
        {
            return Err(RankingError::UnknownItem(item_id));
        }

        Ok(wishlist)
    }

    /// Replaces the player's wishlist with `slots` and hands it to the repository.
    ///
    /// Returns the player as committed. On any error nothing is sent and
    /// `player` is unchanged.
    pub fn commit<R: Repository + ?Sized>(
        &self,
        player: &Player,
        slots: Vec<WishlistSlot>,
        repo: &R,
    ) -> Result<Player> {
        let wishlist = self.validate(player, &slots)?;

        let updated = Player {
            wishlist: to_slots(wishlist),
            ..player.clone()
        };
        repo.update_player(&updated)?;

        info!(player_id = %updated.id, slots = updated.wishlist.len(), "wishlist committed");
        Ok(updated)
    }

    /// Moves a wishlist column and commits if anything changed.
    ///
    /// `source` and `dest` are raw column positions as received from a
    /// caller. Returns whether a commit was issued.
    ///
    /// # Errors
    ///
    /// `Rank` if either position is outside 1..=10, plus the errors of
    /// [`commit`](Self::commit).
    pub fn move_and_commit<R: Repository + ?Sized>(
        &self,
        player: &Player,
        source: u8,
        dest: u8,
        repo: &R,
    ) -> Result<bool> {
        let source = WishlistRank::new(source)?;
        let dest = WishlistRank::new(dest)?;

        let current = self.wishlist(player)?;
        let moved = self.move_slot(&current, source, dest);
        if moved == current {
            debug!(
                player_id = %player.id,
                source = source.get(),
                dest = dest.get(),
                "wishlist move changed nothing"
            );
            return Ok(false);
        }

        self.commit(player, to_slots(moved), repo)?;
        Ok(true)
    }

    /// All ten wishlist columns in rank order, with item names resolved.
    pub fn view(&self, player: &Player) -> Result<Vec<WishlistEntry>> {
        let wishlist = self.wishlist(player)?;
        Ok(WishlistRank::all()
            .map(|rank| {
                let item_id = wishlist.get(rank).copied();
                WishlistEntry {
                    rank,
                    item_id,
                    item_name: item_id
                        .and_then(|id| self.catalog.item_name(id))
                        .map(str::to_string),
                }
            })
            .collect())
    }
}

fn to_wishlist(slots: &[WishlistSlot]) -> Result<Wishlist> {
    Wishlist::from_slots(slots.iter().map(|slot| (slot.rank, slot.item_id)))
}

fn to_slots(wishlist: Wishlist) -> Vec<WishlistSlot> {
    wishlist
        .into_slots()
        .into_iter()
        .map(|(rank, item_id)| WishlistSlot::new(rank, item_id))
        .collect()
}
