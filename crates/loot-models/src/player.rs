//! Player types.
//!
//! A player owns a ranked wishlist of items and the set of raid days they
//! attended. The wishlist array is only ever replaced as a whole.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ids::{ItemId, PlayerId, SessionId};
use crate::rank::WishlistRank;

/// One filled wishlist position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WishlistSlot {
    /// Position in the wishlist.
    pub rank: WishlistRank,
    /// Wanted item.
    pub item_id: ItemId,
}

impl WishlistSlot {
    /// Creates a slot.
    pub fn new(rank: WishlistRank, item_id: ItemId) -> Self {
        Self { rank, item_id }
    }
}

/// A roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier for the player.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Ranked wishlist. Ranks are unique; gaps are unfilled slots.
    #[serde(default)]
    pub wishlist: Vec<WishlistSlot>,

    /// Raid days this player attended.
    #[serde(default)]
    pub attendance: BTreeSet<SessionId>,

    /// Fields owned by the backing store, carried through updates verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Player {
    /// Creates a player with an empty wishlist and no attendance.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wishlist: Vec::new(),
            attendance: BTreeSet::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the wishlist.
    pub fn with_wishlist(mut self, wishlist: Vec<WishlistSlot>) -> Self {
        self.wishlist = wishlist;
        self
    }

    /// Sets the attended raid days.
    pub fn with_attendance(mut self, sessions: impl IntoIterator<Item = SessionId>) -> Self {
        self.attendance = sessions.into_iter().collect();
        self
    }

    /// Returns true if the player attended the given raid day.
    pub fn attended(&self, session: SessionId) -> bool {
        self.attendance.contains(&session)
    }
}
