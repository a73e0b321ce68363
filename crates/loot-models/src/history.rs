//! Raid days and the loot grant log.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, LootEventId, PlayerId, SessionId};

/// A raid day. Higher ids are more recent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the raid day.
    pub id: SessionId,
    /// Display name, used as a column header.
    pub name: String,
}

impl Session {
    /// Creates a raid day.
    pub fn new(id: impl Into<SessionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One loot grant. Records are append-only and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEvent {
    /// Unique identifier; higher ids are more recent.
    pub id: LootEventId,
    /// Receiving player.
    pub player_id: PlayerId,
    /// Granted item.
    pub item_id: ItemId,
    /// Raid day the grant happened on.
    pub session_id: SessionId,
}

impl LootEvent {
    /// Creates a grant record.
    pub fn new(
        id: impl Into<LootEventId>,
        player_id: impl Into<PlayerId>,
        item_id: impl Into<ItemId>,
        session_id: impl Into<SessionId>,
    ) -> Self {
        Self {
            id: id.into(),
            player_id: player_id.into(),
            item_id: item_id.into(),
            session_id: session_id.into(),
        }
    }
}
