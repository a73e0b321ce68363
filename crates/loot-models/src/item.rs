//! Item types.
//!
//! Items carry two independent priority categories: one keyed by player,
//! one keyed by class name. Each slot records who set its current value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{ItemId, PlayerId};
use crate::rank::PrioRank;

/// A character class name used for class priority.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Wraps a class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank class name counts as "no value".
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One filled priority position with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrioSlot<T> {
    /// Position within the category.
    pub rank: PrioRank,
    /// Prioritized player or class.
    pub value: T,
    /// Player credited with choosing this value.
    pub set_by: PlayerId,
}

impl<T> PrioSlot<T> {
    /// Creates a slot.
    pub fn new(rank: PrioRank, value: T, set_by: PlayerId) -> Self {
        Self {
            rank,
            value,
            set_by,
        }
    }
}

/// A lootable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Per-player priority, ranks 1..=3.
    #[serde(default)]
    pub individual_prio: Vec<PrioSlot<PlayerId>>,

    /// Per-class priority, ranks 1..=3.
    #[serde(default)]
    pub class_prio: Vec<PrioSlot<ClassName>>,

    /// Fields owned by the backing store, carried through updates verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Creates an item with no priorities.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            individual_prio: Vec::new(),
            class_prio: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the individual priority slots.
    pub fn with_individual_prio(mut self, slots: Vec<PrioSlot<PlayerId>>) -> Self {
        self.individual_prio = slots;
        self
    }

    /// Sets the class priority slots.
    pub fn with_class_prio(mut self, slots: Vec<PrioSlot<ClassName>>) -> Self {
        self.class_prio = slots;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_class_name() {
        assert!(ClassName::new("  ").is_blank());
        assert!(ClassName::new("").is_blank());
        assert!(!ClassName::new("Mage").is_blank());
    }

    #[test]
    fn test_item_deserializes_both_categories() {
        let json = r#"{
            "id": 12,
            "name": "Staff of Dominance",
            "individual_prio": [{"rank": 1, "value": 4, "set_by": 2}],
            "class_prio": [{"rank": 3, "value": "Warlock", "set_by": 2}],
            "tier": 2
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.individual_prio[0].value, PlayerId::new(4));
        assert_eq!(item.class_prio[0].value.as_str(), "Warlock");
        assert_eq!(item.class_prio[0].rank.get(), 3);
        assert_eq!(item.extra["tier"], 2);
    }

    #[test]
    fn test_prio_rank_above_three_rejected() {
        let json = r#"{
            "id": 1,
            "name": "x",
            "class_prio": [{"rank": 4, "value": "Rogue", "set_by": 1}]
        }"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
