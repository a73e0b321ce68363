//! Type-safe ID wrappers for loot tracker entities.
//!
//! Ids are assigned by the backing store and only ever compared, ordered
//! and displayed here. A higher id means a more recently created record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw id value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw id value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifies a player on the roster.
    PlayerId
);
define_id!(
    /// Identifies a lootable item.
    ItemId
);
define_id!(
    /// Identifies a raid day.
    SessionId
);
define_id!(
    /// Identifies a loot grant record.
    LootEventId
);
