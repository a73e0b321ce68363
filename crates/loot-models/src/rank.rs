//! Bounded rank type.
//!
//! A `Rank<MAX>` is an integer in `1..=MAX`. Every constructor checks the
//! bound, including deserialization, so a typed rank is always in range.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RankError;

/// Column labels for ranks, in order.
const LABELS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

/// A priority position within a category of at most `MAX` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank<const MAX: u8>(u8);

/// Rank within a player's wishlist.
pub type WishlistRank = Rank<10>;

/// Rank within one priority category of an item.
pub type PrioRank = Rank<3>;

impl<const MAX: u8> Rank<MAX> {
    /// Creates a rank, checking it lies in `1..=MAX`.
    pub fn new(value: u8) -> Result<Self, RankError> {
        if (1..=MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RankError::OutOfRange { value, max: MAX })
        }
    }

    /// The top rank (1).
    pub const fn first() -> Self {
        Self(1)
    }

    /// The bottom rank (`MAX`).
    pub const fn last() -> Self {
        Self(MAX)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Enumerates every rank of the domain, top first.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX).map(Self)
    }

    /// The rank one position higher (numerically smaller), if any.
    pub fn checked_pred(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    /// The rank one position lower (numerically larger), if any.
    pub fn checked_succ(self) -> Option<Self> {
        (self.0 < MAX).then(|| Self(self.0 + 1))
    }

    /// Ordinal column label ("First", "Second", ...).
    pub fn label(self) -> &'static str {
        LABELS.get(usize::from(self.0) - 1).copied().unwrap_or("")
    }
}

impl<const MAX: u8> TryFrom<u8> for Rank<MAX> {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const MAX: u8> From<Rank<MAX>> for u8 {
    fn from(rank: Rank<MAX>) -> Self {
        rank.0
    }
}

impl<const MAX: u8> fmt::Display for Rank<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(WishlistRank::new(1).is_ok());
        assert!(WishlistRank::new(10).is_ok());
        assert_eq!(
            WishlistRank::new(11),
            Err(RankError::OutOfRange { value: 11, max: 10 })
        );
        assert!(PrioRank::new(0).is_err());
        assert!(PrioRank::new(4).is_err());
    }

    #[test]
    fn test_all_enumerates_domain_in_order() {
        let ranks: Vec<u8> = PrioRank::all().map(Rank::get).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(WishlistRank::all().count(), 10);
    }

    #[test]
    fn test_neighbors_stay_in_domain() {
        assert_eq!(PrioRank::first().checked_pred(), None);
        assert_eq!(PrioRank::last().checked_succ(), None);
        assert_eq!(PrioRank::first().checked_succ().map(Rank::get), Some(2));
    }

    #[test]
    fn test_labels() {
        assert_eq!(WishlistRank::first().label(), "First");
        assert_eq!(WishlistRank::last().label(), "Tenth");
        assert_eq!(PrioRank::last().label(), "Third");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let ok: PrioRank = serde_json::from_str("2").unwrap();
        assert_eq!(ok.get(), 2);

        let err = serde_json::from_str::<PrioRank>("4").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }
}
