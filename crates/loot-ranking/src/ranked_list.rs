//! RankedList - sparse ranked slots with move-and-renumber.
//!
//! Slots are keyed by `Rank<MAX>` in a `BTreeMap`, so ranks are unique and
//! in range by construction. Gaps are unfilled positions.
//!
//! # Move Rules
//!
//! `move_slot(source, dest)` renumbers the slots between the two ranks:
//!
//! - `source < dest`: ranks in `(source, dest]` shift up by one (rank - 1)
//! - `source > dest`: ranks in `[dest, source)` shift down by one (rank + 1)
//! - the slot at `source`, if any, lands on `dest`
//!
//! The shift happens even when `source` is unfilled. Ranks outside the
//! moved span are untouched.

use std::collections::BTreeMap;

use loot_models::Rank;
use tracing::debug;

use crate::error::{RankingError, Result};

/// Sparse ranked list with at most `MAX` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedList<T, const MAX: u8> {
    slots: BTreeMap<Rank<MAX>, T>,
}

impl<T, const MAX: u8> Default for RankedList<T, MAX> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<T: Clone, const MAX: u8> RankedList<T, MAX> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from raw `(rank, value)` pairs.
    ///
    /// # Errors
    ///
    /// `DuplicateRank` if two pairs share a rank.
    pub fn from_slots<I>(slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Rank<MAX>, T)>,
    {
        let mut list = Self::new();
        for (rank, value) in slots {
            if list.slots.insert(rank, value).is_some() {
                return Err(RankingError::DuplicateRank(rank.get()));
            }
        }
        Ok(list)
    }

    /// Returns the value at a rank.
    pub fn get(&self, rank: Rank<MAX>) -> Option<&T> {
        self.slots.get(&rank)
    }

    /// Fills a rank, returning the value it replaced.
    pub fn insert(&mut self, rank: Rank<MAX>, value: T) -> Option<T> {
        self.slots.insert(rank, value)
    }

    /// Clears a rank, returning its value.
    pub fn remove(&mut self, rank: Rank<MAX>) -> Option<T> {
        self.slots.remove(&rank)
    }

    /// Number of filled ranks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no rank is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Filled slots in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank<MAX>, &T)> {
        self.slots.iter().map(|(rank, value)| (*rank, value))
    }

    /// Consumes the list, yielding filled slots in rank order.
    pub fn into_slots(self) -> Vec<(Rank<MAX>, T)> {
        self.slots.into_iter().collect()
    }

    /// Returns a new list with the slot at `source` moved to `dest`.
    ///
    /// The input is left untouched; the caller decides whether to commit.
    pub fn move_slot(&self, source: Rank<MAX>, dest: Rank<MAX>) -> Self {
        if source == dest {
            return self.clone();
        }

        let slots = self
            .slots
            .iter()
            .map(|(&rank, value)| (shifted_rank(rank, source, dest), value.clone()))
            .collect();

        debug!(
            source = source.get(),
            dest = dest.get(),
            occupied = self.slots.contains_key(&source),
            "ranked slot moved"
        );

        Self { slots }
    }
}

/// Where `rank` ends up when the slot at `source` moves to `dest`.
fn shifted_rank<const MAX: u8>(rank: Rank<MAX>, source: Rank<MAX>, dest: Rank<MAX>) -> Rank<MAX> {
    if rank == source {
        return dest;
    }
    if source < dest && rank > source && rank <= dest {
        // rank > source >= 1, so a predecessor exists
        return rank.checked_pred().unwrap_or(rank);
    }
    if source > dest && rank >= dest && rank < source {
        // rank < source <= MAX, so a successor exists
        return rank.checked_succ().unwrap_or(rank);
    }
    rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type List = RankedList<char, 10>;

    fn rank(n: u8) -> Rank<10> {
        Rank::new(n).unwrap()
    }

    fn list(slots: &[(u8, char)]) -> List {
        List::from_slots(slots.iter().map(|&(r, v)| (rank(r), v))).unwrap()
    }

    fn pairs(list: &List) -> Vec<(u8, char)> {
        list.iter().map(|(r, v)| (r.get(), *v)).collect()
    }

    #[test]
    fn test_move_later_shifts_span_up() {
        let before = list(&[(1, 'A'), (3, 'B')]);
        let after = before.move_slot(rank(1), rank(3));
        assert_eq!(pairs(&after), vec![(2, 'B'), (3, 'A')]);
    }

    #[test]
    fn test_move_earlier_shifts_span_down() {
        let before = list(&[(1, 'A'), (2, 'B'), (4, 'C'), (6, 'D')]);
        let after = before.move_slot(rank(4), rank(1));
        assert_eq!(pairs(&after), vec![(1, 'C'), (2, 'A'), (3, 'B'), (6, 'D')]);
    }

    #[test]
    fn test_move_does_not_mutate_input() {
        let before = list(&[(1, 'A'), (3, 'B')]);
        let _ = before.move_slot(rank(1), rank(3));
        assert_eq!(pairs(&before), vec![(1, 'A'), (3, 'B')]);
    }

    #[test]
    fn test_move_from_empty_rank_still_shifts() {
        let before = list(&[(1, 'A'), (3, 'B')]);
        let after = before.move_slot(rank(2), rank(5));
        assert_eq!(pairs(&after), vec![(1, 'A'), (2, 'B')]);

        let after = before.move_slot(rank(5), rank(1));
        assert_eq!(pairs(&after), vec![(2, 'A'), (4, 'B')]);
    }

    #[test]
    fn test_move_to_same_rank_is_identity() {
        let before = list(&[(2, 'A'), (7, 'B')]);
        assert_eq!(before.move_slot(rank(7), rank(7)), before);
    }

    #[test]
    fn test_move_to_bottom_rank() {
        let before = list(&[(1, 'A'), (10, 'B')]);
        let after = before.move_slot(rank(1), rank(10));
        assert_eq!(pairs(&after), vec![(9, 'B'), (10, 'A')]);
    }

    #[test]
    fn test_from_slots_rejects_duplicate_rank() {
        let result = List::from_slots(vec![(rank(2), 'A'), (rank(2), 'B')]);
        assert!(matches!(result, Err(RankingError::DuplicateRank(2))));
    }

    #[test]
    fn test_insert_remove() {
        let mut l = List::new();
        assert!(l.is_empty());
        assert_eq!(l.insert(rank(4), 'X'), None);
        assert_eq!(l.insert(rank(4), 'Y'), Some('X'));
        assert_eq!(l.get(rank(4)), Some(&'Y'));
        assert_eq!(l.remove(rank(4)), Some('Y'));
        assert_eq!(l.len(), 0);
    }

    fn list_strategy() -> impl Strategy<Value = List> {
        proptest::collection::btree_map(1u8..=10, any::<char>(), 0..=6).prop_map(|slots| {
            List::from_slots(slots.into_iter().map(|(r, v)| (rank(r), v)))
                .unwrap_or_else(|e| panic!("generated duplicate rank: {e}"))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn move_to_same_rank_is_identity(l in list_strategy(), r in 1u8..=10) {
            prop_assert_eq!(l.move_slot(rank(r), rank(r)), l);
        }

        #[test]
        fn moves_never_lose_or_merge_slots(
            l in list_strategy(),
            moves in proptest::collection::vec((1u8..=10, 1u8..=10), 0..20),
        ) {
            let mut current = l.clone();
            for (source, dest) in moves {
                let moved_value = current.get(rank(source)).copied();
                let next = current.move_slot(rank(source), rank(dest));

                prop_assert_eq!(next.len(), current.len());
                if let Some(value) = moved_value {
                    prop_assert_eq!(next.get(rank(dest)), Some(&value));
                }

                let (lo, hi) = if source < dest { (source, dest) } else { (dest, source) };
                for (r, value) in current.iter() {
                    if r.get() < lo || r.get() > hi {
                        prop_assert_eq!(next.get(r), Some(value));
                    }
                }
                current = next;
            }

            let mut values: Vec<char> = current.iter().map(|(_, v)| *v).collect();
            let mut original: Vec<char> = l.iter().map(|(_, v)| *v).collect();
            values.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(values, original);
        }
    }
}
