//! Priority edit sessions with setter provenance.
//!
//! Each item has two independent 3-slot categories: individual (keyed by
//! player) and class (keyed by class name). An edit session snapshots one
//! category, lets the caller change working values per rank, and on commit
//! emits the new slot array.
//!
//! # Provenance
//!
//! A committed slot keeps its original `set_by` when its value equals the
//! snapshot value at the same rank. Any new or changed value is credited to
//! the acting player. Re-saving an untouched slot never moves credit.

use std::fmt;
use std::marker::PhantomData;

use loot_models::{Catalog, ClassName, Item, ItemId, PlayerId, PrioRank, PrioSlot};
use loot_persistence::Repository;
use tracing::{debug, info};

use crate::error::{RankingError, Result};
use crate::ranked_list::RankedList;

/// One priority category of an item.
pub trait PriorityCategory {
    /// What a slot in this category prioritizes.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Category name for logs.
    const NAME: &'static str;

    /// The category's current slots on an item.
    fn slots(item: &Item) -> &[PrioSlot<Self::Value>];

    /// Copy of `item` with only this category's slots replaced.
    fn with_slots(item: &Item, slots: Vec<PrioSlot<Self::Value>>) -> Item;

    /// Values that count as "no value" are stored as an absent slot.
    fn is_empty(_value: &Self::Value) -> bool {
        false
    }

    /// Checks a value's references against the catalog.
    fn validate(_value: &Self::Value, _catalog: &Catalog) -> Result<()> {
        Ok(())
    }
}

/// Per-player priority.
#[derive(Debug, Clone, Copy)]
pub struct Individual;

impl PriorityCategory for Individual {
    type Value = PlayerId;

    const NAME: &'static str = "individual";

    fn slots(item: &Item) -> &[PrioSlot<PlayerId>] {
        &item.individual_prio
    }

    fn with_slots(item: &Item, slots: Vec<PrioSlot<PlayerId>>) -> Item {
        Item {
            individual_prio: slots,
            ..item.clone()
        }
    }

    fn validate(value: &PlayerId, catalog: &Catalog) -> Result<()> {
        if catalog.contains_player(*value) {
            Ok(())
        } else {
            Err(RankingError::UnknownPlayer(*value))
        }
    }
}

/// Per-class priority.
#[derive(Debug, Clone, Copy)]
pub struct Class;

impl PriorityCategory for Class {
    type Value = ClassName;

    const NAME: &'static str = "class";

    fn slots(item: &Item) -> &[PrioSlot<ClassName>] {
        &item.class_prio
    }

    fn with_slots(item: &Item, slots: Vec<PrioSlot<ClassName>>) -> Item {
        Item {
            class_prio: slots,
            ..item.clone()
        }
    }

    fn is_empty(value: &ClassName) -> bool {
        value.is_blank()
    }
}

/// Snapshot value at one rank: the value and who set it.
#[derive(Debug, Clone, PartialEq)]
struct Provenanced<T> {
    value: T,
    set_by: PlayerId,
}

/// An open edit of one priority category on one item.
///
/// Private to the caller that opened it; dropping it (or calling
/// [`discard`](Self::discard)) abandons the working values.
#[derive(Debug, Clone)]
pub struct PriorityEdit<C: PriorityCategory> {
    item_id: ItemId,
    snapshot: RankedList<Provenanced<C::Value>, 3>,
    working: RankedList<C::Value, 3>,
    _category: PhantomData<C>,
}

/// Edit of an item's individual priority.
pub type IndividualEdit = PriorityEdit<Individual>;

/// Edit of an item's class priority.
pub type ClassEdit = PriorityEdit<Class>;

impl<C: PriorityCategory> PriorityEdit<C> {
    /// Opens an edit, capturing the category's current slots.
    ///
    /// # Errors
    ///
    /// `DuplicateRank` if the stored category violates rank uniqueness.
    pub fn open(item: &Item) -> Result<Self> {
        let snapshot = RankedList::from_slots(
            C::slots(item)
                .iter()
                .filter(|slot| !C::is_empty(&slot.value))
                .map(|slot| {
                    (
                        slot.rank,
                        Provenanced {
                            value: slot.value.clone(),
                            set_by: slot.set_by,
                        },
                    )
                }),
        )?;

        let working = RankedList::from_slots(
            snapshot
                .iter()
                .map(|(rank, entry)| (rank, entry.value.clone())),
        )?;

        debug!(
            item_id = %item.id,
            category = C::NAME,
            filled = snapshot.len(),
            "priority edit opened"
        );

        Ok(Self {
            item_id: item.id,
            snapshot,
            working,
            _category: PhantomData,
        })
    }

    /// Sets the working value at a rank. An empty value clears the rank.
    pub fn set(&mut self, rank: PrioRank, value: C::Value) {
        if C::is_empty(&value) {
            self.working.remove(rank);
        } else {
            self.working.insert(rank, value);
        }
    }

    /// Clears the working value at a rank.
    pub fn clear(&mut self, rank: PrioRank) {
        self.working.remove(rank);
    }

    /// Current working value at a rank.
    pub fn value(&self, rank: PrioRank) -> Option<&C::Value> {
        self.working.get(rank)
    }

    /// Who set the snapshot value at a rank.
    pub fn set_by(&self, rank: PrioRank) -> Option<PlayerId> {
        self.snapshot.get(rank).map(|entry| entry.set_by)
    }

    fn is_unchanged(&self, rank: PrioRank, value: &C::Value) -> bool {
        self.snapshot.get(rank).is_some_and(|entry| entry.value == *value)
    }

    /// Returns true if any working value differs from the snapshot.
    pub fn is_dirty(&self) -> bool {
        PrioRank::all().any(|rank| {
            self.working.get(rank) != self.snapshot.get(rank).map(|entry| &entry.value)
        })
    }

    /// Builds the committed slot array, in rank order.
    pub fn commit(self, acting: PlayerId) -> Vec<PrioSlot<C::Value>> {
        let snapshot = self.snapshot;
        self.working
            .into_slots()
            .into_iter()
            .map(|(rank, value)| {
                let set_by = match snapshot.get(rank) {
                    Some(entry) if entry.value == value => entry.set_by,
                    _ => acting,
                };
                PrioSlot::new(rank, value, set_by)
            })
            .collect()
    }

    /// Validates, builds and hands the updated item to the repository.
    ///
    /// `item` should be the caller's latest snapshot of the same item; only
    /// this category's array is replaced, every other field is kept. Only
    /// values that differ from the opened snapshot are checked against the
    /// catalog; untouched slots are carried over as stored.
    ///
    /// # Errors
    ///
    /// `ItemMismatch`, `UnknownPlayer` before any repository call;
    /// `Persistence` if the repository fails.
    pub fn commit_to<R: Repository + ?Sized>(
        self,
        item: &Item,
        acting: PlayerId,
        catalog: &Catalog,
        repo: &R,
    ) -> Result<Item> {
        if item.id != self.item_id {
            return Err(RankingError::ItemMismatch {
                expected: self.item_id,
                actual: item.id,
            });
        }
        if !catalog.contains_player(acting) {
            return Err(RankingError::UnknownPlayer(acting));
        }
        for (rank, value) in self.working.iter() {
            if !self.is_unchanged(rank, value) {
                C::validate(value, catalog)?;
            }
        }

        let slots = self.commit(acting);
        let updated = C::with_slots(item, slots);
        repo.update_item(&updated)?;

        info!(item_id = %updated.id, category = C::NAME, acting = %acting, "priority committed");
        Ok(updated)
    }

    /// Abandons the edit. Nothing is sent anywhere.
    pub fn discard(self) {
        debug!(item_id = %self.item_id, category = C::NAME, "priority edit discarded");
    }
}
