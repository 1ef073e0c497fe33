// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, de-duplicated candidate lists with one selected entry.
//!
//! A [`ValueSet`] backs every choice property. It keeps candidates in
//! first-seen order, drops later duplicates, and tracks which candidate is
//! selected. Selecting a value that is not a candidate appends it, so the
//! selection is always a member of the set.
//!
//! ```rust
//! use understory_property_sheet::{Reselection, ValueSet};
//!
//! let mut sizes = ValueSet::from_candidates(["S", "M", "M", "L"]);
//! assert_eq!(sizes.items(), &["S", "M", "L"]);
//!
//! sizes.select("XL");
//! assert_eq!(sizes.items(), &["S", "M", "L", "XL"]);
//!
//! assert_eq!(sizes.replace(["M", "XL"]), Reselection::Kept);
//! assert_eq!(sizes.replace(["A", "B"]), Reselection::Reselected);
//! assert_eq!(sizes.selected(), Some(&"A"));
//! assert_eq!(sizes.replace([]), Reselection::Cleared);
//! assert_eq!(sizes.selected(), None);
//! ```

use alloc::vec::Vec;

/// What happened to the selection when the candidates were replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reselection {
    /// The selected value is still a candidate and stays selected.
    Kept,
    /// The selected value is gone; the first new candidate is selected.
    Reselected,
    /// There are no candidates; nothing is selected.
    Cleared,
}

/// Ordered, de-duplicated candidates plus an optional selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSet<T> {
    items: Vec<T>,
    selected: Option<usize>,
    revision: u64,
}

impl<T> Default for ValueSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            revision: 0,
        }
    }
}

impl<T: PartialEq> ValueSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects candidates, keeping the first occurrence of each. Nothing is
    /// selected.
    ///
    /// De-duplication is quadratic; with the `hashbrown` feature
    /// [`ValueSet::from_candidates_hashed`] is available for large inputs.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: dedup(candidates),
            selected: None,
            revision: 0,
        }
    }

    /// Returns the candidates in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `value` is a candidate.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Returns the index of `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Returns the selected value.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.selected.map(|idx| &self.items[idx])
    }

    /// Returns the index of the selected value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selects `value`, appending it if it is not a candidate yet.
    ///
    /// Returns its index.
    pub fn select(&mut self, value: T) -> usize {
        let idx = match self.position(&value) {
            Some(idx) => idx,
            None => {
                self.items.push(value);
                self.items.len() - 1
            }
        };
        if self.selected != Some(idx) {
            self.selected = Some(idx);
            self.bump();
        }
        idx
    }

    /// Clears the selection, keeping the candidates.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.bump();
        }
    }

    /// Replaces the candidates, keeping the selection if it survives.
    ///
    /// Otherwise the first new candidate is selected, or nothing if the new
    /// list is empty.
    pub fn replace<I>(&mut self, values: I) -> Reselection
    where
        I: IntoIterator<Item = T>,
    {
        let items = dedup(values);
        self.install(items)
    }

    /// Returns a counter that changes on every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn install(&mut self, items: Vec<T>) -> Reselection {
        let kept = self
            .selected()
            .and_then(|current| items.iter().position(|item| item == current));
        self.items = items;
        let outcome = match kept {
            Some(idx) => {
                self.selected = Some(idx);
                Reselection::Kept
            }
            None if self.items.is_empty() => {
                self.selected = None;
                Reselection::Cleared
            }
            None => {
                self.selected = Some(0);
                Reselection::Reselected
            }
        };
        self.bump();
        outcome
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn dedup<T: PartialEq, I: IntoIterator<Item = T>>(values: I) -> Vec<T> {
    let iter = values.into_iter();
    let mut items: Vec<T> = Vec::with_capacity(iter.size_hint().0);
    for value in iter {
        if !items.contains(&value) {
            items.push(value);
        }
    }
    items
}

#[cfg(feature = "hashbrown")]
impl<T> ValueSet<T>
where
    T: core::hash::Hash + Eq,
{
    /// Like [`ValueSet::from_candidates`], de-duplicating by hash.
    pub fn from_candidates_hashed<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: dedup_hashed(candidates),
            selected: None,
            revision: 0,
        }
    }

    /// Like [`ValueSet::replace`], de-duplicating by hash.
    pub fn replace_hashed<I>(&mut self, values: I) -> Reselection
    where
        I: IntoIterator<Item = T>,
    {
        let items = dedup_hashed(values);
        self.install(items)
    }
}

#[cfg(feature = "hashbrown")]
fn dedup_hashed<T, I>(values: I) -> Vec<T>
where
    T: core::hash::Hash + Eq,
    I: IntoIterator<Item = T>,
{
    use core::hash::BuildHasher;
    use hashbrown::{DefaultHashBuilder, HashTable};

    let iter = values.into_iter();
    let cap = iter.size_hint().0;
    let build_hasher = DefaultHashBuilder::default();
    let mut items: Vec<T> = Vec::with_capacity(cap);
    // Indices into `items`, keyed by the hash of the item they point at.
    let mut seen: HashTable<usize> = HashTable::with_capacity(cap);

    for value in iter {
        let hash = build_hasher.hash_one(&value);
        if seen.find(hash, |&idx| items[idx] == value).is_some() {
            continue;
        }
        let idx = items.len();
        seen.insert_unique(hash, idx, |&existing| build_hasher.hash_one(&items[existing]));
        items.push(value);
    }
    items
}
