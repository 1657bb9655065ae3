// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{InvalidIndexError, Item, ItemSource};

/// Sectioning capability of a list adapter.
///
/// Labels are ordered as their headers appear in the list. Ordinals index
/// into [`SectionIndexer::section_labels`].
pub trait SectionIndexer {
    /// Ordered, distinct section labels.
    fn section_labels(&self) -> &[String];

    /// Position of the header row for section `ordinal`.
    fn position_for_section(&self, ordinal: usize) -> Result<usize, InvalidIndexError>;

    /// Ordinal of the section containing `position`, if any header precedes it.
    fn section_for_position(&self, position: usize) -> Option<usize>;
}

/// Section labels and first positions derived from a list of items.
///
/// Construction is a single `O(n)` pass; all lookups afterwards are `O(1)`
/// except [`SectionIndexer::section_for_position`], which is a binary search.
#[derive(Clone, Debug, Default)]
pub struct SectionIndex {
    labels: Vec<String>,
    first_positions: Vec<usize>,
    ordinals: HashMap<String, usize>,
}

impl SectionIndex {
    /// Derives the index from every header row in `source`.
    ///
    /// A header whose content repeats an earlier header's content does not
    /// start a new section; the first occurrence wins.
    pub fn new<S: ItemSource + ?Sized>(source: &S) -> Self {
        let mut index = Self::default();
        for position in 0..source.item_count() {
            if !source.is_section_header(position) {
                continue;
            }
            let Some(label) = source.content_at(position) else {
                continue;
            };
            if index.ordinals.contains_key(label) {
                continue;
            }
            let ordinal = index.labels.len();
            index.ordinals.insert(String::from(label), ordinal);
            index.labels.push(String::from(label));
            index.first_positions.push(position);
        }
        index
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the source had no header rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of section `ordinal`.
    #[must_use]
    pub fn label_for_ordinal(&self, ordinal: usize) -> Option<&str> {
        self.labels.get(ordinal).map(String::as_str)
    }

    /// Ordinal of the section labelled `label`.
    #[must_use]
    pub fn ordinal_of(&self, label: &str) -> Option<usize> {
        self.ordinals.get(label).copied()
    }

    /// Position of the header row labelled `label`.
    pub fn first_item_position(&self, label: &str) -> Result<usize, InvalidIndexError> {
        self.ordinal_of(label)
            .map(|ordinal| self.first_positions[ordinal])
            .ok_or_else(|| InvalidIndexError::UnknownLabel {
                label: String::from(label),
            })
    }
}

impl SectionIndexer for SectionIndex {
    fn section_labels(&self) -> &[String] {
        &self.labels
    }

    fn position_for_section(&self, ordinal: usize) -> Result<usize, InvalidIndexError> {
        self.first_positions
            .get(ordinal)
            .copied()
            .ok_or(InvalidIndexError::OrdinalOutOfRange {
                ordinal,
                len: self.len(),
            })
    }

    fn section_for_position(&self, position: usize) -> Option<usize> {
        let started = self.first_positions.partition_point(|&p| p <= position);
        started.checked_sub(1)
    }
}

/// An owned item list together with its derived [`SectionIndex`].
///
/// This is the simplest complete adapter: it answers both the
/// [`ItemSource`] and the [`SectionIndexer`] queries.
#[derive(Clone, Debug, Default)]
pub struct SectionedItems {
    items: Vec<Item>,
    index: SectionIndex,
}

impl SectionedItems {
    /// Wraps `items` and derives their index.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let index = SectionIndex::new(&items);
        Self { items, index }
    }

    /// Replaces the items and rebuilds the index.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.index = SectionIndex::new(&items);
        self.items = items;
    }

    /// The wrapped rows.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The derived index.
    #[must_use]
    pub fn index(&self) -> &SectionIndex {
        &self.index
    }
}

impl ItemSource for SectionedItems {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn is_section_header(&self, position: usize) -> bool {
        self.items.is_section_header(position)
    }

    fn content_at(&self, position: usize) -> Option<&str> {
        self.items.content_at(position)
    }
}

impl SectionIndexer for SectionedItems {
    fn section_labels(&self) -> &[String] {
        self.index.section_labels()
    }

    fn position_for_section(&self, ordinal: usize) -> Result<usize, InvalidIndexError> {
        self.index.position_for_section(ordinal)
    }

    fn section_for_position(&self, position: usize) -> Option<usize> {
        self.index.section_for_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn fruit() -> Vec<Item> {
        vec![
            Item::header("A"),
            Item::entry("Alpha"),
            Item::entry("Ant"),
            Item::header("B"),
            Item::entry("Banana"),
        ]
    }

    #[test]
    fn labels_follow_header_order() {
        let index = SectionIndex::new(&fruit());
        assert_eq!(index.section_labels(), ["A", "B"]);
        assert_eq!(index.label_for_ordinal(0), Some("A"));
        assert_eq!(index.label_for_ordinal(1), Some("B"));
        assert_eq!(index.label_for_ordinal(2), None);
    }

    #[test]
    fn first_item_position_points_at_header() {
        let items = fruit();
        let index = SectionIndex::new(&items);
        for label in index.section_labels() {
            let position = index.first_item_position(label).unwrap();
            assert_eq!(items[position], Item::header(label.as_str()));
        }
        assert_eq!(index.first_item_position("B"), Ok(3));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let index = SectionIndex::new(&fruit());
        assert_eq!(
            index.first_item_position("Z"),
            Err(InvalidIndexError::UnknownLabel {
                label: String::from("Z")
            })
        );
    }

    #[test]
    fn ordinal_out_of_range_is_an_error() {
        let index = SectionIndex::new(&fruit());
        assert_eq!(index.position_for_section(1), Ok(3));
        assert_eq!(
            index.position_for_section(2),
            Err(InvalidIndexError::OrdinalOutOfRange { ordinal: 2, len: 2 })
        );
    }

    #[test]
    fn section_for_position_uses_preceding_header() {
        let mut items = vec![Item::entry("orphan")];
        items.extend(fruit());
        let index = SectionIndex::new(&items);
        assert_eq!(index.section_for_position(0), None);
        assert_eq!(index.section_for_position(1), Some(0));
        assert_eq!(index.section_for_position(3), Some(0));
        assert_eq!(index.section_for_position(4), Some(1));
        assert_eq!(index.section_for_position(99), Some(1));
    }

    #[test]
    fn repeated_header_content_keeps_first_section() {
        let items = vec![
            Item::header("A"),
            Item::entry("Ant"),
            Item::header("A"),
            Item::entry("Axe"),
        ];
        let index = SectionIndex::new(&items);
        assert_eq!(index.len(), 1);
        assert_eq!(index.first_item_position("A"), Ok(0));
    }

    #[test]
    fn empty_source_has_no_sections() {
        let index = SectionIndex::new(&Vec::<Item>::new());
        assert!(index.is_empty());
        assert_eq!(index.section_for_position(0), None);
    }

    #[test]
    fn sectioned_items_rebuilds_on_set() {
        let mut adapter = SectionedItems::new(fruit());
        assert_eq!(adapter.section_labels().len(), 2);

        adapter.set_items(vec![Item::header("C"), Item::entry("Cat")]);
        assert_eq!(adapter.section_labels(), ["C"]);
        assert_eq!(adapter.position_for_section(0), Ok(0));
        assert_eq!(adapter.item_count(), 2);
    }
}
