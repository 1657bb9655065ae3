// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// One row of a sectioned list.
///
/// A [`Item::Header`] labels the group of [`Item::Entry`] rows that follow it,
/// up to the next header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// A non-selectable section label row, such as `"A"`.
    Header(String),
    /// A regular row.
    Entry(String),
}

impl Item {
    /// Creates a section header row.
    pub fn header(content: impl Into<String>) -> Self {
        Self::Header(content.into())
    }

    /// Creates a regular row.
    pub fn entry(content: impl Into<String>) -> Self {
        Self::Entry(content.into())
    }

    /// Returns the display content of the row.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Header(content) | Self::Entry(content) => content,
        }
    }

    /// Returns `true` for section header rows.
    #[must_use]
    pub fn is_section_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }
}

/// Read-only access to the rows of a list adapter.
///
/// Positions are `0..item_count()`. Out-of-range positions are not headers
/// and have no content.
pub trait ItemSource {
    /// Number of rows.
    fn item_count(&self) -> usize;

    /// Returns `true` if the row at `position` is a section header.
    fn is_section_header(&self, position: usize) -> bool;

    /// Display content of the row at `position`.
    fn content_at(&self, position: usize) -> Option<&str>;

    /// Content of the nearest header at or before `position`.
    ///
    /// Scans backwards linearly; returns `None` when no header precedes
    /// `position` (or the list is empty).
    fn header_content_at(&self, position: usize) -> Option<&str> {
        let count = self.item_count();
        if count == 0 {
            return None;
        }
        let start = position.min(count - 1);
        (0..=start)
            .rev()
            .find(|&p| self.is_section_header(p))
            .and_then(|p| self.content_at(p))
    }
}

impl ItemSource for [Item] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn is_section_header(&self, position: usize) -> bool {
        self.get(position).is_some_and(Item::is_section_header)
    }

    fn content_at(&self, position: usize) -> Option<&str> {
        self.get(position).map(Item::content)
    }
}

impl ItemSource for Vec<Item> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn is_section_header(&self, position: usize) -> bool {
        self.as_slice().is_section_header(position)
    }

    fn content_at(&self, position: usize) -> Option<&str> {
        self.as_slice().content_at(position)
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
    fn content_and_tag() {
        let item = Item::entry("Ant");
        assert_eq!(item.content(), "Ant");
        assert!(!item.is_section_header());
        assert!(Item::header("A").is_section_header());
    }

    #[test]
    fn header_content_scans_backwards() {
        let items = fruit();
        assert_eq!(items.header_content_at(0), Some("A"));
        assert_eq!(items.header_content_at(2), Some("A"));
        assert_eq!(items.header_content_at(3), Some("B"));
        assert_eq!(items.header_content_at(4), Some("B"));
    }

    #[test]
    fn header_content_clamps_past_the_end() {
        let items = fruit();
        assert_eq!(items.header_content_at(100), Some("B"));
    }

    #[test]
    fn header_content_without_preceding_header() {
        let items = vec![Item::entry("orphan"), Item::header("Z")];
        assert_eq!(items.header_content_at(0), None);
        assert_eq!(items.header_content_at(1), Some("Z"));

        let empty: Vec<Item> = Vec::new();
        assert_eq!(empty.header_content_at(0), None);
    }

    #[test]
    fn out_of_range_rows_are_not_headers() {
        let items = fruit();
        assert!(!items.is_section_header(5));
        assert_eq!(items.content_at(5), None);
    }
}
