// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces of the indexable list demos.
//!
//! - [`sample_items`] turns a paragraph into a sectioned word list.
//! - [`FixedRowList`] is a headless host list with rows of one fixed height.
//!
//! Run:
//! - `cargo run -p indexable_demos`

use indexable_list::HostList;
use indexable_scroller::{ScrollHost, TouchEvent, TouchPhase};
use indexable_sections::Item;
use indexable_sticky::{ItemBounds, LaidOutItems, VisibleAnchor};
use kurbo::Size;

/// Text the demo binary builds its list from.
pub const SAMPLE_TEXT: &str = "
    Every frame the list asks its adapter how many rows there are and which
    of them start a new section. Scrolling a long contact list by hand gets
    tedious quickly, so an index bar along the right edge lets you jump
    straight to a letter. Dragging along the bar keeps jumping while a large
    bubble previews the section under your finger. Meanwhile the pinned
    header at the top always names the section you are reading and slides
    away when the next header pushes it out of view. Grids and staggered
    grids behave the same way because only the first visible row matters.
";

/// Builds a sectioned word list from free text.
///
/// Words are split on whitespace, given an upper-case first letter, and
/// de-duplicated; words shorter than two characters are dropped. The rest are
/// stably sorted by first letter and grouped under one header per letter.
pub fn sample_items(paragraph: &str) -> Vec<Item> {
    let mut words: Vec<String> = Vec::new();
    for word in paragraph.split_whitespace().map(capitalize) {
        if word.chars().count() > 1 && !words.contains(&word) {
            words.push(word);
        }
    }
    words.sort_by_key(|word| word.chars().next());

    let mut items = Vec::with_capacity(words.len());
    let mut current = None;
    for word in words {
        let first = word.chars().next();
        if first != current {
            current = first;
            if let Some(letter) = first {
                items.push(Item::header(letter));
            }
        }
        items.push(Item::Entry(word));
    }
    items
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A headless list of equally tall rows.
///
/// Scrolling is clamped so the last row never leaves the bottom edge. Touches
/// the index bar does not consume drag the content.
#[derive(Clone, Debug)]
pub struct FixedRowList {
    row_height: f64,
    count: usize,
    size: Size,
    scroll: f64,
    last_touch_y: Option<f64>,
}

impl FixedRowList {
    /// Creates a list of `count` rows, `row_height` tall, scrolled to the top.
    pub fn new(count: usize, row_height: f64, size: Size) -> Self {
        Self {
            row_height,
            count,
            size,
            scroll: 0.0,
            last_touch_y: None,
        }
    }

    /// Current scroll offset in pixels.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the row count after the data changed.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.scroll_by(0.0);
    }

    /// Scrolls by `dy` pixels, clamped to the content.
    pub fn scroll_by(&mut self, dy: f64) {
        let content = self.count as f64 * self.row_height;
        let max = (content - self.size.height).max(0.0);
        self.scroll = (self.scroll + dy).clamp(0.0, max);
    }
}

impl ScrollHost for FixedRowList {
    fn scroll_to_item(&mut self, position: usize, pixel_offset: f64) {
        self.scroll = 0.0;
        self.scroll_by(position as f64 * self.row_height - pixel_offset);
    }

    fn invalidate(&mut self) {}
}

impl LaidOutItems for FixedRowList {
    fn visible_anchor(&self) -> VisibleAnchor<'_> {
        if self.count == 0 {
            return VisibleAnchor::Linear(None);
        }
        let first = (self.scroll / self.row_height) as usize;
        VisibleAnchor::Linear(Some(first.min(self.count - 1)))
    }

    fn item_bounds(&self, position: usize) -> Option<ItemBounds> {
        if position >= self.count {
            return None;
        }
        let top = position as f64 * self.row_height - self.scroll;
        Some(ItemBounds::new(top, top + self.row_height))
    }

    fn size(&self) -> Size {
        self.size
    }
}

impl HostList for FixedRowList {
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        let y = event.position.y;
        match event.phase {
            TouchPhase::Down => self.last_touch_y = Some(y),
            TouchPhase::Move => {
                let Some(last) = self.last_touch_y.replace(y) else {
                    return false;
                };
                self.scroll_by(last - y);
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                self.last_touch_y = None;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_grouped_under_their_first_letter() {
        let items = sample_items("banana apple Avocado blueberry");
        assert_eq!(
            items,
            [
                Item::header("A"),
                Item::entry("Apple"),
                Item::entry("Avocado"),
                Item::header("B"),
                Item::entry("Banana"),
                Item::entry("Blueberry"),
            ]
        );
    }

    #[test]
    fn duplicates_and_short_words_are_dropped() {
        let items = sample_items("  kiwi Kiwi a\n kiwi  I go ");
        assert_eq!(
            items,
            [
                Item::header("G"),
                Item::entry("Go"),
                Item::header("K"),
                Item::entry("Kiwi"),
            ]
        );
    }

    #[test]
    fn sort_is_stable_within_a_letter() {
        let items = sample_items("zeta zebra zulu");
        let words: Vec<&str> = items.iter().skip(1).map(Item::content).collect();
        assert_eq!(words, ["Zeta", "Zebra", "Zulu"]);
    }

    #[test]
    fn blank_text_has_no_items() {
        assert!(sample_items(" \n\t ").is_empty());
    }

    #[test]
    fn sample_text_starts_with_a_header() {
        let items = sample_items(SAMPLE_TEXT);
        assert!(items[0].is_section_header());
        assert!(items.len() > 20);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut list = FixedRowList::new(10, 30.0, Size::new(100.0, 120.0));
        list.scroll_to_item(9, 0.0);
        assert_eq!(list.scroll(), 180.0);
        list.scroll_by(-1000.0);
        assert_eq!(list.scroll(), 0.0);
    }

    #[test]
    fn unconsumed_drags_scroll_the_content() {
        let mut list = FixedRowList::new(10, 30.0, Size::new(100.0, 120.0));
        list.on_touch_event(&TouchEvent::down((50.0, 100.0)));
        list.on_touch_event(&TouchEvent::moved((50.0, 40.0)));
        list.on_touch_event(&TouchEvent::up((50.0, 40.0)));

        assert_eq!(list.scroll(), 60.0);
        assert_eq!(list.visible_anchor(), VisibleAnchor::Linear(Some(2)));
    }
}
