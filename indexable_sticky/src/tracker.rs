// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Size};

use indexable_sections::ItemSource;

use crate::{UnsupportedLayoutError, VisibleAnchor, first_visible_position};

/// Vertical extent of a laid-out row, in list coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ItemBounds {
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl ItemBounds {
    /// Creates bounds from edges.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Read-only view of a host list's current layout pass.
pub trait LaidOutItems {
    /// The layout's first visible item(s).
    fn visible_anchor(&self) -> VisibleAnchor<'_>;

    /// Bounds of the row at `position`, or `None` if it is not laid out.
    fn item_bounds(&self, position: usize) -> Option<ItemBounds>;

    /// Size of the list.
    fn size(&self) -> Size;

    /// Padding between the list edges and its content.
    fn padding(&self) -> Insets {
        Insets::ZERO
    }
}

/// The header pinned for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StickyHeader<'a> {
    /// Content of the pinned header.
    pub content: &'a str,
    /// The first visible position the header was resolved from.
    pub first_visible: usize,
    /// Vertical shift from the top edge; zero or negative.
    pub draw_offset_y: f64,
}

/// Computes which header is pinned and how far it is pushed up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StickyHeaderTracker {
    header_height: f64,
}

impl StickyHeaderTracker {
    /// Creates a tracker for pinned headers `header_height` tall.
    #[must_use]
    pub const fn new(header_height: f64) -> Self {
        Self { header_height }
    }

    /// Height of the pinned header.
    #[must_use]
    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Resolves the pinned header for the list's current scroll position.
    ///
    /// The pinned content is the nearest header at or before the first
    /// visible item. If the next row below the first visible one is a header
    /// and the first visible row ends within the pinned header's height, the
    /// pinned header slides up by the overlap.
    ///
    /// Returns `Ok(None)` when nothing should be drawn: an empty list, a
    /// first visible item that is the last item, a first visible row that is
    /// not laid out, or no header before it.
    pub fn track<'s, S, L>(
        &self,
        source: &'s S,
        list: &L,
    ) -> Result<Option<StickyHeader<'s>>, UnsupportedLayoutError>
    where
        S: ItemSource + ?Sized,
        L: LaidOutItems + ?Sized,
    {
        let Some(first) = first_visible_position(list.visible_anchor())? else {
            return Ok(None);
        };
        if first >= source.item_count().saturating_sub(1) {
            return Ok(None);
        }
        let Some(first_bounds) = list.item_bounds(first) else {
            return Ok(None);
        };
        let Some(content) = source.header_content_at(first) else {
            return Ok(None);
        };

        let pushed = first_bounds.bottom <= self.header_height
            && next_line_is_header(source, list, first, first_bounds);
        let draw_offset_y = if pushed {
            first_bounds.bottom - self.header_height
        } else {
            0.0
        };

        Ok(Some(StickyHeader {
            content,
            first_visible: first,
            draw_offset_y,
        }))
    }
}

/// Finds the first row below `current` that starts a new visual line and
/// reports whether it is a header.
///
/// In grids several rows share a line; they are skipped by requiring a larger
/// bottom edge.
fn next_line_is_header<S, L>(source: &S, list: &L, current: usize, bounds: ItemBounds) -> bool
where
    S: ItemSource + ?Sized,
    L: LaidOutItems + ?Sized,
{
    let Some(start) = current.checked_add(1) else {
        return false;
    };
    for next in start..source.item_count() {
        let Some(next_bounds) = list.item_bounds(next) else {
            return false;
        };
        if next_bounds.bottom > bounds.bottom {
            return source.is_section_header(next);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use indexable_sections::Item;

    /// Rows of equal height, `columns` per line, scrolled by `scroll`.
    struct Rows {
        anchor: Option<usize>,
        row_height: f64,
        columns: usize,
        scroll: f64,
        laid_out: usize,
    }

    impl Rows {
        fn linear(first: usize, scroll: f64) -> Self {
            Self {
                anchor: Some(first),
                row_height: 30.0,
                columns: 1,
                scroll,
                laid_out: usize::MAX,
            }
        }
    }

    impl LaidOutItems for Rows {
        fn visible_anchor(&self) -> VisibleAnchor<'_> {
            if self.columns == 1 {
                VisibleAnchor::Linear(self.anchor)
            } else {
                VisibleAnchor::Grid(self.anchor)
            }
        }

        fn item_bounds(&self, position: usize) -> Option<ItemBounds> {
            if position >= self.laid_out {
                return None;
            }
            let line = (position / self.columns) as f64;
            let top = line * self.row_height - self.scroll;
            Some(ItemBounds::new(top, top + self.row_height))
        }

        fn size(&self) -> Size {
            Size::new(300.0, 600.0)
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item::header("A"),
            Item::entry("Alpha"),
            Item::entry("Ant"),
            Item::header("B"),
            Item::entry("Banana"),
            Item::entry("Bee"),
        ]
    }

    fn tracker() -> StickyHeaderTracker {
        StickyHeaderTracker::new(30.0)
    }

    fn pin<'s>(items: &'s [Item], rows: &Rows) -> StickyHeader<'s> {
        tracker().track(items, rows).unwrap().unwrap()
    }

    #[test]
    fn pins_nearest_preceding_header() {
        let items = items();
        let pinned = pin(&items, &Rows::linear(1, 30.0));
        assert_eq!(pinned.content, "A");
        assert_eq!(pinned.first_visible, 1);
        assert_eq!(pinned.draw_offset_y, 0.0);

        let pinned = pin(&items, &Rows::linear(4, 120.0));
        assert_eq!(pinned.content, "B");
    }

    #[test]
    fn next_header_pushes_pinned_header_up() {
        let items = items();
        // "Ant" spans -5..25; header "B" follows.
        let pinned = pin(&items, &Rows::linear(2, 65.0));
        assert_eq!(pinned.content, "A");
        assert_eq!(pinned.draw_offset_y, -5.0);
    }

    #[test]
    fn no_push_when_next_row_is_an_entry() {
        let items = items();
        // "Alpha" spans -5..25; next row is "Ant".
        let pinned = pin(&items, &Rows::linear(1, 35.0));
        assert_eq!(pinned.draw_offset_y, 0.0);
    }

    #[test]
    fn offset_is_zero_when_first_row_clears_header_height() {
        let items = items();
        let mut rows = Rows::linear(2, 60.0);
        rows.row_height = 40.0;
        // "Ant" spans 20..60, taller than the header.
        let pinned = tracker().track(&items, &rows).unwrap().unwrap();
        assert_eq!(pinned.draw_offset_y, 0.0);
    }

    #[test]
    fn last_item_and_empty_list_draw_nothing() {
        let items = items();
        assert_eq!(tracker().track(&items, &Rows::linear(5, 150.0)), Ok(None));

        let mut empty = Rows::linear(0, 0.0);
        empty.anchor = None;
        assert_eq!(tracker().track(&items, &empty), Ok(None));
    }

    #[test]
    fn anchor_at_the_end_of_the_index_range_draws_nothing() {
        let items = items();
        let rows = Rows::linear(usize::MAX, 0.0);
        assert_eq!(tracker().track(&items, &rows), Ok(None));

        let single = [Item::header("A")];
        assert_eq!(tracker().track(&single[..], &rows), Ok(None));
    }

    #[test]
    fn next_line_scan_stops_at_the_end_of_the_index_range() {
        let items = items();
        let rows = Rows::linear(0, 0.0);
        let bounds = ItemBounds::new(0.0, 30.0);
        assert!(!next_line_is_header(&items, &rows, usize::MAX, bounds));
        assert!(!next_line_is_header(&items, &rows, 5, bounds));
    }

    #[test]
    fn first_row_not_laid_out_draws_nothing() {
        let items = items();
        let mut rows = Rows::linear(2, 65.0);
        rows.laid_out = 0;
        assert_eq!(tracker().track(&items, &rows), Ok(None));
    }

    #[test]
    fn unlaid_next_row_stops_the_scan() {
        let items = items();
        let mut rows = Rows::linear(2, 65.0);
        rows.laid_out = 3;
        let pinned = tracker().track(&items, &rows).unwrap().unwrap();
        assert_eq!(pinned.draw_offset_y, 0.0);
    }

    #[test]
    fn grid_skips_cells_on_the_same_line() {
        // Two columns: [A, Alpha] [Ant, B] [Banana, Bee]
        let items = items();
        let rows = Rows {
            anchor: Some(2),
            row_height: 30.0,
            columns: 2,
            scroll: 40.0,
            laid_out: usize::MAX,
        };
        // Line 1 spans -10..20; "B" shares it, so the next line starts at "Banana".
        let pinned = tracker().track(&items, &rows).unwrap().unwrap();
        assert_eq!(pinned.content, "A");
        assert_eq!(pinned.draw_offset_y, 0.0);
    }

    #[test]
    fn unsupported_layout_is_an_error() {
        struct Carousel;

        impl LaidOutItems for Carousel {
            fn visible_anchor(&self) -> VisibleAnchor<'_> {
                VisibleAnchor::Other("carousel")
            }

            fn item_bounds(&self, _position: usize) -> Option<ItemBounds> {
                None
            }

            fn size(&self) -> Size {
                Size::ZERO
            }
        }

        let items = items();
        assert!(tracker().track(&items, &Carousel).is_err());
    }
}
