// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing against an [`IndexBarLayout`].
//!
//! [`IndexBarLayout::section_at_y`] is deliberately raw: it does not clamp, so
//! a point far below the last glyph yields an ordinal past the end. Callers
//! clamp with [`clamp_section`], which makes a drag past the last letter stick
//! to the last section.

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::IndexBarLayout;

impl IndexBarLayout {
    /// Returns `true` if `point` hits the bar.
    ///
    /// The hit region spans from the bar's left edge to the right edge of the
    /// container, and vertically from the bar's top to its bottom, inclusive.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.rect.x0 && point.y >= self.rect.y0 && point.y <= self.rect.y1
    }

    /// Raw slot ordinal at vertical position `y`.
    ///
    /// Computed as `floor((y - top) / (glyph_height + gap))`, then settled so
    /// that the top edge of [`slot_rect(k)`](Self::slot_rect) always maps to
    /// `k`. Not clamped: the result may be negative or `>= section_count`.
    #[must_use]
    pub fn section_at_y(&self, y: f64) -> isize {
        let extent = self.slot_extent();
        let mut slot = ((y - self.rect.y0) / extent).floor();
        // The division can land one ulp to either side of a slot edge.
        if y >= self.rect.y0 + (slot + 1.0) * extent {
            slot += 1.0;
        } else if y < self.rect.y0 + slot * extent {
            slot -= 1.0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Slot index approximation; callers clamp the result to the section range"
        )]
        {
            slot as isize
        }
    }

    /// Clamped section ordinal under `point`, or `None` outside the bar.
    #[must_use]
    pub fn section_at(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        clamp_section(self.section_at_y(point.y), self.section_count)
    }
}

/// Clamps a raw slot ordinal into `0..count`.
///
/// Returns `None` only when `count` is zero.
#[must_use]
pub fn clamp_section(raw: isize, count: usize) -> Option<usize> {
    let last = count.checked_sub(1)?;
    Some(usize::try_from(raw).map_or(0, |ordinal| ordinal.min(last)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexable_paint::TextMetrics;
    use kurbo::Size;

    use crate::IndexBarConfig;

    fn layout(count: usize) -> IndexBarLayout {
        let line = TextMetrics {
            width: 0.0,
            ascent: -32.0,
            descent: 8.0,
            leading: 0.0,
        };
        let config = IndexBarConfig::default().with_padding(10.0).with_gap(10.0);
        IndexBarLayout::from_metrics(line, 20.0, count, &config, Size::new(400.0, 1000.0))
    }

    #[test]
    fn slot_tops_map_to_their_ordinal() {
        let layout = layout(5);
        assert_eq!(layout.section_at_y(layout.rect.y0), 0);
        for k in 0..5 {
            let y = layout.rect.y0 + layout.slot_extent() * k as f64;
            assert_eq!(layout.section_at_y(y), k as isize);
        }
    }

    #[test]
    fn gap_belongs_to_the_slot_above() {
        let layout = layout(3);
        let in_gap = layout.rect.y0 + layout.glyph_height + 5.0;
        assert_eq!(layout.section_at_y(in_gap), 0);
    }

    #[test]
    fn raw_ordinal_is_not_clamped() {
        let layout = layout(2);
        assert_eq!(layout.section_at_y(layout.rect.y0 - 1.0), -1);
        assert_eq!(layout.section_at_y(layout.rect.y1 + 500.0), 11);
    }

    #[test]
    fn fractional_slot_edges_map_to_their_ordinal() {
        let size = Size::new(400.0, 1000.0);
        for height in [13.1, 17.3, 9.7, 21.45, 12.0 + 1.0 / 3.0] {
            for gap in [3.0, 2.5, 0.7, 1.0 / 3.0] {
                let line = TextMetrics {
                    width: 0.0,
                    ascent: -height,
                    descent: 0.0,
                    leading: 0.0,
                };
                let config = IndexBarConfig::default().with_gap(gap);
                let layout = IndexBarLayout::from_metrics(line, 12.0, 26, &config, size);
                for k in 0..26 {
                    let top = layout.rect.y0 + layout.slot_extent() * k as f64;
                    assert_eq!(layout.section_at_y(top), k as isize, "{height} {gap} {k}");
                    let slot_top = layout.slot_rect(k as usize).y0;
                    assert_eq!(layout.section_at_y(slot_top), k as isize);
                    let above = top - layout.slot_extent() * 1e-9;
                    assert_eq!(layout.section_at_y(above), k as isize - 1);
                }
            }
        }
    }

    #[test]
    fn contains_extends_to_container_edge() {
        let layout = layout(2);
        let rect = layout.rect;
        assert!(layout.contains(Point::new(rect.x0, rect.y0)));
        assert!(layout.contains(Point::new(rect.x1 + 50.0, rect.y1)));
        assert!(!layout.contains(Point::new(rect.x0 - 0.5, rect.y0)));
        assert!(!layout.contains(Point::new(rect.x1, rect.y0 - 0.5)));
        assert!(!layout.contains(Point::new(rect.x1, rect.y1 + 0.5)));
    }

    #[test]
    fn section_at_clamps_inside_the_bar() {
        let layout = layout(2);
        let bottom = Point::new(layout.rect.x1 - 1.0, layout.rect.y1);
        assert_eq!(layout.section_at(bottom), Some(1));
        let left = Point::new(layout.rect.x0 - 1.0, layout.rect.y0);
        assert_eq!(layout.section_at(left), None);
    }

    #[test]
    fn clamp_section_bounds() {
        assert_eq!(clamp_section(-3, 4), Some(0));
        assert_eq!(clamp_section(2, 4), Some(2));
        assert_eq!(clamp_section(9, 4), Some(3));
        assert_eq!(clamp_section(0, 0), None);
    }
}
