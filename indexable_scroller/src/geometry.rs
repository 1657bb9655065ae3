// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index bar geometry.
//!
//! The bar is a column of equally sized glyph slots, flush with the right edge
//! of the container and vertically centered in it:
//!
//! ```text
//!            container
//! +-----------------------------+
//! |                      margin |
//! |                    +-------+|
//! |                    |pad A p||  <- slot 0: glyph_height
//! |                    |       ||  <- gap
//! |                    |pad B p||  <- slot 1
//! |                    +-------+|
//! |                      margin |
//! +-----------------------------+
//! ```

use kurbo::{Point, Rect, Size};

use indexable_paint::{TextMeasurer, TextMetrics};

use crate::IndexBarConfig;

/// Resolved placement of the index bar inside its container.
///
/// This is a cache derived from the section labels, the text metrics, the
/// config, and the container size. Recompute it whenever any of those change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexBarLayout {
    /// Bar bounds in container coordinates.
    pub rect: Rect,
    /// Height of one glyph slot (one text line).
    pub glyph_height: f64,
    /// Vertical space between slots.
    pub glyph_gap: f64,
    /// Width of the widest label.
    pub max_glyph_width: f64,
    /// Distance from the top of a slot to its text baseline.
    pub baseline_offset: f64,
    /// Horizontal padding on each side of the glyph column.
    pub padding: f64,
    /// Number of slots.
    pub section_count: usize,
}

impl IndexBarLayout {
    /// Lays out a bar for `labels` in a container of size `container`.
    ///
    /// Line metrics come from measuring the first label; glyph metrics are
    /// assumed uniform across labels. Returns `None` when there are no labels.
    pub fn compute<L, M>(
        labels: &[L],
        measurer: &M,
        config: &IndexBarConfig,
        container: Size,
    ) -> Option<Self>
    where
        L: AsRef<str>,
        M: TextMeasurer + ?Sized,
    {
        let first = labels.first()?;
        let size = config.text_size;
        let line = measurer.measure(first.as_ref(), size);
        let max_glyph_width = labels
            .iter()
            .map(|label| measurer.measure(label.as_ref(), size).width)
            .fold(0.0, f64::max);
        Some(Self::from_metrics(
            line,
            max_glyph_width,
            labels.len(),
            config,
            container,
        ))
    }

    /// Lays out `section_count` slots from already measured values.
    ///
    /// `line` supplies ascent, descent, and leading; its width is ignored in
    /// favor of `max_glyph_width`.
    #[must_use]
    pub fn from_metrics(
        line: TextMetrics,
        max_glyph_width: f64,
        section_count: usize,
        config: &IndexBarConfig,
        container: Size,
    ) -> Self {
        let glyph_height = line.line_height();
        let baseline_offset = glyph_height - line.descent;
        let count = section_count as f64;
        let bar_height = if section_count == 0 {
            0.0
        } else {
            glyph_height * count + config.gap * (count - 1.0)
        };
        let bar_width = max_glyph_width + config.padding * 2.0;
        let margin = (container.height - bar_height) / 2.0;
        Self {
            rect: Rect::new(
                container.width - bar_width,
                margin,
                container.width,
                container.height - margin,
            ),
            glyph_height,
            glyph_gap: config.gap,
            max_glyph_width,
            baseline_offset,
            padding: config.padding,
            section_count,
        }
    }

    /// Distance between the tops of consecutive slots.
    #[must_use]
    pub fn slot_extent(&self) -> f64 {
        self.glyph_height + self.glyph_gap
    }

    /// Space between the container top and the bar top.
    #[must_use]
    pub fn vertical_margin(&self) -> f64 {
        self.rect.y0
    }

    /// Baseline y-coordinate of glyph `ordinal`.
    #[must_use]
    pub fn glyph_baseline_y(&self, ordinal: usize) -> f64 {
        self.rect.y0 + ordinal as f64 * self.slot_extent() + self.baseline_offset
    }

    /// X-coordinate of the glyph column's center line.
    #[must_use]
    pub fn glyph_center_x(&self) -> f64 {
        self.rect.x0 + self.padding + self.max_glyph_width / 2.0
    }

    /// Center-aligned text origin for glyph `ordinal`.
    #[must_use]
    pub fn glyph_origin(&self, ordinal: usize) -> Point {
        Point::new(self.glyph_center_x(), self.glyph_baseline_y(ordinal))
    }

    /// Bounds of slot `ordinal`, excluding the gap below it.
    #[must_use]
    pub fn slot_rect(&self, ordinal: usize) -> Rect {
        let top = self.rect.y0 + ordinal as f64 * self.slot_extent();
        Rect::new(self.rect.x0, top, self.rect.x1, top + self.glyph_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexable_paint::MonospaceMeasurer;

    fn metrics_40() -> TextMetrics {
        TextMetrics {
            width: 0.0,
            ascent: -32.0,
            descent: 8.0,
            leading: 0.0,
        }
    }

    fn config() -> IndexBarConfig {
        IndexBarConfig::default().with_padding(10.0).with_gap(10.0)
    }

    fn layout(count: usize) -> IndexBarLayout {
        let container = Size::new(400.0, 1000.0);
        IndexBarLayout::from_metrics(metrics_40(), 20.0, count, &config(), container)
    }

    #[test]
    fn two_sections_in_a_tall_container() {
        let layout = layout(2);

        assert_eq!(layout.rect.height(), 90.0);
        assert_eq!(layout.vertical_margin(), 455.0);
        assert_eq!(layout.rect.y1, 545.0);
        assert_eq!(
            layout.glyph_baseline_y(1) - layout.glyph_baseline_y(0),
            50.0
        );
    }

    #[test]
    fn bar_is_flush_right_and_padded() {
        let layout = layout(3);

        assert_eq!(layout.rect.width(), 40.0);
        assert_eq!(layout.rect.x1, 400.0);
        assert_eq!(layout.rect.x0, 360.0);
        assert_eq!(layout.glyph_center_x(), 380.0);
    }

    #[test]
    fn baseline_sits_above_descent() {
        let layout = layout(2);

        assert_eq!(layout.baseline_offset, 32.0);
        assert_eq!(layout.glyph_baseline_y(0), 455.0 + 32.0);
        assert_eq!(layout.glyph_origin(1).y, 455.0 + 50.0 + 32.0);
    }

    #[test]
    fn slot_rects_tile_the_bar() {
        let layout = layout(3);

        assert_eq!(layout.slot_rect(0).y0, layout.rect.y0);
        assert_eq!(layout.slot_rect(2).y1, layout.rect.y1);
        assert_eq!(layout.slot_rect(1).y0 - layout.slot_rect(0).y1, 10.0);
    }

    #[test]
    fn compute_uses_widest_label() {
        let measurer = MonospaceMeasurer::default();
        let config = config().with_text_size(10.0);
        let labels = ["A", "BB", "C"];

        let container = Size::new(300.0, 600.0);
        let layout = IndexBarLayout::compute(&labels, &measurer, &config, container).unwrap();

        assert!((layout.max_glyph_width - 12.0).abs() < 1e-9);
        assert!((layout.glyph_height - 10.0).abs() < 1e-9);
        assert_eq!(layout.section_count, 3);
        assert!((layout.rect.height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn compute_without_labels_is_none() {
        let labels: [&str; 0] = [];
        let layout = IndexBarLayout::compute(
            &labels,
            &MonospaceMeasurer::default(),
            &config(),
            Size::new(300.0, 600.0),
        );
        assert!(layout.is_none());
    }
}
