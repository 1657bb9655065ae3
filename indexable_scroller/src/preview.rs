// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The enlarged label shown in the middle of the list while dragging.

use alloc::string::String;

use kurbo::{Point, Rect, RoundedRect, Size};

use indexable_paint::{Canvas, DrawOp, TextAlign, TextMeasurer};

use crate::IndexBarConfig;

/// Geometry of the preview bubble for one label.
///
/// The bubble is as tall as one line at
/// [`IndexBarConfig::preview_text_size`] and at least as wide as it is tall,
/// so single glyphs get a square bubble. It is centered in the container.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewBubble<'a> {
    /// The label shown in the bubble.
    pub label: &'a str,
    /// Bubble shape in container coordinates.
    pub shape: RoundedRect,
    /// Center-aligned baseline origin of the label.
    pub text_origin: Point,
}

impl<'a> PreviewBubble<'a> {
    /// Lays out the bubble for `label` in a container of size `container`.
    pub fn new<M: TextMeasurer + ?Sized>(
        label: &'a str,
        container: Size,
        config: &IndexBarConfig,
        measurer: &M,
    ) -> Self {
        let metrics = measurer.measure(label, config.preview_text_size);
        let height = metrics.glyph_height();
        let width = metrics.width.max(height);
        let x0 = (container.width - width) / 2.0;
        let y0 = (container.height - height) / 2.0;
        let rect = Rect::new(x0, y0, x0 + width, y0 + height);
        Self {
            label,
            shape: RoundedRect::from_rect(rect, config.preview_corner_radius),
            text_origin: Point::new(rect.center().x, y0 - metrics.ascent),
        }
    }

    /// Draws the bubble, then its label.
    pub fn draw<C: Canvas + ?Sized>(&self, config: &IndexBarConfig, canvas: &mut C) {
        canvas.draw(DrawOp::FillRoundedRect {
            shape: self.shape,
            color: config.preview_color,
            shadow: config.preview_shadow,
        });
        canvas.draw(DrawOp::Text {
            text: String::from(self.label),
            origin: self.text_origin,
            size: config.preview_text_size,
            color: config.preview_text_color,
            align: TextAlign::Center,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use indexable_paint::MonospaceMeasurer;

    fn config() -> IndexBarConfig {
        IndexBarConfig {
            preview_text_size: 50.0,
            preview_corner_radius: 5.0,
            ..IndexBarConfig::default()
        }
    }

    #[test]
    fn single_glyph_bubble_is_square_and_centered() {
        let bubble = PreviewBubble::new(
            "A",
            Size::new(400.0, 800.0),
            &config(),
            &MonospaceMeasurer::default(),
        );
        let rect = bubble.shape.rect();

        assert!((rect.width() - 50.0).abs() < 1e-9);
        assert!((rect.height() - 50.0).abs() < 1e-9);
        assert!((rect.center().x - 200.0).abs() < 1e-9);
        assert!((rect.center().y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn long_label_widens_the_bubble() {
        let bubble = PreviewBubble::new(
            "ABC",
            Size::new(400.0, 800.0),
            &config(),
            &MonospaceMeasurer::default(),
        );
        let rect = bubble.shape.rect();

        assert!((rect.width() - 90.0).abs() < 1e-9);
        assert!((rect.height() - 50.0).abs() < 1e-9);
        assert!((bubble.text_origin.x - 200.0).abs() < 1e-9);
    }

    #[test]
    fn baseline_sits_one_ascent_below_the_top() {
        let bubble = PreviewBubble::new(
            "A",
            Size::new(400.0, 800.0),
            &config(),
            &MonospaceMeasurer::default(),
        );
        let top = bubble.shape.rect().y0;
        assert!((bubble.text_origin.y - (top + 40.0)).abs() < 1e-9);
    }

    #[test]
    fn draw_emits_bubble_then_label() {
        let config = config();
        let bubble = PreviewBubble::new(
            "Q",
            Size::new(100.0, 100.0),
            &config,
            &MonospaceMeasurer::default(),
        );
        let mut ops: Vec<DrawOp> = Vec::new();
        bubble.draw(&config, &mut ops);

        assert_eq!(ops.len(), 2);
        assert!(matches!(
            &ops[0],
            DrawOp::FillRoundedRect { shadow, .. } if shadow.is_some()
        ));
        match &ops[1] {
            DrawOp::Text {
                text, size, align, ..
            } => {
                assert_eq!(text, "Q");
                assert_eq!(*size, 50.0);
                assert_eq!(*align, TextAlign::Center);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
