// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use tracing::trace;

use indexable_paint::{Canvas, CanvasExt, DrawOp, TextAlign, TextMeasurer};
use indexable_sections::ItemSource;

use crate::{LaidOutItems, StickyHeader, StickyHeaderTracker, UnsupportedLayoutError};

/// Draws the content of a pinned header.
pub trait HeaderPainter {
    /// Height of the header; also the distance over which the next header
    /// pushes it out.
    fn height(&self) -> f64;

    /// Paints `content` into the box `(0, 0)..(width, height())`.
    fn paint(&self, content: &str, width: f64, canvas: &mut dyn Canvas);
}

/// A header painted as a filled band with one line of left-aligned text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextHeaderPainter<M> {
    /// Band height.
    pub height: f64,
    /// Band fill.
    pub background: Color,
    /// Text color.
    pub text_color: Color,
    /// Font size.
    pub text_size: f64,
    /// Space between the left edge and the text.
    pub inset_left: f64,
    /// Measures the text for vertical centering.
    pub measurer: M,
}

impl<M: TextMeasurer> TextHeaderPainter<M> {
    /// A light gray band with dark text.
    pub fn new(height: f64, measurer: M) -> Self {
        Self {
            height,
            background: Color::from_rgb8(0xee, 0xee, 0xee),
            text_color: Color::from_rgb8(0x33, 0x33, 0x33),
            text_size: 14.0,
            inset_left: 16.0,
            measurer,
        }
    }
}

impl<M: TextMeasurer> HeaderPainter for TextHeaderPainter<M> {
    fn height(&self) -> f64 {
        self.height
    }

    fn paint(&self, content: &str, width: f64, canvas: &mut dyn Canvas) {
        canvas.draw(DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, width, self.height),
            color: self.background,
        });
        let metrics = self.measurer.measure(content, self.text_size);
        let baseline = (self.height - metrics.glyph_height()) / 2.0 - metrics.ascent;
        canvas.draw(DrawOp::Text {
            text: String::from(content),
            origin: Point::new(self.inset_left, baseline),
            size: self.text_size,
            color: self.text_color,
            align: TextAlign::Left,
        });
    }
}

impl<P: HeaderPainter + ?Sized> HeaderPainter for alloc::boxed::Box<P> {
    fn height(&self) -> f64 {
        (**self).height()
    }

    fn paint(&self, content: &str, width: f64, canvas: &mut dyn Canvas) {
        (**self).paint(content, width, canvas);
    }
}

/// Draws the pinned header over a list after the list has drawn its rows.
#[derive(Clone, Debug)]
pub struct StickyHeaderDecoration<P> {
    painter: P,
}

impl<P: HeaderPainter> StickyHeaderDecoration<P> {
    /// Creates a decoration drawing headers with `painter`.
    pub fn new(painter: P) -> Self {
        Self { painter }
    }

    /// The header painter.
    pub fn painter(&self) -> &P {
        &self.painter
    }

    /// A tracker matching the painter's header height.
    pub fn tracker(&self) -> StickyHeaderTracker {
        StickyHeaderTracker::new(self.painter.height())
    }

    /// Draws the pinned header, if any, and returns it.
    ///
    /// The header spans the list width inside its horizontal padding and is
    /// placed at the top padding, shifted by
    /// [`StickyHeader::draw_offset_y`].
    pub fn draw_over<'s, S, L>(
        &self,
        source: &'s S,
        list: &L,
        canvas: &mut dyn Canvas,
    ) -> Result<Option<StickyHeader<'s>>, UnsupportedLayoutError>
    where
        S: ItemSource + ?Sized,
        L: LaidOutItems + ?Sized,
    {
        let Some(header) = self.tracker().track(source, list)? else {
            return Ok(None);
        };
        trace!(
            content = header.content,
            offset = header.draw_offset_y,
            "sticky header pinned"
        );
        let padding = list.padding();
        let left = padding.x0;
        let right = list.size().width - padding.x1;
        let top = padding.y0 + header.draw_offset_y;
        canvas.with_translate(Vec2::new(left, top), |canvas| {
            self.painter.paint(header.content, right - left, canvas);
        });
        Ok(Some(header))
    }
}
