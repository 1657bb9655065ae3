// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, RoundedRect, Vec2};
use peniko::Color;

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The origin is the left edge of the run.
    #[default]
    Left,
    /// The origin is the horizontal center of the run.
    Center,
}

/// A blurred shadow cast under a filled shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxShadow {
    /// Blur radius in logical pixels.
    pub blur_radius: f64,
    /// Offset of the shadow from the shape.
    pub offset: Vec2,
    /// Shadow color.
    pub color: Color,
}

/// One drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Fill a rounded rectangle, optionally over a shadow.
    FillRoundedRect {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Color,
        /// Shadow drawn beneath the shape.
        shadow: Option<BoxShadow>,
    },
    /// Draw a single line of text.
    Text {
        /// The text run.
        text: String,
        /// Baseline anchor; see [`TextAlign`] for the horizontal meaning.
        origin: Point,
        /// Font size in logical pixels.
        size: f64,
        /// Text color.
        color: Color,
        /// Horizontal anchoring.
        align: TextAlign,
    },
    /// Translate every following operation until the matching [`DrawOp::PopTranslate`].
    PushTranslate(Vec2),
    /// Undo the most recent [`DrawOp::PushTranslate`].
    PopTranslate,
}

/// A sink for [`DrawOp`]s.
///
/// `PushTranslate`/`PopTranslate` must be well-nested.
pub trait Canvas {
    /// Apply one operation.
    fn draw(&mut self, op: DrawOp);
}

/// Recording canvas.
impl Canvas for Vec<DrawOp> {
    fn draw(&mut self, op: DrawOp) {
        self.push(op);
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}

/// Convenience helpers on top of [`Canvas`].
pub trait CanvasExt: Canvas {
    /// Run `f` with all of its operations translated by `offset`.
    ///
    /// Note: if `f` panics, the translation will not be popped.
    fn with_translate<R>(&mut self, offset: Vec2, f: impl FnOnce(&mut Self) -> R) -> R {
        self.draw(DrawOp::PushTranslate(offset));
        let out = f(self);
        self.draw(DrawOp::PopTranslate);
        out
    }
}

impl<C: Canvas + ?Sized> CanvasExt for C {}
