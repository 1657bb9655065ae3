// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=indexable_paint --heading-base-level=0

//! Indexable Paint: the drawing surface seen by list overlays.
//!
//! Overlays such as the index bar and the sticky section header do not talk to
//! a renderer directly. They emit a short sequence of [`DrawOp`]s into a
//! [`Canvas`], and they ask an injected [`TextMeasurer`] for glyph widths and
//! line metrics. Hosts bridge both to whatever graphics and text stack they
//! use; tests record into a `Vec<DrawOp>`.
//!
//! ```rust
//! use indexable_paint::{Canvas, CanvasExt, DrawOp, TextAlign};
//! use kurbo::{Point, Vec2};
//! use peniko::Color;
//!
//! let mut ops: Vec<DrawOp> = Vec::new();
//! ops.with_translate(Vec2::new(0.0, -4.0), |c| {
//!     c.draw(DrawOp::Text {
//!         text: "A".into(),
//!         origin: Point::new(10.0, 20.0),
//!         size: 12.0,
//!         color: Color::BLACK,
//!         align: TextAlign::Center,
//!     });
//! });
//! assert_eq!(ops.len(), 3);
//! ```
//!
//! Coordinates are logical pixels with `y` growing downwards. This crate is
//! `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ops;
mod text;

pub use ops::{BoxShadow, Canvas, CanvasExt, DrawOp, TextAlign};
pub use text::{MonospaceMeasurer, TextMeasurer, TextMetrics};
