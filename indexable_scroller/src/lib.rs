// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=indexable_scroller --heading-base-level=0

//! Indexable Scroller: an alphabetical jump bar for scrollable lists.
//!
//! The index bar is a vertical strip of section glyphs along the right edge of
//! a list, like the one in a contacts app. Pressing or dragging on it scrolls
//! the list to the touched section and shows an enlarged preview of the
//! section's label in the middle of the list.
//!
//! This crate contains the headless engine behind that widget:
//!
//! - [`IndexBarConfig`]: colors, spacing, and font sizes.
//! - [`IndexBarLayout`]: the bar's rectangle and glyph slots for a given set
//!   of labels, text metrics, and container size, plus hit testing
//!   ([`IndexBarLayout::contains`], [`IndexBarLayout::section_at_y`],
//!   [`clamp_section`]).
//! - [`TouchEvent`] and [`TouchDragState`]: single-pointer input and the
//!   idle/dragging state.
//! - [`IndexScroller`]: owns the cached layout and drag state, turns touch
//!   samples into [`ScrollHost::scroll_to_item`] calls, and draws the bar.
//! - [`PreviewBubble`]: geometry and drawing of the preview.
//!
//! It does **not** know how the list itself lays out or renders rows. Hosts
//! supply section labels through
//! [`SectionIndexer`](indexable_sections::SectionIndexer), text metrics
//! through [`TextMeasurer`](indexable_paint::TextMeasurer), and a
//! [`ScrollHost`] to drive.
//!
//! ## Minimal example
//!
//! ```rust
//! use indexable_paint::{DrawOp, MonospaceMeasurer};
//! use indexable_scroller::{IndexBarConfig, IndexScroller, ScrollHost, TouchEvent};
//! use indexable_sections::{Item, SectionIndex};
//! use kurbo::Size;
//!
//! #[derive(Default)]
//! struct List {
//!     top: usize,
//! }
//!
//! impl ScrollHost for List {
//!     fn scroll_to_item(&mut self, position: usize, _pixel_offset: f64) {
//!         self.top = position;
//!     }
//!     fn invalidate(&mut self) {}
//! }
//!
//! let items = vec![
//!     Item::header("A"),
//!     Item::entry("Alpha"),
//!     Item::header("B"),
//!     Item::entry("Banana"),
//! ];
//! let index = SectionIndex::new(&items);
//!
//! let mut scroller = IndexScroller::new(IndexBarConfig::default(), MonospaceMeasurer::default());
//! scroller.on_size_changed(Size::new(320.0, 480.0));
//! scroller.set_indexer(&index);
//!
//! // Press on the second glyph slot.
//! let target = scroller.layout().unwrap().slot_rect(1).center();
//! let mut list = List::default();
//! assert!(scroller.on_touch_event(&TouchEvent::down(target), &index, &mut list));
//! assert_eq!(list.top, 2);
//!
//! // While dragging, the overlay includes the preview bubble.
//! let mut ops: Vec<DrawOp> = Vec::new();
//! scroller.draw(&mut ops);
//! assert_eq!(scroller.current_section_label(), Some("B"));
//! ```
//!
//! All computation is synchronous and meant to run on the thread that owns
//! the list. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod hit;
mod preview;
mod scroller;
mod touch;

pub use config::IndexBarConfig;
pub use geometry::IndexBarLayout;
pub use hit::clamp_section;
pub use preview::PreviewBubble;
pub use scroller::{IndexScroller, ScrollHost};
pub use touch::{TouchDragState, TouchEvent, TouchPhase};
