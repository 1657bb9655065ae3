// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=indexable_list --heading-base-level=0

//! Indexable List: a scrollable list with an index bar and sticky headers.
//!
//! [`IndexableList`] wraps a host list (anything implementing [`HostList`])
//! and adds two overlays on top of it:
//!
//! - an alphabetical index bar from [`indexable_scroller`], shown when the
//!   adapter provides a [`SectionIndexer`](indexable_sections::SectionIndexer);
//! - optionally, a pinned section header from [`indexable_sticky`].
//!
//! The host keeps ownership of scrolling, row layout, and row rendering. The
//! wrapper forwards the host's lifecycle signals (size changes, data changes,
//! draw passes, touch events) to the overlays and hands every touch event the
//! index bar does not consume back to the host.
//!
//! ## Integration
//!
//! ```rust
//! use indexable_list::{HostList, IndexableList};
//! use indexable_paint::{DrawOp, MonospaceMeasurer};
//! use indexable_scroller::{IndexBarConfig, ScrollHost, TouchEvent};
//! use indexable_sections::{Item, SectionedItems};
//! use indexable_sticky::{ItemBounds, LaidOutItems, VisibleAnchor};
//! use kurbo::Size;
//!
//! /// A list of 20px rows, scrolled so that `top` is the first row.
//! struct Rows {
//!     top: usize,
//! }
//!
//! impl ScrollHost for Rows {
//!     fn scroll_to_item(&mut self, position: usize, _pixel_offset: f64) {
//!         self.top = position;
//!     }
//!     fn invalidate(&mut self) {}
//! }
//!
//! impl LaidOutItems for Rows {
//!     fn visible_anchor(&self) -> VisibleAnchor<'_> {
//!         VisibleAnchor::Linear(Some(self.top))
//!     }
//!     fn item_bounds(&self, position: usize) -> Option<ItemBounds> {
//!         let top = (position as f64 - self.top as f64) * 20.0;
//!         Some(ItemBounds::new(top, top + 20.0))
//!     }
//!     fn size(&self) -> Size {
//!         Size::new(320.0, 480.0)
//!     }
//! }
//!
//! impl HostList for Rows {
//!     fn on_touch_event(&mut self, _event: &TouchEvent) -> bool {
//!         false
//!     }
//! }
//!
//! let mut list = IndexableList::new(Rows { top: 0 }, IndexBarConfig::default(), MonospaceMeasurer::default());
//! list.on_size_changed(Size::new(320.0, 480.0));
//! list.set_adapter(SectionedItems::new(vec![
//!     Item::header("A"),
//!     Item::entry("Alpha"),
//!     Item::header("B"),
//!     Item::entry("Banana"),
//! ]));
//!
//! let slot = list.scroller().layout().unwrap().slot_rect(1).center();
//! assert!(list.on_touch_event(&TouchEvent::down(slot)));
//! assert_eq!(list.host().top, 2);
//!
//! let mut ops: Vec<DrawOp> = Vec::new();
//! list.draw(&mut ops).unwrap();
//! assert!(!ops.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod list;

pub use adapter::{HostList, ListAdapter};
pub use list::IndexableList;

pub use indexable_paint;
pub use indexable_scroller;
pub use indexable_sections;
pub use indexable_sticky;
