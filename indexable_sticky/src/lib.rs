// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=indexable_sticky --heading-base-level=0

//! Indexable Sticky: pinned section headers for scrollable lists.
//!
//! While a sectioned list scrolls, the header of the section at the top of the
//! viewport stays pinned to the top edge. When the next section's header
//! scrolls up into it, the pinned header is pushed up and out.
//!
//! - [`VisibleAnchor`] and [`first_visible_position`] normalize "which item is
//!   first on screen" across linear, grid, and staggered grid layouts.
//! - [`LaidOutItems`] is what the tracker needs from the host list: the anchor,
//!   the bounds of laid-out rows, and the list's size and padding.
//! - [`StickyHeaderTracker`] computes the pinned header for one frame.
//! - [`StickyHeaderDecoration`] draws it through a [`HeaderPainter`], such as
//!   [`TextHeaderPainter`].
//!
//! ```rust
//! use indexable_sections::Item;
//! use indexable_sticky::{ItemBounds, LaidOutItems, StickyHeaderTracker, VisibleAnchor};
//! use kurbo::Size;
//!
//! // Rows are 30px tall and the list is scrolled down by 70px.
//! struct Rows;
//!
//! impl LaidOutItems for Rows {
//!     fn visible_anchor(&self) -> VisibleAnchor<'_> {
//!         VisibleAnchor::Linear(Some(2))
//!     }
//!     fn item_bounds(&self, position: usize) -> Option<ItemBounds> {
//!         let top = position as f64 * 30.0 - 70.0;
//!         Some(ItemBounds::new(top, top + 30.0))
//!     }
//!     fn size(&self) -> Size {
//!         Size::new(320.0, 480.0)
//!     }
//! }
//!
//! let items = vec![
//!     Item::header("A"),
//!     Item::entry("Alpha"),
//!     Item::entry("Ant"),
//!     Item::header("B"),
//!     Item::entry("Banana"),
//! ];
//!
//! let pinned = StickyHeaderTracker::new(30.0).track(&items, &Rows).unwrap().unwrap();
//! assert_eq!(pinned.content, "A");
//! // "Ant" ends 20px below the top, so header "B" pushes "A" up by 10px.
//! assert_eq!(pinned.draw_offset_y, -10.0);
//! ```
//!
//! Everything here is recomputed per frame from the host's scroll state; no
//! state is carried between frames. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod decoration;
mod layout;
mod tracker;

pub use decoration::{HeaderPainter, StickyHeaderDecoration, TextHeaderPainter};
pub use layout::{UnsupportedLayoutError, VisibleAnchor, first_visible_position};
pub use tracker::{ItemBounds, LaidOutItems, StickyHeader, StickyHeaderTracker};
