// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use indexable_scroller::{ScrollHost, TouchEvent};
use indexable_sections::{Item, ItemSource, SectionIndexer, SectionedItems};
use indexable_sticky::LaidOutItems;

/// The scrollable list an [`IndexableList`](crate::IndexableList) wraps.
///
/// The host scrolls, lays out, and renders its rows; the wrapper only reads
/// its layout and asks it to scroll.
pub trait HostList: ScrollHost + LaidOutItems {
    /// The host's own handling of a touch event the overlays did not
    /// consume, such as drag scrolling or flinging.
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool;
}

/// The data behind a host list.
///
/// Sectioning is optional: adapters without a [`SectionIndexer`] still back a
/// plain list, just without an index bar.
pub trait ListAdapter: ItemSource {
    /// The adapter's sectioning capability, if it has one.
    fn section_indexer(&self) -> Option<&dyn SectionIndexer> {
        None
    }
}

impl ListAdapter for SectionedItems {
    fn section_indexer(&self) -> Option<&dyn SectionIndexer> {
        Some(self)
    }
}

/// Plain rows without an index.
impl ListAdapter for Vec<Item> {}
