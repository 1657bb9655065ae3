// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::{Point, Size};
use tracing::debug;

use indexable_paint::{Canvas, TextMeasurer};
use indexable_scroller::{IndexBarConfig, IndexScroller, TouchEvent};
use indexable_sticky::{HeaderPainter, StickyHeaderDecoration, UnsupportedLayoutError};

use crate::{HostList, ListAdapter};

/// A host list decorated with an index bar and optional sticky headers.
///
/// The wrapper owns the host and the adapter. Calls that only concern the host
/// go through [`IndexableList::host`] and [`IndexableList::host_mut`].
pub struct IndexableList<H, A, M> {
    host: H,
    adapter: Option<A>,
    scroller: IndexScroller<M>,
    index_enabled: bool,
    sticky: Option<StickyHeaderDecoration<Box<dyn HeaderPainter>>>,
}

impl<H, A, M> core::fmt::Debug for IndexableList<H, A, M>
where
    H: core::fmt::Debug,
    A: core::fmt::Debug,
    M: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexableList")
            .field("host", &self.host)
            .field("adapter", &self.adapter)
            .field("scroller", &self.scroller)
            .field("index_enabled", &self.index_enabled)
            .field("sticky", &self.sticky.is_some())
            .finish()
    }
}

impl<H, A, M> IndexableList<H, A, M>
where
    H: HostList,
    A: ListAdapter,
    M: TextMeasurer,
{
    /// Wraps `host` with an enabled, still empty index bar.
    pub fn new(host: H, config: IndexBarConfig, measurer: M) -> Self {
        Self {
            host,
            adapter: None,
            scroller: IndexScroller::new(config, measurer),
            index_enabled: true,
            sticky: None,
        }
    }

    /// The wrapped host list.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host list, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwraps the host list.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The index bar.
    pub fn scroller(&self) -> &IndexScroller<M> {
        &self.scroller
    }

    /// The current adapter.
    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    /// The current adapter, mutably.
    ///
    /// Call [`IndexableList::notify_data_set_changed`] after changing its rows.
    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    /// Installs `adapter` and reads its sections.
    ///
    /// If the adapter has no sectioning capability the index bar stays empty
    /// and invisible; the list keeps working as a plain list.
    pub fn set_adapter(&mut self, adapter: A) {
        self.adapter = Some(adapter);
        self.notify_data_set_changed();
    }

    /// Removes and returns the adapter, emptying the index bar.
    pub fn take_adapter(&mut self) -> Option<A> {
        let adapter = self.adapter.take();
        self.notify_data_set_changed();
        adapter
    }

    /// Re-reads the adapter's sections, recomputes the bar, and redraws.
    pub fn notify_data_set_changed(&mut self) {
        match self.adapter.as_ref().and_then(|a| a.section_indexer()) {
            Some(indexer) => self.scroller.set_indexer(indexer),
            None => {
                debug!("adapter has no section indexer, index bar disabled");
                self.scroller.clear_sections();
            }
        }
        self.host.invalidate();
    }

    /// Forwards a size change of the host list.
    pub fn on_size_changed(&mut self, size: Size) {
        self.scroller.on_size_changed(size);
    }

    /// Whether the index bar is shown and handles touches.
    pub fn is_index_enabled(&self) -> bool {
        self.index_enabled
    }

    /// Shows or hides the index bar. Hiding it ends any drag in progress.
    pub fn set_index_enabled(&mut self, enabled: bool) {
        if self.index_enabled == enabled {
            return;
        }
        self.index_enabled = enabled;
        self.scroller.reset_drag();
        self.host.invalidate();
    }

    /// Replaces the index bar configuration.
    pub fn set_config(&mut self, config: IndexBarConfig) {
        self.scroller.set_config(config);
        self.host.invalidate();
    }

    /// Pins section headers drawn by `painter` to the top of the list.
    pub fn set_sticky_headers(&mut self, painter: impl HeaderPainter + 'static) {
        let painter: Box<dyn HeaderPainter> = Box::new(painter);
        self.sticky = Some(StickyHeaderDecoration::new(painter));
        self.host.invalidate();
    }

    /// Stops pinning section headers.
    pub fn clear_sticky_headers(&mut self) {
        if self.sticky.take().is_some() {
            self.host.invalidate();
        }
    }

    /// Returns `true` if a touch stream starting at `point` belongs to the
    /// index bar and should be taken away from the host's children.
    pub fn intercepts(&self, point: Point) -> bool {
        self.index_enabled && self.scroller.contains(point)
    }

    /// Dispatches a touch sample: to the index bar first, then to the host.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        if self.index_enabled
            && let Some(indexer) = self.adapter.as_ref().and_then(|a| a.section_indexer())
            && self.scroller.on_touch_event(event, indexer, &mut self.host)
        {
            return true;
        }
        self.host.on_touch_event(event)
    }

    /// Draws the overlays; call after the host has drawn its rows.
    ///
    /// The sticky header goes first so that the index bar stays on top.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), UnsupportedLayoutError> {
        if let (Some(sticky), Some(adapter)) = (&self.sticky, &self.adapter) {
            sticky.draw_over(adapter, &self.host, canvas)?;
        }
        if self.index_enabled {
            self.scroller.draw(canvas);
        }
        Ok(())
    }
}
