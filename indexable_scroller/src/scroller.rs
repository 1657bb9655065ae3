// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The index bar controller: cached layout, touch handling, and drawing.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, RoundedRect, Size};
use peniko::Color;
use tracing::{debug, trace, warn};

use indexable_paint::{Canvas, DrawOp, TextAlign, TextMeasurer};
use indexable_sections::SectionIndexer;

use crate::{IndexBarConfig, IndexBarLayout, PreviewBubble, TouchDragState, TouchEvent, TouchPhase};

/// The part of a scrollable list the index bar drives.
pub trait ScrollHost {
    /// Scroll so that the item at `position` is at the top, shifted down by
    /// `pixel_offset`.
    fn scroll_to_item(&mut self, position: usize, pixel_offset: f64);

    /// Request a redraw of the list and its overlays.
    fn invalidate(&mut self);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn scroll_to_item(&mut self, position: usize, pixel_offset: f64) {
        (**self).scroll_to_item(position, pixel_offset);
    }

    fn invalidate(&mut self) {
        (**self).invalidate();
    }
}

/// Alphabetical index bar overlay for one list.
///
/// The scroller keeps a copy of the section labels and a layout derived from
/// them. Both are recomputed eagerly by [`IndexScroller::set_sections`],
/// [`IndexScroller::on_size_changed`], and [`IndexScroller::set_config`], so
/// a draw never sees a stale layout.
///
/// Touch handling is a two-state machine:
///
/// - Idle + press inside the bar: start dragging and scroll to the touched
///   section. Presses elsewhere are not consumed.
/// - Dragging + move inside the bar: scroll again if the section changed.
/// - Dragging + move outside the bar: consumed, nothing scrolls.
/// - Dragging + release/cancel: back to idle, redraw to drop the preview.
#[derive(Debug)]
pub struct IndexScroller<M> {
    config: IndexBarConfig,
    measurer: M,
    sections: Vec<String>,
    container: Size,
    layout: Option<IndexBarLayout>,
    drag: TouchDragState,
}

impl<M: TextMeasurer> IndexScroller<M> {
    /// Creates a scroller with no sections and a zero-sized container.
    pub fn new(config: IndexBarConfig, measurer: M) -> Self {
        Self {
            config,
            measurer,
            sections: Vec::new(),
            container: Size::ZERO,
            layout: None,
            drag: TouchDragState::default(),
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &IndexBarConfig {
        &self.config
    }

    /// Replaces the configuration and recomputes the layout.
    pub fn set_config(&mut self, config: IndexBarConfig) {
        self.config = config;
        self.relayout();
    }

    /// The text measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// The section labels currently shown.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Replaces the section labels and recomputes the layout.
    ///
    /// Any drag in progress is dropped, since its ordinal may no longer be
    /// valid.
    pub fn set_sections<I>(&mut self, labels: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sections = labels.into_iter().map(Into::into).collect();
        self.drag.end();
        self.relayout();
    }

    /// Copies the labels from `indexer`; see [`IndexScroller::set_sections`].
    pub fn set_indexer<I: SectionIndexer + ?Sized>(&mut self, indexer: &I) {
        self.set_sections(indexer.section_labels().iter().cloned());
    }

    /// Removes all sections, which hides the bar.
    pub fn clear_sections(&mut self) {
        self.set_sections(core::iter::empty::<String>());
    }

    /// Records the container size and recomputes the layout.
    pub fn on_size_changed(&mut self, size: Size) {
        self.container = size;
        self.relayout();
    }

    /// The container size last passed to [`IndexScroller::on_size_changed`].
    pub fn container(&self) -> Size {
        self.container
    }

    /// The current bar layout, or `None` when there are no sections.
    pub fn layout(&self) -> Option<&IndexBarLayout> {
        self.layout.as_ref()
    }

    /// The drag state.
    pub fn drag_state(&self) -> TouchDragState {
        self.drag
    }

    /// Label of the section under an active drag.
    pub fn current_section_label(&self) -> Option<&str> {
        let ordinal = self.drag.current_section()?;
        self.sections.get(ordinal).map(String::as_str)
    }

    /// Drops any drag in progress without scrolling.
    ///
    /// Returns `true` if a drag was active, in which case the caller should
    /// redraw.
    pub fn reset_drag(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        self.drag.end();
        was_dragging
    }

    /// Returns `true` if `point` is inside the bar's hit region.
    pub fn contains(&self, point: Point) -> bool {
        self.layout.is_some_and(|layout| layout.contains(point))
    }

    /// Feeds one touch sample through the state machine.
    ///
    /// Returns `true` if the event was consumed by the index bar; unconsumed
    /// events belong to the list's own scrolling.
    pub fn on_touch_event<I, H>(&mut self, event: &TouchEvent, indexer: &I, host: &mut H) -> bool
    where
        I: SectionIndexer + ?Sized,
        H: ScrollHost + ?Sized,
    {
        match event.phase {
            TouchPhase::Down => {
                let Some(section) = self.section_at(event.position) else {
                    return false;
                };
                debug!(section, "index drag started");
                self.drag.start(section);
                Self::scroll_to_section(section, indexer, host);
                host.invalidate();
                true
            }
            TouchPhase::Move => {
                if !self.drag.is_dragging() {
                    return false;
                }
                if let Some(section) = self.section_at(event.position)
                    && self.drag.update(section)
                {
                    Self::scroll_to_section(section, indexer, host);
                    host.invalidate();
                }
                true
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                if !self.drag.is_dragging() {
                    return false;
                }
                debug!(phase = ?event.phase, "index drag ended");
                self.drag.end();
                host.invalidate();
                true
            }
        }
    }

    /// Draws the bar background, the preview bubble while dragging, and the
    /// glyph column.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let Some(layout) = self.layout else {
            return;
        };
        let background = if self.drag.is_dragging() {
            self.config.touched_background_color
        } else {
            self.config.background_color
        };
        canvas.draw(DrawOp::FillRoundedRect {
            shape: RoundedRect::from_rect(layout.rect, self.config.bar_corner_radius),
            color: background,
            shadow: None,
        });

        if let Some(label) = self.current_section_label() {
            PreviewBubble::new(label, self.container, &self.config, &self.measurer)
                .draw(&self.config, canvas);
        }

        for (ordinal, label) in self.sections.iter().enumerate() {
            canvas.draw(DrawOp::Text {
                text: label.clone(),
                origin: layout.glyph_origin(ordinal),
                size: self.config.text_size,
                color: self.config.text_color,
                align: TextAlign::Center,
            });
        }
    }

    /// Fills the bar's bounds in red, to check its placement.
    pub fn draw_debug<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(layout) = self.layout {
            canvas.draw(DrawOp::FillRect {
                rect: layout.rect,
                color: Color::from_rgb8(0xff, 0, 0),
            });
        }
    }

    fn section_at(&self, point: Point) -> Option<usize> {
        self.layout.and_then(|layout| layout.section_at(point))
    }

    fn scroll_to_section<I, H>(section: usize, indexer: &I, host: &mut H)
    where
        I: SectionIndexer + ?Sized,
        H: ScrollHost + ?Sized,
    {
        match indexer.position_for_section(section) {
            Ok(position) => {
                trace!(section, position, "scrolling to section");
                host.scroll_to_item(position, 0.0);
            }
            Err(err) => warn!(section, error = %err, "section has no position"),
        }
    }

    fn relayout(&mut self) {
        self.layout =
            IndexBarLayout::compute(&self.sections, &self.measurer, &self.config, self.container);
        debug!(
            width = self.container.width,
            height = self.container.height,
            sections = self.sections.len(),
            rect = ?self.layout.map(|layout| layout.rect),
            "index bar laid out"
        );
    }
}
