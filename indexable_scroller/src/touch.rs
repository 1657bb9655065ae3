// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer touch input and the index bar's drag state.

use kurbo::Point;

/// Phase of a single-pointer touch sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The pointer went down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was lifted.
    Up,
    /// The gesture was taken away by the system.
    Cancel,
}

/// A touch sample in container coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// What happened.
    pub phase: TouchPhase,
    /// Where it happened.
    pub position: Point,
}

impl TouchEvent {
    /// Creates a sample.
    #[must_use]
    pub fn new(phase: TouchPhase, position: impl Into<Point>) -> Self {
        Self {
            phase,
            position: position.into(),
        }
    }

    /// A [`TouchPhase::Down`] sample.
    #[must_use]
    pub fn down(position: impl Into<Point>) -> Self {
        Self::new(TouchPhase::Down, position)
    }

    /// A [`TouchPhase::Move`] sample.
    #[must_use]
    pub fn moved(position: impl Into<Point>) -> Self {
        Self::new(TouchPhase::Move, position)
    }

    /// A [`TouchPhase::Up`] sample.
    #[must_use]
    pub fn up(position: impl Into<Point>) -> Self {
        Self::new(TouchPhase::Up, position)
    }

    /// A [`TouchPhase::Cancel`] sample.
    #[must_use]
    pub fn cancel(position: impl Into<Point>) -> Self {
        Self::new(TouchPhase::Cancel, position)
    }
}

/// Tracks a drag that started on the index bar.
///
/// Idle until [`TouchDragState::start`]; dragging until [`TouchDragState::end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TouchDragState {
    current_section: Option<usize>,
}

impl TouchDragState {
    /// Start dragging on `section`.
    pub fn start(&mut self, section: usize) {
        self.current_section = Some(section);
    }

    /// Move the drag onto `section`, returning `true` if it changed.
    ///
    /// Does nothing while idle.
    pub fn update(&mut self, section: usize) -> bool {
        match self.current_section {
            Some(current) if current != section => {
                self.current_section = Some(section);
                true
            }
            _ => false,
        }
    }

    /// End the drag and forget the section.
    pub fn end(&mut self) {
        self.current_section = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.current_section.is_some()
    }

    /// The highlighted section, or `None` when idle.
    #[must_use]
    pub fn current_section(&self) -> Option<usize> {
        self.current_section
    }
}
