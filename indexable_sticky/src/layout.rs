// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// What a host list's layout reports as its first visible item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisibleAnchor<'a> {
    /// A single-column list; `None` when empty.
    Linear(Option<usize>),
    /// A uniform grid, reporting the first visible cell; `None` when empty.
    Grid(Option<usize>),
    /// A staggered grid, reporting one first-visible item per column.
    StaggeredGrid(&'a [Option<usize>]),
    /// A layout whose first visible item cannot be determined.
    Other(&'a str),
}

/// A host list layout for which no first visible item can be determined.
///
/// This is an integration error, not a runtime condition: the host must use
/// one of the supported [`VisibleAnchor`] layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedLayoutError {
    /// Name of the layout, as reported by the host.
    pub layout: String,
}

impl fmt::Display for UnsupportedLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the layout {:?} is not supported", self.layout)
    }
}

impl core::error::Error for UnsupportedLayoutError {}

/// Resolves the first visible item position.
///
/// Staggered grids resolve to the smallest position across their columns, so
/// the result does not depend on column order. Returns `Ok(None)` when
/// nothing is visible.
pub fn first_visible_position(
    anchor: VisibleAnchor<'_>,
) -> Result<Option<usize>, UnsupportedLayoutError> {
    match anchor {
        VisibleAnchor::Linear(first) | VisibleAnchor::Grid(first) => Ok(first),
        VisibleAnchor::StaggeredGrid(columns) => Ok(columns.iter().flatten().copied().min()),
        VisibleAnchor::Other(name) => Err(UnsupportedLayoutError {
            layout: String::from(name),
        }),
    }
}
