// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// A section lookup that does not resolve against the current item set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidIndexError {
    /// No section with this label exists.
    UnknownLabel {
        /// The label that was looked up.
        label: String,
    },
    /// The section ordinal is outside `0..len`.
    OrdinalOutOfRange {
        /// The ordinal that was looked up.
        ordinal: usize,
        /// Number of sections at the time of the lookup.
        len: usize,
    },
}

impl fmt::Display for InvalidIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLabel { label } => write!(f, "section {label:?} not found"),
            Self::OrdinalOutOfRange { ordinal, len } => {
                write!(
                    f,
                    "section ordinal {ordinal} out of range for {len} sections"
                )
            }
        }
    }
}

impl core::error::Error for InvalidIndexError {}
