// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=indexable_sections --heading-base-level=0

//! Indexable Sections: the data model behind an alphabetical jump list.
//!
//! A sectioned list is a flat sequence of [`Item`]s in which every section
//! header immediately precedes the entries that belong to it. This crate
//! derives, in a single pass over that sequence, the ordered set of section
//! labels and where each section starts, so that an index bar can map a
//! touched label back to a list position in constant time.
//!
//! The core concepts are:
//!
//! - [`Item`]: a tagged header/entry variant carrying display content.
//! - [`ItemSource`]: the read-only item capability a list adapter exposes
//!   (count, header predicate, content lookup, nearest preceding header).
//! - [`SectionIndexer`]: the optional sectioning capability. Adapters that do
//!   not provide it simply have no index bar.
//! - [`SectionIndex`]: a precomputed [`SectionIndexer`] built from items.
//! - [`SectionedItems`]: an owned item list bundled with its index, usable as
//!   an adapter directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use indexable_sections::{Item, SectionIndex, SectionIndexer};
//!
//! let items = [
//!     Item::header("A"),
//!     Item::entry("Alpha"),
//!     Item::entry("Ant"),
//!     Item::header("B"),
//!     Item::entry("Banana"),
//! ];
//!
//! let index = SectionIndex::new(&items[..]);
//! assert_eq!(index.section_labels(), ["A", "B"]);
//! assert_eq!(index.first_item_position("B"), Ok(3));
//! assert_eq!(index.section_for_position(4), Some(1));
//! ```
//!
//! Derived indexes are caches: rebuild them whenever the underlying items
//! change. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod index;
mod item;

pub use error::InvalidIndexError;
pub use index::{SectionIndex, SectionIndexer, SectionedItems};
pub use item::{Item, ItemSource};
