// Copyright (c) 2025 The freebusy developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Block Math
//!
//! The closed-interval block algebra. This module hosts the [`Block`]
//! value type along with its predicates, pairwise union/difference
//! operations, and the merge reduction.
//!
//! ## Submodules
//!
//! - `block`: A generic `[start, end]` block type with a swap-normalizing
//!   constructor, containment and overlap predicates, constructive
//!   operations (union/trim/limit/pad/split), the multi-result
//!   `add`/`subtract` operations, and the `merge` reduction that produces a
//!   minimal sorted non-overlapping cover. Includes conversions to/from
//!   `std::ops::RangeInclusive` and `RangeBounds` support.
//!
//! ## Motivation
//!
//! Schedule arithmetic routinely combines and punches holes into windows of
//! time. Closed intervals with an explicit, quirky boundary semantics (a
//! shared endpoint counts as both overlapping and disjoint, depending on the
//! predicate asked) match the free/busy domain this crate was extracted
//! from; the exact boundary behavior is part of the contract.
//!
//! [`Block`]: block::Block

pub mod block;
