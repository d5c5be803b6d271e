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

//! # Freebusy Core
//!
//! A small algebra over closed numeric intervals ("blocks"), used to compute
//! unions, differences, and positional relationships between ranges, such as
//! free/busy time windows on a schedule. Blocks carry no calendar or time-zone
//! semantics; endpoints are opaque ordered numbers in a caller-defined unit.
//!
//! ## Modules
//!
//! - `math`: The [`Block`](math::block::Block) value type with its
//!   containment and overlap predicates, the pairwise `add`/`subtract`
//!   operations (each producing zero, one, or two blocks), and the `merge`
//!   reduction that collapses an arbitrary block sequence into its minimal
//!   sorted, non-overlapping cover.
//! - `num`: Numeric trait plumbing. The [`BlockNum`](num::BlockNum) alias
//!   collects the endpoint bounds (integer or floating point), together with
//!   partial-order min/max helpers.
//!
//! ## Purpose
//!
//! Blocks are immutable `Copy` values; every operation is a pure function of
//! its inputs and allocates a new result. Instances are therefore freely
//! shareable across threads without synchronization.

pub mod math;
pub mod num;
