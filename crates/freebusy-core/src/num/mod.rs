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

//! # Block Numeric Trait
//!
//! Unified numeric bounds for block endpoints. `BlockNum` specifies the
//! endpoint capabilities required by the block algebra: by-value arithmetic
//! from `num_traits::Num` (for lengths and padding) and a partial order (so
//! both integer and floating-point endpoints are supported).
//!
//! ## Motivation
//!
//! The block algebra should remain generic over endpoint types while keeping
//! arithmetic semantics predictable. Floating-point endpoints are only
//! `PartialOrd`, so this module also provides `partial_min`/`partial_max`
//! helpers in place of `std::cmp::{min, max}`.
//!
//! Comparison against NaN-like values is undefined for this algebra; such
//! inputs are the caller's responsibility.

use num_traits::Num;

/// A trait alias for numeric types that can be used as block endpoints.
///
/// These are usually the primitive integer types (`i32`, `i64`, ...) and the
/// floating-point types (`f32`, `f64`); the unit of the value is defined by
/// the caller.
pub trait BlockNum: Num + Copy + PartialOrd {}

impl<T> BlockNum for T where T: Num + Copy + PartialOrd {}

/// Returns the smaller of two partially ordered values.
///
/// Returns `a` when the two compare equal or are incomparable.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::partial_min;
///
/// assert_eq!(partial_min(1, 2), 1);
/// assert_eq!(partial_min(2.5, 0.5), 0.5);
/// ```
#[inline]
pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Returns the larger of two partially ordered values.
///
/// Returns `a` when the two compare equal or are incomparable.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::partial_max;
///
/// assert_eq!(partial_max(1, 2), 2);
/// assert_eq!(partial_max(2.5, 0.5), 2.5);
/// ```
#[inline]
pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_min_max_integers() {
        assert_eq!(partial_min(3, 7), 3);
        assert_eq!(partial_max(3, 7), 7);
        assert_eq!(partial_min(-4, -9), -9);
        assert_eq!(partial_max(-4, -9), -4);
    }

    #[test]
    fn test_partial_min_max_floats() {
        assert_eq!(partial_min(1.25, 1.5), 1.25);
        assert_eq!(partial_max(1.25, 1.5), 1.5);
    }

    #[test]
    fn test_ties_return_first() {
        assert_eq!(partial_min(5, 5), 5);
        assert_eq!(partial_max(5, 5), 5);
    }
}
