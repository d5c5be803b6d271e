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

use crate::num::{BlockNum, partial_max, partial_min};
use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    ops::{BitAnd, BitOr, RangeInclusive},
};

/// A closed interval `[start, end]` over ordered numeric endpoints.
///
/// A block is an immutable `Copy` value. Construction normalizes its two
/// endpoints so that the smaller becomes `start` and the larger `end`;
/// passing them in either order is never an error. `start == end` is a valid
/// zero-length block.
///
/// The `start` endpoint is also called the *top* of the block and `end` its
/// *bottom* (schedule columns grow downward); the positional predicates are
/// phrased in those terms.
///
/// # Invariants
///
/// `start <= end` always holds after construction.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::math::block::Block;
///
/// let a = Block::new(9, 5);
/// assert_eq!(a, Block::new(5, 9));
/// assert_eq!(a.length(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Hash)]
pub struct Block<T>
where
    T: BlockNum,
{
    start: T,
    end: T,
}

impl<T> Block<T>
where
    T: BlockNum,
{
    /// Creates a new `Block` from two endpoints in either order.
    ///
    /// The endpoints are swapped if necessary so that `start <= end` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let b = Block::new(10, 2);
    /// assert_eq!(b.start(), 2);
    /// assert_eq!(b.end(), 10);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Creates a new `Block` without normalizing the endpoints.
    ///
    /// The caller must ensure `start <= end`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            !(end < start),
            "invalid block: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the lower endpoint of the block.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the upper endpoint of the block.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Alias for [`start`](Self::start): the top edge of the block.
    #[inline]
    pub const fn top(&self) -> T {
        self.start
    }

    /// Alias for [`end`](Self::end): the bottom edge of the block.
    #[inline]
    pub const fn bottom(&self) -> T {
        self.end
    }

    /// Returns the length of the block (`end - start`, always non-negative).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(3, 11).length(), 8);
    /// assert_eq!(Block::new(11, 3).length(), 8);
    /// assert_eq!(Block::new(4, 4).length(), 0);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the block has zero length (`start == end`).
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies within the closed interval
    /// `[start, end]`. Both endpoints are inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let b = Block::new(2, 8);
    /// assert!(b.contains_point(2));
    /// assert!(b.contains_point(8));
    /// assert!(!b.contains_point(9));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies strictly inside `self`, touching
    /// neither edge.
    ///
    /// Compare with [`covers`](Self::covers), which admits shared edges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 10);
    /// assert!(a.surrounds(Block::new(2, 9)));
    /// assert!(!a.surrounds(Block::new(1, 9)));
    /// assert!(!a.surrounds(a));
    /// ```
    #[inline]
    pub fn surrounds(&self, other: Self) -> bool {
        other.start > self.start && other.end < self.end
    }

    /// Returns `true` if `other` lies within `self`, shared edges allowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 10);
    /// assert!(a.covers(Block::new(1, 10)));
    /// assert!(a.covers(Block::new(1, 5)));
    /// assert!(!a.covers(Block::new(0, 5)));
    /// ```
    #[inline]
    pub fn covers(&self, other: Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Returns `true` if `self` starts at or before `other` and `self`'s
    /// bottom edge falls inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 6);
    /// assert!(a.intersects_top(Block::new(4, 9)));
    /// assert!(!a.intersects_top(Block::new(7, 9)));
    /// ```
    #[inline]
    pub fn intersects_top(&self, other: Self) -> bool {
        self.start <= other.start && other.contains_point(self.end)
    }

    /// Returns `true` if `self` ends at or after `other` and `self`'s top
    /// edge falls inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(4, 9);
    /// assert!(a.intersects_bottom(Block::new(1, 6)));
    /// assert!(!a.intersects_bottom(Block::new(1, 3)));
    /// ```
    #[inline]
    pub fn intersects_bottom(&self, other: Self) -> bool {
        self.end >= other.end && other.contains_point(self.start)
    }

    /// Returns `true` if the two blocks share at least one point: either
    /// block's top edge falls within the other.
    ///
    /// Touching endpoints count as overlapping here. Note that the same pair
    /// also counts as [`disjoint`](Self::disjoint); the two predicates
    /// disagree at boundaries on purpose.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 5);
    /// assert!(a.overlaps(Block::new(4, 9)));
    /// assert!(a.overlaps(Block::new(5, 9)));
    /// assert!(!a.overlaps(Block::new(6, 9)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.contains_point(other.start) || other.contains_point(self.start)
    }

    /// Returns `true` if the blocks are separated: `self` starts at or after
    /// `other` ends, or ends at or before `other` starts.
    ///
    /// Touching endpoints count as disjoint under this predicate even though
    /// [`overlaps`](Self::overlaps) also reports them as overlapping; the
    /// asymmetry at boundaries is part of the contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 5);
    /// assert!(a.disjoint(Block::new(6, 9)));
    /// assert!(a.disjoint(Block::new(5, 9)));
    /// assert!(!a.disjoint(Block::new(4, 9)));
    /// ```
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        self.start >= other.end || self.end <= other.start
    }

    /// Returns `true` if every block in `others` lines up with one of this
    /// block's edges: its start equals this block's top, or its end equals
    /// this block's bottom.
    ///
    /// This is the permissive boundary comparison used to decide whether a
    /// sequence of blocks collectively spans this block's edges. It is
    /// deliberately order-insensitive and vacuously true for an empty
    /// sequence; it is not an equality relation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 10);
    /// assert!(a.matches_boundaries(&[Block::new(1, 4), Block::new(6, 10)]));
    /// assert!(!a.matches_boundaries(&[Block::new(2, 4)]));
    /// ```
    pub fn matches_boundaries(&self, others: &[Self]) -> bool {
        others
            .iter()
            .all(|b| b.start == self.start || b.end == self.end)
    }

    /// Returns the spanning union of the two blocks.
    ///
    /// Always defined, regardless of overlap; for separated blocks the
    /// result covers the gap between them. Callers decide when a spanning
    /// union is meaningful.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 5);
    /// assert_eq!(a.union(Block::new(3, 9)), Block::new(1, 9));
    /// assert_eq!(a.union(Block::new(8, 9)), Block::new(1, 9));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self::new_unchecked(
            partial_min(self.start, other.start),
            partial_max(self.end, other.end),
        )
    }

    /// Replaces the top edge, keeping the bottom.
    ///
    /// A `new_top` past the bottom edge normalizes by swapping, per the
    /// constructor rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(1, 9).trim_from(4), Block::new(4, 9));
    /// ```
    #[inline]
    pub fn trim_from(&self, new_top: T) -> Self {
        Self::new(new_top, self.end)
    }

    /// Replaces the bottom edge, keeping the top.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(1, 9).trim_to(4), Block::new(1, 4));
    /// ```
    #[inline]
    pub fn trim_to(&self, new_bottom: T) -> Self {
        Self::new(self.start, new_bottom)
    }

    /// Clips this block to lie within `limit`.
    ///
    /// When the two blocks do not overlap, the clipped endpoints cross and
    /// the constructor silently swaps them into a valid block between the
    /// two inputs. This silent-swap behavior is deliberate; use
    /// [`overlaps`](Self::overlaps) first if an empty intersection must be
    /// detected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(1, 7);
    /// assert_eq!(a.limited(Block::new(4, 9)), Block::new(4, 7));
    ///
    /// // Disjoint inputs: endpoints cross and normalize.
    /// assert_eq!(Block::new(1, 3).limited(Block::new(5, 9)), Block::new(3, 5));
    /// ```
    #[inline]
    pub fn limited(&self, limit: Self) -> Self {
        Self::new(
            partial_max(self.start, limit.start),
            partial_min(self.end, limit.end),
        )
    }

    /// Expands the block by moving the top edge up by `top_pad` and the
    /// bottom edge down by `bottom_pad`. Negative padding is clamped to zero
    /// and has no effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(5, 10);
    /// assert_eq!(a.padded(2, 3), Block::new(3, 13));
    /// assert_eq!(a.padded(-2, -3), a);
    /// ```
    #[inline]
    pub fn padded(&self, top_pad: T, bottom_pad: T) -> Self {
        Self::new_unchecked(
            self.start - partial_max(top_pad, T::zero()),
            self.end + partial_max(bottom_pad, T::zero()),
        )
    }

    /// Cuts `other` out of the middle of `self`, returning the pieces before
    /// and after it.
    ///
    /// This is a raw helper: it is only meaningful when `self`
    /// [`covers`](Self::covers) `other`. It is not guarded; with
    /// non-covering inputs the pieces come out inverted and are silently
    /// normalized by the constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let (before, after) = Block::new(0, 10).split(Block::new(4, 6));
    /// assert_eq!(before, Block::new(0, 4));
    /// assert_eq!(after, Block::new(6, 10));
    /// ```
    #[inline]
    pub fn split(&self, other: Self) -> (Self, Self) {
        (
            Self::new(self.start, other.start),
            Self::new(other.end, self.end),
        )
    }

    /// Combines `self` with a single other block.
    ///
    /// Overlapping blocks collapse into their union; otherwise both blocks
    /// are returned unchanged, with `other` first and `self` second. The
    /// ordering of the disjoint result is fixed and relied upon by callers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let merged = Block::new(1, 5).add(Block::new(4, 9));
    /// assert_eq!(merged.len(), 1);
    /// assert_eq!(merged[0], Block::new(1, 9));
    ///
    /// let kept = Block::new(3, 5).add(Block::new(10, 12));
    /// assert_eq!(kept.len(), 2);
    /// assert_eq!(kept[0], Block::new(10, 12));
    /// assert_eq!(kept[1], Block::new(3, 5));
    /// ```
    pub fn add(&self, other: Self) -> SmallVec<Self, 2> {
        if self.overlaps(other) {
            smallvec::smallvec![self.union(other)]
        } else {
            smallvec::smallvec![other, *self]
        }
    }

    /// Collapses `self` and every block in `others` into one spanning block.
    ///
    /// Unlike [`add`](Self::add), this ignores overlap entirely: the result
    /// is always a single block from the smallest top to the largest bottom
    /// of all inputs. The two operations share a name lineage but are
    /// distinct; do not substitute one for the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let span = Block::new(5, 6).add_all(&[Block::new(1, 2), Block::new(10, 12)]);
    /// assert_eq!(span.len(), 1);
    /// assert_eq!(span[0], Block::new(1, 12));
    /// ```
    pub fn add_all(&self, others: &[Self]) -> SmallVec<Self, 2> {
        let mut top = self.start;
        let mut bottom = self.end;
        for b in others {
            top = partial_min(top, b.start);
            bottom = partial_max(bottom, b.end);
        }
        smallvec::smallvec![Self::new_unchecked(top, bottom)]
    }

    /// Removes `other` from `self`, returning the remaining pieces.
    ///
    /// The result holds zero, one, or two blocks:
    ///
    /// - equal blocks cancel to nothing;
    /// - [`disjoint`](Self::disjoint) blocks leave `self` unchanged;
    /// - a covered `other` sharing the top or bottom edge trims `self` to
    ///   the piece before or after it;
    /// - an `other` that consumes `self` from the bottom side (or swallows
    ///   it whole) leaves nothing;
    /// - any remaining partial overlap, including an `other` strictly
    ///   interior to `self`, falls back to the two blocks formed between the
    ///   paired top and paired bottom edges. For the strictly interior case
    ///   this is the intuitive two-piece split; other partial overlaps can
    ///   produce zero-length pieces, which are returned as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(5, 25);
    /// assert_eq!(a.subtract(a).len(), 0);
    ///
    /// let after = a.subtract(Block::new(5, 20));
    /// assert_eq!(after.len(), 1);
    /// assert_eq!(after[0], Block::new(20, 25));
    ///
    /// let pieces = Block::new(1, 10).subtract(Block::new(3, 7));
    /// assert_eq!(pieces.len(), 2);
    /// assert_eq!(pieces[0], Block::new(1, 3));
    /// assert_eq!(pieces[1], Block::new(7, 10));
    /// ```
    pub fn subtract(&self, other: Self) -> SmallVec<Self, 2> {
        if *self == other {
            return SmallVec::new();
        }
        if self.disjoint(other) {
            return smallvec::smallvec![*self];
        }
        if self.covers(other) {
            if self.intersects_bottom(other) {
                return smallvec::smallvec![Self::new_unchecked(other.end, self.end)];
            }
            if self.intersects_top(other) {
                return smallvec::smallvec![Self::new_unchecked(self.start, other.start)];
            }
            // Covered but touching neither edge: handled by the endpoint
            // fallback below.
        }
        if other.surrounds(*self)
            || self.intersects_bottom(other)
            || other.intersects_bottom(*self)
        {
            return SmallVec::new();
        }
        smallvec::smallvec![
            Self::new_unchecked(
                partial_min(self.start, other.start),
                partial_max(self.start, other.start),
            ),
            Self::new_unchecked(
                partial_min(self.end, other.end),
                partial_max(self.end, other.end),
            ),
        ]
    }

    /// Recovers the free gaps between consecutive blocks of `others` where
    /// `self` reaches across them.
    ///
    /// `others` is assumed sorted by top edge. For each adjacent pair that
    /// is [`disjoint`](Self::disjoint) from one another, the gap between
    /// them is emitted when `self` [`overlaps`](Self::overlaps) both
    /// members. Gaps are accumulated in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let day = Block::new(0, 20);
    /// let busy = [Block::new(1, 3), Block::new(5, 8), Block::new(10, 12)];
    ///
    /// let free = day.subtract_all(&busy);
    /// assert_eq!(free.len(), 2);
    /// assert_eq!(free[0], Block::new(3, 5));
    /// assert_eq!(free[1], Block::new(8, 10));
    /// ```
    pub fn subtract_all(&self, others: &[Self]) -> SmallVec<Self, 2> {
        let mut gaps = SmallVec::new();
        for pair in others.windows(2) {
            if pair[0].disjoint(pair[1]) && self.overlaps(pair[0]) && self.overlaps(pair[1]) {
                gaps.push(Self::new(pair[0].end, pair[1].start));
            }
        }
        gaps
    }

    /// Reduces an arbitrary sequence of blocks to its minimal cover: sorted
    /// by start and pairwise non-overlapping.
    ///
    /// The input is sorted lexicographically by `(top, bottom)` and folded
    /// left to right, coalescing each block into the accumulator tail
    /// whenever the two [`overlaps`](Self::overlaps) (touching blocks
    /// coalesce too). Incomparable endpoints (NaN) sort as equal; such
    /// inputs are the caller's responsibility.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let cover = Block::merge(&[Block::new(1, 3), Block::new(2, 5), Block::new(8, 10)]);
    /// assert_eq!(cover, vec![Block::new(1, 5), Block::new(8, 10)]);
    /// ```
    pub fn merge(blocks: &[Self]) -> Vec<Self> {
        let mut sorted = blocks.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut cover: Vec<Self> = Vec::with_capacity(sorted.len());
        for block in sorted {
            if let Some(last) = cover.last_mut() {
                if last.overlaps(block) {
                    *last = last.union(block);
                    continue;
                }
            }
            cover.push(block);
        }
        cover
    }

    /// Merges `self` together with `others`; sugar for
    /// [`merge`](Self::merge) over `self` followed by `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let cover = Block::new(2, 5).merge_with(&[Block::new(1, 3)]);
    /// assert_eq!(cover, vec![Block::new(1, 5)]);
    /// ```
    pub fn merge_with(&self, others: &[Self]) -> Vec<Self> {
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(*self);
        all.extend_from_slice(others);
        Self::merge(&all)
    }
}

impl<T> Eq for Block<T> where T: BlockNum + Eq {}

impl<T> PartialOrd for Block<T>
where
    T: BlockNum,
{
    /// Blocks order lexicographically by `(top, bottom)`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.start.partial_cmp(&other.start) {
            Some(Ordering::Equal) => self.end.partial_cmp(&other.end),
            ord => ord,
        }
    }
}

impl<T> Ord for Block<T>
where
    T: BlockNum + Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<T> Default for Block<T>
where
    T: BlockNum,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> BitOr for Block<T>
where
    T: BlockNum,
{
    type Output = Self;

    /// Spanning union; see [`Block::union`].
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> BitAnd for Block<T>
where
    T: BlockNum,
{
    type Output = Self;

    /// Clamp to the right-hand block; see [`Block::limited`] for the
    /// behavior on disjoint inputs.
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.limited(rhs)
    }
}

impl<T> std::fmt::Display for Block<T>
where
    T: BlockNum + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Block<T>
where
    T: BlockNum,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> From<RangeInclusive<T>> for Block<T>
where
    T: BlockNum,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<Block<T>> for RangeInclusive<T>
where
    T: BlockNum,
{
    #[inline]
    fn from(block: Block<T>) -> Self {
        block.start..=block.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_normalizes() {
        let a = Block::new(5, 1);
        assert_eq!(a.start(), 1);
        assert_eq!(a.end(), 5);
        assert_eq!(a, Block::new(1, 5));
    }

    #[test]
    fn test_aliases() {
        let a = Block::new(2, 7);
        assert_eq!(a.top(), a.start());
        assert_eq!(a.bottom(), a.end());
    }

    #[test]
    fn test_zero_length() {
        let a = Block::new(4, 4);
        assert!(a.is_zero_length());
        assert_eq!(a.length(), 0);
    }

    #[test]
    fn test_length_non_negative() {
        assert_eq!(Block::new(3, 11).length(), 8);
        assert_eq!(Block::new(11, 3).length(), 8);
        assert_eq!(Block::new(-4.0, 2.5).length(), 6.5);
    }

    #[test]
    fn test_contains_point_inclusive() {
        let a = Block::new(0, 10);
        assert!(a.contains_point(0));
        assert!(a.contains_point(5));
        assert!(a.contains_point(10));
        assert!(!a.contains_point(-1));
        assert!(!a.contains_point(11));
    }

    #[test]
    fn test_surrounds_is_strict() {
        let a = Block::new(1, 10);
        assert!(a.surrounds(Block::new(2, 9)));
        assert!(!a.surrounds(Block::new(1, 9)));
        assert!(!a.surrounds(Block::new(2, 10)));
        assert!(!a.surrounds(Block::new(1, 10)));
    }

    #[test]
    fn test_covers_is_non_strict() {
        let a = Block::new(1, 10);
        assert!(a.covers(Block::new(1, 10)));
        assert!(a.covers(Block::new(1, 5)));
        assert!(a.covers(Block::new(5, 10)));
        assert!(a.covers(Block::new(2, 9)));
        assert!(!a.covers(Block::new(0, 5)));
        assert!(!a.covers(Block::new(5, 11)));
    }

    #[test]
    fn test_intersects_top() {
        let a = Block::new(1, 6);
        // a's bottom edge falls inside the other, a starting at or before it.
        assert!(a.intersects_top(Block::new(4, 9)));
        assert!(a.intersects_top(Block::new(1, 9)));
        assert!(!a.intersects_top(Block::new(7, 9)));
        assert!(!a.intersects_top(Block::new(0, 9)));
    }

    #[test]
    fn test_intersects_bottom() {
        let a = Block::new(4, 9);
        assert!(a.intersects_bottom(Block::new(1, 6)));
        assert!(a.intersects_bottom(Block::new(1, 9)));
        assert!(!a.intersects_bottom(Block::new(1, 3)));
        assert!(!a.intersects_bottom(Block::new(1, 10)));
    }

    #[test]
    fn test_overlaps() {
        let a = Block::new(1, 5);
        assert!(a.overlaps(Block::new(4, 9)));
        assert!(a.overlaps(Block::new(0, 2)));
        assert!(a.overlaps(Block::new(2, 3)));
        assert!(a.overlaps(Block::new(0, 9)));
        assert!(!a.overlaps(Block::new(6, 9)));
    }

    #[test]
    fn test_boundary_asymmetry() {
        // Touching endpoints are both overlapping and disjoint, depending on
        // the predicate asked.
        let a = Block::new(1, 5);
        let b = Block::new(5, 9);
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(a.disjoint(b));
        assert!(b.disjoint(a));
    }

    #[test]
    fn test_disjoint() {
        let a = Block::new(1, 5);
        assert!(a.disjoint(Block::new(6, 9)));
        assert!(a.disjoint(Block::new(-3, 0)));
        assert!(!a.disjoint(Block::new(4, 9)));
        assert!(!a.disjoint(Block::new(0, 2)));
    }

    #[test]
    fn test_matches_boundaries() {
        let a = Block::new(1, 10);
        assert!(a.matches_boundaries(&[Block::new(1, 4), Block::new(6, 10)]));
        // Order-insensitive.
        assert!(a.matches_boundaries(&[Block::new(6, 10), Block::new(1, 4)]));
        // Vacuously true for an empty sequence.
        assert!(a.matches_boundaries(&[]));
        // Every member must line up with an edge.
        assert!(!a.matches_boundaries(&[Block::new(1, 4), Block::new(5, 7)]));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Block::new(1, 5), Block::new(5, 1));
        assert_ne!(Block::new(1, 5), Block::new(1, 6));
        assert_ne!(Block::new(1, 5), Block::new(2, 5));
    }

    #[test]
    fn test_ordering_lexicographic() {
        assert!(Block::new(1, 5) < Block::new(2, 3));
        assert!(Block::new(1, 5) < Block::new(1, 6));
        assert!(Block::new(2, 3) > Block::new(1, 9));
        assert_eq!(
            Block::new(1.0, 5.0).partial_cmp(&Block::new(1.0, 6.0)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_union_always_defined() {
        let a = Block::new(1, 5);
        assert_eq!(a.union(Block::new(3, 9)), Block::new(1, 9));
        assert_eq!(a.union(Block::new(2, 3)), a);
        // Disjoint inputs span the gap.
        assert_eq!(a.union(Block::new(8, 9)), Block::new(1, 9));
    }

    #[test]
    fn test_trim() {
        let a = Block::new(1, 9);
        assert_eq!(a.trim_from(4), Block::new(4, 9));
        assert_eq!(a.trim_to(4), Block::new(1, 4));
        // Crossing endpoints normalize.
        assert_eq!(a.trim_from(12), Block::new(9, 12));
        assert_eq!(a.trim_to(-2), Block::new(-2, 1));
    }

    #[test]
    fn test_limited() {
        let a = Block::new(1, 7);
        assert_eq!(a.limited(Block::new(4, 9)), Block::new(4, 7));
        assert_eq!(a.limited(Block::new(0, 10)), a);
        assert_eq!(a.limited(Block::new(2, 5)), Block::new(2, 5));
    }

    #[test]
    fn test_limited_disjoint_swaps() {
        // Non-overlapping limit: the clipped endpoints cross and the
        // constructor swaps them into the block between the inputs.
        assert_eq!(Block::new(1, 3).limited(Block::new(5, 9)), Block::new(3, 5));
    }

    #[test]
    fn test_padded() {
        let a = Block::new(5, 10);
        assert_eq!(a.padded(2, 3), Block::new(3, 13));
        assert_eq!(a.padded(0, 0), a);
        // Negative padding is clamped and has no effect.
        assert_eq!(a.padded(-2, -3), a);
        assert_eq!(a.padded(-2, 1), Block::new(5, 11));
    }

    #[test]
    fn test_split() {
        let (before, after) = Block::new(0, 10).split(Block::new(4, 6));
        assert_eq!(before, Block::new(0, 4));
        assert_eq!(after, Block::new(6, 10));
    }

    #[test]
    fn test_split_edge_touching() {
        let (before, after) = Block::new(0, 10).split(Block::new(0, 6));
        assert_eq!(before, Block::new(0, 0));
        assert_eq!(after, Block::new(6, 10));
    }

    #[test]
    fn test_add_overlapping_merges() {
        let sum = Block::new(1, 5).add(Block::new(4, 9));
        assert_eq!(sum.len(), 1);
        assert_eq!(sum[0], Block::new(1, 9));
    }

    #[test]
    fn test_add_commutes_when_merging() {
        let a = Block::new(1, 5);
        let b = Block::new(4, 9);
        assert_eq!(a.add(b), b.add(a));
    }

    #[test]
    fn test_add_disjoint_keeps_other_first() {
        let sum = Block::new(3, 5).add(Block::new(10, 12));
        assert_eq!(sum.len(), 2);
        assert_eq!(sum[0], Block::new(10, 12));
        assert_eq!(sum[1], Block::new(3, 5));
    }

    #[test]
    fn test_add_all_spans_everything() {
        let span = Block::new(5, 6).add_all(&[Block::new(1, 2), Block::new(10, 12)]);
        assert_eq!(span.len(), 1);
        assert_eq!(span[0], Block::new(1, 12));
    }

    #[test]
    fn test_add_all_empty_sequence() {
        let span = Block::new(5, 6).add_all(&[]);
        assert_eq!(span.len(), 1);
        assert_eq!(span[0], Block::new(5, 6));
    }

    #[test]
    fn test_subtract_self_is_empty() {
        let a = Block::new(1, 5);
        assert!(a.subtract(a).is_empty());
    }

    #[test]
    fn test_subtract_disjoint_is_identity() {
        let a = Block::new(1, 2);
        let diff = a.subtract(Block::new(5, 6));
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0], a);
    }

    #[test]
    fn test_subtract_covered_sharing_top() {
        // The subtrahend shares the top edge: keep the part after it.
        let diff = Block::new(5, 25).subtract(Block::new(5, 20));
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0], Block::new(20, 25));
    }

    #[test]
    fn test_subtract_covered_sharing_bottom() {
        // The subtrahend shares the bottom edge: keep the part before it.
        let diff = Block::new(5, 25).subtract(Block::new(10, 25));
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0], Block::new(5, 10));
    }

    #[test]
    fn test_subtract_strictly_interior_splits() {
        // Covered but touching neither edge: the endpoint fallback produces
        // the two-piece split.
        let diff = Block::new(1, 10).subtract(Block::new(3, 7));
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0], Block::new(1, 3));
        assert_eq!(diff[1], Block::new(7, 10));
    }

    #[test]
    fn test_subtract_consumed_from_bottom() {
        // A partial overlap running past self's bottom edge consumes it.
        assert!(Block::new(1, 5).subtract(Block::new(3, 8)).is_empty());
        assert!(Block::new(3, 8).subtract(Block::new(1, 5)).is_empty());
    }

    #[test]
    fn test_subtract_surrounded_is_empty() {
        assert!(Block::new(3, 5).subtract(Block::new(1, 9)).is_empty());
    }

    #[test]
    fn test_subtract_all_recovers_gaps() {
        let day = Block::new(0, 20);
        let busy = [Block::new(1, 3), Block::new(5, 8), Block::new(10, 12)];
        let free = day.subtract_all(&busy);
        assert_eq!(free.len(), 2);
        assert_eq!(free[0], Block::new(3, 5));
        assert_eq!(free[1], Block::new(8, 10));
    }

    #[test]
    fn test_subtract_all_requires_overlap_with_both() {
        // The query ends inside the second pair, so only the first gap is
        // recovered.
        let a = Block::new(0, 6);
        let busy = [Block::new(1, 3), Block::new(5, 8), Block::new(10, 12)];
        let free = a.subtract_all(&busy);
        assert_eq!(free.len(), 1);
        assert_eq!(free[0], Block::new(3, 5));
    }

    #[test]
    fn test_subtract_all_skips_overlapping_pairs() {
        let a = Block::new(0, 20);
        let busy = [Block::new(1, 6), Block::new(5, 8), Block::new(10, 12)];
        let free = a.subtract_all(&busy);
        assert_eq!(free.len(), 1);
        assert_eq!(free[0], Block::new(8, 10));
    }

    #[test]
    fn test_subtract_all_empty_and_single() {
        let a = Block::new(0, 20);
        assert!(a.subtract_all(&[]).is_empty());
        assert!(a.subtract_all(&[Block::new(1, 3)]).is_empty());
    }

    #[test]
    fn test_merge_example() {
        let cover = Block::merge(&[Block::new(1, 3), Block::new(2, 5), Block::new(8, 10)]);
        assert_eq!(cover, vec![Block::new(1, 5), Block::new(8, 10)]);
    }

    #[test]
    fn test_merge_sorts_unordered_input() {
        let cover = Block::merge(&[Block::new(8, 10), Block::new(2, 5), Block::new(1, 3)]);
        assert_eq!(cover, vec![Block::new(1, 5), Block::new(8, 10)]);
    }

    #[test]
    fn test_merge_coalesces_touching_blocks() {
        let cover = Block::merge(&[Block::new(1, 3), Block::new(3, 5)]);
        assert_eq!(cover, vec![Block::new(1, 5)]);
    }

    #[test]
    fn test_merge_idempotent() {
        let input = [
            Block::new(4, 9),
            Block::new(1, 2),
            Block::new(8, 14),
            Block::new(14, 15),
            Block::new(20, 22),
        ];
        let once = Block::merge(&input);
        let twice = Block::merge(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_output_sorted_and_non_overlapping() {
        let cover = Block::merge(&[
            Block::new(12, 14),
            Block::new(0, 3),
            Block::new(2, 6),
            Block::new(9, 10),
        ]);
        for pair in cover.windows(2) {
            assert!(pair[0].start() <= pair[1].start());
            assert!(pair[0].end() < pair[1].start());
        }
    }

    #[test]
    fn test_merge_empty() {
        let cover: Vec<Block<i32>> = Block::merge(&[]);
        assert!(cover.is_empty());
    }

    #[test]
    fn test_merge_with() {
        let cover = Block::new(2, 5).merge_with(&[Block::new(1, 3), Block::new(8, 10)]);
        assert_eq!(cover, vec![Block::new(1, 5), Block::new(8, 10)]);
    }

    #[test]
    fn test_float_endpoints() {
        let a = Block::new(2.5, 0.5);
        assert_eq!(a.start(), 0.5);
        assert_eq!(a.end(), 2.5);
        assert!(a.overlaps(Block::new(2.0, 4.0)));

        let cover = Block::merge(&[Block::new(0.0, 1.5), Block::new(1.0, 2.0)]);
        assert_eq!(cover, vec![Block::new(0.0, 2.0)]);
    }

    #[test]
    fn test_default_is_zero_block() {
        let a: Block<i64> = Default::default();
        assert!(a.is_zero_length());
        assert_eq!(a.start(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Block::new(3, 11)), "[3, 11]");
    }

    #[test]
    fn test_operator_sugar() {
        let a = Block::new(1, 5);
        let b = Block::new(4, 9);
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.limited(b));
    }

    #[test]
    fn test_range_conversions() {
        let a = Block::from(3..=9);
        assert_eq!(a, Block::new(3, 9));
        let range: RangeInclusive<i32> = a.into();
        assert_eq!(range, 3..=9);
    }

    #[test]
    fn test_range_bounds() {
        let a = Block::new(3, 9);
        match a.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 3),
            _ => panic!("wrong start bound"),
        }
        match a.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 9),
            _ => panic!("wrong end bound"),
        }
    }
}
