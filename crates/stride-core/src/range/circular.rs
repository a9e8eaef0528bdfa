// Copyright (c) 2025 Felix Kahle.
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

use crate::{
    cursor::{Cursor, CursorIter, CursorPair},
    num::value::RangeValue,
    range::stepped::Range,
};
use num_traits::Zero;

/// A cursor that wraps back to the start of its range.
///
/// Every advance adds the step and increments a running count. When the
/// value reaches or passes the end bound in the direction of travel (or
/// leaves the domain of `T`), it is reset to the start bound instead.
///
/// Bounded cursors terminate by count: a cursor has reached `end` when both
/// were created with the same non-zero `max_count` and its count has caught
/// up with `end`'s count. Unbounded cursors (`max_count == 0`) never
/// terminate through comparison. A cursor over an empty range has always
/// reached its end.
pub struct CircularCursor<T>
where
    T: RangeValue,
{
    value: T,
    start: T,
    end: T,
    step: T::Step,
    count: u64,
    max_count: u64,
}

impl<T> CircularCursor<T>
where
    T: RangeValue,
{
    /// Creates a cursor over `range` positioned at its start with the given
    /// running count.
    #[inline]
    pub fn new(range: &Range<T>, count: u64, max_count: u64) -> Self {
        Self {
            value: range.start(),
            start: range.start(),
            end: range.end(),
            step: range.step(),
            count,
            max_count,
        }
    }

    /// Returns the number of advances performed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the bound on the number of advances; zero means unbounded.
    #[inline]
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    #[inline]
    fn wraps_at(&self, value: T) -> bool {
        if self.step > T::Step::zero() {
            value >= self.end
        } else {
            value <= self.end
        }
    }
}

impl<T> Cursor for CircularCursor<T>
where
    T: RangeValue,
{
    type Value = T;

    #[inline]
    fn current(&self) -> T {
        self.value
    }

    #[inline]
    fn advance(&mut self) {
        self.count = self.count.saturating_add(1);
        if self.step.is_zero() {
            return;
        }
        self.value = match self.value.offset(self.step) {
            Some(next) if !self.wraps_at(next) => next,
            _ => self.start,
        };
    }

    #[inline]
    fn reached_end(&self, end: &Self) -> bool {
        if self.step.is_zero() {
            return true;
        }
        self.max_count != 0 && self.max_count == end.max_count && self.count >= end.count
    }
}

impl<T> Clone for CircularCursor<T>
where
    T: RangeValue,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CircularCursor<T> where T: RangeValue {}

impl<T> std::fmt::Debug for CircularCursor<T>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularCursor")
            .field("value", &self.value)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("count", &self.count)
            .field("max_count", &self.max_count)
            .finish()
    }
}

/// An iterator over a [`CircularRange`].
pub type CircularIter<T> = CursorIter<CircularCursor<T>>;

/// A range that repeats its values, optionally a bounded number of times.
///
/// `max_count` bounds the total number of values produced, not the number
/// of laps. With `max_count == 0` iteration never ends on its own and must
/// be bounded by the caller, for example with `Iterator::take` or
/// `Traverse::stop_when`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::Range;
///
/// let values: Vec<_> = Range::up_to(3i32).circular(7).iter().collect();
/// assert_eq!(values, vec![0, 1, 2, 0, 1, 2, 0]);
///
/// let forever = Range::new(3i32, 0).circular(0);
/// assert_eq!(forever.iter().take(5).collect::<Vec<_>>(), vec![3, 2, 1, 3, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularRange<T>
where
    T: RangeValue,
{
    range: Range<T>,
    max_count: u64,
}

impl<T> CircularRange<T>
where
    T: RangeValue,
{
    /// Creates a circular view of `range` producing at most `max_count`
    /// values, or unboundedly many if `max_count` is zero.
    #[inline]
    pub fn new(range: Range<T>, max_count: u64) -> Self {
        Self { range, max_count }
    }

    /// Returns the underlying range.
    #[inline]
    pub fn range(&self) -> Range<T> {
        self.range
    }

    /// Returns the bound on the number of produced values.
    #[inline]
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Returns `true` if iteration terminates on its own.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.max_count != 0 || self.range.is_empty()
    }

    /// Returns an iterator over the circulating values.
    #[inline]
    pub fn iter(&self) -> CircularIter<T> {
        self.cursors()
    }
}

impl<T> CursorPair for CircularRange<T>
where
    T: RangeValue,
{
    type Cursor = CircularCursor<T>;

    #[inline]
    fn begin_cursor(&self) -> CircularCursor<T> {
        CircularCursor::new(&self.range, 0, self.max_count)
    }

    #[inline]
    fn end_cursor(&self) -> CircularCursor<T> {
        CircularCursor::new(&self.range, self.max_count, self.max_count)
    }

    #[inline]
    fn capacity_hint(&self) -> usize {
        if self.range.is_empty() {
            return 0;
        }
        usize::try_from(self.max_count).unwrap_or(0)
    }
}

impl<T> IntoIterator for CircularRange<T>
where
    T: RangeValue,
{
    type Item = T;
    type IntoIter = CircularIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &CircularRange<T>
where
    T: RangeValue,
{
    type Item = T;
    type IntoIter = CircularIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
