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
use std::rc::Rc;

/// A cursor that advances by applying a pattern function to its value.
///
/// Termination is directional, as for [`RangeCursor`](crate::range::RangeCursor),
/// with the direction fixed when the range is created. Two cursors only
/// compare as terminated if they share the very same pattern instance;
/// cursors built from different patterns never reach each other.
pub struct PatternedCursor<T, F>
where
    T: RangeValue,
{
    value: T,
    negative: bool,
    pattern: Rc<F>,
}

impl<T, F> PatternedCursor<T, F>
where
    T: RangeValue,
    F: Fn(T) -> T,
{
    /// Creates a cursor at `value` driven by `pattern`.
    #[inline]
    pub fn new(value: T, negative: bool, pattern: Rc<F>) -> Self {
        Self {
            value,
            negative,
            pattern,
        }
    }

    /// Returns `true` if the cursor counts downwards.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if both cursors were built from the same pattern.
    #[inline]
    pub fn shares_pattern(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pattern, &other.pattern)
    }
}

impl<T, F> Cursor for PatternedCursor<T, F>
where
    T: RangeValue,
    F: Fn(T) -> T,
{
    type Value = T;

    #[inline]
    fn current(&self) -> T {
        self.value
    }

    #[inline]
    fn advance(&mut self) {
        self.value = (self.pattern)(self.value);
    }

    #[inline]
    fn reached_end(&self, end: &Self) -> bool {
        if !self.shares_pattern(end) {
            return false;
        }
        if self.negative {
            self.value <= end.value
        } else {
            self.value >= end.value
        }
    }
}

impl<T, F> Clone for PatternedCursor<T, F>
where
    T: RangeValue,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            negative: self.negative,
            pattern: Rc::clone(&self.pattern),
        }
    }
}

impl<T, F> std::fmt::Debug for PatternedCursor<T, F>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternedCursor")
            .field("value", &self.value)
            .field("negative", &self.negative)
            .finish_non_exhaustive()
    }
}

/// An iterator over a [`PatternedRange`].
pub type PatternedIter<T, F> = CursorIter<PatternedCursor<T, F>>;

/// A range whose values are produced by repeatedly applying a function.
///
/// The range starts at `start` and yields `start`, `f(start)`,
/// `f(f(start))`, ... until a value reaches or passes `end` in the direction
/// from `start` to `end`. The step of the underlying range is kept but not
/// used for advancing. A pattern that never reaches `end` produces an
/// endless sequence.
///
/// Clones share the pattern, so their cursors remain comparable.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::Range;
///
/// let powers = Range::new(1u32, 100).patterned(|v| v * 2);
/// assert_eq!(powers.iter().collect::<Vec<_>>(), vec![1, 2, 4, 8, 16, 32, 64]);
///
/// let divisor = 3;
/// let shrinking = Range::new(100i32, 0).patterned(move |v| v / divisor);
/// assert_eq!(shrinking.iter().collect::<Vec<_>>(), vec![100, 33, 11, 3, 1]);
/// ```
pub struct PatternedRange<T, F>
where
    T: RangeValue,
{
    range: Range<T>,
    negative: bool,
    pattern: Rc<F>,
}

impl<T, F> PatternedRange<T, F>
where
    T: RangeValue,
    F: Fn(T) -> T,
{
    /// Creates a patterned range from `start` towards `end`.
    #[inline]
    pub fn new(start: T, end: T, pattern: F) -> Self {
        Self::from_range(Range::new(start, end), pattern)
    }

    /// Creates a patterned range with the bounds and step of `range`.
    #[inline]
    pub fn from_range(range: Range<T>, pattern: F) -> Self {
        Self {
            range,
            negative: range.start() > range.end(),
            pattern: Rc::new(pattern),
        }
    }

    /// Returns the underlying range.
    #[inline]
    pub fn range(&self) -> Range<T> {
        self.range
    }

    /// Returns `true` if the range counts downwards.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns an iterator over the produced values.
    #[inline]
    pub fn iter(&self) -> PatternedIter<T, F> {
        self.cursors()
    }
}

impl<T, F> CursorPair for PatternedRange<T, F>
where
    T: RangeValue,
    F: Fn(T) -> T,
{
    type Cursor = PatternedCursor<T, F>;

    #[inline]
    fn begin_cursor(&self) -> PatternedCursor<T, F> {
        PatternedCursor::new(self.range.start(), self.negative, Rc::clone(&self.pattern))
    }

    #[inline]
    fn end_cursor(&self) -> PatternedCursor<T, F> {
        PatternedCursor::new(self.range.end(), self.negative, Rc::clone(&self.pattern))
    }
}

impl<T, F> Clone for PatternedRange<T, F>
where
    T: RangeValue,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            range: self.range,
            negative: self.negative,
            pattern: Rc::clone(&self.pattern),
        }
    }
}

impl<T, F> std::fmt::Debug for PatternedRange<T, F>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternedRange")
            .field("range", &self.range)
            .field("negative", &self.negative)
            .finish_non_exhaustive()
    }
}

impl<T, F> IntoIterator for &PatternedRange<T, F>
where
    T: RangeValue,
    F: Fn(T) -> T,
{
    type Item = T;
    type IntoIter = PatternedIter<T, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
