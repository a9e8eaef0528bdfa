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
    error::RangeError,
    num::value::RangeValue,
    range::{circular::CircularRange, normalize::normalize_step, patterned::PatternedRange},
};
use num_traits::{FromPrimitive, One, PrimInt, Signed, ToPrimitive, Zero};
use std::hash::{Hash, Hasher};

/// A cursor over the stepped values of a [`Range`].
///
/// The cursor holds a value and a signed step. Termination against an end
/// cursor is directional: with a shared positive step the cursor has
/// reached the end once `value >= end.value`; in every other case once
/// `value <= end.value`.
///
/// Advancing past the representable domain of `T` leaves the value
/// unchanged and marks the cursor as exhausted. An exhausted cursor always
/// reports that it has reached its end, so a descending `u8` range whose
/// last step would go below zero terminates instead of wrapping around.
///
/// # Examples
///
/// ```rust
/// # use stride_core::cursor::Cursor;
/// # use stride_core::range::RangeCursor;
///
/// let end = RangeCursor::new(10i32, 4);
/// let mut cursor = RangeCursor::new(0i32, 4);
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current(), 8);
/// assert!(!cursor.reached_end(&end));
/// cursor.advance();
/// assert!(cursor.reached_end(&end)); // 12 passed 10
/// ```
pub struct RangeCursor<T>
where
    T: RangeValue,
{
    value: T,
    step: T::Step,
    exhausted: bool,
}

impl<T> RangeCursor<T>
where
    T: RangeValue,
{
    /// Creates a cursor at `value` that moves by `step`.
    #[inline]
    pub fn new(value: T, step: T::Step) -> Self {
        Self {
            value,
            step,
            exhausted: false,
        }
    }

    /// Returns the signed step of the cursor.
    #[inline]
    pub fn step(&self) -> T::Step {
        self.step
    }

    /// Returns `true` once an advance has left the domain of `T`.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Moves the cursor one step backwards.
    ///
    /// Retreating an exhausted cursor undoes the advance that exhausted it.
    #[inline]
    pub fn retreat(&mut self) {
        if self.exhausted {
            self.exhausted = false;
            return;
        }
        match self.value.offset(-self.step) {
            Some(value) => self.value = value,
            None => self.exhaust(),
        }
    }

    #[cold]
    fn exhaust(&mut self) {
        tracing::trace!(value = ?self.value, step = ?self.step, "cursor left the value domain");
        self.exhausted = true;
    }
}

impl<T> Cursor for RangeCursor<T>
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
        if self.exhausted {
            return;
        }
        match self.value.offset(self.step) {
            Some(value) => self.value = value,
            None => self.exhaust(),
        }
    }

    #[inline]
    fn reached_end(&self, end: &Self) -> bool {
        if self.exhausted {
            return true;
        }
        if self.step == end.step && self.step > T::Step::zero() {
            self.value >= end.value
        } else {
            self.value <= end.value
        }
    }
}

impl<T> Clone for RangeCursor<T>
where
    T: RangeValue,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RangeCursor<T> where T: RangeValue {}

impl<T> PartialEq for RangeCursor<T>
where
    T: RangeValue,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.step == other.step && self.exhausted == other.exhausted
    }
}

impl<T> std::fmt::Debug for RangeCursor<T>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCursor")
            .field("value", &self.value)
            .field("step", &self.step)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// An iterator over the values of a [`Range`].
pub type Iter<T> = CursorIter<RangeCursor<T>>;

/// A lazily evaluated, stepped, half-open range `[start, end)`.
///
/// The range visits `start`, `start + step`, `start + 2 * step`, ... for as
/// long as the value has not reached or passed `end` in the direction of
/// travel. The stored step always points from `start` towards `end`, so a
/// range whose `start` is greater than its `end` counts down.
///
/// # Invariants
///
/// - `step` is zero if and only if `start == end`.
/// - The sign of `step` matches the sign of `end - start`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::Range;
///
/// let up = Range::with_step(0i32, 10, 3);
/// assert_eq!(up.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
///
/// let down = Range::new(5i32, 0);
/// assert_eq!(down.iter().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
/// ```
pub struct Range<T>
where
    T: RangeValue,
{
    start: T,
    end: T,
    step: T::Step,
}

impl<T> Range<T>
where
    T: RangeValue,
{
    /// Creates a unit-step range from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if a bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::new(2u8, 5);
    /// assert_eq!(r.step(), 1);
    /// assert_eq!(r.size(), 3);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self::with_step(start, end, T::Step::one())
    }

    /// Creates a unit-step range from zero to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// assert_eq!(Range::up_to(3i32).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn up_to(end: T) -> Self {
        Self::new(T::zero(), end)
    }

    /// Creates a range with the given step.
    ///
    /// Only the magnitude of `step` is used; its sign is derived from the
    /// bounds.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero while `start != end`, or if a bound or the
    /// step is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::with_step(10i32, 0, 4);
    /// assert_eq!(r.step(), -4);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![10, 6, 2]);
    /// ```
    #[inline]
    pub fn with_step(start: T, end: T, step: T::Step) -> Self {
        match Self::try_with_step(start, end, step) {
            Ok(range) => range,
            Err(e) => panic!("Invalid range: {e}"),
        }
    }

    /// Creates a range with the given step if the step is valid.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroStep`] if `step` is zero while
    /// `start != end`, and [`RangeError::Unordered`] if a bound or the step
    /// is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    /// # use stride_core::error::RangeError;
    ///
    /// assert!(Range::try_with_step(0i32, 10, 2).is_ok());
    /// assert_eq!(Range::try_with_step(0i32, 10, 0), Err(RangeError::ZeroStep));
    /// assert!(Range::try_with_step(3i32, 3, 0).unwrap().is_empty());
    /// assert_eq!(Range::try_with_step(f64::NAN, 1.0, 0.5), Err(RangeError::Unordered));
    /// ```
    #[inline]
    pub fn try_with_step(start: T, end: T, step: T::Step) -> Result<Self, RangeError> {
        let step = normalize_step(start, end, step)?;
        Ok(Self::from_parts(start, end, step))
    }

    #[inline]
    fn from_parts(start: T, end: T, step: T::Step) -> Self {
        debug_assert!(
            (step == T::Step::zero()) == (start == end),
            "range step must be zero exactly when the bounds are equal"
        );
        debug_assert!(
            step <= T::Step::zero() || start < end,
            "range step must point from start towards end"
        );
        Self { start, end, step }
    }

    #[inline]
    fn empty_at(value: T) -> Self {
        Self::from_parts(value, value, T::Step::zero())
    }

    /// Re-initializes the range in place and returns it for chaining.
    ///
    /// On error the range is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Range::try_with_step`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let mut r = Range::up_to(3i32);
    /// r.reset(10, 0, 5).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![10, 5]);
    /// assert!(r.reset(0, 1, 0).is_err());
    /// assert_eq!(r.start(), 10);
    /// ```
    #[inline]
    pub fn reset(&mut self, start: T, end: T, step: T::Step) -> Result<&mut Self, RangeError> {
        *self = Self::try_with_step(start, end, step)?;
        Ok(self)
    }

    /// Swaps the contents of two ranges.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the signed, normalized step.
    #[inline]
    pub fn step(&self) -> T::Step {
        self.step
    }

    /// Returns the same bounds with a different step.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::ZeroStep`] if `new_step` is zero on a non-empty
    /// range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::up_to(10i32).step_by(4).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 4, 8]);
    /// ```
    #[inline]
    pub fn step_by(&self, new_step: T::Step) -> Result<Self, RangeError> {
        Self::try_with_step(self.start, self.end, new_step)
    }

    /// Returns the number of stepped values in the range.
    ///
    /// For integers this is `ceil(|end - start| / |step|)`; for floating
    /// point it is `ceil(|(end - start) / step|)`. Empty ranges have size
    /// zero. A count that does not fit the step type saturates, which can
    /// only happen for 128-bit ranges spanning more than `i128::MAX` steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// assert_eq!(Range::new(0i32, 5).size(), 5);
    /// assert_eq!(Range::with_step(0i32, 5, 2).size(), 3);
    /// assert_eq!(Range::with_step(0i32, 6, 2).size(), 3);
    /// assert_eq!(Range::with_step(0i32, 1, 2).size(), 1);
    /// assert_eq!(Range::with_step(0.0f64, 1.0, 0.3).size(), 4.0);
    /// ```
    #[inline]
    pub fn size(&self) -> T::Step {
        if self.start == self.end {
            return T::Step::zero();
        }
        self.start.steps_between(self.end, self.step)
    }

    /// Returns `true` if the range produces no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_zero()
    }

    /// Returns the `n`-th stepped value, counting from 1.
    ///
    /// The value is computed as `start + step * (n - 1)` and is not checked
    /// against the end bound. Returns `None` for `n == 0` or when the value
    /// is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::with_step(2i32, 8, 3);
    /// assert_eq!(r.nth_step(1), Some(2));
    /// assert_eq!(r.nth_step(2), Some(5));
    /// assert_eq!(r.nth_step(0), None);
    /// ```
    #[inline]
    pub fn nth_step(&self, n: usize) -> Option<T> {
        let index = T::Step::from_usize(n.checked_sub(1)?)?;
        self.start.offset(T::checked_mul_step(self.step, index)?)
    }

    /// Returns the last value the range produces, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// assert_eq!(Range::with_step(0i32, 10, 3).last(), Some(9));
    /// assert_eq!(Range::new(4i32, 4).last(), None);
    /// ```
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.start.last_before(self.end, self.step)
    }

    /// Returns `true` if `value` is one of the stepped values of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::with_step(0i32, 10, 2);
    /// assert!(r.contains(4));
    /// assert!(!r.contains(5));
    /// assert!(!r.contains(10));
    ///
    /// let down = Range::with_step(10i32, 0, 2);
    /// assert!(down.contains(10));
    /// assert!(!down.contains(0));
    /// ```
    pub fn contains(&self, value: T) -> bool {
        let zero = T::Step::zero();
        let inside = if self.step > zero {
            self.start <= value && value < self.end
        } else if self.step < zero {
            self.end < value && value <= self.start
        } else {
            false
        };
        inside && value.is_aligned(self.start, self.step)
    }

    /// Returns `true` if `value` has reached or passed the end bound.
    #[inline]
    fn passed(&self, value: T) -> bool {
        let zero = T::Step::zero();
        if self.step > zero {
            value >= self.end
        } else if self.step < zero {
            value <= self.end
        } else {
            true
        }
    }

    /// Returns a range that visits the same values in the opposite order.
    ///
    /// The new start is the last value of this range, and the new end lies
    /// as far before the old start as the old end lay past the last value.
    /// For unit steps this is `[end - 1, start - 1)` for ascending ranges
    /// and `[end + 1, start + 1)` for descending ones. Reversing twice gives
    /// back the original range. Empty ranges are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::BoundOverflow`] if a bound of the reversed
    /// range is not representable, e.g. reversing an unsigned range that
    /// starts at zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::new(0i32, 5).reverse().unwrap();
    /// assert_eq!(r, Range::new(4, -1));
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    ///
    /// let r = Range::with_step(0i32, 6, 2).reverse().unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![4, 2, 0]);
    /// ```
    pub fn reverse(&self) -> Result<Self, RangeError> {
        if self.is_empty() {
            return Ok(*self);
        }
        let overflow = || bound_overflow("reverse");

        let last = self.last().ok_or_else(overflow)?;
        let overshoot = last.distance_to(self.end).ok_or_else(overflow)?;
        let new_end = self.start.offset(-overshoot).ok_or_else(overflow)?;

        Self::try_with_step(last, new_end, -self.step)
    }

    /// Multiplies start, end and step by `factor`.
    ///
    /// The step is normalized again afterwards, so scaling by a negative
    /// factor flips the direction consistently. A zero factor yields an
    /// empty range at zero.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::BoundOverflow`] if a scaled bound or the scaled
    /// step is not representable.
    /// Returns [`RangeError::Unordered`] if scaling a floating-point range
    /// produced NaN, e.g. `0.0 * inf`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::new(1i32, 4).scale(2).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    ///
    /// let r = Range::new(1i32, 4).scale(-1).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![-1, -2, -3]);
    /// ```
    pub fn scale(&self, factor: T::Step) -> Result<Self, RangeError> {
        let overflow = || bound_overflow("scale");
        let scale_bound = |bound: T| bound.scaled(factor).ok_or_else(overflow);

        let start = scale_bound(self.start)?;
        let end = scale_bound(self.end)?;
        if start == end {
            return Ok(Self::empty_at(start));
        }
        let step = T::checked_mul_step(self.step, factor).ok_or_else(overflow)?;
        Self::try_with_step(start, end, step)
    }

    /// Returns the sub-range covering the `(start_index + 1)`-th through
    /// `(end_index + 1)`-th stepped values.
    ///
    /// Both bounds are clamped to this range, so slicing past the end yields
    /// a shorter (possibly empty) range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidSlice`] if `start_index > end_index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::with_step(2i32, 8, 3).slice(0, 1).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 5]);
    ///
    /// assert!(Range::up_to(10i32).slice(3, 1).is_err());
    /// ```
    pub fn slice(&self, start_index: usize, end_index: usize) -> Result<Self, RangeError> {
        if start_index > end_index {
            tracing::debug!(start_index, end_index, "rejected inverted slice");
            return Err(RangeError::InvalidSlice {
                start_index,
                end_index,
            });
        }

        let clamp = |nth: Option<T>| match nth {
            Some(value) if !self.passed(value) => value,
            _ => self.end,
        };
        let start = clamp(start_index.checked_add(1).and_then(|n| self.nth_step(n)));
        let end = clamp(end_index.checked_add(2).and_then(|n| self.nth_step(n)));

        if start == end {
            return Ok(Self::empty_at(start));
        }
        Ok(Self::from_parts(start, end, self.step))
    }

    /// Returns the overlap of the two ranges' bounds.
    ///
    /// The result spans `[max(starts), min(ends))` with the step magnitude of
    /// `self`. If that span is empty the canonical empty range
    /// `[max(starts), max(starts))` is returned. The steps of the two ranges
    /// are not reconciled, and the bounds are combined as if both ranges
    /// were ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let r = Range::up_to(4i32).intersection(&Range::new(2, 6));
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3]);
    ///
    /// assert!(Range::up_to(2i32).intersection(&Range::new(5, 8)).is_empty());
    /// ```
    ///
    /// Descending ranges are treated as ascending ones over the same bounds
    /// with `start` and `end` swapped, which always leaves nothing in common.
    /// Even a descending range intersected with itself is empty:
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// let down = Range::new(5i32, 0);
    /// assert!(down.intersection(&down).is_empty());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        let start = if other.start > self.start {
            other.start
        } else {
            self.start
        };
        let end = if other.end < self.end {
            other.end
        } else {
            self.end
        };

        if start >= end {
            Self::empty_at(start)
        } else {
            Self::from_parts(start, end, self.step.abs())
        }
    }

    /// Returns a circular view of this range.
    ///
    /// A `max_count` of zero circulates forever; see [`CircularRange`].
    #[inline]
    pub fn circular(&self, max_count: u64) -> CircularRange<T> {
        CircularRange::new(*self, max_count)
    }

    /// Returns a range with the same bounds that advances by applying
    /// `pattern` instead of adding the step; see [`PatternedRange`].
    #[inline]
    pub fn patterned<F>(&self, pattern: F) -> PatternedRange<T, F>
    where
        F: Fn(T) -> T,
    {
        PatternedRange::from_range(*self, pattern)
    }

    /// Returns an iterator over the stepped values.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        self.cursors()
    }
}

impl<T> Range<T>
where
    T: RangeValue + PrimInt,
{
    /// Returns the odd values of the range in the same direction.
    ///
    /// If `start` is even it is moved one unit towards `end`; the step
    /// becomes 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// assert_eq!(Range::up_to(10i32).odd().iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    /// assert_eq!(Range::new(10i32, 0).odd().iter().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
    /// ```
    #[inline]
    pub fn odd(&self) -> Self {
        self.with_parity(true)
    }

    /// Returns the even values of the range in the same direction.
    ///
    /// If `start` is odd it is moved one unit towards `end`; the step
    /// becomes 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::Range;
    ///
    /// assert_eq!(Range::new(1i32, 10).even().iter().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
    /// ```
    #[inline]
    pub fn even(&self) -> Self {
        self.with_parity(false)
    }

    fn with_parity(&self, odd: bool) -> Self {
        if self.is_empty() {
            return *self;
        }
        let two = T::Step::one() + T::Step::one();
        let direction = self.step.signum();

        let start_is_odd = !(self.start % (T::one() + T::one())).is_zero();
        let start = if start_is_odd == odd {
            self.start
        } else {
            // A non-empty integer range spans at least one unit, so this
            // lands on `end` at the farthest.
            match self.start.offset(direction) {
                Some(start) => start,
                None => return Self::empty_at(self.end),
            }
        };

        if start == self.end {
            return Self::empty_at(start);
        }
        Self::from_parts(start, self.end, two * direction)
    }
}

#[cold]
fn bound_overflow(operation: &'static str) -> RangeError {
    tracing::debug!(operation, "range bound overflowed the value type");
    RangeError::BoundOverflow { operation }
}

impl<T> CursorPair for Range<T>
where
    T: RangeValue,
{
    type Cursor = RangeCursor<T>;

    #[inline]
    fn begin_cursor(&self) -> RangeCursor<T> {
        RangeCursor::new(self.start, self.step)
    }

    #[inline]
    fn end_cursor(&self) -> RangeCursor<T> {
        RangeCursor::new(self.end, self.step)
    }

    #[inline]
    fn capacity_hint(&self) -> usize {
        self.size().to_usize().unwrap_or(0)
    }
}

impl<T> Clone for Range<T>
where
    T: RangeValue,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Range<T> where T: RangeValue {}

impl<T> PartialEq for Range<T>
where
    T: RangeValue,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.step == other.step
    }
}

impl<T> Eq for Range<T>
where
    T: RangeValue + Eq,
    T::Step: Eq,
{
}

impl<T> Hash for Range<T>
where
    T: RangeValue + Hash,
    T::Step: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.step.hash(state);
    }
}

impl<T> Default for Range<T>
where
    T: RangeValue,
{
    #[inline]
    fn default() -> Self {
        Self::empty_at(T::zero())
    }
}

impl<T> std::fmt::Debug for Range<T>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: RangeValue + std::fmt::Display,
    T::Step: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) step {}", self.start, self.end, self.step)
    }
}

impl<T> IntoIterator for Range<T>
where
    T: RangeValue,
{
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Range<T>
where
    T: RangeValue,
{
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for Range<T>
where
    T: RangeValue,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: RangeValue>(r: Range<T>) -> Vec<T> {
        r.iter().collect()
    }

    #[test]
    fn test_construction_ascending() {
        let r = Range::new(0i32, 5);
        assert_eq!(r.start(), 0);
        assert_eq!(r.end(), 5);
        assert_eq!(r.step(), 1);
        assert_eq!(values(r), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_construction_descending() {
        let r = Range::new(5i32, 0);
        assert_eq!(r.step(), -1);
        assert_eq!(values(r), vec![5, 4, 3, 2, 1]);

        let r = Range::with_step(5i32, 0, 1);
        assert_eq!(values(r), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_up_to() {
        assert_eq!(Range::up_to(4i32), Range::new(0, 4));
        assert_eq!(values(Range::up_to(-2i32)), vec![0, -1]);
    }

    #[test]
    fn test_requested_sign_is_ignored() {
        assert_eq!(Range::with_step(0i32, 10, -3).step(), 3);
        assert_eq!(Range::with_step(10i32, 0, 3).step(), -3);
    }

    #[test]
    fn test_equal_bounds_collapse_step() {
        let r = Range::with_step(7i32, 7, 3);
        assert_eq!(r.step(), 0);
        assert!(r.is_empty());
        assert_eq!(values(r), Vec::<i32>::new());
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_zero_step_panics() {
        let _ = Range::with_step(0i32, 10, 0);
    }

    #[test]
    fn test_try_with_step() {
        assert_eq!(Range::try_with_step(0i32, 10, 0), Err(RangeError::ZeroStep));
        assert_eq!(
            Range::try_with_step(0i32, 10, 2),
            Ok(Range::with_step(0, 10, 2))
        );
    }

    #[test]
    fn test_default_is_empty_zero_range() {
        let r: Range<i32> = Range::default();
        assert!(r.is_empty());
        assert_eq!(r, Range::new(0, 0));
        assert_eq!(r.step(), 0);
    }

    #[test]
    fn test_reset_chains_and_preserves_on_error() {
        let mut r = Range::up_to(5i32);
        let size = r.reset(20, 10, 5).map(|r| r.size());
        assert_eq!(size, Ok(2));
        assert_eq!(values(r), vec![20, 15]);

        assert_eq!(r.reset(0, 1, 0).map(|_| ()), Err(RangeError::ZeroStep));
        assert_eq!(r, Range::with_step(20, 10, 5));
    }

    #[test]
    fn test_swap() {
        let mut a = Range::up_to(3i32);
        let mut b = Range::with_step(10i32, 0, 2);
        a.swap(&mut b);
        assert_eq!(a, Range::with_step(10, 0, 2));
        assert_eq!(b, Range::up_to(3));
    }

    #[test]
    fn test_unaligned_end_terminates() {
        assert_eq!(values(Range::with_step(0i32, 10, 3)), vec![0, 3, 6, 9]);
        assert_eq!(values(Range::with_step(0i32, 9, 3)), vec![0, 3, 6]);
        assert_eq!(values(Range::with_step(9i32, 0, 4)), vec![9, 5, 1]);
    }

    #[test]
    fn test_unsigned_descending_does_not_wrap() {
        assert_eq!(values(Range::with_step(5u8, 0, 2)), vec![5, 3, 1]);
        assert_eq!(values(Range::new(3u32, 0)), vec![3, 2, 1]);
    }

    #[test]
    fn test_iteration_near_type_limits() {
        assert_eq!(values(Range::with_step(250u8, 255, 3)), vec![250, 253]);
        assert_eq!(values(Range::new(i8::MAX - 2, i8::MAX)), vec![125, 126]);
        assert_eq!(values(Range::with_step(-126i8, i8::MIN, 5)), vec![-126]);
    }

    #[test]
    fn test_float_iteration() {
        assert_eq!(values(Range::with_step(0.0f64, 1.0, 0.25)), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(values(Range::with_step(1.0f32, 0.0, 0.5)), vec![1.0, 0.5]);
    }

    #[test]
    fn test_size() {
        assert_eq!(Range::new(0i32, 5).size(), 5);
        assert_eq!(Range::with_step(0i32, 5, 2).size(), 3);
        assert_eq!(Range::with_step(0i32, 6, 2).size(), 3);
        assert_eq!(Range::with_step(0i32, 1, 2).size(), 1);
        assert_eq!(Range::with_step(5i32, 0, 2).size(), 3);
        assert_eq!(Range::new(4i32, 4).size(), 0);
        assert_eq!(Range::new(u64::MIN, u64::MAX).size(), u64::MAX as i128);
        assert_eq!(Range::with_step(0.0f64, 1.0, 0.25).size(), 4.0);
    }

    #[test]
    fn test_size_matches_iteration_count() {
        for step in 1..7i64 {
            for end in -12i32..12 {
                let r = Range::with_step(0i32, end, step);
                assert_eq!(r.size(), r.iter().count() as i64, "range {:?}", r);
            }
        }
    }

    #[test]
    fn test_nth_step() {
        let r = Range::with_step(10i32, 0, 3);
        assert_eq!(r.nth_step(1), Some(10));
        assert_eq!(r.nth_step(3), Some(4));
        // Not bounded by `end`.
        assert_eq!(r.nth_step(5), Some(-2));
        assert_eq!(r.nth_step(0), None);

        let r = Range::with_step(10u8, 0, 3);
        assert_eq!(r.nth_step(5), None);
    }

    #[test]
    fn test_last() {
        assert_eq!(Range::new(0i32, 5).last(), Some(4));
        assert_eq!(Range::with_step(5i32, 0, 2).last(), Some(1));
        assert_eq!(Range::with_step(0.0f64, 1.0, 0.25).last(), Some(0.75));
        assert_eq!(Range::<i32>::default().last(), None);
    }

    #[test]
    fn test_contains() {
        let r = Range::with_step(0i32, 10, 2);
        assert!(r.contains(0));
        assert!(r.contains(4));
        assert!(r.contains(8));
        assert!(!r.contains(5));
        assert!(!r.contains(10));
        assert!(!r.contains(-2));

        let down = Range::with_step(10i32, 0, 2);
        assert!(down.contains(10));
        assert!(down.contains(2));
        assert!(!down.contains(0));
        assert!(!down.contains(3));
        assert!(!down.contains(12));

        assert!(!Range::new(3i32, 3).contains(3));
    }

    #[test]
    fn test_contains_unsigned() {
        let r = Range::with_step(9u8, 0, 3);
        assert!(r.contains(9));
        assert!(r.contains(3));
        assert!(!r.contains(0));
        assert!(!r.contains(4));
    }

    #[test]
    fn test_step_by() {
        let r = Range::with_step(10i32, 0, 1).step_by(5).unwrap();
        assert_eq!(r.step(), -5);
        assert_eq!(values(r), vec![10, 5]);
        assert_eq!(Range::up_to(3i32).step_by(0), Err(RangeError::ZeroStep));
    }

    #[test]
    fn test_reverse_unit_step() {
        let r = Range::new(0i32, 5).reverse().unwrap();
        assert_eq!(r, Range::with_step(4, -1, 1));
        assert_eq!(values(r), vec![4, 3, 2, 1, 0]);

        let r = Range::new(5i32, 0).reverse().unwrap();
        assert_eq!(r, Range::new(1, 6));
        assert_eq!(values(r), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse_non_unit_step_visits_same_values() {
        for (start, end, step) in [(0i32, 6, 2), (0, 5, 2), (0, 10, 3), (9, -4, 4), (3, 4, 7)] {
            let r = Range::with_step(start, end, step);
            let mut expected = values(r);
            expected.reverse();
            let reversed = r.reverse().unwrap();
            assert_eq!(values(reversed), expected, "reversing {:?}", r);
        }
    }

    #[test]
    fn test_reverse_round_trip() {
        for (start, end, step) in [(0i32, 6, 2), (0, 5, 2), (0, 5, 1), (9, -4, 4), (-3, 3, 5)] {
            let r = Range::with_step(start, end, step);
            assert_eq!(r.reverse().and_then(|r| r.reverse()), Ok(r));
        }
    }

    #[test]
    fn test_reverse_empty_and_overflow() {
        let empty = Range::new(2i32, 2);
        assert_eq!(empty.reverse(), Ok(empty));

        assert_eq!(
            Range::new(0u8, 5).reverse(),
            Err(RangeError::BoundOverflow {
                operation: "reverse"
            })
        );
        assert_eq!(values(Range::new(1u8, 5).reverse().unwrap()), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_float() {
        let r = Range::with_step(0.0f64, 1.0, 0.25).reverse().unwrap();
        assert_eq!(values(r), vec![0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_scale() {
        let r = Range::with_step(1i32, 7, 2).scale(3).unwrap();
        assert_eq!(r, Range::with_step(3, 21, 6));

        let r = Range::new(1i32, 4).scale(-2).unwrap();
        assert_eq!(r.step(), -2);
        assert_eq!(values(r), vec![-2, -4, -6]);

        let r = Range::new(1i32, 4).scale(0).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.start(), 0);
    }

    #[test]
    fn test_scale_overflow() {
        assert_eq!(
            Range::new(1u8, 4).scale(-1),
            Err(RangeError::BoundOverflow { operation: "scale" })
        );
        assert!(Range::new(1i8, 100).scale(2).is_err());
    }

    #[test]
    fn test_slice() {
        let r = Range::with_step(2i32, 8, 3);
        assert_eq!(values(r.slice(0, 1).unwrap()), vec![2, 5]);
        assert_eq!(values(r.slice(1, 1).unwrap()), vec![5]);

        let r = Range::up_to(10i32);
        assert_eq!(values(r.slice(2, 4).unwrap()), vec![2, 3, 4]);
        assert_eq!(values(r.slice(7, 100).unwrap()), vec![7, 8, 9]);
        assert!(r.slice(20, 30).unwrap().is_empty());

        let down = Range::with_step(10i32, 0, 2);
        assert_eq!(values(down.slice(1, 2).unwrap()), vec![8, 6]);
    }

    #[test]
    fn test_slice_inverted_bounds() {
        assert_eq!(
            Range::up_to(10i32).slice(4, 2),
            Err(RangeError::InvalidSlice {
                start_index: 4,
                end_index: 2
            })
        );
    }

    #[test]
    fn test_intersection() {
        let r = Range::up_to(4i32).intersection(&Range::new(2, 6));
        assert_eq!(r, Range::new(2, 4));
        assert_eq!(values(r), vec![2, 3]);

        // Keeps the step of `self`.
        let r = Range::with_step(0i32, 20, 5).intersection(&Range::new(3, 12));
        assert_eq!(values(r), vec![3, 8]);

        // Disjoint and adjacent ranges give the canonical empty range.
        let r = Range::up_to(2i32).intersection(&Range::new(5, 8));
        assert_eq!(r, Range::new(5, 5));
        assert!(Range::up_to(5i32).intersection(&Range::new(5, 8)).is_empty());
    }

    #[test]
    fn test_odd_even() {
        assert_eq!(values(Range::up_to(10i32).odd()), vec![1, 3, 5, 7, 9]);
        assert_eq!(values(Range::up_to(10i32).even()), vec![0, 2, 4, 6, 8]);
        assert_eq!(values(Range::new(-3i32, 4).odd()), vec![-3, -1, 1, 3]);
        assert_eq!(values(Range::new(-3i32, 4).even()), vec![-2, 0, 2]);
        assert_eq!(values(Range::new(10u8, 0).odd()), vec![9, 7, 5, 3, 1]);
        assert_eq!(values(Range::new(10u8, 0).even()), vec![10, 8, 6, 4, 2]);
    }

    #[test]
    fn test_odd_even_degenerate() {
        assert!(Range::new(4i32, 5).odd().is_empty());
        assert!(Range::new(4i32, 4).odd().is_empty());
        assert_eq!(Range::new(4i32, 4).odd(), Range::new(4, 4));
        assert_eq!(values(Range::new(3i32, 2).odd()), vec![3]);
    }

    #[test]
    fn test_cursor_pair() {
        let r = Range::with_step(0i32, 7, 3);
        let end = r.end_cursor();
        let mut cursor = r.begin_cursor();
        assert_eq!(cursor.current(), 0);
        assert!(!cursor.reached_end(&end));
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), 6);
        assert!(!cursor.reached_end(&end));
        cursor.advance();
        assert!(cursor.reached_end(&end));
        cursor.retreat();
        assert_eq!(cursor.current(), 6);
    }

    #[test]
    fn test_cursor_mismatched_steps_use_descending_rule() {
        let end = RangeCursor::new(5i32, 2);
        let cursor = RangeCursor::new(3i32, 1);
        // Mismatched steps fall back to `value <= end.value`.
        assert!(cursor.reached_end(&end));
    }

    #[test]
    fn test_cursor_exhaustion_and_retreat() {
        let mut cursor = RangeCursor::new(1u8, -2);
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current(), 1);
        assert!(cursor.reached_end(&RangeCursor::new(0u8, -2)));
        cursor.retreat();
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.current(), 1);
        cursor.retreat();
        assert_eq!(cursor.current(), 3);
    }

    #[test]
    fn test_into_iterator() {
        let r = Range::with_step(0i32, 6, 2);
        let mut seen = Vec::new();
        for v in &r {
            seen.push(v);
        }
        for v in r {
            seen.push(v);
        }
        assert_eq!(seen, vec![0, 2, 4, 0, 2, 4]);
    }

    #[test]
    fn test_from_std_range() {
        let r = Range::from(3i64..6);
        assert_eq!(r, Range::new(3, 6));
        assert_eq!(values(Range::from(6i64..3)), vec![6, 5, 4]);
    }

    #[test]
    fn test_traits_display_debug() {
        let r = Range::with_step(10i32, 0, 3);
        assert_eq!(format!("{}", r), "[10, 0) step -3");
        assert_eq!(format!("{:?}", r), "Range { start: 10, end: 0, step: -3 }");
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Range::new(0i32, 5));
        set.insert(Range::with_step(0i32, 5, -1));
        set.insert(Range::with_step(0i32, 5, 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_u128_upper_half() {
        let r = Range::new(u128::MAX - 5, u128::MAX);
        assert_eq!(r.size(), 5);
        assert_eq!(
            values(r),
            vec![
                u128::MAX - 5,
                u128::MAX - 4,
                u128::MAX - 3,
                u128::MAX - 2,
                u128::MAX - 1
            ]
        );
        assert_eq!(r.last(), Some(u128::MAX - 1));
        assert!(r.contains(u128::MAX - 2));
        assert!(!r.contains(u128::MAX));
        assert!(!r.contains(3));

        let down = Range::with_step(u128::MAX, u128::MAX - 7, 3);
        assert_eq!(down.size(), 3);
        assert_eq!(values(down), vec![u128::MAX, u128::MAX - 3, u128::MAX - 6]);
        assert!(down.contains(u128::MAX - 6));
        assert!(!down.contains(u128::MAX - 5));
    }

    #[test]
    fn test_u128_full_span() {
        let r = Range::new(0u128, u128::MAX);
        // More values than the step type can count.
        assert_eq!(r.size(), i128::MAX);
        assert!(!r.is_empty());
        assert_eq!(r.last(), Some(u128::MAX - 1));
        assert!(r.contains(u128::MAX - 1));
        assert_eq!(r.nth_step(3), Some(2));
        assert_eq!(r.iter().take(3).collect::<Vec<_>>(), vec![0, 1, 2]);

        let r = Range::with_step(0u128, u128::MAX, i128::MAX);
        assert_eq!(r.size(), 3);
        assert_eq!(
            values(r),
            vec![0, i128::MAX as u128, 2 * (i128::MAX as u128)]
        );
    }

    #[test]
    fn test_u128_reverse_and_scale() {
        let r = Range::new(u128::MAX - 5, u128::MAX).reverse().unwrap();
        assert_eq!(r, Range::new(u128::MAX - 1, u128::MAX - 6));
        assert_eq!(r.reverse(), Ok(Range::new(u128::MAX - 5, u128::MAX)));

        let r = Range::new(1u128 << 126, (1u128 << 126) + 2).scale(2).unwrap();
        assert_eq!(values(r), vec![1u128 << 127, (1u128 << 127) + 2]);
    }

    #[test]
    fn test_i128_full_span() {
        let r = Range::new(i128::MIN, i128::MAX);
        assert_eq!(r.size(), i128::MAX);
        assert!(r.contains(i128::MAX - 1));
        assert!(r.contains(i128::MIN));
        assert!(!r.contains(i128::MAX));

        let r = Range::with_step(i128::MIN, i128::MAX, 3);
        assert!(r.contains(i128::MIN + 3));
        assert!(!r.contains(i128::MIN + 4));

        let down = Range::new(i128::MAX, i128::MIN);
        assert!(down.contains(i128::MIN + 1));
        assert!(!down.contains(i128::MIN));
    }

    #[test]
    fn test_nan_bounds_rejected() {
        assert_eq!(
            Range::try_with_step(f64::NAN, 1.0, 0.5),
            Err(RangeError::Unordered)
        );
        assert_eq!(
            Range::try_with_step(0.0f32, 1.0, f32::NAN),
            Err(RangeError::Unordered)
        );
        let mut r = Range::new(0.0f64, 1.0);
        assert_eq!(r.reset(0.0, f64::NAN, 1.0).map(|_| ()), Err(RangeError::Unordered));
        assert_eq!(r, Range::new(0.0, 1.0));
        assert_eq!(Range::new(0.0f64, 1.0).scale(f64::NAN), Err(RangeError::Unordered));
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_nan_bound_panics() {
        let _ = Range::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_intersection_of_descending_ranges_is_empty() {
        let down = Range::new(5i32, 0);
        assert!(down.intersection(&down).is_empty());
        assert!(down.intersection(&Range::new(6, 1)).is_empty());
    }
}
