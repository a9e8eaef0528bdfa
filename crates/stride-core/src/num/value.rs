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

//! # Range Values
//!
//! The `RangeValue` trait abstracts over every primitive arithmetic type a
//! `Range` can be built from. Each value type is paired with a signed
//! `Step` type used for steps, signed distances and sizes:
//!
//! | Value type                                   | `Step` |
//! |----------------------------------------------|--------|
//! | `i8`, `u8`, `i16`, `u16`, `i32`, `u32`       | `i64`  |
//! | `i64`, `u64`, `isize`, `usize`, `i128`, `u128` | `i128` |
//! | `f32`                                        | `f32`  |
//! | `f64`                                        | `f64`  |
//!
//! Values are never converted into the step domain wholesale, since the
//! upper half of `u128` has no signed counterpart. Instead every operation
//! is done on the value type itself: offsets use checked signed addition,
//! and distances are measured with `abs_diff` in `u128` before they are
//! narrowed. Results that do not fit are reported as `None`; counts that
//! do not fit saturate at the largest step.

use num_traits::{Bounded, FromPrimitive, Num, NumCast, Signed};
use std::fmt::Debug;

/// A primitive arithmetic type usable as the value type of a range.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::value::RangeValue;
///
/// assert_eq!(250u8.offset(10), None);
/// assert_eq!(250u8.offset(-10), Some(240));
/// assert_eq!(u128::MAX.offset(-1), Some(u128::MAX - 1));
/// assert_eq!(0u128.distance_to(u128::MAX), None);
/// assert_eq!(0u128.steps_between(u128::MAX, 1), i128::MAX);
/// ```
pub trait RangeValue: Num + Copy + PartialOrd + Debug {
    /// Signed type used for steps, distances and sizes.
    type Step: Signed + Bounded + NumCast + FromPrimitive + Copy + PartialOrd + Debug;

    /// Returns `self + step`, or `None` if the result is not representable.
    fn offset(self, step: Self::Step) -> Option<Self>;

    /// Returns the signed distance `to - self`, or `None` if it does not fit
    /// the step type.
    fn distance_to(self, to: Self) -> Option<Self::Step>;

    /// Number of steps of magnitude `|step|` needed to get from `self` to
    /// `to`, rounded up. Saturates at the largest step value.
    ///
    /// `step` must be non-zero.
    fn steps_between(self, to: Self, step: Self::Step) -> Self::Step;

    /// Returns `true` if `self` lies a whole number of steps away from
    /// `origin`, in either direction.
    fn is_aligned(self, origin: Self, step: Self::Step) -> bool;

    /// Returns `self * factor`, or `None` if the result is not
    /// representable.
    fn scaled(self, factor: Self::Step) -> Option<Self>;

    /// Returns the last value reached by stepping from `self` towards `end`
    /// without reaching or passing it, or `None` if `self == end`.
    ///
    /// `step` must point from `self` towards `end`.
    fn last_before(self, end: Self, step: Self::Step) -> Option<Self>;

    /// Checked multiplication in the step domain.
    fn checked_mul_step(lhs: Self::Step, rhs: Self::Step) -> Option<Self::Step>;
}

macro_rules! impl_integral_value {
    (@impl $t:ty, $step:ty,
        offset($ov:ident, $os:ident) $offset:block
        scaled($sv:ident, $sf:ident) $scaled:block
    ) => {
        impl RangeValue for $t {
            type Step = $step;

            #[inline(always)]
            fn offset(self, step: $step) -> Option<$t> {
                let ($ov, $os) = (self, step);
                $offset
            }

            #[inline]
            fn distance_to(self, to: $t) -> Option<$step> {
                let magnitude = <$step>::try_from(self.abs_diff(to)).ok()?;
                Some(if to >= self { magnitude } else { -magnitude })
            }

            #[inline]
            fn steps_between(self, to: $t, step: $step) -> $step {
                debug_assert!(step != 0, "called `steps_between` with a zero step");
                let distance = self.abs_diff(to) as u128;
                let step = step.unsigned_abs() as u128;
                let count = distance / step + <u128 as From<bool>>::from(distance % step != 0);
                <$step>::try_from(count).unwrap_or(<$step>::MAX)
            }

            #[inline]
            fn is_aligned(self, origin: $t, step: $step) -> bool {
                let step = step.unsigned_abs() as u128;
                if step == 0 {
                    return self == origin;
                }
                (self.abs_diff(origin) as u128) % step == 0
            }

            #[inline(always)]
            fn scaled(self, factor: $step) -> Option<$t> {
                let ($sv, $sf) = (self, factor);
                $scaled
            }

            #[inline]
            fn last_before(self, end: $t, step: $step) -> Option<$t> {
                let distance = self.abs_diff(end) as u128;
                let magnitude = step.unsigned_abs() as u128;
                if distance == 0 || magnitude == 0 {
                    return None;
                }
                // Measured back from `end`, so the walk from `self` never has
                // to be represented.
                let overshoot = ((distance - 1) % magnitude + 1) as $step;
                end.offset(if step > 0 { -overshoot } else { overshoot })
            }

            #[inline(always)]
            fn checked_mul_step(lhs: $step, rhs: $step) -> Option<$step> {
                lhs.checked_mul(rhs)
            }
        }
    };
    ($t:ty, $step:ty) => {
        impl_integral_value!(@impl $t, $step,
            offset(value, step) {
                <$t>::try_from((value as i128).checked_add(step as i128)?).ok()
            }
            scaled(value, factor) {
                <$t>::try_from((value as i128).checked_mul(factor as i128)?).ok()
            }
        );
    };
}

macro_rules! impl_float_value {
    ($t:ty) => {
        impl RangeValue for $t {
            type Step = $t;

            #[inline(always)]
            fn offset(self, step: $t) -> Option<$t> {
                Some(self + step)
            }

            #[inline(always)]
            fn distance_to(self, to: $t) -> Option<$t> {
                Some(to - self)
            }

            #[inline]
            fn steps_between(self, to: $t, step: $t) -> $t {
                ((to - self) / step).abs().ceil()
            }

            #[inline]
            fn is_aligned(self, origin: $t, step: $t) -> bool {
                (self - origin) % step == 0.0
            }

            #[inline(always)]
            fn scaled(self, factor: $t) -> Option<$t> {
                Some(self * factor)
            }

            #[inline]
            fn last_before(self, end: $t, step: $t) -> Option<$t> {
                let count = self.steps_between(end, step);
                if count.is_nan() || count < 1.0 {
                    return None;
                }
                Some(self + step * (count - 1.0))
            }

            #[inline(always)]
            fn checked_mul_step(lhs: $t, rhs: $t) -> Option<$t> {
                Some(lhs * rhs)
            }
        }
    };
}

impl_integral_value!(i8, i64);
impl_integral_value!(u8, i64);
impl_integral_value!(i16, i64);
impl_integral_value!(u16, i64);
impl_integral_value!(i32, i64);
impl_integral_value!(u32, i64);

impl_integral_value!(i64, i128);
impl_integral_value!(u64, i128);
impl_integral_value!(isize, i128);
impl_integral_value!(usize, i128);
impl_integral_value!(i128, i128);

// The upper half of `u128` does not survive a cast to `i128`.
impl_integral_value!(@impl u128, i128,
    offset(value, step) {
        value.checked_add_signed(step)
    }
    scaled(value, factor) {
        if factor < 0 {
            if value == 0 { Some(0) } else { None }
        } else {
            value.checked_mul(factor as u128)
        }
    }
);

impl_float_value!(f32);
impl_float_value!(f64);
