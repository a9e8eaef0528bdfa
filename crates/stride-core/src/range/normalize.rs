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

use crate::{error::RangeError, num::value::RangeValue};
use num_traits::{Signed, Zero};

/// Computes the stored step of a range from its bounds and a requested step.
///
/// The magnitude of the result is `|requested|`; its sign follows the
/// direction from `start` to `end`, whatever sign the caller asked for.
/// Equal bounds describe an empty range and always normalize to a zero step.
///
/// # Errors
///
/// Returns [`RangeError::Unordered`] if a bound or `requested` is NaN, and
/// [`RangeError::ZeroStep`] if `requested` is zero while the bounds differ.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::normalize::normalize_step;
/// # use stride_core::error::RangeError;
///
/// assert_eq!(normalize_step(0i32, 10, -2), Ok(2));
/// assert_eq!(normalize_step(10i32, 0, 2), Ok(-2));
/// assert_eq!(normalize_step(4i32, 4, 7), Ok(0));
/// assert_eq!(normalize_step(0i32, 10, 0), Err(RangeError::ZeroStep));
/// assert_eq!(normalize_step(f64::NAN, 1.0, 0.5), Err(RangeError::Unordered));
/// ```
#[inline]
pub fn normalize_step<T>(start: T, end: T, requested: T::Step) -> Result<T::Step, RangeError>
where
    T: RangeValue,
{
    if start.partial_cmp(&end).is_none() || requested.partial_cmp(&T::Step::zero()).is_none() {
        tracing::debug!(?start, ?end, ?requested, "rejected unordered range");
        return Err(RangeError::Unordered);
    }
    if start == end {
        return Ok(T::Step::zero());
    }
    if requested.is_zero() {
        tracing::debug!(?start, ?end, "rejected zero step");
        return Err(RangeError::ZeroStep);
    }

    let magnitude = requested.abs();
    let step = if start < end { magnitude } else { -magnitude };
    if step != requested {
        tracing::trace!(?start, ?end, ?requested, ?step, "normalized step direction");
    }
    Ok(step)
}
