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

//! Errors reported by fallible range constructors and transformations.

use std::fmt::Display;

/// The error type for invalid range arguments.
///
/// A zero step and inverted slice bounds are always reported, in every build
/// profile. They are never coerced into a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// A zero step was requested for a range whose bounds differ.
    ZeroStep,
    /// A bound or the step has no ordering, i.e. is a floating-point NaN.
    Unordered,
    /// A slice was requested with `start_index > end_index`.
    InvalidSlice {
        /// The requested (0-based) index of the first stepped value.
        start_index: usize,
        /// The requested (0-based) index of the last stepped value.
        end_index: usize,
    },
    /// A bound of the resulting range is not representable in the value type.
    BoundOverflow {
        /// The name of the operation that overflowed.
        operation: &'static str,
    },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "step cannot be equal to 0"),
            Self::Unordered => write!(f, "range bounds and step must not be NaN"),
            Self::InvalidSlice {
                start_index,
                end_index,
            } => write!(
                f,
                "slice start index {} is greater than end index {}",
                start_index, end_index
            ),
            Self::BoundOverflow { operation } => {
                write!(f, "`{operation}` produced a bound outside the value type")
            }
        }
    }
}

impl std::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RangeError::ZeroStep.to_string(), "step cannot be equal to 0");
        assert_eq!(
            RangeError::Unordered.to_string(),
            "range bounds and step must not be NaN"
        );
        assert_eq!(
            RangeError::InvalidSlice {
                start_index: 3,
                end_index: 1
            }
            .to_string(),
            "slice start index 3 is greater than end index 1"
        );
        assert_eq!(
            RangeError::BoundOverflow {
                operation: "reverse"
            }
            .to_string(),
            "`reverse` produced a bound outside the value type"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(RangeError::ZeroStep);
    }
}
