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

//! # Stride Core
//!
//! Lazily evaluated numeric ranges over any primitive arithmetic type. A
//! range is a `(start, end, step)` triple that can be iterated, sliced,
//! reversed, scaled, intersected and queried without materializing its
//! values.
//!
//! ## Modules
//!
//! - `range`: The half-open `Range<T>` with its transformations and
//!   queries, plus `CircularRange<T>` (wrap-around traversal with an
//!   optional bound on the number of values) and `PatternedRange<T, F>`
//!   (advancement by a user-supplied function).
//! - `cursor`: The explicit begin/end cursor protocol (`current`, `advance`,
//!   `reached_end`) with directional termination, and `CursorIter` which
//!   adapts it to `Iterator`.
//! - `traverse`: `for_each`, `all_of`, `any_of`, `none_of`, `stop_when`,
//!   `step_while`, `to_vec` and `to_list` for every range type.
//! - `num`: The `RangeValue` trait pairing each value type with a wider
//!   signed step type.
//! - `error`: `RangeError`, reported for zero steps, inverted slices and
//!   unrepresentable bounds.
//!
//! ## Semantics
//!
//! - Ranges are half-open: `start` is included, `end` is excluded.
//! - The stored step always points from `start` to `end`; the sign the
//!   caller requests is ignored. Equal bounds give an empty range with a
//!   zero step.
//! - A zero step on distinct bounds is always an error, in every build
//!   profile, and so is a NaN bound or step.
//! - Iteration stops once a value reaches or passes `end`, so ends that are
//!   not a whole number of steps away still terminate. Stepping past the
//!   representable domain of the value type also ends iteration.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::range::Range;
//! use stride_core::traverse::Traverse;
//!
//! let r = Range::with_step(0i32, 10, 2);
//! assert_eq!(r.size(), 5);
//! assert!(r.contains(4));
//! assert_eq!(r.reverse().unwrap().to_vec(), vec![8, 6, 4, 2, 0]);
//! assert_eq!(r.slice(1, 2).unwrap().to_vec(), vec![2, 4]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Range<T>`.

pub mod cursor;
pub mod error;
pub mod num;
pub mod range;
pub mod traverse;

#[cfg(feature = "serde")]
mod serde;

pub use error::RangeError;
pub use range::{CircularRange, PatternedRange, Range};
pub use traverse::Traverse;
