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

//! # Ranges
//!
//! Lazily evaluated numeric ranges described by a `(start, end, step)`
//! triple. No values are materialized until the range is iterated or
//! explicitly collected.
//!
//! ## Submodules
//!
//! - `normalize`: The step normalizer, which derives the stored step's sign
//!   from the bounds and rejects zero steps.
//! - `stepped`: `Range<T>` and its `RangeCursor<T>`, with construction,
//!   transformations (`step_by`, `reverse`, `scale`, `slice`,
//!   `intersection`, `odd`, `even`) and queries (`size`, `nth_step`,
//!   `contains`, `is_empty`).
//! - `circular`: `CircularRange<T>`, which wraps around to the start and
//!   optionally stops after a fixed number of values.
//! - `patterned`: `PatternedRange<T, F>`, which advances by applying a
//!   user-supplied function instead of adding the step.
//!
//! ## Type Aliases
//!
//! Shorthands such as `IRange` (`Range<i32>`) and `DRange` (`Range<f64>`)
//! are provided for the common value types.

pub mod circular;
pub mod normalize;
pub mod patterned;
pub mod stepped;

pub use circular::{CircularCursor, CircularIter, CircularRange};
pub use patterned::{PatternedCursor, PatternedIter, PatternedRange};
pub use stepped::{Iter, Range, RangeCursor};

pub type I8Range = Range<i8>;
pub type U8Range = Range<u8>;
pub type I16Range = Range<i16>;
pub type U16Range = Range<u16>;
pub type IRange = Range<i32>;
pub type URange = Range<u32>;
pub type I64Range = Range<i64>;
pub type U64Range = Range<u64>;
pub type ISizeRange = Range<isize>;
pub type USizeRange = Range<usize>;
pub type FRange = Range<f32>;
pub type DRange = Range<f64>;
