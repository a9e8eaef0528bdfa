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

//! # Numeric Foundations
//!
//! Traits that let ranges be generic over every primitive arithmetic type
//! while keeping their arithmetic exact at the limits of each type.
//!
//! ## Submodules
//!
//! - `value`: The `RangeValue` trait, implemented for all primitive integer
//!   and floating-point types. It pairs each value type with a signed `Step`
//!   type and provides checked offsets, signed distances, step counts and
//!   alignment tests.
//!
//! ## Motivation
//!
//! A descending `u8` range still needs a negative step, and the distance
//! between two `i32` bounds does not always fit in an `i32`. The step type
//! is signed and wide enough for those cases. Distances between 128-bit
//! values are measured in `u128`, so even `Range<u128>` over its whole
//! domain never wraps; overflow shows up as an explicit `None` or a
//! saturated count.

pub mod value;
