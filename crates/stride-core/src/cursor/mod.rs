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

//! # Cursor Protocol
//!
//! An explicit begin/end cursor interface that every range type exposes,
//! independent of Rust's operator syntax. Termination is *directional*: a
//! cursor has reached its end once its value has reached or passed the end
//! cursor's value in the direction of travel, not when the two values are
//! exactly equal. This keeps iteration finite when the end bound is not an
//! integral number of steps away from the start.
//!
//! ## Submodules
//!
//! - `iter`: `CursorIter<C>`, which adapts any cursor pair to
//!   `Iterator` and `FusedIterator`.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::cursor::{Cursor, CursorPair};
//! use stride_core::range::Range;
//!
//! let range = Range::with_step(0i32, 7, 3);
//! let end = range.end_cursor();
//! let mut cursor = range.begin_cursor();
//! let mut seen = Vec::new();
//! while !cursor.reached_end(&end) {
//!     seen.push(cursor.current());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![0, 3, 6]);
//! ```

pub mod iter;

pub use iter::CursorIter;

/// A position within a lazily evaluated sequence of values.
pub trait Cursor: Clone {
    /// The type of the values produced by the cursor.
    type Value: Copy;

    /// Returns the value at the current position.
    ///
    /// Calling this on a cursor that has already reached its end returns
    /// whatever value the cursor holds; no bounds check is performed.
    fn current(&self) -> Self::Value;

    /// Moves the cursor to the next position.
    fn advance(&mut self);

    /// Returns `true` if this cursor has reached or passed `end`.
    fn reached_end(&self, end: &Self) -> bool;
}

/// A sequence described by a begin cursor and an end sentinel.
pub trait CursorPair {
    /// The cursor type of the sequence.
    type Cursor: Cursor;

    /// Returns a cursor positioned at the first value.
    fn begin_cursor(&self) -> Self::Cursor;

    /// Returns the end sentinel.
    fn end_cursor(&self) -> Self::Cursor;

    /// Expected number of values, used to pre-size containers.
    ///
    /// This is a hint only; the default is `0`.
    #[inline]
    fn capacity_hint(&self) -> usize {
        0
    }

    /// Returns an iterator over the values between the two cursors.
    #[inline]
    fn cursors(&self) -> CursorIter<Self::Cursor> {
        CursorIter::new(self.begin_cursor(), self.end_cursor())
    }
}

/// The value type produced by a cursor pair.
pub type ValueOf<R> = <<R as CursorPair>::Cursor as Cursor>::Value;
