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

//! # Traversal
//!
//! Functional traversal and bulk conversion shared by every range type.
//! `Traverse` is implemented for all `CursorPair`s, so `Range`,
//! `CircularRange` and `PatternedRange` all gain `for_each`, the
//! quantifiers, cursor searches and container conversions.
//!
//! The cursor searches (`stop_when`, `step_while`) return the cursor at
//! which the search stopped, or the end sentinel if the sequence ran out.
//! On an unbounded circular range a search without a match does not return.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::cursor::Cursor;
//! use stride_core::range::Range;
//! use stride_core::traverse::Traverse;
//!
//! let r = Range::with_step(0i32, 20, 3);
//! assert!(r.all_of(|v| v % 3 == 0));
//! assert_eq!(r.stop_when(|v| v > 10).current(), 12);
//! assert_eq!(r.to_vec(), vec![0, 3, 6, 9, 12, 15, 18]);
//! ```

use crate::cursor::{Cursor, CursorPair, ValueOf};
use std::collections::LinkedList;

/// Traversal algorithms over a cursor pair.
pub trait Traverse: CursorPair + Sized {
    /// Calls `f` on every value in iteration order.
    #[inline]
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(ValueOf<Self>),
    {
        self.cursors().for_each(f);
    }

    /// Returns `true` if `predicate` holds for every value.
    ///
    /// Stops at the first value for which it does not hold. Empty sequences
    /// satisfy every predicate.
    #[inline]
    fn all_of<P>(&self, predicate: P) -> bool
    where
        P: FnMut(ValueOf<Self>) -> bool,
    {
        self.cursors().all(predicate)
    }

    /// Returns `true` if `predicate` holds for at least one value.
    #[inline]
    fn any_of<P>(&self, predicate: P) -> bool
    where
        P: FnMut(ValueOf<Self>) -> bool,
    {
        self.cursors().any(predicate)
    }

    /// Returns `true` if `predicate` holds for no value.
    #[inline]
    fn none_of<P>(&self, predicate: P) -> bool
    where
        P: FnMut(ValueOf<Self>) -> bool,
    {
        !self.any_of(predicate)
    }

    /// Returns the cursor at the first value satisfying `predicate`, or the
    /// end sentinel if there is none.
    fn stop_when<P>(&self, mut predicate: P) -> Self::Cursor
    where
        P: FnMut(ValueOf<Self>) -> bool,
    {
        let end = self.end_cursor();
        let mut cursor = self.begin_cursor();
        while !cursor.reached_end(&end) {
            if predicate(cursor.current()) {
                return cursor;
            }
            cursor.advance();
        }
        end
    }

    /// Returns the cursor at the first value for which `predicate` fails,
    /// or the end sentinel if it holds throughout.
    #[inline]
    fn step_while<P>(&self, mut predicate: P) -> Self::Cursor
    where
        P: FnMut(ValueOf<Self>) -> bool,
    {
        self.stop_when(|value| !predicate(value))
    }

    /// Collects the values into a vector, pre-sized from
    /// [`CursorPair::capacity_hint`].
    fn to_vec(&self) -> Vec<ValueOf<Self>> {
        let mut values = Vec::with_capacity(self.capacity_hint());
        values.extend(self.cursors());
        values
    }

    /// Collects the values into a linked list.
    #[inline]
    fn to_list(&self) -> LinkedList<ValueOf<Self>> {
        self.cursors().collect()
    }
}

impl<R> Traverse for R where R: CursorPair {}
