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

use crate::cursor::Cursor;
use std::iter::FusedIterator;

/// An iterator driven by a cursor and an end sentinel.
///
/// The iterator yields the current value and then advances, until the cursor
/// reports that it has reached the sentinel. Once that happens the cursor is
/// no longer advanced, so the iterator stays exhausted.
///
/// # Examples
///
/// ```rust
/// # use stride_core::cursor::CursorIter;
/// # use stride_core::range::RangeCursor;
///
/// let iter = CursorIter::new(RangeCursor::new(10u8, -3), RangeCursor::new(0u8, -3));
/// assert_eq!(iter.collect::<Vec<_>>(), vec![10, 7, 4, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    front: C,
    end: C,
}

impl<C> CursorIter<C>
where
    C: Cursor,
{
    /// Creates a new iterator over `[front, end)`.
    #[inline]
    pub fn new(front: C, end: C) -> Self {
        Self { front, end }
    }

    /// Returns the cursor at the position of the next value.
    #[inline]
    pub fn position(&self) -> &C {
        &self.front
    }

    /// Returns the end sentinel.
    #[inline]
    pub fn sentinel(&self) -> &C {
        &self.end
    }

    /// Returns `true` if no further values will be produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.front.reached_end(&self.end)
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
{
    type Item = C::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.reached_end(&self.end) {
            return None;
        }
        let value = self.front.current();
        self.front.advance();
        Some(value)
    }
}

impl<C> FusedIterator for CursorIter<C> where C: Cursor {}
