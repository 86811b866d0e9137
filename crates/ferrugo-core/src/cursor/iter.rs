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

//! # Generic Iterator
//!
//! [`Iter`] owns exactly one [`Cursor`] and exposes the full iterator contract
//! on top of it: stepping in both directions, jumping by offsets, offset
//! dereference, comparison and difference.
//!
//! Each operation is gated on the cursor's capability set at compile time. Asking
//! a forward-only cursor to step backward, or asking for a difference without
//! `DISTANCE_TO`, fails to compile with a message naming the missing primitive.
//! There are no runtime capability checks.
//!
//! ## Usage
//!
//! ```rust
//! # use ferrugo_core::cursor::{Cursor, capability::Capabilities, iter::Iter};
//! #[derive(Clone)]
//! struct Index(isize);
//!
//! impl Cursor for Index {
//!     type Item = isize;
//!     const CAPABILITIES: Capabilities = Capabilities::RANDOM_ACCESS;
//!     fn get(&self) -> isize { self.0 }
//!     fn advance(&mut self, offset: isize) { self.0 += offset; }
//!     fn distance_to(&self, other: &Self) -> isize { other.0 - self.0 }
//! }
//!
//! let first = Iter::new(Index(0));
//! let mut it = first.clone() + 4;
//! assert_eq!(it.get(), 4);
//! it -= 1;
//! assert_eq!(it.at_offset(-3), 0);
//! assert_eq!(&it - &first, 3);
//! assert!(first < it);
//! ```

use crate::cursor::{Cursor, capability::Capabilities, derived};

/// A generic iterator over a [`Cursor`].
#[derive(Clone, Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    /// Wraps `cursor`.
    ///
    /// Fails to compile if the cursor does not list `DEREF`.
    #[inline(always)]
    pub fn new(cursor: C) -> Self {
        const {
            assert!(
                C::CAPABILITIES.contains(Capabilities::DEREF),
                "a cursor must provide `deref` to be wrapped in an iterator"
            )
        };
        Self { cursor }
    }

    /// Returns a reference to the backing cursor.
    #[inline(always)]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Consumes the iterator, returning the backing cursor.
    #[inline(always)]
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Returns the element at the current position.
    ///
    /// The iterator must not be at the end of its range.
    #[inline(always)]
    pub fn get(&self) -> C::Item {
        self.cursor.get()
    }

    /// Steps forward by one, using `inc` or else `advance(1)`.
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        const {
            assert!(
                C::CAPABILITIES.can_step_forward(),
                "stepping forward requires `inc` or `advance`"
            )
        };
        derived::inc(&mut self.cursor);
        self
    }

    /// Steps forward by one and returns the position before the step.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// Steps backward by one, using `dec` or else `advance(-1)`.
    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        const {
            assert!(
                C::CAPABILITIES.can_step_backward(),
                "stepping backward requires `dec` or `advance`"
            )
        };
        derived::dec(&mut self.cursor);
        self
    }

    /// Steps backward by one and returns the position before the step.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let previous = self.clone();
        self.dec();
        previous
    }

    /// Moves the position by `offset`.
    ///
    /// Uses `advance` when the cursor provides it. Otherwise the move is made
    /// one step at a time, which for a negative offset requires `dec`.
    #[inline]
    pub fn advance_by(&mut self, offset: isize) -> &mut Self {
        const {
            assert!(
                C::CAPABILITIES.can_step_forward(),
                "moving an iterator requires `inc` or `advance`"
            )
        };
        derived::advance(&mut self.cursor, offset);
        self
    }

    /// Returns the element `offset` positions away from the current one.
    #[inline]
    pub fn at_offset(&self, offset: isize) -> C::Item {
        const {
            assert!(
                C::CAPABILITIES.contains(Capabilities::ADVANCE),
                "offset dereference requires `advance`"
            )
        };
        let mut moved = self.cursor.clone();
        moved.advance(offset);
        moved.get()
    }

    /// Returns the signed number of forward steps from `origin` to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferrugo_core::range::{Range, adapt::adapt};
    /// let data = vec![1, 2, 3, 4];
    /// let range = adapt(&data);
    /// assert_eq!(range.end().distance_from(&range.begin()), 4);
    /// assert_eq!(range.begin().distance_from(&range.end()), -4);
    /// ```
    #[inline(always)]
    pub fn distance_from(&self, origin: &Self) -> isize {
        const {
            assert!(
                C::CAPABILITIES.supports_difference(),
                "iterator difference requires `distance_to`"
            )
        };
        derived::distance(&origin.cursor, &self.cursor)
    }

    /// Returns `true` if both iterators denote the same position.
    ///
    /// Uses `eq` when present, otherwise `distance_to(..) == 0`.
    #[inline(always)]
    pub fn equals(&self, other: &Self) -> bool {
        const {
            assert!(
                C::CAPABILITIES.supports_equality(),
                "iterator equality requires `eq` or `distance_to`"
            )
        };
        derived::is_equal(&self.cursor, &other.cursor)
    }

    /// Returns `true` if `self` precedes `other`.
    ///
    /// Uses `lt` when present, otherwise `distance_to(..) > 0`.
    #[inline(always)]
    pub fn less_than(&self, other: &Self) -> bool {
        const {
            assert!(
                C::CAPABILITIES.supports_ordering(),
                "iterator ordering requires `lt` or `distance_to`"
            )
        };
        derived::is_less(&self.cursor, &other.cursor)
    }
}

impl<C: Cursor> PartialEq for Iter<C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<C: Cursor> PartialOrd for Iter<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.less_than(other) {
            Some(std::cmp::Ordering::Less)
        } else if other.less_than(self) {
            Some(std::cmp::Ordering::Greater)
        } else {
            Some(std::cmp::Ordering::Equal)
        }
    }
}

impl<C: Cursor> std::ops::AddAssign<isize> for Iter<C> {
    #[inline(always)]
    fn add_assign(&mut self, offset: isize) {
        const {
            assert!(
                C::CAPABILITIES.contains(Capabilities::ADVANCE),
                "`+=` on an iterator requires `advance`"
            )
        };
        self.cursor.advance(offset);
    }
}

impl<C: Cursor> std::ops::SubAssign<isize> for Iter<C> {
    #[inline(always)]
    fn sub_assign(&mut self, offset: isize) {
        *self += -offset;
    }
}

impl<C: Cursor> std::ops::Add<isize> for Iter<C> {
    type Output = Self;

    #[inline(always)]
    fn add(mut self, offset: isize) -> Self::Output {
        self += offset;
        self
    }
}

impl<C: Cursor> std::ops::Sub<isize> for Iter<C> {
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, offset: isize) -> Self::Output {
        self -= offset;
        self
    }
}

impl<C: Cursor> std::ops::Sub for Iter<C> {
    type Output = isize;

    #[inline(always)]
    fn sub(self, origin: Self) -> Self::Output {
        self.distance_from(&origin)
    }
}

impl<C: Cursor> std::ops::Sub for &Iter<C> {
    type Output = isize;

    #[inline(always)]
    fn sub(self, origin: Self) -> Self::Output {
        self.distance_from(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Debug)]
    struct Forward<'a> {
        data: &'a [i32],
        pos: usize,
    }

    impl Cursor for Forward<'_> {
        type Item = i32;
        const CAPABILITIES: Capabilities = Capabilities::FORWARD;

        fn get(&self) -> i32 {
            self.data[self.pos]
        }
        fn inc(&mut self) {
            self.pos += 1;
        }
        fn is_equal(&self, other: &Self) -> bool {
            self.pos == other.pos
        }
    }

    #[derive(Clone, Debug)]
    struct Bidi(i32);

    impl Cursor for Bidi {
        type Item = i32;
        const CAPABILITIES: Capabilities = Capabilities::BIDIRECTIONAL;

        fn get(&self) -> i32 {
            self.0
        }
        fn inc(&mut self) {
            self.0 += 1;
        }
        fn dec(&mut self) {
            self.0 -= 1;
        }
        fn is_equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[derive(Clone, Debug)]
    struct Random(isize);

    impl Cursor for Random {
        type Item = isize;
        const CAPABILITIES: Capabilities = Capabilities::RANDOM_ACCESS;

        fn get(&self) -> isize {
            self.0 * 10
        }
        fn advance(&mut self, offset: isize) {
            self.0 += offset;
        }
        fn distance_to(&self, other: &Self) -> isize {
            other.0 - self.0
        }
    }

    #[test]
    fn test_forward_stepping() {
        let data = [1, 2, 3];
        let mut it = Iter::new(Forward {
            data: &data,
            pos: 0,
        });
        assert_eq!(it.get(), 1);
        let before = it.post_inc();
        assert_eq!(before.get(), 1);
        assert_eq!(it.get(), 2);
        it.advance_by(1);
        assert_eq!(it.get(), 3);
        assert!(it != before);
    }

    #[test]
    fn test_bidirectional_stepping() {
        let mut it = Iter::new(Bidi(5));
        it.dec().dec();
        assert_eq!(it.get(), 3);
        let before = it.post_dec();
        assert_eq!(before.get(), 3);
        assert_eq!(it.get(), 2);
        it.advance_by(-2);
        assert_eq!(it.get(), 0);
        it.advance_by(4);
        assert_eq!(it, Iter::new(Bidi(4)));
    }

    #[test]
    fn test_random_access_arithmetic() {
        let begin = Iter::new(Random(0));
        let mut it = begin.clone() + 3;
        assert_eq!(it.get(), 30);
        assert_eq!(it.at_offset(2), 50);
        assert_eq!(it.at_offset(-3), 0);
        it -= 2;
        assert_eq!(it.get(), 10);
        assert_eq!(it.clone() - begin.clone(), 1);
        assert_eq!(&begin - &it, -1);
        assert_eq!((it.clone() - 1).get(), 0);
    }

    #[test]
    fn test_comparisons_derived_from_distance() {
        let a = Iter::new(Random(1));
        let b = Iter::new(Random(4));
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());
        assert!(a == Iter::new(Random(1)));
        assert!(a != b);
    }

    /// Records whether comparisons went through `is_less` or `distance_to`.
    #[derive(Clone, Debug)]
    struct Counted {
        pos: isize,
        lt_calls: Rc<Cell<usize>>,
        distance_calls: Rc<Cell<usize>>,
    }

    impl Cursor for Counted {
        type Item = isize;
        const CAPABILITIES: Capabilities = Capabilities::ALL;

        fn get(&self) -> isize {
            self.pos
        }
        fn inc(&mut self) {
            self.pos += 1;
        }
        fn dec(&mut self) {
            self.pos -= 1;
        }
        fn advance(&mut self, offset: isize) {
            self.pos += offset;
        }
        fn is_equal(&self, other: &Self) -> bool {
            self.pos == other.pos
        }
        fn is_less(&self, other: &Self) -> bool {
            self.lt_calls.set(self.lt_calls.get() + 1);
            self.pos < other.pos
        }
        fn distance_to(&self, other: &Self) -> isize {
            self.distance_calls.set(self.distance_calls.get() + 1);
            other.pos - self.pos
        }
    }

    #[test]
    fn test_ordering_prefers_less_than_primitive() {
        let lt_calls = Rc::new(Cell::new(0));
        let distance_calls = Rc::new(Cell::new(0));
        let at = |pos| {
            Iter::new(Counted {
                pos,
                lt_calls: Rc::clone(&lt_calls),
                distance_calls: Rc::clone(&distance_calls),
            })
        };
        let a = at(2);
        let b = at(7);
        assert!(a < b);
        assert!(!(b < a));
        assert!(a.less_than(&b));
        assert!(lt_calls.get() >= 3);
        assert_eq!(distance_calls.get(), 0);
        assert_eq!(b.distance_from(&a), 5);
        assert_eq!(distance_calls.get(), 1);
    }

    #[test]
    fn test_inc_through_advance() {
        let mut it = Iter::new(Random(0));
        it.inc().inc();
        assert_eq!(it.get(), 20);
        it.dec();
        assert_eq!(it.get(), 10);
    }
}
