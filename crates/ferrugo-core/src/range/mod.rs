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
//! A [`Range`] is a pair of generic iterators, `begin` and `end`, over the same
//! cursor type. From that pair the trait derives container-like operations:
//! emptiness, size, first and last element, indexed access and conversion into
//! a concrete collection.
//!
//! Operations that need a particular capability check it at compile time. Asking
//! a forward-only range for its `back` element or for `size` does not compile.
//!
//! ## Highlights
//!
//! - [`IterRange`]: a range from an explicit iterator pair, or from a start
//!   iterator and an element count.
//! - [`adapt`]: turns containers into ranges by borrowing or by shared ownership.
//! - [`erased`]: type-erased forward and random-access iterables.
//! - [`views`]: lazy `transform`, `filter` and `zip_all` (two to four ranges) views.
//! - [`Walk`]: a std [`Iterator`] over any range.
//!
//! ## Usage
//!
//! ```rust
//! # use ferrugo_core::range::{Range, adapt::adapt};
//! let data = vec![3, 1, 4, 1, 5];
//! let range = adapt(&data);
//! assert_eq!(range.size(), 5);
//! assert_eq!(*range.front(), 3);
//! assert_eq!(*range.back(), 5);
//! assert_eq!(range.at(9).is_err(), true);
//! let doubled: Vec<i32> = range.iter().map(|x| x * 2).collect();
//! assert_eq!(doubled, vec![6, 2, 8, 2, 10]);
//! ```

pub mod adapt;
pub mod erased;
pub mod error;
pub mod views;

pub use error::RangeError;

use crate::cursor::{Cursor, capability::Capabilities, derived, iter::Iter};
use std::iter::FusedIterator;

/// The element type produced by the range `R`.
pub type RangeItem<R> = <<R as Range>::Cursor as Cursor>::Item;

/// A pair of generic iterators delimiting a sequence of elements.
pub trait Range {
    /// The cursor backing both iterators.
    type Cursor: Cursor;

    /// Returns an iterator to the first element.
    fn begin(&self) -> Iter<Self::Cursor>;

    /// Returns an iterator one past the last element.
    fn end(&self) -> Iter<Self::Cursor>;

    /// Returns `true` if `begin() == end()`.
    #[inline]
    fn is_empty(&self) -> bool {
        self.begin().equals(&self.end())
    }

    /// Returns the number of elements in constant time.
    ///
    /// Requires `DISTANCE_TO`. For forward ranges use [`count`](Range::count).
    #[inline]
    fn size(&self) -> usize {
        const {
            assert!(
                <Self::Cursor as Cursor>::CAPABILITIES.supports_difference(),
                "`size` requires a cursor with `distance_to`; use `count` instead"
            )
        };
        self.end().distance_from(&self.begin()).max(0) as usize
    }

    /// Counts the elements by walking the range.
    ///
    /// Never returns for an unbounded range.
    #[inline]
    fn count(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first element. The range must not be empty.
    #[inline]
    fn front(&self) -> RangeItem<Self> {
        self.begin().get()
    }

    /// Returns the last element. The range must not be empty.
    #[inline]
    fn back(&self) -> RangeItem<Self> {
        let mut last = self.end();
        last.dec();
        last.get()
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// The index must be smaller than the size of the range.
    #[inline]
    fn get(&self, index: usize) -> RangeItem<Self> {
        self.begin().at_offset(index as isize)
    }

    /// Returns the element at `index`, or [`RangeError::OutOfRange`].
    #[inline]
    fn at(&self, index: usize) -> Result<RangeItem<Self>, RangeError> {
        let len = self.size();
        if index >= len {
            return Err(RangeError::OutOfRange { index, len });
        }
        Ok(self.get(index))
    }

    /// Returns a std iterator over the elements of the range.
    #[inline]
    fn iter(&self) -> Walk<Self::Cursor> {
        Walk::new(self.begin(), self.end())
    }

    /// Collects the elements into a concrete container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferrugo_core::range::{Range, adapt::adapt};
    /// # use std::collections::BTreeSet;
    /// let range = adapt(vec![3, 1, 3, 2]);
    /// let set: BTreeSet<i32> = range.to_container();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn to_container<B>(&self) -> B
    where
        B: FromIterator<RangeItem<Self>>,
    {
        self.iter().collect()
    }
}

impl<R: Range + ?Sized> Range for &R {
    type Cursor = R::Cursor;

    #[inline(always)]
    fn begin(&self) -> Iter<Self::Cursor> {
        (**self).begin()
    }

    #[inline(always)]
    fn end(&self) -> Iter<Self::Cursor> {
        (**self).end()
    }
}

/// A range given by an explicit pair of iterators.
#[derive(Clone, Debug)]
pub struct IterRange<C> {
    begin: Iter<C>,
    end: Iter<C>,
}

impl<C: Cursor> IterRange<C> {
    /// Creates a range from `begin` up to, but excluding, `end`.
    #[inline]
    pub fn new(begin: Iter<C>, end: Iter<C>) -> Self {
        Self { begin, end }
    }

    /// Creates a range of `count` elements starting at `begin`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferrugo_core::range::{IterRange, Range, adapt::adapt};
    /// let data = [10, 20, 30, 40];
    /// let first_two = IterRange::from_count(adapt(&data).begin(), 2);
    /// assert_eq!(first_two.to_container::<Vec<_>>(), vec![&10, &20]);
    /// ```
    #[inline]
    pub fn from_count(begin: Iter<C>, count: usize) -> Self {
        let mut end = begin.clone();
        end.advance_by(count as isize);
        Self { begin, end }
    }

    /// Splits the range into its iterators.
    #[inline]
    pub fn into_parts(self) -> (Iter<C>, Iter<C>) {
        (self.begin, self.end)
    }
}

impl<C: Cursor> Range for IterRange<C> {
    type Cursor = C;

    #[inline(always)]
    fn begin(&self) -> Iter<C> {
        self.begin.clone()
    }

    #[inline(always)]
    fn end(&self) -> Iter<C> {
        self.end.clone()
    }
}

/// A std [`Iterator`] walking a range from both ends.
///
/// Walking from the back requires a cursor that can step backward, and
/// [`ExactSizeIterator::len`] requires `DISTANCE_TO`.
#[derive(Clone, Debug)]
pub struct Walk<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Walk<C> {
    /// Walks from `begin` up to `end`.
    #[inline]
    pub fn new(begin: Iter<C>, end: Iter<C>) -> Self {
        const {
            assert!(
                C::CAPABILITIES.is_iterable() && C::CAPABILITIES.supports_equality(),
                "walking a range requires a forward cursor with equality"
            )
        };
        Self {
            front: begin.into_cursor(),
            back: end.into_cursor(),
        }
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        derived::distance(&self.front, &self.back).max(0) as usize
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if derived::is_equal(&self.front, &self.back) {
            return None;
        }
        let item = self.front.get();
        derived::inc(&mut self.front);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if C::CAPABILITIES.supports_difference() {
            let n = self.remaining();
            (n, Some(n))
        } else {
            (0, None)
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if C::CAPABILITIES.contains(Capabilities::ADVANCE.union(Capabilities::DISTANCE_TO)) {
            if n >= self.remaining() {
                self.front = self.back.clone();
                return None;
            }
            self.front.advance(n as isize);
            return self.next();
        }
        for _ in 0..n {
            self.next()?;
        }
        self.next()
    }
}

impl<C: Cursor> DoubleEndedIterator for Walk<C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        const {
            assert!(
                C::CAPABILITIES.can_step_backward(),
                "walking a range backward requires `dec` or `advance`"
            )
        };
        if derived::is_equal(&self.front, &self.back) {
            return None;
        }
        derived::dec(&mut self.back);
        Some(self.back.get())
    }
}

impl<C: Cursor> ExactSizeIterator for Walk<C> {
    #[inline]
    fn len(&self) -> usize {
        const {
            assert!(
                C::CAPABILITIES.supports_difference(),
                "an exact length requires `distance_to`"
            )
        };
        self.remaining()
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}
