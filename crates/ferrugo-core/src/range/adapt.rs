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

//! # Range Adaptation
//!
//! Turns containers into ranges under one of three ownership strategies:
//!
//! - **Borrowing** ([`Borrowed`]): holds a shared reference; the borrow checker
//!   ties the range to the lifetime of the container. Elements are yielded as
//!   references.
//! - **Owning** ([`Owned`]): moves the container into reference-counted storage
//!   shared by every copy of the range and every cursor derived from it, so the
//!   container outlives all of them. Elements are yielded as clones.
//! - **Pass-through**: a value that already is a range is returned unchanged.
//!
//! The strategy is selected statically by the [`IntoRange`] implementation of the
//! argument type, so [`adapt`] has no runtime branching: `&container` borrows,
//! `container` is taken over, and a range passes through.
//!
//! ```rust
//! # use ferrugo_core::range::{Range, adapt::adapt};
//! let data = vec![1, 2, 3];
//! let borrowed = adapt(&data);
//! assert_eq!(*borrowed.front(), 1);
//!
//! let owned = adapt(vec![String::from("a"), String::from("b")]);
//! let copy = owned.clone();
//! assert_eq!(copy.back(), "b");
//! assert_eq!(owned.strong_count(), 2);
//!
//! let again = adapt(owned);
//! assert_eq!(again.size(), 2);
//! ```

use crate::cursor::{Cursor, capability::Capabilities, iter::Iter};
use crate::range::{IterRange, Range};
use std::collections::VecDeque;
use std::rc::Rc;

/// An indexable container that can be adapted into a range.
pub trait Container {
    /// The stored element type.
    type Element;

    /// Returns the number of stored elements.
    fn size(&self) -> usize;

    /// Returns the element at `index`. Panics if `index` is out of bounds.
    fn element(&self, index: usize) -> &Self::Element;
}

impl<T> Container for [T] {
    type Element = T;

    #[inline(always)]
    fn size(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Element = T;

    #[inline(always)]
    fn size(&self) -> usize {
        N
    }

    #[inline(always)]
    fn element(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> Container for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn element(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> Container for Box<[T]> {
    type Element = T;

    #[inline(always)]
    fn size(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Container for VecDeque<T> {
    type Element = T;

    #[inline(always)]
    fn size(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

/// Moves `index` by a signed offset.
#[inline(always)]
fn offset(index: usize, by: isize) -> usize {
    index.wrapping_add_signed(by)
}

/// A random-access cursor borrowing its container.
pub struct RefCursor<'a, S: ?Sized> {
    source: &'a S,
    index: usize,
}

impl<S: ?Sized> Clone for RefCursor<'_, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            index: self.index,
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for RefCursor<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefCursor")
            .field("index", &self.index)
            .finish()
    }
}

impl<'a, S: Container + ?Sized> Cursor for RefCursor<'a, S> {
    type Item = &'a S::Element;
    const CAPABILITIES: Capabilities = Capabilities::ALL;

    #[inline(always)]
    fn get(&self) -> Self::Item {
        self.source.element(self.index)
    }

    #[inline(always)]
    fn inc(&mut self) {
        self.index += 1;
    }

    #[inline(always)]
    fn dec(&mut self) {
        self.index -= 1;
    }

    #[inline(always)]
    fn advance(&mut self, by: isize) {
        self.index = offset(self.index, by);
    }

    #[inline(always)]
    fn is_equal(&self, other: &Self) -> bool {
        self.index == other.index
    }

    #[inline(always)]
    fn is_less(&self, other: &Self) -> bool {
        self.index < other.index
    }

    #[inline(always)]
    fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

/// A range borrowing a container.
///
/// Copies of the range are cheap and all refer to the same container.
pub struct Borrowed<'a, S: ?Sized> {
    source: &'a S,
}

impl<S: ?Sized> Clone for Borrowed<'_, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Borrowed<'_, S> {}

impl<'a, S: Container + ?Sized> Borrowed<'a, S> {
    /// Borrows `source`.
    #[inline(always)]
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Returns the borrowed container.
    #[inline(always)]
    pub fn source(&self) -> &'a S {
        self.source
    }

    #[inline(always)]
    fn cursor(&self, index: usize) -> Iter<RefCursor<'a, S>> {
        Iter::new(RefCursor {
            source: self.source,
            index,
        })
    }
}

impl<'a, S: Container + ?Sized> Range for Borrowed<'a, S> {
    type Cursor = RefCursor<'a, S>;

    #[inline(always)]
    fn begin(&self) -> Iter<Self::Cursor> {
        self.cursor(0)
    }

    #[inline(always)]
    fn end(&self) -> Iter<Self::Cursor> {
        self.cursor(self.source.size())
    }
}

/// A random-access cursor sharing ownership of its container.
pub struct SharedCursor<S> {
    source: Rc<S>,
    index: usize,
}

impl<S> Clone for SharedCursor<S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            index: self.index,
        }
    }
}

impl<S> std::fmt::Debug for SharedCursor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCursor")
            .field("index", &self.index)
            .finish()
    }
}

impl<S> Cursor for SharedCursor<S>
where
    S: Container,
    S::Element: Clone,
{
    type Item = S::Element;
    const CAPABILITIES: Capabilities = Capabilities::ALL;

    #[inline(always)]
    fn get(&self) -> Self::Item {
        self.source.element(self.index).clone()
    }

    #[inline(always)]
    fn inc(&mut self) {
        self.index += 1;
    }

    #[inline(always)]
    fn dec(&mut self) {
        self.index -= 1;
    }

    #[inline(always)]
    fn advance(&mut self, by: isize) {
        self.index = offset(self.index, by);
    }

    #[inline(always)]
    fn is_equal(&self, other: &Self) -> bool {
        self.index == other.index
    }

    #[inline(always)]
    fn is_less(&self, other: &Self) -> bool {
        self.index < other.index
    }

    #[inline(always)]
    fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

/// A range owning its container through shared, reference-counted storage.
///
/// Cloning the range shares the container instead of copying it.
pub struct Owned<S> {
    source: Rc<S>,
}

impl<S> Clone for Owned<S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Owned<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Owned").field(&self.source).finish()
    }
}

impl<S: Container> Owned<S> {
    /// Moves `source` into shared storage.
    #[inline]
    pub fn new(source: S) -> Self {
        Self {
            source: Rc::new(source),
        }
    }

    /// Shares already reference-counted storage.
    #[inline]
    pub fn from_rc(source: Rc<S>) -> Self {
        Self { source }
    }

    /// Returns the owned container.
    #[inline(always)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the number of handles (ranges and cursors) sharing the container.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Rc::strong_count(&self.source)
    }

    #[inline(always)]
    fn cursor(&self, index: usize) -> SharedCursor<S> {
        SharedCursor {
            source: Rc::clone(&self.source),
            index,
        }
    }
}

impl<S> Range for Owned<S>
where
    S: Container,
    S::Element: Clone,
{
    type Cursor = SharedCursor<S>;

    #[inline(always)]
    fn begin(&self) -> Iter<Self::Cursor> {
        Iter::new(self.cursor(0))
    }

    #[inline(always)]
    fn end(&self) -> Iter<Self::Cursor> {
        Iter::new(self.cursor(self.source.size()))
    }
}

/// Conversion of a value into a range.
///
/// References to containers convert into [`Borrowed`], containers by value into
/// [`Owned`], and ranges into themselves.
pub trait IntoRange {
    /// The resulting range type.
    type Range: Range;

    /// Performs the conversion.
    fn into_range(self) -> Self::Range;
}

/// Adapts `value` into a range. See [`IntoRange`] for the dispatch rules.
#[inline(always)]
pub fn adapt<T: IntoRange>(value: T) -> T::Range {
    value.into_range()
}

macro_rules! borrow_into_range {
    ($(<$($gen:tt),*> $ty:ty),* $(,)?) => {
        $(
            impl<'a, $($gen),*> IntoRange for &'a $ty {
                type Range = Borrowed<'a, $ty>;

                #[inline(always)]
                fn into_range(self) -> Self::Range {
                    Borrowed::new(self)
                }
            }
        )*
    };
}

borrow_into_range!(<T> [T], <T> Vec<T>, <T> VecDeque<T>, <T> Box<[T]>);

impl<'a, T, const N: usize> IntoRange for &'a [T; N] {
    type Range = Borrowed<'a, [T; N]>;

    #[inline(always)]
    fn into_range(self) -> Self::Range {
        Borrowed::new(self)
    }
}

macro_rules! own_into_range {
    ($(<$($gen:tt),*> $ty:ty),* $(,)?) => {
        $(
            impl<$($gen),*> IntoRange for $ty
            where
                T: Clone,
            {
                type Range = Owned<$ty>;

                #[inline]
                fn into_range(self) -> Self::Range {
                    Owned::new(self)
                }
            }
        )*
    };
}

own_into_range!(<T> Vec<T>, <T> VecDeque<T>, <T> Box<[T]>);

impl<T: Clone, const N: usize> IntoRange for [T; N] {
    type Range = Owned<[T; N]>;

    #[inline]
    fn into_range(self) -> Self::Range {
        Owned::new(self)
    }
}

impl<S> IntoRange for Rc<S>
where
    S: Container,
    S::Element: Clone,
{
    type Range = Owned<S>;

    #[inline]
    fn into_range(self) -> Self::Range {
        Owned::from_rc(self)
    }
}

impl<'a, S: Container + ?Sized> IntoRange for Borrowed<'a, S> {
    type Range = Self;

    #[inline(always)]
    fn into_range(self) -> Self {
        self
    }
}

impl<S> IntoRange for Owned<S>
where
    S: Container,
    S::Element: Clone,
{
    type Range = Self;

    #[inline(always)]
    fn into_range(self) -> Self {
        self
    }
}

impl<C: Cursor> IntoRange for IterRange<C> {
    type Range = Self;

    #[inline(always)]
    fn into_range(self) -> Self {
        self
    }
}
