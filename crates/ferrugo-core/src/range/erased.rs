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


//! # Type-Erased Iterables
//!
//! [`ForwardIterable<'a, T>`](ForwardIterable) and
//! [`RandomAccessIterable<'a, T>`](RandomAccessIterable) hide the concrete type
//! of a range behind dynamic dispatch, so that functions can return different
//! range types under one nominal type. The lifetime `'a` bounds whatever the
//! erased range borrows; ranges owning their data erase as `'static`.
//!
//! The source range is stored once on the heap. Every iterator obtained from an
//! iterable owns a heap-allocated erased cursor that can be cloned, which is what
//! makes erased iterators copyable. The iterable itself is move-only because the
//! stored range is not required to be cloneable.
//!
//! Elements are produced by value. A source whose items convert `Into<T>` can be
//! erased as an iterable of `T`.
//!
//! Erased cursors relate only to cursors obtained from the same iterable.
//! Comparing cursors of two different iterables yields "not equal"; asking for
//! their order or distance panics.
//!
//! ```rust
//! # use ferrugo_core::range::{Range, adapt::adapt, erased::ForwardIterable, views};
//! fn numbers(squared: bool) -> ForwardIterable<'static, i64> {
//!     let base = adapt(vec![1i64, 2, 3]);
//!     if squared {
//!         ForwardIterable::new(views::transform(base, |x: i64| x * x))
//!     } else {
//!         ForwardIterable::new(base)
//!     }
//! }
//!
//! assert_eq!(numbers(false).to_container::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(numbers(true).to_container::<Vec<_>>(), vec![1, 4, 9]);
//!
//! let local = vec![7, 8];
//! let borrowed = ForwardIterable::<&i32>::new(adapt(&local));
//! assert_eq!(borrowed.count(), 2);
//! ```

use crate::cursor::{Cursor, capability::Capabilities, derived, iter::Iter};
use crate::range::{Range, RangeItem, adapt::IntoRange};
use std::marker::PhantomData;
use std::rc::Rc;

/// Identifies the iterable an erased cursor was obtained from.
#[derive(Clone)]
struct SourceId(Rc<()>);

impl SourceId {
    #[inline]
    fn new() -> Self {
        Self(Rc::new(()))
    }

    #[inline(always)]
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

trait DynForwardCursor<'a, T> {
    fn get(&self) -> T;
    fn inc(&mut self);
    fn source(&self) -> &SourceId;
    fn is_equal(&self, other: &dyn DynForwardCursor<'a, T>) -> bool;
    fn clone_box(&self) -> Box<dyn DynForwardCursor<'a, T> + 'a>;
}

trait DynRandomAccessCursor<'a, T> {
    fn get(&self) -> T;
    fn advance(&mut self, offset: isize);
    fn source(&self) -> &SourceId;
    fn is_equal(&self, other: &dyn DynRandomAccessCursor<'a, T>) -> bool;
    fn is_less(&self, other: &dyn DynRandomAccessCursor<'a, T>) -> bool;
    fn distance_to(&self, other: &dyn DynRandomAccessCursor<'a, T>) -> isize;
    fn clone_box(&self) -> Box<dyn DynRandomAccessCursor<'a, T> + 'a>;
}

trait DynRange<'a, T> {
    type Cursor: ?Sized + 'a;

    fn begin(&self) -> Box<Self::Cursor>;
    fn end(&self) -> Box<Self::Cursor>;
}

/// Binds a concrete cursor to the erased element type `T` and to its source.
struct Concrete<C, T> {
    cursor: C,
    source: SourceId,
    _item: PhantomData<fn() -> T>,
}

impl<C, T> Concrete<C, T> {
    #[inline(always)]
    fn new(cursor: C, source: SourceId) -> Self {
        Self {
            cursor,
            source,
            _item: PhantomData,
        }
    }

    /// Runs `f` on the concrete cursor behind `other` if `other` was obtained
    /// from the same iterable.
    #[inline]
    fn with_forward_sibling<'a, Out>(
        &self,
        other: &dyn DynForwardCursor<'a, T>,
        f: impl FnOnce(&C) -> Out,
    ) -> Option<Out> {
        if !self.source.same(other.source()) {
            return None;
        }
        // SAFETY: a `SourceId` is created once per iterable and shared only with
        // the cursors its holder builds, which are all `Concrete<C, T>` for the
        // holder's cursor type `C`. Equal ids therefore imply `other` is `Self`.
        let other = unsafe { &*std::ptr::from_ref(other).cast::<Self>() };
        Some(f(&other.cursor))
    }

    /// Runs `f` on the concrete cursor behind `other`.
    ///
    /// Panics if `other` was obtained from a different iterable.
    #[inline]
    #[track_caller]
    fn with_random_access_sibling<'a, Out>(
        &self,
        other: &dyn DynRandomAccessCursor<'a, T>,
        f: impl FnOnce(&C) -> Out,
    ) -> Out {
        assert!(
            self.source.same(other.source()),
            "cannot relate cursors of erased ranges with different sources"
        );
        // SAFETY: see `with_forward_sibling`; the ids were checked above.
        let other = unsafe { &*std::ptr::from_ref(other).cast::<Self>() };
        f(&other.cursor)
    }
}

impl<'a, C, T> DynForwardCursor<'a, T> for Concrete<C, T>
where
    C: Cursor + 'a,
    C::Item: Into<T>,
    T: 'a,
{
    fn get(&self) -> T {
        self.cursor.get().into()
    }

    fn inc(&mut self) {
        derived::inc(&mut self.cursor);
    }

    fn source(&self) -> &SourceId {
        &self.source
    }

    fn is_equal(&self, other: &dyn DynForwardCursor<'a, T>) -> bool {
        self.with_forward_sibling(other, |other| derived::is_equal(&self.cursor, other))
            .unwrap_or(false)
    }

    fn clone_box(&self) -> Box<dyn DynForwardCursor<'a, T> + 'a> {
        Box::new(Self::new(self.cursor.clone(), self.source.clone()))
    }
}

impl<'a, C, T> DynRandomAccessCursor<'a, T> for Concrete<C, T>
where
    C: Cursor + 'a,
    C::Item: Into<T>,
    T: 'a,
{
    fn get(&self) -> T {
        self.cursor.get().into()
    }

    fn advance(&mut self, offset: isize) {
        derived::advance(&mut self.cursor, offset);
    }

    fn source(&self) -> &SourceId {
        &self.source
    }

    fn is_equal(&self, other: &dyn DynRandomAccessCursor<'a, T>) -> bool {
        self.source.same(other.source())
            && self.with_random_access_sibling(other, |other| derived::is_equal(&self.cursor, other))
    }

    fn is_less(&self, other: &dyn DynRandomAccessCursor<'a, T>) -> bool {
        self.with_random_access_sibling(other, |other| derived::is_less(&self.cursor, other))
    }

    fn distance_to(&self, other: &dyn DynRandomAccessCursor<'a, T>) -> isize {
        self.with_random_access_sibling(other, |other| derived::distance(&self.cursor, other))
    }

    fn clone_box(&self) -> Box<dyn DynRandomAccessCursor<'a, T> + 'a> {
        Box::new(Self::new(self.cursor.clone(), self.source.clone()))
    }
}

struct ForwardHolder<R, T> {
    range: R,
    source: SourceId,
    _item: PhantomData<fn() -> T>,
}

impl<'a, R, T> DynRange<'a, T> for ForwardHolder<R, T>
where
    R: Range,
    R::Cursor: 'a,
    RangeItem<R>: Into<T>,
    T: 'a,
{
    type Cursor = dyn DynForwardCursor<'a, T> + 'a;

    fn begin(&self) -> Box<Self::Cursor> {
        Box::new(Concrete::<_, T>::new(
            self.range.begin().into_cursor(),
            self.source.clone(),
        ))
    }

    fn end(&self) -> Box<Self::Cursor> {
        Box::new(Concrete::<_, T>::new(
            self.range.end().into_cursor(),
            self.source.clone(),
        ))
    }
}

struct RandomAccessHolder<R, T> {
    range: R,
    source: SourceId,
    _item: PhantomData<fn() -> T>,
}

impl<'a, R, T> DynRange<'a, T> for RandomAccessHolder<R, T>
where
    R: Range,
    R::Cursor: 'a,
    RangeItem<R>: Into<T>,
    T: 'a,
{
    type Cursor = dyn DynRandomAccessCursor<'a, T> + 'a;

    fn begin(&self) -> Box<Self::Cursor> {
        Box::new(Concrete::<_, T>::new(
            self.range.begin().into_cursor(),
            self.source.clone(),
        ))
    }

    fn end(&self) -> Box<Self::Cursor> {
        Box::new(Concrete::<_, T>::new(
            self.range.end().into_cursor(),
            self.source.clone(),
        ))
    }
}

/// The cursor of a [`ForwardIterable`].
pub struct ForwardCursor<'a, T> {
    inner: Box<dyn DynForwardCursor<'a, T> + 'a>,
}

impl<T> Clone for ForwardCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T> std::fmt::Debug for ForwardCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ForwardCursor")
    }
}

impl<T> Cursor for ForwardCursor<'_, T> {
    type Item = T;
    const CAPABILITIES: Capabilities = Capabilities::FORWARD;

    #[inline]
    fn get(&self) -> T {
        self.inner.get()
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.inc();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(other.inner.as_ref())
    }
}

/// A move-only forward range of `T` with its source type erased.
pub struct ForwardIterable<'a, T> {
    range: Box<dyn DynRange<'a, T, Cursor = dyn DynForwardCursor<'a, T> + 'a> + 'a>,
}

impl<'a, T: 'a> ForwardIterable<'a, T> {
    /// Erases `range`.
    ///
    /// Fails to compile unless the range's cursor can step forward and compare
    /// positions.
    pub fn new<R>(range: R) -> Self
    where
        R: Range + 'a,
        R::Cursor: 'a,
        RangeItem<R>: Into<T>,
    {
        const {
            assert!(
                <R::Cursor as Cursor>::CAPABILITIES.is_iterable()
                    && <R::Cursor as Cursor>::CAPABILITIES.supports_equality(),
                "a forward iterable requires a forward range"
            )
        };
        log::debug!(
            "erasing forward range `{}` as `ForwardIterable<{}>`",
            std::any::type_name::<R>(),
            std::any::type_name::<T>()
        );
        Self {
            range: Box::new(ForwardHolder {
                range,
                source: SourceId::new(),
                _item: PhantomData,
            }),
        }
    }
}

impl<T> std::fmt::Debug for ForwardIterable<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ForwardIterable")
    }
}

impl<'a, T: 'a> Range for ForwardIterable<'a, T> {
    type Cursor = ForwardCursor<'a, T>;

    #[inline]
    fn begin(&self) -> Iter<Self::Cursor> {
        Iter::new(ForwardCursor {
            inner: self.range.begin(),
        })
    }

    #[inline]
    fn end(&self) -> Iter<Self::Cursor> {
        Iter::new(ForwardCursor {
            inner: self.range.end(),
        })
    }
}

/// The cursor of a [`RandomAccessIterable`].
pub struct RandomAccessCursor<'a, T> {
    inner: Box<dyn DynRandomAccessCursor<'a, T> + 'a>,
}

impl<T> Clone for RandomAccessCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T> std::fmt::Debug for RandomAccessCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RandomAccessCursor")
    }
}

impl<T> Cursor for RandomAccessCursor<'_, T> {
    type Item = T;
    const CAPABILITIES: Capabilities = Capabilities::RANDOM_ACCESS
        .union(Capabilities::EQ)
        .union(Capabilities::LT);

    #[inline]
    fn get(&self) -> T {
        self.inner.get()
    }

    #[inline]
    fn advance(&mut self, offset: isize) {
        self.inner.advance(offset);
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(other.inner.as_ref())
    }

    #[inline]
    fn is_less(&self, other: &Self) -> bool {
        self.inner.is_less(other.inner.as_ref())
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(other.inner.as_ref())
    }
}

/// A move-only random-access range of `T` with its source type erased.
///
/// ```rust
/// # use ferrugo_core::range::{Range, adapt::adapt, erased::RandomAccessIterable};
/// let letters = RandomAccessIterable::<char>::new(adapt(vec!['a', 'b', 'c']));
/// assert_eq!(letters.size(), 3);
/// assert_eq!(letters.back(), 'c');
/// assert_eq!(letters.at(1), Ok('b'));
/// ```
pub struct RandomAccessIterable<'a, T> {
    range: Box<dyn DynRange<'a, T, Cursor = dyn DynRandomAccessCursor<'a, T> + 'a> + 'a>,
}

impl<'a, T: 'a> RandomAccessIterable<'a, T> {
    /// Erases `range`.
    ///
    /// Fails to compile unless the range's cursor is random access.
    pub fn new<R>(range: R) -> Self
    where
        R: Range + 'a,
        R::Cursor: 'a,
        RangeItem<R>: Into<T>,
    {
        const {
            assert!(
                <R::Cursor as Cursor>::CATEGORY.is_random_access(),
                "a random-access iterable requires a random-access range"
            )
        };
        log::debug!(
            "erasing random-access range `{}` as `RandomAccessIterable<{}>`",
            std::any::type_name::<R>(),
            std::any::type_name::<T>()
        );
        Self {
            range: Box::new(RandomAccessHolder {
                range,
                source: SourceId::new(),
                _item: PhantomData,
            }),
        }
    }
}

impl<T> std::fmt::Debug for RandomAccessIterable<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RandomAccessIterable")
    }
}

impl<'a, T: 'a> Range for RandomAccessIterable<'a, T> {
    type Cursor = RandomAccessCursor<'a, T>;

    #[inline]
    fn begin(&self) -> Iter<Self::Cursor> {
        Iter::new(RandomAccessCursor {
            inner: self.range.begin(),
        })
    }

    #[inline]
    fn end(&self) -> Iter<Self::Cursor> {
        Iter::new(RandomAccessCursor {
            inner: self.range.end(),
        })
    }
}

impl<'a, T: 'a> IntoRange for ForwardIterable<'a, T> {
    type Range = Self;

    #[inline(always)]
    fn into_range(self) -> Self {
        self
    }
}

impl<'a, T: 'a> IntoRange for RandomAccessIterable<'a, T> {
    type Range = Self;

    #[inline(always)]
    fn into_range(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::exercise_listed_primitives;
    use crate::cursor::capability::Category;
    use crate::range::{adapt::adapt, views};

    fn evens(limit: i32) -> ForwardIterable<'static, i32> {
        ForwardIterable::new(views::filter(
            adapt((0..limit).collect::<Vec<_>>()),
            |x: &i32| x % 2 == 0,
        ))
    }

    #[test]
    fn test_forward_iterable_matches_source() {
        let erased = evens(10);
        assert_eq!(erased.to_container::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
        assert_eq!(erased.count(), 5);
        assert_eq!(erased.front(), 0);
    }

    #[test]
    fn test_erased_cursors_are_cloneable() {
        let erased = evens(6);
        let mut it = erased.begin();
        it.inc();
        let copy = it.clone();
        it.inc();
        assert_eq!(copy.get(), 2);
        assert_eq!(it.get(), 4);
        assert!(copy != it);
        let mut caught_up = copy.clone();
        caught_up.inc();
        assert!(caught_up == it);
    }

    #[test]
    fn test_heterogeneous_sources_share_a_type() {
        let data: &'static [u8] = &[5, 6];
        let sources: Vec<ForwardIterable<u32>> = vec![
            ForwardIterable::new(adapt(vec![1u32, 2])),
            ForwardIterable::new(views::transform(adapt(data), |x: &u8| u32::from(*x))),
        ];
        let all: Vec<u32> = sources.iter().flat_map(|r| r.iter()).collect();
        assert_eq!(all, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_borrowed_local_data_can_be_erased() {
        let data = vec![3, 4, 5];
        let doubled = ForwardIterable::<i32>::new(views::transform(adapt(&data), |x: &i32| x * 2));
        assert_eq!(doubled.to_container::<Vec<_>>(), vec![6, 8, 10]);

        let refs = RandomAccessIterable::<&i32>::new(adapt(&data));
        assert_eq!(refs.size(), 3);
        assert_eq!(*refs.back(), 5);
        assert_eq!(refs.at(1), Ok(&4));
    }

    #[test]
    fn test_items_convert_into_target() {
        let erased = ForwardIterable::<i64>::new(adapt(vec![1i32, -2]));
        assert_eq!(erased.to_container::<Vec<i64>>(), vec![1, -2]);
    }

    #[test]
    fn test_random_access_iterable() {
        let erased = RandomAccessIterable::<u16>::new(adapt(vec![10u16, 20, 30, 40]));
        assert_eq!(RandomAccessCursor::<u16>::CATEGORY, Category::RandomAccess);
        assert_eq!(erased.size(), 4);
        assert_eq!(erased.get(2), 30);
        assert_eq!(erased.back(), 40);
        let mut it = erased.begin();
        it += 3;
        assert_eq!(it.get(), 40);
        assert!(erased.begin() < it);
        assert_eq!(it.distance_from(&erased.begin()), 3);
        assert_eq!(erased.iter().rev().collect::<Vec<_>>(), vec![40, 30, 20, 10]);
    }

    #[test]
    fn test_cursors_of_unrelated_sources_are_not_equal() {
        let a = ForwardIterable::<i32>::new(adapt(vec![1]));
        let b = ForwardIterable::<i32>::new(adapt([1]));
        assert!(a.begin() != b.begin());

        let c = RandomAccessIterable::<i32>::new(adapt(vec![1]));
        let d = RandomAccessIterable::<i32>::new(adapt(vec![1]));
        assert!(c.begin() != d.begin());
        assert!(c.begin() == c.begin());
    }

    #[test]
    #[should_panic(expected = "different sources")]
    fn test_distance_between_unrelated_sources_panics() {
        let a = RandomAccessIterable::<i32>::new(adapt(vec![1]));
        let b = RandomAccessIterable::<i32>::new(adapt([1]));
        let _ = a.end().distance_from(&b.begin());
    }

    #[test]
    fn test_erased_cursors_implement_listed_primitives() {
        let forward = evens(6);
        exercise_listed_primitives(forward.begin().cursor());
        let random = RandomAccessIterable::<u8>::new(adapt(vec![1u8, 2, 3]));
        exercise_listed_primitives(random.begin().cursor());
    }
}
