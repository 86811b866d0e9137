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

//! # Sequence Sources
//!
//! Constructors for sequences that do not read from another sequence.
//!
//! | Source        | Elements                                          |
//! |---------------|---------------------------------------------------|
//! | [`iota`]      | `start, start + 1, ...` up to the type's maximum  |
//! | [`range`]     | `lo, lo + 1, ..., hi - 1`                         |
//! | [`range_to`]  | `0, 1, ..., hi - 1`                               |
//! | [`repeat`]    | `value` forever                                   |
//! | [`repeat_n`]  | `value`, `n` times                                |
//! | [`empty`]     | nothing                                           |
//! | [`once`]      | `value`, once                                     |
//! | [`from_iter`] | the items of a cloneable std iterator             |
//! | [`from_range`]| the elements of a forward range                   |
//!
//! All of them keep their state by value, so every iteration starts over.

use crate::sequence::Sequence;
use ferrugo_core::range::{Range, RangeItem};
use num_traits::PrimInt;

/// Counts upward from `start` without an upper bound.
///
/// The sequence ends after yielding the maximum value of `T` instead of
/// overflowing.
///
/// ```rust
/// # use ferrugo_seq::iota;
/// assert_eq!(iota(5u8).iter().take(3).collect::<Vec<_>>(), vec![5, 6, 7]);
/// assert_eq!(iota(254u8).iter().collect::<Vec<_>>(), vec![254, 255]);
/// ```
pub fn iota<T: PrimInt + 'static>(start: T) -> Sequence<T> {
    let mut current = Some(start);
    Sequence::new(move || {
        let value = current?;
        current = value.checked_add(&T::one());
        Some(value)
    })
}

/// Counts from `lo` up to, but excluding, `hi`.
///
/// ```rust
/// # use ferrugo_seq::range;
/// assert_eq!(range(-2, 2).iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
/// assert_eq!(range(3, 3).iter().count(), 0);
/// assert_eq!(range(5, 1).iter().count(), 0);
/// ```
pub fn range<T: PrimInt + 'static>(lo: T, hi: T) -> Sequence<T> {
    let mut current = lo;
    Sequence::new(move || {
        if current >= hi {
            return None;
        }
        let value = current;
        current = current + T::one();
        Some(value)
    })
}

/// Counts from zero up to, but excluding, `hi`.
#[inline]
pub fn range_to<T: PrimInt + 'static>(hi: T) -> Sequence<T> {
    range(T::zero(), hi)
}

/// Yields clones of `value` forever.
pub fn repeat<T: Clone + 'static>(value: T) -> Sequence<T> {
    Sequence::new(move || Some(value.clone()))
}

/// Yields `count` clones of `value`.
pub fn repeat_n<T: Clone + 'static>(value: T, count: usize) -> Sequence<T> {
    let mut remaining = count;
    Sequence::new(move || {
        if remaining == 0 {
            return None;
        }
        remaining -= 1;
        Some(value.clone())
    })
}

/// A sequence without elements.
#[inline]
pub fn empty<T: 'static>() -> Sequence<T> {
    Sequence::empty()
}

/// Yields `value` once.
pub fn once<T: Clone + 'static>(value: T) -> Sequence<T> {
    let mut slot = Some(value);
    Sequence::new(move || slot.take())
}

/// Adopts a std iterator. The iterator is cloned for every iteration.
///
/// ```rust
/// # use ferrugo_seq::from_iter;
/// let words = from_iter("a bb ccc".split(' '));
/// assert_eq!(words.transform(str::len).iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn from_iter<I>(iter: I) -> Sequence<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Clone + 'static,
    I::Item: 'static,
{
    let mut iter = iter.into_iter();
    Sequence::new(move || iter.next())
}

/// Adopts a forward range.
///
/// ```rust
/// # use ferrugo_core::range::adapt::adapt;
/// # use ferrugo_seq::from_range;
/// let seq = from_range(adapt(vec![2, 4, 6]));
/// assert_eq!(seq.filter(|x| *x > 2).iter().collect::<Vec<_>>(), vec![4, 6]);
/// ```
pub fn from_range<R>(range: R) -> Sequence<RangeItem<R>>
where
    R: Range,
    R::Cursor: 'static,
    RangeItem<R>: 'static,
{
    let mut walk = range.iter();
    Sequence::new(move || walk.next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrugo_core::range::adapt::adapt;

    #[test]
    fn test_iota_is_unbounded() {
        let seq = iota(10i64);
        assert_eq!(seq.iter().nth(1000), Some(1010));
        assert_eq!(iota(i8::MAX).iter().count(), 1);
    }

    #[test]
    fn test_range_and_range_to() {
        assert_eq!(range(0u16, 4).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(range_to(3usize).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(range(u8::MAX - 1, u8::MAX).iter().collect::<Vec<_>>(), vec![254]);
    }

    #[test]
    fn test_repeat_sources() {
        assert_eq!(repeat('x').iter().take(3).collect::<String>(), "xxx");
        assert_eq!(repeat_n("ab", 2).iter().collect::<Vec<_>>(), vec!["ab", "ab"]);
        assert_eq!(repeat_n(1, 0).iter().count(), 0);
    }

    #[test]
    fn test_empty_and_once() {
        assert_eq!(empty::<i32>().iter().next(), None);
        let single = once(String::from("only"));
        assert_eq!(single.iter().collect::<Vec<_>>(), vec!["only"]);
        assert_eq!(single.iter().count(), 1);
    }

    #[test]
    fn test_from_iter_restarts() {
        let seq = from_iter(vec![1, 2, 3]);
        assert_eq!(seq.iter().sum::<i32>(), 6);
        assert_eq!(seq.iter().sum::<i32>(), 6);
    }

    #[test]
    fn test_from_range_shares_owned_storage() {
        let owned = adapt(vec![String::from("a"), String::from("b")]);
        let seq = from_range(owned.clone());
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(owned.strong_count() >= 2);
    }
}
