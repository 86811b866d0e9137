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

//! # Sequences
//!
//! A [`Sequence<T>`] holds a single *next function*: a closure returning the
//! next value, or `None` once the sequence is exhausted. Exhaustion is
//! permanent; a next function is never polled again after returning `None` by
//! the iterators in this crate.
//!
//! Every way of iterating a sequence works on a clone of the next function.
//! State captured by value is therefore restarted for each iteration, while
//! state shared through `Rc<Cell<_>>` or similar is shared between iterations.
//!
//! ```rust
//! # use ferrugo_seq::{Sequence, range};
//! # use std::{cell::Cell, rc::Rc};
//! let pure = range(0, 3);
//! assert_eq!(pure.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(pure.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! let shared = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&shared);
//! let stateful = Sequence::new(move || {
//!     let n = counter.get();
//!     counter.set(n + 1);
//!     (n < 3).then_some(n)
//! });
//! assert_eq!(stateful.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(stateful.iter().count(), 0);
//! ```
//!
//! A sequence is also a forward [`Range`]: its cursor caches the last pulled
//! value together with its index.

use ferrugo_core::cursor::{Cursor, capability::Capabilities, iter::Iter};
use ferrugo_core::pipeline::Pipeline;
use ferrugo_core::range::{Range, adapt::IntoRange};
use std::iter::FusedIterator;

/// A cloneable next function producing values of type `T`.
///
/// Implemented for every `FnMut() -> Option<T> + Clone + 'static` closure.
pub trait NextFn<T> {
    /// Produces the next value, or `None` at the end.
    fn pull(&mut self) -> Option<T>;

    /// Clones the next function together with its captured state.
    fn clone_box(&self) -> Box<dyn NextFn<T>>;
}

impl<T, F> NextFn<T> for F
where
    F: FnMut() -> Option<T> + Clone + 'static,
{
    #[inline(always)]
    fn pull(&mut self) -> Option<T> {
        self()
    }

    #[inline]
    fn clone_box(&self) -> Box<dyn NextFn<T>> {
        Box::new(self.clone())
    }
}

impl<T> Clone for Box<dyn NextFn<T>> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A lazily evaluated, pull-based stream of values.
pub struct Sequence<T> {
    next: Box<dyn NextFn<T>>,
}

impl<T> Clone for Sequence<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone_box(),
        }
    }
}

impl<T> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sequence<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: 'static> Sequence<T> {
    /// Creates a sequence from a next function.
    #[inline]
    pub fn new<F>(next: F) -> Self
    where
        F: FnMut() -> Option<T> + Clone + 'static,
    {
        Self {
            next: Box::new(next),
        }
    }

    /// Creates a sequence from an already boxed next function.
    #[inline]
    pub fn from_next_fn(next: Box<dyn NextFn<T>>) -> Self {
        Self { next }
    }

    /// Creates a sequence without elements.
    #[inline]
    pub fn empty() -> Self {
        Self::new(|| None)
    }

    /// Returns a copy of the next function.
    #[inline]
    pub fn next_fn(&self) -> Box<dyn NextFn<T>> {
        self.next.clone_box()
    }

    /// Consumes the sequence, returning its next function.
    #[inline]
    pub fn into_next_fn(self) -> Box<dyn NextFn<T>> {
        self.next
    }

    /// Returns a std iterator over a fresh copy of the next function.
    #[inline]
    pub fn iter(&self) -> SeqIter<T> {
        SeqIter::new(self.next_fn())
    }
}

/// A std [`Iterator`] over a sequence.
pub struct SeqIter<T> {
    next: Box<dyn NextFn<T>>,
    done: bool,
}

impl<T> Clone for SeqIter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone_box(),
            done: self.done,
        }
    }
}

impl<T> SeqIter<T> {
    #[inline]
    fn new(next: Box<dyn NextFn<T>>) -> Self {
        Self { next, done: false }
    }
}

impl<T> std::fmt::Debug for SeqIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeqIter").field("done", &self.done).finish()
    }
}

impl<T> Iterator for SeqIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = self.next.pull();
        self.done = item.is_none();
        item
    }
}

impl<T> FusedIterator for SeqIter<T> {}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    #[inline]
    fn into_iter(self) -> SeqIter<T> {
        SeqIter::new(self.next)
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    #[inline]
    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

/// The cursor of a sequence viewed as a range.
///
/// Holds the most recently pulled value and its index. The end cursor holds
/// neither.
#[derive(Clone)]
pub struct SeqCursor<T> {
    next: Option<Box<dyn NextFn<T>>>,
    current: Option<T>,
    index: usize,
}

impl<T> SeqCursor<T> {
    fn start(mut next: Box<dyn NextFn<T>>) -> Self {
        let current = next.pull();
        Self {
            next: Some(next),
            current,
            index: 0,
        }
    }

    fn finish() -> Self {
        Self {
            next: None,
            current: None,
            index: usize::MAX,
        }
    }

    /// Returns the index of the cached value.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Debug for SeqCursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeqCursor")
            .field("index", &self.index)
            .field("exhausted", &self.current.is_none())
            .finish()
    }
}

impl<T: Clone> Cursor for SeqCursor<T> {
    type Item = T;
    const CAPABILITIES: Capabilities = Capabilities::FORWARD;

    #[inline]
    fn get(&self) -> T {
        match &self.current {
            Some(value) => value.clone(),
            None => panic!("dereferenced an exhausted sequence cursor"),
        }
    }

    #[inline]
    fn inc(&mut self) {
        if self.current.is_none() {
            return;
        }
        if let Some(next) = self.next.as_mut() {
            self.current = next.pull();
            self.index += 1;
        }
    }

    /// Exhausted cursors are equal to each other. Otherwise cursors are equal
    /// when they hold values at the same index.
    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        match (&self.current, &other.current) {
            (None, None) => true,
            (Some(_), Some(_)) => self.index == other.index,
            _ => false,
        }
    }
}

impl<T: Clone + 'static> Range for Sequence<T> {
    type Cursor = SeqCursor<T>;

    /// Pulls the first value of a fresh copy of the next function.
    #[inline]
    fn begin(&self) -> Iter<SeqCursor<T>> {
        Iter::new(SeqCursor::start(self.next_fn()))
    }

    #[inline]
    fn end(&self) -> Iter<SeqCursor<T>> {
        Iter::new(SeqCursor::finish())
    }
}

impl<T: Clone + 'static> IntoRange for Sequence<T> {
    type Range = Self;

    #[inline(always)]
    fn into_range(self) -> Self {
        self
    }
}

impl<T: 'static, U: 'static> std::ops::BitOr<Pipeline<Sequence<T>, U>> for Sequence<T> {
    type Output = U;

    /// Applies the pipeline to the sequence.
    #[inline]
    fn bitor(self, pipeline: Pipeline<Sequence<T>, U>) -> U {
        pipeline.call(self)
    }
}

impl<T: 'static, U: 'static> std::ops::BitOr<&Pipeline<Sequence<T>, U>> for Sequence<T> {
    type Output = U;

    #[inline]
    fn bitor(self, pipeline: &Pipeline<Sequence<T>, U>) -> U {
        pipeline.call(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, range};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_iteration_restarts_for_pure_state() {
        let seq = range(1, 4);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!((&seq).into_iter().sum::<i32>(), 6);
        assert_eq!(seq.into_iter().count(), 3);
    }

    #[test]
    fn test_exhausted_next_fn_is_not_polled_again() {
        let polls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&polls);
        let seq = Sequence::new(move || {
            counter.set(counter.get() + 1);
            None::<u8>
        });
        let mut it = seq.iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(polls.get(), 1);
    }

    #[test]
    fn test_sequence_as_range() {
        let seq = range(5u32, 9);
        assert!(!seq.is_empty());
        assert_eq!(seq.front(), 5);
        assert_eq!(Range::count(&seq), 4);
        assert_eq!(seq.to_container::<Vec<_>>(), vec![5, 6, 7, 8]);
        assert!(empty::<u32>().is_empty());
    }

    #[test]
    fn test_cursor_equality() {
        let seq = range(0, 2);
        let mut a = seq.begin();
        let b = seq.begin();
        assert!(a == b);
        a.inc();
        assert!(a != b);
        assert_eq!(a.cursor().index(), 1);
        a.inc();
        assert!(a == seq.end());
        a.inc();
        assert!(a == seq.end());
    }

    #[test]
    #[should_panic(expected = "exhausted sequence cursor")]
    fn test_dereferencing_end_panics() {
        let seq = range(0, 1);
        let _ = seq.end().get();
    }

    #[test]
    fn test_pipeline_application() {
        let double = Pipeline::new(|s: Sequence<i32>| s.transform(|x| x * 2));
        let result = range(0, 3) | &double;
        assert_eq!(result.iter().collect::<Vec<_>>(), vec![0, 2, 4]);
        let total = range(0, 3) | (double | Pipeline::new(|s: Sequence<i32>| s.iter().sum::<i32>()));
        assert_eq!(total, 6);
    }
}
