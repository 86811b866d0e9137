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

use crate::error::SequenceError;
use crate::sequence::{NextFn, Sequence};
use std::num::NonZeroUsize;

struct Take<T> {
    upstream: Box<dyn NextFn<T>>,
    remaining: usize,
}

impl<T> Clone for Take<T> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Take<T> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.upstream.pull();
        if value.is_none() {
            self.remaining = 0;
        }
        value
    }
}

struct DropFirst<T> {
    upstream: Box<dyn NextFn<T>>,
    pending: usize,
}

impl<T> Clone for DropFirst<T> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            pending: self.pending,
        }
    }
}

impl<T> DropFirst<T> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        while self.pending > 0 {
            self.pending -= 1;
            let _ = self.upstream.pull();
        }
        self.upstream.pull()
    }
}

struct Step<T> {
    upstream: Box<dyn NextFn<T>>,
    stride: NonZeroUsize,
    index: usize,
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            stride: self.stride,
            index: self.index,
        }
    }
}

impl<T> Step<T> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        loop {
            let value = self.upstream.pull()?;
            let keep = self.index % self.stride.get() == 0;
            self.index += 1;
            if keep {
                return Some(value);
            }
        }
    }
}

impl<T: 'static> Sequence<T> {
    /// Yields at most the first `count` elements.
    ///
    /// Once `count` elements have been delivered the upstream sequence is not
    /// pulled again, so `take` bounds unbounded sequences.
    pub fn take(self, count: usize) -> Sequence<T> {
        let mut state = Take {
            upstream: self.into_next_fn(),
            remaining: count,
        };
        Sequence::new(move || state.pull())
    }

    /// Discards the first `count` elements.
    ///
    /// On the first pull, `count` upstream values are pulled and ignored, even
    /// if the upstream sequence ends earlier.
    pub fn drop(self, count: usize) -> Sequence<T> {
        let mut state = DropFirst {
            upstream: self.into_next_fn(),
            pending: count,
        };
        Sequence::new(move || state.pull())
    }

    /// Yields every `stride`-th element, starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero. See [`try_step`](Self::try_step).
    ///
    /// ```rust
    /// # use ferrugo_seq::range;
    /// assert_eq!(range(0, 10).step(3).iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    /// ```
    pub fn step(self, stride: usize) -> Sequence<T> {
        match NonZeroUsize::new(stride) {
            Some(stride) => self.step_by_nonzero(stride),
            None => panic!("called `Sequence::step` with a stride of zero"),
        }
    }

    /// Yields every `stride`-th element, starting with the first.
    ///
    /// Returns [`SequenceError::ZeroStep`] if `stride` is zero.
    ///
    /// ```rust
    /// # use ferrugo_seq::{SequenceError, range};
    /// assert!(range(0, 5).try_step(2).is_ok());
    /// assert_eq!(range(0, 5).try_step(0).unwrap_err(), SequenceError::ZeroStep);
    /// ```
    pub fn try_step(self, stride: usize) -> Result<Sequence<T>, SequenceError> {
        match NonZeroUsize::new(stride) {
            Some(stride) => Ok(self.step_by_nonzero(stride)),
            None => {
                log::debug!("rejected a zero stride for `Sequence::try_step`");
                Err(SequenceError::ZeroStep)
            }
        }
    }

    fn step_by_nonzero(self, stride: NonZeroUsize) -> Sequence<T> {
        let mut state = Step {
            upstream: self.into_next_fn(),
            stride,
            index: 0,
        };
        Sequence::new(move || state.pull())
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use crate::source::{empty, iota, range};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(limit: u32, pulls: &Rc<Cell<u32>>) -> Sequence<u32> {
        let pulls = Rc::clone(pulls);
        let mut next = 0;
        Sequence::new(move || {
            pulls.set(pulls.get() + 1);
            let value = (next < limit).then_some(next);
            next += 1;
            value
        })
    }

    #[test]
    fn test_take_bounds_unbounded_upstream() {
        assert_eq!(iota(0).take(4).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(range(0, 2).take(5).iter().count(), 2);
        assert_eq!(iota(0).take(0).iter().count(), 0);
    }

    #[test]
    fn test_take_does_not_over_pull() {
        let pulls = Rc::new(Cell::new(0));
        let taken = counting(100, &pulls).take(3);
        let mut it = taken.into_iter();
        assert_eq!(it.by_ref().count(), 3);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_drop() {
        assert_eq!(range(0, 6).drop(4).iter().collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(range(0, 3).drop(10).iter().count(), 0);
        assert_eq!(empty::<i32>().drop(2).iter().count(), 0);
        assert_eq!(range(0, 3).drop(0).iter().count(), 3);
    }

    #[test]
    fn test_drop_pulls_past_the_end() {
        let pulls = Rc::new(Cell::new(0));
        let dropped = counting(2, &pulls).drop(5);
        assert_eq!(dropped.iter().next(), None);
        assert_eq!(pulls.get(), 6);
    }

    #[test]
    fn test_step() {
        assert_eq!(range(0, 7).step(2).iter().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
        assert_eq!(range(0, 3).step(1).iter().count(), 3);
        assert_eq!(range(0, 3).step(10).iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(empty::<u8>().step(3).iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "stride of zero")]
    fn test_step_zero_panics() {
        let _ = range(0, 3).step(0);
    }

    #[test]
    fn test_take_yields_min_of_count_and_len() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let len: i32 = rng.random_range(0..50);
            let n: usize = rng.random_range(0..60);
            let taken = range(0, len).take(n).iter().count();
            assert_eq!(taken, n.min(len as usize));
        }
    }

    #[test]
    fn test_drop_then_take() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let total: i64 = rng.random_range(1..40);
            let n = rng.random_range(0..total);
            let k: usize = rng.random_range(0..50);
            let out: Vec<i64> = range(0, total).drop(n as usize).take(k).iter().collect();
            let expected = k.min((total - n).max(0) as usize);
            assert_eq!(out.len(), expected);
            if let Some(first) = out.first() {
                assert_eq!(*first, n);
            }
            assert!(out.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }
}
