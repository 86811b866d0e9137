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

use crate::sequence::{NextFn, Sequence};

struct Chain<T> {
    first: Box<dyn NextFn<T>>,
    second: Box<dyn NextFn<T>>,
    first_done: bool,
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            first_done: self.first_done,
        }
    }
}

impl<T> Chain<T> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        if !self.first_done {
            match self.first.pull() {
                Some(value) => return Some(value),
                None => self.first_done = true,
            }
        }
        self.second.pull()
    }
}

impl<T: 'static> Sequence<T> {
    /// Yields every element of `self`, then every element of `other`.
    ///
    /// Once `self` is exhausted it is not pulled again.
    pub fn chain(self, other: Sequence<T>) -> Sequence<T> {
        let mut state = Chain {
            first: self.into_next_fn(),
            second: other.into_next_fn(),
            first_done: false,
        };
        Sequence::new(move || state.pull())
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use crate::source::{empty, from_iter, range};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_chain_order() {
        let seq = range(0, 3).chain(range(10, 12));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![0, 1, 2, 10, 11]);
        assert_eq!(empty::<i32>().chain(empty()).iter().count(), 0);
        assert_eq!(empty().chain(range(0, 2)).iter().count(), 2);
    }

    #[test]
    fn test_chain_does_not_requery_exhausted_first() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let first = Sequence::new(move || {
            counter.set(counter.get() + 1);
            None::<i32>
        });
        let seq = first.chain(range(0, 3));
        assert_eq!(seq.iter().count(), 3);
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_chain_counts_add_up() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let a: Vec<u16> = (0..rng.random_range(0..20)).map(|_| rng.random()).collect();
            let b: Vec<u16> = (0..rng.random_range(0..20)).map(|_| rng.random()).collect();
            let chained: Vec<u16> = from_iter(a.clone()).chain(from_iter(b.clone())).iter().collect();
            assert_eq!(chained.len(), a.len() + b.len());
            assert_eq!(&chained[..a.len()], a.as_slice());
            assert_eq!(&chained[a.len()..], b.as_slice());
        }
    }
}
