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

struct Join<T> {
    outer: Box<dyn NextFn<Sequence<T>>>,
    inner: Option<Box<dyn NextFn<T>>>,
}

impl<T> Clone for Join<T> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> Join<T> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(value) = inner.pull() {
                    return Some(value);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.pull()?.into_next_fn());
        }
    }
}

impl<T: 'static> Sequence<Sequence<T>> {
    /// Flattens a sequence of sequences.
    ///
    /// Each inner sequence is drained before the next one is pulled from the
    /// outer sequence. Empty inner sequences contribute nothing.
    ///
    /// ```rust
    /// # use ferrugo_seq::{Sequence, empty, from_iter, range};
    /// let nested = from_iter(vec![range(0, 3), empty(), range(1000, 1002)]);
    /// assert_eq!(nested.join().iter().collect::<Vec<_>>(), vec![0, 1, 2, 1000, 1001]);
    /// ```
    pub fn join(self) -> Sequence<T> {
        let mut state = Join {
            outer: self.into_next_fn(),
            inner: None,
        };
        Sequence::new(move || state.pull())
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use crate::source::{empty, from_iter, once, range, repeat};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_join_skips_empty_inner_sequences() {
        let nested = from_iter(vec![
            empty(),
            range(0, 3),
            empty(),
            empty(),
            range(1000, 1002),
            empty(),
        ]);
        assert_eq!(
            nested.join().iter().collect::<Vec<_>>(),
            vec![0, 1, 2, 1000, 1001]
        );
    }

    #[test]
    fn test_join_of_empty_outer() {
        let nested: Sequence<Sequence<i32>> = empty();
        assert_eq!(nested.join().iter().count(), 0);
    }

    #[test]
    fn test_join_pulls_outer_lazily() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let outer = repeat(()).transform(move |_| {
            counter.set(counter.get() + 1);
            once(counter.get())
        });
        let first: Vec<_> = outer.join().iter().take(3).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(pulls.get(), 3);
    }
}
