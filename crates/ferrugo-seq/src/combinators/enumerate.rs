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

struct Enumerate<T> {
    upstream: Box<dyn NextFn<T>>,
    index: usize,
}

impl<T> Clone for Enumerate<T> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            index: self.index,
        }
    }
}

impl<T> Enumerate<T> {
    #[inline]
    fn pull(&mut self) -> Option<(usize, T)> {
        let value = self.upstream.pull()?;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }
}

impl<T: 'static> Sequence<T> {
    /// Pairs every element with a running index beginning at `start`.
    ///
    /// ```rust
    /// # use ferrugo_seq::range;
    /// let indexed = range(10, 15).enumerate(0);
    /// assert_eq!(
    ///     indexed.iter().collect::<Vec<_>>(),
    ///     vec![(0, 10), (1, 11), (2, 12), (3, 13), (4, 14)]
    /// );
    /// ```
    pub fn enumerate(self, start: usize) -> Sequence<(usize, T)> {
        let mut state = Enumerate {
            upstream: self.into_next_fn(),
            index: start,
        };
        Sequence::new(move || state.pull())
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{empty, repeat};

    #[test]
    fn test_enumerate_from_offset() {
        let seq = repeat('z').enumerate(7).take(2);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(7, 'z'), (8, 'z')]);
        assert_eq!(empty::<()>().enumerate(0).iter().count(), 0);
    }

    #[test]
    fn test_enumerate_restarts_per_iteration() {
        let seq = repeat(()).enumerate(0).take(3);
        let first: Vec<_> = seq.iter().map(|(i, _)| i).collect();
        let second: Vec<_> = seq.iter().map(|(i, _)| i).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(first, second);
    }
}
