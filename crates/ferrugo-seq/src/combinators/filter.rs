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
use std::rc::Rc;

struct Filter<T, P> {
    upstream: Box<dyn NextFn<T>>,
    pred: Rc<P>,
}

impl<T, P> Clone for Filter<T, P> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            pred: Rc::clone(&self.pred),
        }
    }
}

impl<T, P: Fn(&T) -> bool> Filter<T, P> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        loop {
            let value = self.upstream.pull()?;
            if (self.pred)(&value) {
                return Some(value);
            }
        }
    }
}

impl<T: 'static> Sequence<T> {
    /// Keeps the elements for which `pred` returns `true`.
    pub fn filter<P>(self, pred: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let mut state = Filter {
            upstream: self.into_next_fn(),
            pred: Rc::new(pred),
        };
        Sequence::new(move || state.pull())
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{empty, iota, range};

    #[test]
    fn test_filter() {
        let seq = range(0, 10).filter(|x| x % 3 == 0);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_filter_edge_cases() {
        assert_eq!(empty::<u8>().filter(|_| true).iter().count(), 0);
        assert_eq!(range(0, 100).filter(|_| false).iter().count(), 0);
        let sparse = iota(1u64).filter(|x| x % 1000 == 0);
        assert_eq!(sparse.iter().take(2).collect::<Vec<_>>(), vec![1000, 2000]);
    }
}
