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

struct Transform<T, F> {
    upstream: Box<dyn NextFn<T>>,
    func: Rc<F>,
}

impl<T, F> Clone for Transform<T, F> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            func: Rc::clone(&self.func),
        }
    }
}

impl<T, U, F: Fn(T) -> U> Transform<T, F> {
    #[inline]
    fn pull(&mut self) -> Option<U> {
        let value = self.upstream.pull()?;
        Some((self.func)(value))
    }
}

struct TransformMaybe<T, F> {
    upstream: Box<dyn NextFn<T>>,
    func: Rc<F>,
}

impl<T, F> Clone for TransformMaybe<T, F> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            func: Rc::clone(&self.func),
        }
    }
}

impl<T, U, F: Fn(T) -> Option<U>> TransformMaybe<T, F> {
    #[inline]
    fn pull(&mut self) -> Option<U> {
        loop {
            let value = self.upstream.pull()?;
            if let Some(mapped) = (self.func)(value) {
                return Some(mapped);
            }
        }
    }
}

impl<T: 'static> Sequence<T> {
    /// Maps every element through `func`.
    pub fn transform<U, F>(self, func: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let mut state = Transform {
            upstream: self.into_next_fn(),
            func: Rc::new(func),
        };
        Sequence::new(move || state.pull())
    }

    /// Maps every element through `func`, skipping elements for which it
    /// returns `None`.
    ///
    /// ```rust
    /// # use ferrugo_seq::from_iter;
    /// let parsed = from_iter(["1", "x", "3"]).transform_maybe(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed.iter().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn transform_maybe<U, F>(self, func: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        let mut state = TransformMaybe {
            upstream: self.into_next_fn(),
            func: Rc::new(func),
        };
        Sequence::new(move || state.pull())
    }

    /// Maps every element to a sequence and flattens the results.
    ///
    /// ```rust
    /// # use ferrugo_seq::{range, range_to};
    /// let triangle = range(1, 4).transform_join(range_to);
    /// assert_eq!(triangle.iter().collect::<Vec<_>>(), vec![0, 0, 1, 0, 1, 2]);
    /// ```
    pub fn transform_join<U, F>(self, func: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> Sequence<U> + 'static,
    {
        self.transform(func).join()
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use crate::source::{empty, iota, range};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_transform() {
        let seq = range(1, 4).transform(|x| x.to_string());
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(empty::<i32>().transform(|x| x + 1).iter().count(), 0);
    }

    #[test]
    fn test_transform_calls_func_once_per_element() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let seq = range(0, 5).transform(move |x| {
            counter.set(counter.get() + 1);
            x
        });
        assert_eq!(seq.iter().count(), 5);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_transform_maybe_fuses_filter_and_map() {
        let halves = range(0, 10).transform_maybe(|x| (x % 2 == 0).then(|| x / 2));
        assert_eq!(halves.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        let none: Sequence<i32> = range(0, 10).transform_maybe(|_| None);
        assert_eq!(none.iter().count(), 0);
    }

    #[test]
    fn test_transform_join_on_unbounded_outer() {
        let pairs = iota(0u32).transform_join(|x| range(0, 2).transform(move |y| (x, y)));
        assert_eq!(
            pairs.iter().take(5).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]
        );
    }
}
