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

struct TakeWhile<T, P> {
    upstream: Box<dyn NextFn<T>>,
    pred: Rc<P>,
    done: bool,
}

impl<T, P> Clone for TakeWhile<T, P> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            pred: Rc::clone(&self.pred),
            done: self.done,
        }
    }
}

impl<T, P: Fn(&T) -> bool> TakeWhile<T, P> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match self.upstream.pull() {
            Some(value) if (self.pred)(&value) => Some(value),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

struct DropWhile<T, P> {
    upstream: Box<dyn NextFn<T>>,
    pred: Rc<P>,
    dropping: bool,
}

impl<T, P> Clone for DropWhile<T, P> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            pred: Rc::clone(&self.pred),
            dropping: self.dropping,
        }
    }
}

impl<T, P: Fn(&T) -> bool> DropWhile<T, P> {
    #[inline]
    fn pull(&mut self) -> Option<T> {
        while self.dropping {
            let value = self.upstream.pull()?;
            if !(self.pred)(&value) {
                self.dropping = false;
                return Some(value);
            }
        }
        self.upstream.pull()
    }
}

impl<T: 'static> Sequence<T> {
    /// Yields elements while `pred` holds.
    ///
    /// The first rejected element is consumed and discarded, and the sequence
    /// ends there; later elements are never pulled, even if `pred` would
    /// accept them.
    ///
    /// ```rust
    /// # use ferrugo_seq::iota;
    /// let small = iota(0).take_while(|x| x * x < 20);
    /// assert_eq!(small.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn take_while<P>(self, pred: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let mut state = TakeWhile {
            upstream: self.into_next_fn(),
            pred: Rc::new(pred),
            done: false,
        };
        Sequence::new(move || state.pull())
    }

    /// Discards elements while `pred` holds, then passes everything through.
    ///
    /// The first rejected element is yielded. After it, `pred` is never called
    /// again.
    ///
    /// ```rust
    /// # use ferrugo_seq::from_iter;
    /// let rest = from_iter([1, 2, 5, 1, 7]).drop_while(|x| *x < 3);
    /// assert_eq!(rest.iter().collect::<Vec<_>>(), vec![5, 1, 7]);
    /// ```
    pub fn drop_while<P>(self, pred: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let mut state = DropWhile {
            upstream: self.into_next_fn(),
            pred: Rc::new(pred),
            dropping: true,
        };
        Sequence::new(move || state.pull())
    }
}
