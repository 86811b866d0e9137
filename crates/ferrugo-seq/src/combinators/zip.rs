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

macro_rules! zip_transform_arity {
    ($state:ident, $zip_transform:ident, $zip:ident, $($input:ident: $ty:ident),+) => {
        struct $state<$($ty,)+ F> {
            $($input: Box<dyn NextFn<$ty>>,)+
            func: Rc<F>,
        }

        impl<$($ty,)+ F> Clone for $state<$($ty,)+ F> {
            fn clone(&self) -> Self {
                Self {
                    $($input: self.$input.clone(),)+
                    func: Rc::clone(&self.func),
                }
            }
        }

        impl<$($ty,)+ Out, F> $state<$($ty,)+ F>
        where
            F: Fn($($ty),+) -> Out,
        {
            /// Pulls from every input, even when an earlier input has ended.
            #[inline]
            fn pull(&mut self) -> Option<Out> {
                $(let $input = self.$input.pull();)+
                Some((self.func)($($input?),+))
            }
        }

        /// Combines the elements of the input sequences position by position
        /// through `func`. The result ends with the shortest input.
        pub fn $zip_transform<$($ty,)+ Out, F>(func: F, $($input: Sequence<$ty>),+) -> Sequence<Out>
        where
            $($ty: 'static,)+
            Out: 'static,
            F: Fn($($ty),+) -> Out + 'static,
        {
            let mut state = $state {
                $($input: $input.into_next_fn(),)+
                func: Rc::new(func),
            };
            Sequence::new(move || state.pull())
        }

        /// Pairs up the elements of the input sequences. The result ends with
        /// the shortest input.
        pub fn $zip<$($ty: 'static),+>($($input: Sequence<$ty>),+) -> Sequence<($($ty,)+)> {
            $zip_transform(|$($input),+| ($($input,)+), $($input),+)
        }
    };
}

zip_transform_arity!(ZipTransform2, zip_transform, zip, a: A, b: B);
zip_transform_arity!(ZipTransform3, zip_transform3, zip3, a: A, b: B, c: C);
zip_transform_arity!(ZipTransform4, zip_transform4, zip4, a: A, b: B, c: C, d: D);

impl<T: 'static> Sequence<T> {
    /// Pairs up the elements of `self` and `other`, ending with the shorter.
    ///
    /// ```rust
    /// # use ferrugo_seq::{from_iter, range};
    /// let pairs = range(0, 5).zip(from_iter(["a", "b", "c"]));
    /// assert_eq!(pairs.iter().collect::<Vec<_>>(), vec![(0, "a"), (1, "b"), (2, "c")]);
    /// ```
    pub fn zip<U: 'static>(self, other: Sequence<U>) -> Sequence<(T, U)> {
        zip(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, iota, range, repeat};
    use std::cell::Cell;

    #[test]
    fn test_zip_shortest_wins() {
        let pairs = zip(range(0, 5), range(100, 103));
        assert_eq!(pairs.iter().count(), 3);
        assert_eq!(
            pairs.iter().collect::<Vec<_>>(),
            vec![(0, 100), (1, 101), (2, 102)]
        );
        assert_eq!(zip(empty::<i32>(), iota(0)).iter().count(), 0);
    }

    #[test]
    fn test_zip_transform_arities() {
        let sums = zip_transform(|a, b| a + b, range(0, 4), iota(10));
        assert_eq!(sums.iter().collect::<Vec<_>>(), vec![10, 12, 14, 16]);

        let triples = zip3(range(0, 2), repeat('x'), iota(5u8));
        assert_eq!(
            triples.iter().collect::<Vec<_>>(),
            vec![(0, 'x', 5), (1, 'x', 6)]
        );

        let joined = zip_transform3(
            |a: i32, b: i32, c: i32| a * b * c,
            range(1, 4),
            range(1, 4),
            range(1, 3),
        );
        assert_eq!(joined.iter().collect::<Vec<_>>(), vec![1, 8]);

        let quads = zip4(range(0, 3), range(1, 9), range(2, 9), range(3, 9));
        assert_eq!(quads.iter().last(), Some((2, 3, 4, 5)));

        let folded = zip_transform4(|a, b, c, d| [a, b, c, d], iota(0), iota(1), iota(2), range(3, 4));
        assert_eq!(folded.iter().collect::<Vec<_>>(), vec![[0, 1, 2, 3]]);
    }

    #[test]
    fn test_zip_pulls_every_input_each_step() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let long = iota(0).transform(move |x| {
            counter.set(counter.get() + 1);
            x
        });
        let pairs = zip(empty::<i32>(), long);
        assert_eq!(pairs.iter().count(), 0);
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_zip_method() {
        let pairs = range(0, 2).zip(range(5, 10));
        assert_eq!(pairs.iter().collect::<Vec<_>>(), vec![(0, 5), (1, 6)]);
    }
}
