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

//! # Pipeline Stages
//!
//! Constructors that turn each sequence combinator into a single-stage
//! [`Pipeline`], so combinators can be composed with [`pipe!`] before a source
//! is known and applied later with `|` or [`Apply`](ferrugo_core::pipeline::Apply).
//!
//! ```rust
//! # use ferrugo_core::pipe;
//! # use ferrugo_seq::{range, stage};
//! let pipeline = pipe!(
//!     stage::filter(|x: &i32| x % 3 == 0),
//!     stage::transform(|x: i32| x * 10),
//! );
//! let out = range(0, 10) | &pipeline;
//! assert_eq!(out.iter().collect::<Vec<_>>(), vec![0, 30, 60, 90]);
//! ```
//!
//! A stage may be called many times; the callable it wraps is shared between
//! the sequences it builds.

use crate::error::SequenceError;
use crate::sequence::Sequence;
use ferrugo_core::pipeline::Pipeline;
use std::rc::Rc;

/// Stage form of [`Sequence::transform`].
pub fn transform<T, U, F>(func: F) -> Pipeline<Sequence<T>, Sequence<U>>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let func = Rc::new(func);
    Pipeline::new(move |seq: Sequence<T>| {
        let func = Rc::clone(&func);
        seq.transform(move |value| func(value))
    })
}

/// Stage form of [`Sequence::transform_maybe`].
pub fn transform_maybe<T, U, F>(func: F) -> Pipeline<Sequence<T>, Sequence<U>>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Option<U> + 'static,
{
    let func = Rc::new(func);
    Pipeline::new(move |seq: Sequence<T>| {
        let func = Rc::clone(&func);
        seq.transform_maybe(move |value| func(value))
    })
}

/// Stage form of [`Sequence::filter`].
pub fn filter<T, P>(pred: P) -> Pipeline<Sequence<T>, Sequence<T>>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let pred = Rc::new(pred);
    Pipeline::new(move |seq: Sequence<T>| {
        let pred = Rc::clone(&pred);
        seq.filter(move |value| pred(value))
    })
}

/// Stage form of [`Sequence::take`].
pub fn take<T: 'static>(count: usize) -> Pipeline<Sequence<T>, Sequence<T>> {
    Pipeline::new(move |seq: Sequence<T>| seq.take(count))
}

/// Stage form of [`Sequence::drop`].
pub fn drop<T: 'static>(count: usize) -> Pipeline<Sequence<T>, Sequence<T>> {
    Pipeline::new(move |seq: Sequence<T>| seq.drop(count))
}

/// Stage form of [`Sequence::step`].
///
/// # Panics
///
/// Panics if `stride` is zero, when the stage is built rather than when it
/// is applied.
pub fn step<T: 'static>(stride: usize) -> Pipeline<Sequence<T>, Sequence<T>> {
    assert!(stride > 0, "called `stage::step` with a stride of zero");
    Pipeline::new(move |seq: Sequence<T>| seq.step(stride))
}

/// Stage form of [`Sequence::try_step`].
pub fn try_step<T: 'static>(stride: usize) -> Result<Pipeline<Sequence<T>, Sequence<T>>, SequenceError> {
    if stride == 0 {
        log::debug!("rejected a zero stride for `stage::try_step`");
        return Err(SequenceError::ZeroStep);
    }
    Ok(step(stride))
}

/// Stage form of [`Sequence::take_while`].
pub fn take_while<T, P>(pred: P) -> Pipeline<Sequence<T>, Sequence<T>>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let pred = Rc::new(pred);
    Pipeline::new(move |seq: Sequence<T>| {
        let pred = Rc::clone(&pred);
        seq.take_while(move |value| pred(value))
    })
}

/// Stage form of [`Sequence::drop_while`].
pub fn drop_while<T, P>(pred: P) -> Pipeline<Sequence<T>, Sequence<T>>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let pred = Rc::new(pred);
    Pipeline::new(move |seq: Sequence<T>| {
        let pred = Rc::clone(&pred);
        seq.drop_while(move |value| pred(value))
    })
}

/// Stage form of [`Sequence::enumerate`].
pub fn enumerate<T: 'static>(start: usize) -> Pipeline<Sequence<T>, Sequence<(usize, T)>> {
    Pipeline::new(move |seq: Sequence<T>| seq.enumerate(start))
}

/// Stage appending `tail` after the input, as [`Sequence::chain`].
pub fn chain<T: 'static>(tail: Sequence<T>) -> Pipeline<Sequence<T>, Sequence<T>> {
    Pipeline::new(move |seq: Sequence<T>| seq.chain(tail.clone()))
}

/// Stage pairing the input with `other`, as [`Sequence::zip`].
pub fn zip<T: 'static, U: 'static>(other: Sequence<U>) -> Pipeline<Sequence<T>, Sequence<(T, U)>> {
    Pipeline::new(move |seq: Sequence<T>| seq.zip(other.clone()))
}

/// Stage form of [`Sequence::join`].
pub fn join<T: 'static>() -> Pipeline<Sequence<Sequence<T>>, Sequence<T>> {
    Pipeline::new(|seq: Sequence<Sequence<T>>| seq.join())
}

/// Stage form of [`Sequence::transform_join`].
pub fn transform_join<T, U, F>(func: F) -> Pipeline<Sequence<T>, Sequence<U>>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Sequence<U> + 'static,
{
    transform(func).then(join())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from_iter, iota, range};
    use ferrugo_core::pipe;
    use ferrugo_core::pipeline::Apply;

    fn collect<T: 'static>(seq: Sequence<T>) -> Vec<T> {
        seq.into_iter().collect()
    }

    #[test]
    fn test_filter_then_transform() {
        let out = range(0, 10) | pipe!(filter(|x: &i32| x % 3 == 0), transform(|x: i32| x * 10));
        assert_eq!(collect(out), vec![0, 30, 60, 90]);
    }

    #[test]
    fn test_drop_while_then_take_while() {
        let p = pipe!(drop_while(|x: &i32| *x < 3), take_while(|x: &i32| *x < 8));
        assert_eq!(collect(range(0, 10).apply(&p)), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_enumerate_stage() {
        let out = range(10, 15) | enumerate(0);
        assert_eq!(
            collect(out),
            vec![(0, 10), (1, 11), (2, 12), (3, 13), (4, 14)]
        );
    }

    #[test]
    fn test_stage_reuse_restarts_state() {
        let p = pipe!(drop(2), take(2), step(1));
        assert_eq!(p.len(), 3);
        assert_eq!(collect(iota(0) | &p), vec![2, 3]);
        assert_eq!(collect(iota(100) | &p), vec![102, 103]);
    }

    #[test]
    fn test_flattened_and_nested_pipelines_agree() {
        let nested = pipe!(pipe!(filter(|x: &u32| x % 2 == 1), transform(|x: u32| x * x)), take(3));
        let flat = pipe!(filter(|x: &u32| x % 2 == 1), transform(|x: u32| x * x), take(3));
        assert_eq!(nested.len(), flat.len());
        assert_eq!(collect(iota(0) | &nested), collect(iota(0) | &flat));
        assert_eq!(collect(iota(0) | &flat), vec![1, 9, 25]);
    }

    #[test]
    fn test_join_and_transform_join() {
        let nested = from_iter(vec![range(0, 3), empty(), range(1000, 1002)]);
        assert_eq!(collect(nested | join()), vec![0, 1, 2, 1000, 1001]);

        let expanded = range(1, 4) | transform_join(|n: i32| range(0, n));
        assert_eq!(collect(expanded), vec![0, 0, 1, 0, 1, 2]);
        assert_eq!(transform_join(|n: i32| range(0, n)).len(), 2);
    }

    #[test]
    fn test_chain_zip_and_maybe() {
        let p = pipe!(
            chain(range(90, 92)),
            transform_maybe(|x: i32| (x != 1).then_some(x)),
            zip(iota(0u8)),
        );
        assert_eq!(collect(range(0, 3) | &p), vec![(0, 0), (2, 1), (90, 2), (91, 3)]);
    }

    #[test]
    fn test_try_step() {
        assert_eq!(try_step::<i32>(0).unwrap_err(), SequenceError::ZeroStep);
        let p = try_step::<i32>(2).unwrap();
        assert_eq!(collect(range(0, 5) | p), vec![0, 2, 4]);
    }
}
