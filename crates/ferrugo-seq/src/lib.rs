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

//! # Ferrugo Sequences
//!
//! Lazy, pull-based sequences and the combinators that transform them.
//!
//! A [`Sequence<T>`] wraps a *next function*, a closure producing the next
//! value or `None`. Combinators such as [`transform`](Sequence::transform),
//! [`filter`](Sequence::filter) or [`join`](Sequence::join) wrap that closure in
//! a new one without evaluating anything. Values are computed one at a time
//! when the final sequence is iterated.
//!
//! ## Highlights
//!
//! - Sources: [`iota`], [`range`], [`repeat`], [`from_iter`], [`from_range`] and more.
//! - Combinators as methods on [`Sequence`], plus the multi-input [`zip`],
//!   [`zip_transform`] and their 3 and 4 input variants.
//! - [`stage`]: each combinator as a [`Pipeline`](ferrugo_core::pipeline::Pipeline)
//!   stage, composable with [`pipe!`](ferrugo_core::pipe).
//! - Every sequence is a std `IntoIterator` and a forward
//!   [`Range`](ferrugo_core::range::Range).
//!
//! ## Usage
//!
//! ```rust
//! # use ferrugo_core::display::delimited;
//! # use ferrugo_core::pipe;
//! # use ferrugo_seq::{range, stage};
//! let evens_squared = pipe!(
//!     stage::filter(|x: &u64| x % 2 == 0),
//!     stage::transform(|x: u64| x * x),
//!     stage::take(4),
//! );
//! let seq = range(0, 100) | &evens_squared;
//! assert_eq!(delimited(&seq).to_string(), "[0, 4, 16, 36]");
//! ```

pub mod combinators;
pub mod error;
pub mod sequence;
pub mod source;
pub mod stage;

pub use combinators::{zip, zip_transform, zip_transform3, zip_transform4, zip3, zip4};
pub use error::SequenceError;
pub use sequence::{NextFn, SeqCursor, SeqIter, Sequence};
pub use source::{empty, from_iter, from_range, iota, once, range, range_to, repeat, repeat_n};
