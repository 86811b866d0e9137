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

//! # Sequence Combinators
//!
//! Every combinator consumes a sequence and returns a new one whose next
//! function wraps the upstream next function together with some private state.
//! Nothing is evaluated until the result is pulled, and no combinator buffers
//! more than one pending element, except [`join`](crate::Sequence::join), which
//! holds one live inner sequence.
//!
//! The combinators are inherent methods of [`Sequence`](crate::Sequence); the
//! multi-input ones are also free functions. To compose them into reusable
//! pipelines use the constructors in [`stage`](crate::stage).
//!
//! ```rust
//! # use ferrugo_seq::range;
//! let out = range(0, 10)
//!     .filter(|x| x % 3 == 0)
//!     .transform(|x| x * 10);
//! assert_eq!(out.iter().collect::<Vec<_>>(), vec![0, 30, 60, 90]);
//! ```

mod chain;
mod enumerate;
mod filter;
mod join;
mod predicate;
mod slice;
mod transform;
mod zip;

pub use zip::{zip, zip_transform, zip_transform3, zip_transform4, zip3, zip4};
