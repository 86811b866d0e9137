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

//! # Ferrugo Core
//!
//! Generic iteration foundations: capability-based cursors, ranges derived from
//! iterator pairs, ownership-aware range adaptation, type-erased iterables, lazy
//! range views and left-to-right pipeline composition.
//!
//! ## Modules
//!
//! - `cursor`: the [`Cursor`](cursor::Cursor) trait, capability detection and
//!   the generic [`Iter`](cursor::iter::Iter) wrapper.
//! - `range`: the [`Range`](range::Range) trait, adaptation, erasure and views.
//! - `pipeline`: [`Pipeline`](pipeline::Pipeline) and the [`pipe!`] macro.
//! - `display`: delimited printing of ranges.
//!
//! Everything is single-threaded. Shared ownership uses `Rc`, so owning ranges,
//! erased iterables and pipelines are neither `Send` nor `Sync`.

pub mod cursor;
pub mod display;
pub mod pipeline;
pub mod range;
