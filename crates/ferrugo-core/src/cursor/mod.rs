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

//! # Cursors
//!
//! A [`Cursor`] is the minimal backing implementation of an iterator position.
//! It must be able to produce the current element and may provide any subset of
//! the remaining primitives (`inc`, `dec`, `advance`, `is_equal`, `is_less`,
//! `distance_to`). It reports the subset it overrides through
//! [`Cursor::CAPABILITIES`].
//!
//! [`Iter`](iter::Iter) wraps a cursor and synthesizes the full iterator contract
//! from whatever the cursor provides, rejecting at compile time any operation the
//! capability set cannot support.
//!
//! ## Submodules
//!
//! - `capability`: the capability vocabulary and category inference.
//! - `derived`: operations synthesized from the primitives, honouring precedence
//!   (a primitive the cursor implements directly always wins over a derived one).
//! - `iter`: the generic iterator wrapper.
//!
//! ## Implementing a cursor
//!
//! ```rust
//! use ferrugo_core::cursor::{Cursor, capability::{Capabilities, Category}, iter::Iter};
//!
//! #[derive(Clone)]
//! struct Countdown(u32);
//!
//! impl Cursor for Countdown {
//!     type Item = u32;
//!     const CAPABILITIES: Capabilities = Capabilities::FORWARD;
//!
//!     fn get(&self) -> u32 { self.0 }
//!     fn inc(&mut self) { self.0 -= 1; }
//!     fn is_equal(&self, other: &Self) -> bool { self.0 == other.0 }
//! }
//!
//! assert_eq!(Countdown::CATEGORY, Category::Forward);
//! let mut it = Iter::new(Countdown(3));
//! it.inc();
//! assert_eq!(it.get(), 2);
//! ```

pub mod capability;
pub mod derived;
pub mod iter;

use capability::{Capabilities, Category};

/// The backing implementation of an iterator position.
///
/// Only [`get`](Cursor::get) is mandatory. Every other primitive has a default
/// body that panics; a cursor overrides exactly the primitives it lists in
/// [`CAPABILITIES`](Cursor::CAPABILITIES). The wrappers in this crate consult the
/// capability set at compile time and never call a primitive that is not listed.
///
/// # Implementer obligation
///
/// The capability set is declared, not detected. Listing a primitive without
/// overriding it still compiles, and the first call through a wrapper panics
/// with a message naming the cursor and the primitive. Keep `CAPABILITIES` and
/// the overridden methods in sync; a unit test that calls every listed
/// primitive once catches a mismatch.
pub trait Cursor: Clone {
    /// The value produced by dereferencing the cursor.
    type Item;

    /// The primitives this cursor overrides. Must contain `DEREF`.
    const CAPABILITIES: Capabilities;

    /// The iterator category, inferred from [`CAPABILITIES`](Cursor::CAPABILITIES).
    const CATEGORY: Category = Category::infer(Self::CAPABILITIES);

    /// Returns the element at the current position.
    ///
    /// Calling this on an end position is a caller error.
    fn get(&self) -> Self::Item;

    /// Moves one position forward.
    fn inc(&mut self) {
        unsupported::<Self>("inc")
    }

    /// Moves one position backward.
    fn dec(&mut self) {
        unsupported::<Self>("dec")
    }

    /// Moves by `offset` positions.
    fn advance(&mut self, offset: isize) {
        let _ = offset;
        unsupported::<Self>("advance")
    }

    /// Returns `true` if both cursors denote the same position.
    fn is_equal(&self, other: &Self) -> bool {
        let _ = other;
        unsupported::<Self>("is_equal")
    }

    /// Returns `true` if `self` precedes `other`.
    fn is_less(&self, other: &Self) -> bool {
        let _ = other;
        unsupported::<Self>("is_less")
    }

    /// Returns the number of forward steps from `self` to `other` (negative if
    /// `other` precedes `self`).
    fn distance_to(&self, other: &Self) -> isize {
        let _ = other;
        unsupported::<Self>("distance_to")
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unsupported<C: ?Sized>(primitive: &str) -> ! {
    panic!(
        "cursor `{}` does not implement `{}` but a caller invoked it; \
         its CAPABILITIES constant does not match its implementation",
        std::any::type_name::<C>(),
        primitive
    )
}

/// Calls every primitive `C` lists once, starting from `cursor`.
///
/// `cursor` must have at least one element after it. Panics through the default
/// bodies if a listed primitive is not overridden.
#[cfg(test)]
pub(crate) fn exercise_listed_primitives<C: Cursor>(cursor: &C) {
    let caps = C::CAPABILITIES;
    let start = cursor.clone();
    let _ = start.get();
    let mut moved = start.clone();
    if caps.contains(Capabilities::INC) {
        moved.inc();
    }
    if caps.contains(Capabilities::ADVANCE) {
        moved = start.clone();
        moved.advance(1);
        moved.advance(-1);
        moved.advance(1);
    }
    if caps.contains(Capabilities::DEC) && caps.can_step_forward() {
        let mut back = moved.clone();
        back.dec();
    }
    if caps.contains(Capabilities::EQ) {
        assert!(start.is_equal(&start));
    }
    if caps.contains(Capabilities::LT) {
        assert!(!start.is_less(&start));
    }
    if caps.contains(Capabilities::DISTANCE_TO) {
        assert_eq!(start.distance_to(&start), 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct DerefOnly;

    impl Cursor for DerefOnly {
        type Item = u8;
        const CAPABILITIES: Capabilities = Capabilities::DEREF;

        fn get(&self) -> u8 {
            7
        }
    }

    #[test]
    fn test_default_category_is_inferred() {
        assert_eq!(DerefOnly::CATEGORY, Category::Forward);
        assert_eq!(DerefOnly.get(), 7);
    }

    #[derive(Clone)]
    struct ListsButMissesAdvance(u8);

    impl Cursor for ListsButMissesAdvance {
        type Item = u8;
        const CAPABILITIES: Capabilities = Capabilities::FORWARD.union(Capabilities::ADVANCE);

        fn get(&self) -> u8 {
            self.0
        }
        fn inc(&mut self) {
            self.0 += 1;
        }
        fn is_equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    #[should_panic(expected = "does not implement `advance`")]
    fn test_listed_but_missing_primitive_is_caught() {
        exercise_listed_primitives(&ListsButMissesAdvance(0));
    }

    #[test]
    #[should_panic(expected = "does not implement `inc`")]
    fn test_unlisted_primitive_panics() {
        let mut cursor = DerefOnly;
        cursor.inc();
    }
}
