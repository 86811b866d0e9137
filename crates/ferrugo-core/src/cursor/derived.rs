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

//! Operations synthesized from cursor primitives.
//!
//! Each function dispatches on `C::CAPABILITIES`, which is a constant, so the
//! branch folds away. When a cursor provides a primitive directly it is always
//! preferred over the derived form: `inc` over `advance(1)`, `is_equal` over
//! `distance_to(..) == 0`, `is_less` over `distance_to(..) > 0`.
//!
//! These functions do not check that the capability set can support the
//! operation; [`Iter`](crate::cursor::iter::Iter) performs those checks at
//! compile time before calling in here.

use crate::cursor::{Cursor, capability::Capabilities};

/// Moves `cursor` one position forward.
#[inline(always)]
pub fn inc<C: Cursor>(cursor: &mut C) {
    if C::CAPABILITIES.contains(Capabilities::INC) {
        cursor.inc();
    } else {
        cursor.advance(1);
    }
}

/// Moves `cursor` one position backward.
#[inline(always)]
pub fn dec<C: Cursor>(cursor: &mut C) {
    if C::CAPABILITIES.contains(Capabilities::DEC) {
        cursor.dec();
    } else {
        cursor.advance(-1);
    }
}

/// Moves `cursor` by `offset` positions.
///
/// Without `ADVANCE` the move is performed one step at a time.
#[inline]
pub fn advance<C: Cursor>(cursor: &mut C, offset: isize) {
    if C::CAPABILITIES.contains(Capabilities::ADVANCE) {
        cursor.advance(offset);
    } else if offset >= 0 {
        for _ in 0..offset {
            inc(cursor);
        }
    } else {
        for _ in 0..offset.unsigned_abs() {
            dec(cursor);
        }
    }
}

/// Compares two positions for equality.
#[inline(always)]
pub fn is_equal<C: Cursor>(lhs: &C, rhs: &C) -> bool {
    if C::CAPABILITIES.contains(Capabilities::EQ) {
        lhs.is_equal(rhs)
    } else {
        lhs.distance_to(rhs) == 0
    }
}

/// Returns `true` if `lhs` precedes `rhs`.
#[inline(always)]
pub fn is_less<C: Cursor>(lhs: &C, rhs: &C) -> bool {
    if C::CAPABILITIES.contains(Capabilities::LT) {
        lhs.is_less(rhs)
    } else {
        lhs.distance_to(rhs) > 0
    }
}

/// Returns the number of forward steps from `from` to `to`.
#[inline(always)]
pub fn distance<C: Cursor>(from: &C, to: &C) -> isize {
    from.distance_to(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts which primitive was used for every call.
    #[derive(Clone, Default)]
    struct Tally {
        inc: Rc<Cell<usize>>,
        dec: Rc<Cell<usize>>,
        advance: Rc<Cell<usize>>,
        eq: Rc<Cell<usize>>,
        lt: Rc<Cell<usize>>,
        distance: Rc<Cell<usize>>,
    }

    #[derive(Clone)]
    struct Full {
        pos: isize,
        tally: Tally,
    }

    impl Cursor for Full {
        type Item = isize;
        const CAPABILITIES: Capabilities = Capabilities::ALL;

        fn get(&self) -> isize {
            self.pos
        }
        fn inc(&mut self) {
            self.tally.inc.set(self.tally.inc.get() + 1);
            self.pos += 1;
        }
        fn dec(&mut self) {
            self.tally.dec.set(self.tally.dec.get() + 1);
            self.pos -= 1;
        }
        fn advance(&mut self, offset: isize) {
            self.tally.advance.set(self.tally.advance.get() + 1);
            self.pos += offset;
        }
        fn is_equal(&self, other: &Self) -> bool {
            self.tally.eq.set(self.tally.eq.get() + 1);
            self.pos == other.pos
        }
        fn is_less(&self, other: &Self) -> bool {
            self.tally.lt.set(self.tally.lt.get() + 1);
            self.pos < other.pos
        }
        fn distance_to(&self, other: &Self) -> isize {
            self.tally.distance.set(self.tally.distance.get() + 1);
            other.pos - self.pos
        }
    }

    #[derive(Clone)]
    struct AdvanceOnly(isize);

    impl Cursor for AdvanceOnly {
        type Item = isize;
        const CAPABILITIES: Capabilities = Capabilities::RANDOM_ACCESS;

        fn get(&self) -> isize {
            self.0
        }
        fn advance(&mut self, offset: isize) {
            self.0 += offset;
        }
        fn distance_to(&self, other: &Self) -> isize {
            other.0 - self.0
        }
    }

    #[derive(Clone)]
    struct IncOnly(isize);

    impl Cursor for IncOnly {
        type Item = isize;
        const CAPABILITIES: Capabilities = Capabilities::FORWARD;

        fn get(&self) -> isize {
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
    fn test_direct_primitives_take_precedence() {
        let tally = Tally::default();
        let mut a = Full {
            pos: 0,
            tally: tally.clone(),
        };
        let b = Full {
            pos: 1,
            tally: tally.clone(),
        };

        inc(&mut a);
        assert_eq!(tally.inc.get(), 1);
        assert_eq!(tally.advance.get(), 0);

        assert!(is_equal(&a, &b));
        assert_eq!(tally.eq.get(), 1);
        assert_eq!(tally.distance.get(), 0);

        advance(&mut a, 3);
        assert_eq!(tally.advance.get(), 1);
        assert_eq!(a.get(), 4);

        assert!(is_less(&b, &a));
        assert!(!is_less(&a, &b));
        assert_eq!(tally.lt.get(), 2);
        assert_eq!(tally.distance.get(), 0);

        dec(&mut a);
        assert_eq!(tally.dec.get(), 1);
        assert_eq!(tally.advance.get(), 1);
        assert_eq!(a.get(), 3);
    }

    #[test]
    fn test_derived_from_advance_and_distance() {
        let mut a = AdvanceOnly(0);
        let b = AdvanceOnly(2);
        inc(&mut a);
        assert_eq!(a.get(), 1);
        assert!(is_less(&a, &b));
        assert!(!is_equal(&a, &b));
        inc(&mut a);
        assert!(is_equal(&a, &b));
        dec(&mut a);
        assert_eq!(distance(&a, &b), 1);
    }

    #[test]
    fn test_advance_by_repeated_steps() {
        let mut c = IncOnly(0);
        advance(&mut c, 5);
        assert_eq!(c.get(), 5);
        advance(&mut c, 0);
        assert_eq!(c.get(), 5);
    }
}
