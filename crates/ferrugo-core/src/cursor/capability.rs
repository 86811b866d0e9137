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

//! # Capability Detection
//!
//! A cursor (the backing implementation behind an [`Iter`](crate::cursor::iter::Iter))
//! reports which primitive operations it provides through a [`Capabilities`] set.
//! The set is a compile-time constant, so inspecting it never invokes the cursor and
//! costs nothing at runtime. The iterator [`Category`] is a pure function of that set.
//!
//! ## Vocabulary
//!
//! | Primitive     | Meaning                                     |
//! |---------------|---------------------------------------------|
//! | `DEREF`       | read the current element (mandatory)        |
//! | `INC`         | step forward by one                         |
//! | `DEC`         | step backward by one                        |
//! | `ADVANCE`     | move by an arbitrary signed offset          |
//! | `EQ`          | compare two positions for equality          |
//! | `LT`          | order two positions                         |
//! | `DISTANCE_TO` | signed number of steps between two positions|
//!
//! ## Category inference
//!
//! - `ADVANCE` and `DISTANCE_TO` present: random access.
//! - otherwise `DEC` or `ADVANCE` present: bidirectional.
//! - otherwise: forward.
//!
//! ```rust
//! # use ferrugo_core::cursor::capability::{Capabilities, Category};
//! let caps = Capabilities::DEREF
//!     .union(Capabilities::ADVANCE)
//!     .union(Capabilities::DISTANCE_TO);
//! assert_eq!(Category::infer(caps), Category::RandomAccess);
//! assert_eq!(Category::infer(Capabilities::FORWARD), Category::Forward);
//! ```

use crate::cursor::Cursor;

/// A set of primitive cursor operations.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// Read the current element.
    pub const DEREF: Self = Self(1 << 0);
    /// Step forward by one position.
    pub const INC: Self = Self(1 << 1);
    /// Step backward by one position.
    pub const DEC: Self = Self(1 << 2);
    /// Move by an arbitrary signed offset.
    pub const ADVANCE: Self = Self(1 << 3);
    /// Equality between two positions.
    pub const EQ: Self = Self(1 << 4);
    /// Strict ordering between two positions.
    pub const LT: Self = Self(1 << 5);
    /// Signed distance between two positions.
    pub const DISTANCE_TO: Self = Self(1 << 6);

    /// `DEREF | INC | EQ`, the minimal set of a forward cursor.
    pub const FORWARD: Self = Self::DEREF.union(Self::INC).union(Self::EQ);
    /// `FORWARD | DEC`.
    pub const BIDIRECTIONAL: Self = Self::FORWARD.union(Self::DEC);
    /// `DEREF | ADVANCE | DISTANCE_TO`, the minimal set of a random-access cursor.
    pub const RANDOM_ACCESS: Self = Self::DEREF
        .union(Self::ADVANCE)
        .union(Self::DISTANCE_TO);
    /// Every primitive.
    pub const ALL: Self = Self(0b0111_1111);

    const NAMES: [(Self, &'static str); 7] = [
        (Self::DEREF, "deref"),
        (Self::INC, "inc"),
        (Self::DEC, "dec"),
        (Self::ADVANCE, "advance"),
        (Self::EQ, "eq"),
        (Self::LT, "lt"),
        (Self::DISTANCE_TO, "distance_to"),
    ];

    /// Returns the raw bit representation.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every primitive of `other` is also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferrugo_core::cursor::capability::Capabilities;
    /// assert!(Capabilities::BIDIRECTIONAL.contains(Capabilities::DEC));
    /// assert!(!Capabilities::FORWARD.contains(Capabilities::DEC));
    /// ```
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both sets.
    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the primitives present in both sets.
    #[inline(always)]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns `self` without the primitives of `other`.
    #[inline(always)]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if the set is empty.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Forward movement is possible through `INC` or `ADVANCE`.
    #[inline(always)]
    pub const fn can_step_forward(self) -> bool {
        self.contains(Self::INC) || self.contains(Self::ADVANCE)
    }

    /// Backward movement is possible through `DEC` or `ADVANCE`.
    #[inline(always)]
    pub const fn can_step_backward(self) -> bool {
        self.contains(Self::DEC) || self.contains(Self::ADVANCE)
    }

    /// Equality is available directly or through `DISTANCE_TO`.
    #[inline(always)]
    pub const fn supports_equality(self) -> bool {
        self.contains(Self::EQ) || self.contains(Self::DISTANCE_TO)
    }

    /// Ordering is available directly or through `DISTANCE_TO`.
    #[inline(always)]
    pub const fn supports_ordering(self) -> bool {
        self.contains(Self::LT) || self.contains(Self::DISTANCE_TO)
    }

    /// A position difference requires `DISTANCE_TO`.
    #[inline(always)]
    pub const fn supports_difference(self) -> bool {
        self.contains(Self::DISTANCE_TO)
    }

    /// A cursor is iterable when it can be dereferenced and moved forward.
    #[inline(always)]
    pub const fn is_iterable(self) -> bool {
        self.contains(Self::DEREF) && self.can_step_forward()
    }

    /// Returns the set of primitives a composite cursor can synthesize when
    /// it moves two component cursors in lockstep.
    ///
    /// Unlike [`intersection`](Self::intersection), a derived primitive counts:
    /// a component with only `ADVANCE` still contributes forward movement.
    pub const fn lockstep(self, other: Self) -> Self {
        let mut caps = Self::DEREF;
        if self.can_step_forward() && other.can_step_forward() {
            caps = caps.union(Self::INC);
        }
        if self.can_step_backward() && other.can_step_backward() {
            caps = caps.union(Self::DEC);
        }
        if self.contains(Self::ADVANCE) && other.contains(Self::ADVANCE) {
            caps = caps.union(Self::ADVANCE);
        }
        if self.supports_equality() && other.supports_equality() {
            caps = caps.union(Self::EQ);
        }
        if self.supports_ordering() && other.supports_ordering() {
            caps = caps.union(Self::LT);
        }
        if self.supports_difference() && other.supports_difference() {
            caps = caps.union(Self::DISTANCE_TO);
        }
        caps
    }

    /// Iterates over the names of the contained primitives.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(cap, _)| self.contains(*cap))
            .map(|(_, name)| name)
    }
}

impl std::ops::BitOr for Capabilities {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitAnd for Capabilities {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl std::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.names().collect::<Vec<_>>().join(", "))
    }
}

/// The iterator category derived from a capability set.
///
/// Categories are ordered by strength: `Forward < Bidirectional < RandomAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Single steps forward only.
    Forward,
    /// Single steps in both directions.
    Bidirectional,
    /// Constant-time jumps and distances.
    RandomAccess,
}

impl Category {
    /// Infers the category of a capability set.
    ///
    /// Random access requires both `ADVANCE` and `DISTANCE_TO`; whether `INC` or
    /// `DEC` are present as well does not change the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferrugo_core::cursor::capability::{Capabilities, Category};
    /// let advance_only = Capabilities::DEREF.union(Capabilities::ADVANCE);
    /// assert_eq!(Category::infer(advance_only), Category::Bidirectional);
    /// assert_eq!(Category::infer(Capabilities::ALL), Category::RandomAccess);
    /// ```
    pub const fn infer(caps: Capabilities) -> Self {
        if caps.contains(Capabilities::ADVANCE) && caps.contains(Capabilities::DISTANCE_TO) {
            Self::RandomAccess
        } else if caps.contains(Capabilities::DEC) || caps.contains(Capabilities::ADVANCE) {
            Self::Bidirectional
        } else {
            Self::Forward
        }
    }

    /// Returns `true` for `Bidirectional` and `RandomAccess`.
    #[inline(always)]
    pub const fn is_bidirectional(self) -> bool {
        matches!(self, Self::Bidirectional | Self::RandomAccess)
    }

    /// Returns `true` for `RandomAccess`.
    #[inline(always)]
    pub const fn is_random_access(self) -> bool {
        matches!(self, Self::RandomAccess)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Forward => "forward",
            Self::Bidirectional => "bidirectional",
            Self::RandomAccess => "random_access",
        };
        f.write_str(name)
    }
}

/// Returns the capability set reported by the cursor type `C`.
#[inline(always)]
pub const fn capabilities_of<C: Cursor>() -> Capabilities {
    C::CAPABILITIES
}

/// Returns the iterator category inferred for the cursor type `C`.
#[inline(always)]
pub const fn category_of<C: Cursor>() -> Category {
    C::CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_union() {
        let caps = Capabilities::DEREF | Capabilities::INC;
        assert!(caps.contains(Capabilities::DEREF));
        assert!(caps.contains(Capabilities::INC));
        assert!(!caps.contains(Capabilities::DEC));
        assert!(caps.contains(Capabilities::NONE));
        assert!(Capabilities::NONE.is_empty());
    }

    #[test]
    fn test_category_inference_table() {
        let d = Capabilities::DEREF;
        assert_eq!(Category::infer(d | Capabilities::INC), Category::Forward);
        assert_eq!(
            Category::infer(d | Capabilities::INC | Capabilities::DEC),
            Category::Bidirectional
        );
        assert_eq!(
            Category::infer(d | Capabilities::ADVANCE),
            Category::Bidirectional
        );
        assert_eq!(
            Category::infer(d | Capabilities::DISTANCE_TO | Capabilities::INC),
            Category::Forward
        );
        assert_eq!(
            Category::infer(Capabilities::RANDOM_ACCESS),
            Category::RandomAccess
        );
    }

    #[test]
    fn test_random_access_regardless_of_inc_dec() {
        let base = Capabilities::RANDOM_ACCESS;
        for extra in [
            Capabilities::NONE,
            Capabilities::INC,
            Capabilities::DEC,
            Capabilities::INC | Capabilities::DEC,
            Capabilities::EQ | Capabilities::LT,
        ] {
            assert_eq!(Category::infer(base | extra), Category::RandomAccess);
        }
    }

    #[test]
    fn test_derived_support_queries() {
        let ra = Capabilities::RANDOM_ACCESS;
        assert!(ra.can_step_forward());
        assert!(ra.can_step_backward());
        assert!(ra.supports_equality());
        assert!(ra.supports_ordering());
        assert!(ra.is_iterable());

        let fwd = Capabilities::FORWARD;
        assert!(fwd.can_step_forward());
        assert!(!fwd.can_step_backward());
        assert!(!fwd.supports_ordering());

        assert!(!Capabilities::DEREF.is_iterable());
        assert!(!(Capabilities::INC | Capabilities::EQ).is_iterable());
    }

    #[test]
    fn test_lockstep_synthesizes_derived_primitives() {
        let inc_only = Capabilities::FORWARD;
        let advance_only = Capabilities::RANDOM_ACCESS;

        assert_eq!(inc_only.intersection(advance_only), Capabilities::DEREF);

        let zipped = inc_only.lockstep(advance_only);
        assert!(zipped.contains(Capabilities::INC));
        assert!(zipped.contains(Capabilities::EQ));
        assert!(!zipped.contains(Capabilities::DEC));
        assert!(!zipped.contains(Capabilities::ADVANCE));
        assert_eq!(Category::infer(zipped), Category::Forward);

        let both_ra = advance_only.lockstep(advance_only);
        assert_eq!(Category::infer(both_ra), Category::RandomAccess);
    }

    #[test]
    fn test_category_ordering() {
        assert!(Category::Forward < Category::Bidirectional);
        assert!(Category::Bidirectional < Category::RandomAccess);
        assert!(Category::RandomAccess.is_bidirectional());
        assert!(!Category::Forward.is_bidirectional());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Capabilities::FORWARD), "{deref, inc, eq}");
        assert_eq!(format!("{}", Capabilities::NONE), "{}");
        assert_eq!(format!("{}", Category::RandomAccess), "random_access");
    }
}
