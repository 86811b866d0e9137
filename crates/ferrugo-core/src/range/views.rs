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

//! # Range Views
//!
//! Lazy views over ranges. A view owns its underlying range and computes its
//! elements on dereference; nothing is materialized.
//!
//! | View          | Capabilities                                                    |
//! |---------------|-----------------------------------------------------------------|
//! | [`transform`] | exactly those of the underlying cursor                          |
//! | [`filter`]    | forward, or bidirectional if the underlying cursor steps back   |
//! | [`zip_all`]   | what both cursors can do in lockstep (see [`Capabilities::lockstep`]) |
//! | [`zip_all3`], [`zip_all4`] | the same, over three or four ranges              |
//!
//! ```rust
//! # use ferrugo_core::range::{Range, adapt::adapt, views};
//! let names = ["ada", "grace", "edsger"];
//! let lengths = views::transform(adapt(&names), |s: &&str| s.len());
//! assert_eq!(lengths.size(), 3);
//! assert_eq!(lengths.back(), 6);
//!
//! let long = views::filter(adapt(&names), |s: &&&str| s.len() > 3);
//! assert_eq!(long.to_container::<Vec<_>>(), vec![&"grace", &"edsger"]);
//!
//! let pairs = views::zip_all(adapt(&names), adapt(vec![1, 2]));
//! assert_eq!(pairs.size(), 2);
//! assert_eq!(pairs.back(), (&"grace", 2));
//! ```

use crate::cursor::{Cursor, capability::Capabilities, derived, iter::Iter};
use crate::range::{Range, adapt::IntoRange};
use std::rc::Rc;

/// A cursor mapping the elements of another cursor.
pub struct TransformCursor<C, F> {
    inner: C,
    func: Rc<F>,
}

impl<C: Clone, F> Clone for TransformCursor<C, F> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            func: Rc::clone(&self.func),
        }
    }
}

impl<C, F, U> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;
    const CAPABILITIES: Capabilities = C::CAPABILITIES;

    #[inline(always)]
    fn get(&self) -> U {
        (self.func)(self.inner.get())
    }

    #[inline(always)]
    fn inc(&mut self) {
        self.inner.inc();
    }

    #[inline(always)]
    fn dec(&mut self) {
        self.inner.dec();
    }

    #[inline(always)]
    fn advance(&mut self, offset: isize) {
        self.inner.advance(offset);
    }

    #[inline(always)]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }

    #[inline(always)]
    fn is_less(&self, other: &Self) -> bool {
        self.inner.is_less(&other.inner)
    }

    #[inline(always)]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(&other.inner)
    }
}

/// A range whose elements are those of another range mapped through a function.
pub struct Transform<R, F> {
    range: R,
    func: Rc<F>,
}

impl<R: Clone, F> Clone for Transform<R, F> {
    fn clone(&self) -> Self {
        Self {
            range: self.range.clone(),
            func: Rc::clone(&self.func),
        }
    }
}

impl<R, F, U> Range for Transform<R, F>
where
    R: Range,
    F: Fn(<R::Cursor as Cursor>::Item) -> U,
{
    type Cursor = TransformCursor<R::Cursor, F>;

    #[inline]
    fn begin(&self) -> Iter<Self::Cursor> {
        Iter::new(TransformCursor {
            inner: self.range.begin().into_cursor(),
            func: Rc::clone(&self.func),
        })
    }

    #[inline]
    fn end(&self) -> Iter<Self::Cursor> {
        Iter::new(TransformCursor {
            inner: self.range.end().into_cursor(),
            func: Rc::clone(&self.func),
        })
    }
}

/// Maps every element of `range` through `func`.
#[inline]
pub fn transform<T, F, U>(range: T, func: F) -> Transform<T::Range, F>
where
    T: IntoRange,
    F: Fn(<<T::Range as Range>::Cursor as Cursor>::Item) -> U,
{
    Transform {
        range: range.into_range(),
        func: Rc::new(func),
    }
}

/// A cursor skipping the elements of another cursor that a predicate rejects.
pub struct FilterCursor<C, P> {
    inner: C,
    end: C,
    pred: Rc<P>,
}

impl<C: Clone, P> Clone for FilterCursor<C, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            end: self.end.clone(),
            pred: Rc::clone(&self.pred),
        }
    }
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    #[inline]
    fn skip_rejected(&mut self) {
        while !derived::is_equal(&self.inner, &self.end) && !(self.pred)(&self.inner.get()) {
            derived::inc(&mut self.inner);
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    const CAPABILITIES: Capabilities = if C::CAPABILITIES.can_step_backward() {
        Capabilities::BIDIRECTIONAL
    } else {
        Capabilities::FORWARD
    };

    #[inline(always)]
    fn get(&self) -> C::Item {
        self.inner.get()
    }

    #[inline]
    fn inc(&mut self) {
        derived::inc(&mut self.inner);
        self.skip_rejected();
    }

    /// Steps back to the previous accepted element. There must be one.
    #[inline]
    fn dec(&mut self) {
        derived::dec(&mut self.inner);
        while !(self.pred)(&self.inner.get()) {
            derived::dec(&mut self.inner);
        }
    }

    #[inline(always)]
    fn is_equal(&self, other: &Self) -> bool {
        derived::is_equal(&self.inner, &other.inner)
    }
}

/// A range of the elements of another range accepted by a predicate.
pub struct Filter<R, P> {
    range: R,
    pred: Rc<P>,
}

impl<R: Clone, P> Clone for Filter<R, P> {
    fn clone(&self) -> Self {
        Self {
            range: self.range.clone(),
            pred: Rc::clone(&self.pred),
        }
    }
}

impl<R, P> Range for Filter<R, P>
where
    R: Range,
    P: Fn(&<R::Cursor as Cursor>::Item) -> bool,
{
    type Cursor = FilterCursor<R::Cursor, P>;

    #[inline]
    fn begin(&self) -> Iter<Self::Cursor> {
        let mut cursor = FilterCursor {
            inner: self.range.begin().into_cursor(),
            end: self.range.end().into_cursor(),
            pred: Rc::clone(&self.pred),
        };
        cursor.skip_rejected();
        Iter::new(cursor)
    }

    #[inline]
    fn end(&self) -> Iter<Self::Cursor> {
        let end = self.range.end().into_cursor();
        Iter::new(FilterCursor {
            inner: end.clone(),
            end,
            pred: Rc::clone(&self.pred),
        })
    }
}

/// Keeps the elements of `range` for which `pred` returns `true`.
///
/// The underlying range must be forward with equality.
#[inline]
pub fn filter<T, P>(range: T, pred: P) -> Filter<T::Range, P>
where
    T: IntoRange,
    P: Fn(&<<T::Range as Range>::Cursor as Cursor>::Item) -> bool,
{
    const {
        assert!(
            <<T::Range as Range>::Cursor as Cursor>::CAPABILITIES.is_iterable()
                && <<T::Range as Range>::Cursor as Cursor>::CAPABILITIES.supports_equality(),
            "filtering requires a forward range"
        )
    };
    Filter {
        range: range.into_range(),
        pred: Rc::new(pred),
    }
}

macro_rules! zip_view_arity {
    ($cursor:ident, $view:ident, $zip_all:ident, $doc:literal, $($part:ident: $ty:ident),+) => {
        /// A cursor moving its component cursors in lockstep.
        #[derive(Clone, Debug)]
        pub struct $cursor<$($ty),+> {
            $($part: $ty,)+
        }

        impl<$($ty: Cursor),+> $cursor<$($ty),+> {
            const LOCKSTEP: Capabilities =
                Capabilities::ALL$(.lockstep(<$ty as Cursor>::CAPABILITIES))+;
        }

        impl<$($ty: Cursor),+> Cursor for $cursor<$($ty),+> {
            type Item = ($(<$ty as Cursor>::Item,)+);
            const CAPABILITIES: Capabilities = if Self::LOCKSTEP.supports_difference() {
                Self::LOCKSTEP
            } else {
                Self::LOCKSTEP.difference(Capabilities::DEC.union(Capabilities::ADVANCE))
            };

            #[inline(always)]
            fn get(&self) -> Self::Item {
                ($(self.$part.get(),)+)
            }

            #[inline(always)]
            fn inc(&mut self) {
                $(derived::inc(&mut self.$part);)+
            }

            #[inline(always)]
            fn dec(&mut self) {
                $(derived::dec(&mut self.$part);)+
            }

            #[inline(always)]
            fn advance(&mut self, offset: isize) {
                $(derived::advance(&mut self.$part, offset);)+
            }

            // Equal as soon as any component is, so the shortest range ends the zip.
            #[inline(always)]
            fn is_equal(&self, other: &Self) -> bool {
                false $(|| derived::is_equal(&self.$part, &other.$part))+
            }

            #[inline(always)]
            fn is_less(&self, other: &Self) -> bool {
                false $(|| derived::is_less(&self.$part, &other.$part))+
            }

            #[inline(always)]
            fn distance_to(&self, other: &Self) -> isize {
                isize::MAX $(.min(derived::distance(&self.$part, &other.$part)))+
            }
        }

        /// A range yielding tuples of the elements of its component ranges.
        #[derive(Clone, Debug)]
        pub struct $view<$($ty),+> {
            $($part: $ty,)+
        }

        impl<$($ty: Range),+> $view<$($ty),+> {
            #[inline]
            fn end_unaligned(&self) -> $cursor<$(<$ty as Range>::Cursor),+> {
                $cursor {
                    $($part: self.$part.end().into_cursor(),)+
                }
            }
        }

        impl<$($ty: Range),+> Range for $view<$($ty),+> {
            type Cursor = $cursor<$(<$ty as Range>::Cursor),+>;

            #[inline]
            fn begin(&self) -> Iter<Self::Cursor> {
                Iter::new($cursor {
                    $($part: self.$part.begin().into_cursor(),)+
                })
            }

            // With `DISTANCE_TO` the end is aligned to the shortest range, which
            // keeps stepping back from the end consistent.
            #[inline]
            fn end(&self) -> Iter<Self::Cursor> {
                if <Self::Cursor as Cursor>::CAPABILITIES.supports_difference() {
                    let mut end = self.begin().into_cursor();
                    let len = derived::distance(&end, &self.end_unaligned());
                    $(derived::advance(&mut end.$part, len);)+
                    return Iter::new(end);
                }
                Iter::new(self.end_unaligned())
            }
        }

        impl<$($ty: Range),+> IntoRange for $view<$($ty),+> {
            type Range = Self;

            #[inline(always)]
            fn into_range(self) -> Self {
                self
            }
        }

        #[doc = $doc]
        #[inline]
        pub fn $zip_all<$($ty),+>($($part: $ty),+) -> $view<$(<$ty as IntoRange>::Range),+>
        where
            $($ty: IntoRange,)+
        {
            $view {
                $($part: $part.into_range(),)+
            }
        }
    };
}

zip_view_arity!(
    ZipCursor,
    Zip,
    zip_all,
    "Pairs up the elements of `first` and `second`, ending with the shorter one.",
    first: A,
    second: B
);
zip_view_arity!(
    ZipCursor3,
    Zip3,
    zip_all3,
    "Zips three ranges into triples, ending with the shortest one.",
    first: A,
    second: B,
    third: C
);
zip_view_arity!(
    ZipCursor4,
    Zip4,
    zip_all4,
    "Zips four ranges into quadruples, ending with the shortest one.",
    first: A,
    second: B,
    third: C,
    fourth: D
);

macro_rules! view_into_range {
    ($($view:ident<$a:ident, $b:ident>),* $(,)?) => {
        $(
            impl<$a, $b> IntoRange for $view<$a, $b>
            where
                Self: Range,
            {
                type Range = Self;

                #[inline(always)]
                fn into_range(self) -> Self {
                    self
                }
            }
        )*
    };
}

view_into_range!(Transform<R, F>, Filter<R, P>);
