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

//! # Pipelines
//!
//! A [`Pipeline<In, Out>`] is an ordered list of unary stages applied left to
//! right: the output of one stage is the input of the next. Stages are stored as
//! type-erased callables, so pipelines of any length share one nominal type that
//! only records the input and output types.
//!
//! Composition concatenates stage lists. Composing a pipeline with another
//! pipeline never nests them, so `pipe!(pipe!(f, g), h)` and `pipe!(f, g, h)`
//! have the same stages in the same order.
//!
//! ## Usage
//!
//! ```rust
//! # use ferrugo_core::pipe;
//! # use ferrugo_core::pipeline::{Apply, Pipeline};
//! let inc = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! let show = |x: i32| format!("<{x}>");
//!
//! let nested = pipe!(pipe!(inc, double), show);
//! let flat = pipe!(inc, double, show);
//! assert_eq!(nested.len(), flat.len());
//! assert_eq!(nested.call(4), flat.call(4));
//! assert_eq!(4.apply(&flat), "<10>");
//!
//! let composed = Pipeline::new(inc) | Pipeline::new(double);
//! assert_eq!(composed.call(1), 4);
//! ```

use smallvec::SmallVec;
use std::any::Any;
use std::marker::PhantomData;
use std::rc::Rc;

type Stage = Rc<dyn Fn(Box<dyn Any>) -> Box<dyn Any>>;

/// Recovers a value passed between stages.
#[inline]
fn unbox<T: 'static>(value: Box<dyn Any>) -> T {
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => unreachable!(
            "pipeline stage expected a value of type `{}`",
            std::any::type_name::<T>()
        ),
    }
}

/// A composed chain of stages from `In` to `Out`.
pub struct Pipeline<In, Out> {
    stages: SmallVec<Stage, 4>,
    _types: PhantomData<fn(In) -> Out>,
}

impl<In, Out> Clone for Pipeline<In, Out> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
            _types: PhantomData,
        }
    }
}

impl<In, Out> std::fmt::Debug for Pipeline<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("input", &std::any::type_name::<In>())
            .field("output", &std::any::type_name::<Out>())
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl<In: 'static, Out: 'static> Pipeline<In, Out> {
    /// Creates a single-stage pipeline.
    pub fn new<F>(stage: F) -> Self
    where
        F: Fn(In) -> Out + 'static,
    {
        let stage: Stage = Rc::new(move |input: Box<dyn Any>| -> Box<dyn Any> {
            Box::new(stage(unbox::<In>(input)))
        });
        let mut stages = SmallVec::new();
        stages.push(stage);
        Self {
            stages,
            _types: PhantomData,
        }
    }

    /// Appends `next` after the last stage, flattening it if it is a pipeline.
    pub fn then<Next, P>(mut self, next: P) -> Pipeline<In, Next>
    where
        Next: 'static,
        P: IntoPipeline<Out, Next>,
    {
        let next = next.into_pipeline();
        log::trace!(
            "composing pipelines of {} and {} stages",
            self.stages.len(),
            next.stages.len()
        );
        self.stages.extend(next.stages);
        Pipeline {
            stages: self.stages,
            _types: PhantomData,
        }
    }

    /// Returns the number of flattened stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` for a pipeline without stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs `input` through every stage, left to right.
    pub fn call(&self, input: In) -> Out {
        let value = self
            .stages
            .iter()
            .fold(Box::new(input) as Box<dyn Any>, |value, stage| stage(value));
        unbox::<Out>(value)
    }
}

impl<T: 'static> Pipeline<T, T> {
    /// Creates a pipeline without stages, returning its input unchanged.
    ///
    /// ```rust
    /// # use ferrugo_core::pipeline::Pipeline;
    /// let id = Pipeline::<&str, &str>::identity();
    /// assert!(id.is_empty());
    /// assert_eq!(id.call("same"), "same");
    /// ```
    pub fn identity() -> Self {
        Self {
            stages: SmallVec::new(),
            _types: PhantomData,
        }
    }
}

impl<T: 'static> Default for Pipeline<T, T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Conversion into a pipeline. Implemented for pipelines (as the identity) and
/// for every `Fn(In) -> Out` callable (as a single stage).
pub trait IntoPipeline<In, Out> {
    /// Performs the conversion.
    fn into_pipeline(self) -> Pipeline<In, Out>;
}

impl<In, Out> IntoPipeline<In, Out> for Pipeline<In, Out> {
    #[inline(always)]
    fn into_pipeline(self) -> Pipeline<In, Out> {
        self
    }
}

impl<In, Out, F> IntoPipeline<In, Out> for F
where
    In: 'static,
    Out: 'static,
    F: Fn(In) -> Out + 'static,
{
    #[inline]
    fn into_pipeline(self) -> Pipeline<In, Out> {
        Pipeline::new(self)
    }
}

impl<A: 'static, B: 'static, C: 'static> std::ops::BitOr<Pipeline<B, C>> for Pipeline<A, B> {
    type Output = Pipeline<A, C>;

    #[inline]
    fn bitor(self, rhs: Pipeline<B, C>) -> Self::Output {
        self.then(rhs)
    }
}

/// Composes callables and pipelines into one flattened [`Pipeline`].
///
/// ```rust
/// # use ferrugo_core::pipe;
/// let p = pipe!(|s: &str| s.len(), |n: usize| n * 3);
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.call("abcd"), 12);
/// ```
#[macro_export]
macro_rules! pipe {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipeline::IntoPipeline::into_pipeline($first)$(.then($rest))*
    };
}

/// Applies a pipeline to a left-hand value, as an extension method.
pub trait Apply: Sized {
    /// Equivalent to `pipeline.call(self)`.
    #[inline]
    fn apply<Out>(self, pipeline: &Pipeline<Self, Out>) -> Out
    where
        Self: 'static,
        Out: 'static,
    {
        pipeline.call(self)
    }
}

impl<T> Apply for T {}
