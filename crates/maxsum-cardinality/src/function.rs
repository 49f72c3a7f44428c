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

//! The cardinality function capability.
//!
//! A cardinality factor does not care which of its variables are active, only
//! how many. `CardinalityFunction` decouples the factor from a particular
//! pricing rule: the factor asks for the cost of activating `n` variables and
//! the function answers. Implementations must be pure, so the factor is free
//! to call them any number of times, in any order, from any thread.
//!
//! Besides the trait itself this module provides blanket implementations for
//! references, boxes and `Arc`s, and `FnCardinalityFunction`, which lifts a
//! closure into a named function for shapes that do not warrant their own type.

use crate::num::UtilityNumeric;
use std::sync::Arc;

/// A pricing rule mapping the number of active variables to a utility or cost.
pub trait CardinalityFunction<U>
where
    U: UtilityNumeric,
{
    /// Returns the name of the cardinality function.
    fn name(&self) -> &str;

    /// Returns the cost of having `num_active_variables` variables active at
    /// the same time.
    ///
    /// Implementations must be total: every `i64` is accepted, including zero
    /// and negative counts, and the call never panics.
    fn cost(&self, num_active_variables: i64) -> U;
}

impl<U, F> CardinalityFunction<U> for &F
where
    U: UtilityNumeric,
    F: CardinalityFunction<U> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn cost(&self, num_active_variables: i64) -> U {
        (**self).cost(num_active_variables)
    }
}

impl<U, F> CardinalityFunction<U> for Box<F>
where
    U: UtilityNumeric,
    F: CardinalityFunction<U> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn cost(&self, num_active_variables: i64) -> U {
        (**self).cost(num_active_variables)
    }
}

impl<U, F> CardinalityFunction<U> for Arc<F>
where
    U: UtilityNumeric,
    F: CardinalityFunction<U> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn cost(&self, num_active_variables: i64) -> U {
        (**self).cost(num_active_variables)
    }
}

impl<U> std::fmt::Debug for dyn CardinalityFunction<U>
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardinalityFunction({})", self.name())
    }
}

impl<U> std::fmt::Display for dyn CardinalityFunction<U>
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardinalityFunction({})", self.name())
    }
}

impl<U> std::fmt::Debug for dyn CardinalityFunction<U> + Send + Sync
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardinalityFunction({})", self.name())
    }
}

impl<U> std::fmt::Display for dyn CardinalityFunction<U> + Send + Sync
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardinalityFunction({})", self.name())
    }
}

/// A cardinality function backed by a closure.
///
/// The closure is trusted to honor the `CardinalityFunction` contract: it must
/// be pure and must not panic for any count.
///
/// # Examples
///
/// ```rust
/// # use maxsum_cardinality::function::{CardinalityFunction, FnCardinalityFunction};
///
/// let linear = FnCardinalityFunction::new("Linear", |n: i64| 2.0 * n as f64);
/// assert_eq!(linear.cost(3), 6.0);
/// assert_eq!(linear.name(), "Linear");
/// ```
#[derive(Clone)]
pub struct FnCardinalityFunction<U, F>
where
    U: UtilityNumeric,
    F: Fn(i64) -> U,
{
    name: String,
    function: F,
    _phantom: std::marker::PhantomData<fn() -> U>,
}

impl<U, F> FnCardinalityFunction<U, F>
where
    U: UtilityNumeric,
    F: Fn(i64) -> U,
{
    /// Creates a new `FnCardinalityFunction` with the given name.
    #[inline]
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<U, F> CardinalityFunction<U> for FnCardinalityFunction<U, F>
where
    U: UtilityNumeric,
    F: Fn(i64) -> U,
{
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn cost(&self, num_active_variables: i64) -> U {
        (self.function)(num_active_variables)
    }
}

impl<U, F> std::fmt::Debug for FnCardinalityFunction<U, F>
where
    U: UtilityNumeric,
    F: Fn(i64) -> U,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCardinalityFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<U, F> std::fmt::Display for FnCardinalityFunction<U, F>
where
    U: UtilityNumeric,
    F: Fn(i64) -> U,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FnCardinalityFunction({})", self.name)
    }
}
