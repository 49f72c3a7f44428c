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

//! Sum of several cardinality functions.
//!
//! A single cardinality factor often has to express more than one rule over
//! the same group of variables, for example a soft cap together with a hard
//! one. `CompositeCardinalityFunction` adds up the costs of its terms in
//! insertion order so the factor still sees a single function.

use crate::{function::CardinalityFunction, num::UtilityNumeric};
use tracing::trace;

type BoxedCardinalityFunction<U> = Box<dyn CardinalityFunction<U> + Send + Sync>;

/// A cardinality function whose cost is the sum of the costs of its terms.
///
/// An empty composite costs zero for every count.
#[derive(Default)]
pub struct CompositeCardinalityFunction<U>
where
    U: UtilityNumeric,
{
    functions: Vec<BoxedCardinalityFunction<U>>,
}

impl<U> CompositeCardinalityFunction<U>
where
    U: UtilityNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            functions: Vec::with_capacity(capacity),
        }
    }

    /// Adds a term and returns the composite, for chained construction.
    #[inline]
    pub fn with<F>(mut self, function: F) -> Self
    where
        F: CardinalityFunction<U> + Send + Sync + 'static,
    {
        self.add_function(function);
        self
    }

    #[inline]
    pub fn add_function<F>(&mut self, function: F)
    where
        F: CardinalityFunction<U> + Send + Sync + 'static,
    {
        self.add_boxed_function(Box::new(function));
    }

    #[inline]
    pub fn add_boxed_function(&mut self, function: BoxedCardinalityFunction<U>) {
        trace!(
            term = function.name(),
            index = self.functions.len(),
            "adding term to composite cardinality function"
        );
        self.functions.push(function);
    }

    #[inline]
    pub fn add_boxed_functions<I>(&mut self, functions: I)
    where
        I: IntoIterator<Item = BoxedCardinalityFunction<U>>,
    {
        for function in functions {
            self.add_boxed_function(function);
        }
    }

    #[inline]
    pub fn functions(&self) -> &[BoxedCardinalityFunction<U>] {
        &self.functions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<U> From<Vec<BoxedCardinalityFunction<U>>> for CompositeCardinalityFunction<U>
where
    U: UtilityNumeric,
{
    fn from(functions: Vec<BoxedCardinalityFunction<U>>) -> Self {
        Self { functions }
    }
}

impl<U> CardinalityFunction<U> for CompositeCardinalityFunction<U>
where
    U: UtilityNumeric,
{
    fn name(&self) -> &str {
        "CompositeCardinalityFunction"
    }

    fn cost(&self, num_active_variables: i64) -> U {
        self.functions
            .iter()
            .fold(U::zero(), |acc, f| acc + f.cost(num_active_variables))
    }
}

impl<U> std::fmt::Debug for CompositeCardinalityFunction<U>
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeCardinalityFunction")
            .field("functions", &self.functions)
            .finish()
    }
}

impl<U> std::fmt::Display for CompositeCardinalityFunction<U>
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeCardinalityFunction(")?;
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", function.name())?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeCardinalityFunction;
    use crate::{
        function::{CardinalityFunction, FnCardinalityFunction},
        max_active::MaxActiveFunction,
    };

    #[test]
    fn test_empty_composite_costs_zero() {
        let composite = CompositeCardinalityFunction::<f64>::new();
        assert!(composite.is_empty());
        assert_eq!(composite.cost(-5), 0.0);
        assert_eq!(composite.cost(0), 0.0);
        assert_eq!(composite.cost(100), 0.0);
    }

    #[test]
    fn test_sum_of_two_caps() {
        let composite = CompositeCardinalityFunction::<f64>::new()
            .with(MaxActiveFunction::new(2, 1.0))
            .with(MaxActiveFunction::new(4, 3.0));

        assert_eq!(composite.len(), 2);
        let costs: Vec<f64> = (0..=6).map(|n| composite.cost(n)).collect();
        assert_eq!(costs, vec![0.0, 0.0, 0.0, 1.0, 1.0, 4.0, 4.0]);
    }

    #[test]
    fn test_mixed_terms_and_boxed_insertion() {
        let mut composite = CompositeCardinalityFunction::<f64>::with_capacity(3);
        composite.add_function(MaxActiveFunction::new(1, 10.0));
        composite.add_boxed_functions(vec![
            Box::new(FnCardinalityFunction::new("Linear", |n: i64| n as f64))
                as Box<dyn CardinalityFunction<f64> + Send + Sync>,
        ]);

        assert_eq!(composite.cost(1), 1.0);
        assert_eq!(composite.cost(3), 13.0);
        assert_eq!(composite.functions()[1].name(), "Linear");
    }

    #[test]
    fn test_from_vec_and_display() {
        let terms: Vec<Box<dyn CardinalityFunction<f64> + Send + Sync>> = vec![
            Box::new(MaxActiveFunction::new(0, 1.0)),
            Box::new(MaxActiveFunction::new(1, 2.0)),
        ];
        let composite = CompositeCardinalityFunction::from(terms);

        assert_eq!(composite.cost(2), 3.0);
        assert_eq!(
            format!("{}", composite),
            "CompositeCardinalityFunction(MaxActiveFunction + MaxActiveFunction)"
        );
    }

    #[test]
    fn test_composite_nests() {
        let inner =
            CompositeCardinalityFunction::<f64>::new().with(MaxActiveFunction::new(0, 1.0));
        let outer = CompositeCardinalityFunction::<f64>::new()
            .with(inner)
            .with(MaxActiveFunction::new(0, 1.0));

        assert_eq!(outer.cost(0), 0.0);
        assert_eq!(outer.cost(1), 2.0);
    }
}
