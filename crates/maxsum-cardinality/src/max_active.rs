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

//! Hard cap on the number of simultaneously active variables.
//!
//! `MaxActiveFunction` is the workload rule of a cardinality factor: as long
//! as at most `k` variables are active the configuration is free, and as soon
//! as the count exceeds `k` the configured utility is charged once, no matter
//! how far over the limit the count is. Passing an infinite utility turns the
//! rule into a hard constraint; a finite one makes it a soft penalty (or a
//! reward, if the caller maximizes and the utility is positive).
//!
//! Neither parameter is validated. A negative `k` simply means that every
//! non-negative count violates the cap, and counts are compared literally,
//! so negative counts never exceed a non-negative cap.

use crate::{function::CardinalityFunction, num::UtilityNumeric};

/// Charges `utility` whenever more than `max_active_variables` variables are
/// active at the same time, and nothing otherwise.
///
/// # Examples
///
/// ```rust
/// # use maxsum_cardinality::function::CardinalityFunction;
/// # use maxsum_cardinality::max_active::MaxActiveFunction;
///
/// let f = MaxActiveFunction::new(3, 10.0);
/// assert_eq!(f.cost(3), 0.0);
/// assert_eq!(f.cost(4), 10.0);
///
/// // Used as a hard constraint.
/// let hard = MaxActiveFunction::new(1, f64::INFINITY);
/// assert!(hard.cost(2).is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxActiveFunction<U>
where
    U: UtilityNumeric,
{
    max_active_variables: i64,
    utility: U,
}

impl<U> MaxActiveFunction<U>
where
    U: UtilityNumeric,
{
    /// Creates a new `MaxActiveFunction` that charges `utility` whenever more
    /// than `max_active_variables` variables are active.
    #[inline]
    pub const fn new(max_active_variables: i64, utility: U) -> Self {
        Self {
            max_active_variables,
            utility,
        }
    }

    /// Returns the largest number of active variables that is still free.
    #[inline]
    pub const fn max_active_variables(&self) -> i64 {
        self.max_active_variables
    }

    /// Returns the utility charged when the cap is exceeded.
    #[inline]
    pub const fn utility(&self) -> U {
        self.utility
    }

    /// Returns `true` if activating `num_active_variables` variables exceeds the cap.
    #[inline(always)]
    pub const fn is_violated_by(&self, num_active_variables: i64) -> bool {
        num_active_variables > self.max_active_variables
    }
}

impl<U> CardinalityFunction<U> for MaxActiveFunction<U>
where
    U: UtilityNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "MaxActiveFunction"
    }

    #[inline(always)]
    fn cost(&self, num_active_variables: i64) -> U {
        if self.is_violated_by(num_active_variables) {
            return self.utility;
        }
        U::zero()
    }
}

impl<U> std::fmt::Display for MaxActiveFunction<U>
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MaxActiveFunction(max_active_variables: {}, utility: {})",
            self.max_active_variables, self.utility
        )
    }
}

#[cfg(test)]
mod tests {
    use super::MaxActiveFunction;
    use crate::function::CardinalityFunction;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_constructor_stores_parameters_verbatim() {
        let f = MaxActiveFunction::new(-7, -2.5);
        assert_eq!(f.max_active_variables(), -7);
        assert_eq!(f.utility(), -2.5);
        assert_eq!(f.name(), "MaxActiveFunction");
    }

    #[test]
    fn test_concrete_scenarios() {
        let f = MaxActiveFunction::new(3, 10.0);
        assert_eq!(f.cost(0), 0.0);
        assert_eq!(f.cost(3), 0.0);
        assert_eq!(f.cost(4), 10.0);
        assert_eq!(f.cost(100), 10.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let f = MaxActiveFunction::new(5, 1.0);
        // The cap itself is still free, only the next count is charged.
        assert_eq!(f.cost(5), 0.0);
        assert_eq!(f.cost(6), 1.0);
        assert!(!f.is_violated_by(5));
        assert!(f.is_violated_by(6));
    }

    #[test]
    fn test_zero_cap() {
        let f = MaxActiveFunction::new(0, 5.0);
        assert_eq!(f.cost(0), 0.0);
        assert_eq!(f.cost(1), 5.0);
    }

    #[test]
    fn test_negative_utility_is_returned_verbatim() {
        let f = MaxActiveFunction::new(2, -2.0);
        assert_eq!(f.cost(3), -2.0);
        assert_eq!(f.cost(2), 0.0);
    }

    #[test]
    fn test_step_is_not_scaled_by_excess() {
        let f = MaxActiveFunction::new(1, 3.0);
        assert_eq!(f.cost(2), f.cost(1_000_000));
        assert_eq!(f.cost(i64::MAX), 3.0);
    }

    #[test]
    fn test_negative_counts_and_caps() {
        let f = MaxActiveFunction::new(0, 4.0);
        assert_eq!(f.cost(-1), 0.0);
        assert_eq!(f.cost(i64::MIN), 0.0);

        let g = MaxActiveFunction::new(-3, 4.0);
        assert_eq!(g.cost(-3), 0.0);
        assert_eq!(g.cost(-2), 4.0);
        assert_eq!(g.cost(0), 4.0);
    }

    #[test]
    fn test_extreme_caps() {
        let never = MaxActiveFunction::new(i64::MAX, 1.0);
        assert_eq!(never.cost(i64::MAX), 0.0);

        let always = MaxActiveFunction::new(i64::MIN, 1.0);
        assert_eq!(always.cost(i64::MIN), 0.0);
        assert_eq!(always.cost(i64::MIN + 1), 1.0);
    }

    #[test]
    fn test_non_finite_utilities_pass_through() {
        let hard = MaxActiveFunction::new(1, f64::INFINITY);
        assert_eq!(hard.cost(1), 0.0);
        assert_eq!(hard.cost(2), f64::INFINITY);

        let nan = MaxActiveFunction::new(1, f64::NAN);
        assert_eq!(nan.cost(0), 0.0);
        assert!(nan.cost(2).is_nan());
    }

    #[test]
    fn test_single_precision() {
        let f = MaxActiveFunction::new(2, 0.5f32);
        assert_eq!(f.cost(2), 0.0f32);
        assert_eq!(f.cost(3), 0.5f32);
    }

    #[test]
    fn test_randomized_step_rule() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1_000 {
            let cap = rng.random_range(-1_000i64..1_000);
            let utility = rng.random_range(-100.0f64..100.0);
            let f = MaxActiveFunction::new(cap, utility);

            for _ in 0..32 {
                let n = rng.random_range(-2_000i64..2_000);
                let expected = if n > cap { utility } else { 0.0 };
                assert_eq!(f.cost(n), expected, "cap {cap}, count {n}");
            }

            assert_eq!(f.cost(cap), 0.0);
            assert_eq!(f.cost(cap + 1), utility);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let f = MaxActiveFunction::new(3, 10.0);
        let first: Vec<f64> = (0..10).map(|n| f.cost(n)).collect();
        for n in (0..10).rev() {
            let _ = f.cost(n);
        }
        let second: Vec<f64> = (0..10).map(|n| f.cost(n)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_evaluation() {
        let f = MaxActiveFunction::new(3, 10.0);
        let shared = &f;

        let totals: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || (0..=10).map(|n| shared.cost(n)).sum::<f64>()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        assert!(totals.iter().all(|&t| t == 70.0));
    }

    #[test]
    fn test_display() {
        let f = MaxActiveFunction::new(3, 10.5);
        assert_eq!(
            format!("{}", f),
            "MaxActiveFunction(max_active_variables: 3, utility: 10.5)"
        );
    }
}
