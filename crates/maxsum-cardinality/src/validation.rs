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

//! Shape checks for cardinality functions.
//!
//! Max-sum factors that exploit the structure of their function (for example
//! by only scanning counts around a threshold) are only correct if the
//! function really has that structure. These helpers probe a function over an
//! inclusive range of counts and report whether it matches a given shape. They
//! never modify the function and prove nothing beyond the probed range; use
//! them in tests and when accepting user supplied functions.
//!
//! Costs are compared with `==` and `<`, so a function that returns `NaN`
//! for some count fails every check that inspects that count.

use crate::{function::CardinalityFunction, num::UtilityNumeric};
use tracing::debug;

/// Returns the smallest count in `min_count..=max_count` whose cost is not
/// zero, or `None` if the function is free over the whole range.
pub fn first_violating_count<U, F>(function: &F, min_count: i64, max_count: i64) -> Option<i64>
where
    U: UtilityNumeric,
    F: CardinalityFunction<U> + ?Sized,
{
    (min_count..=max_count).find(|&n| function.cost(n) != U::zero())
}

/// Checks whether costs never decrease as the count grows over
/// `min_count..=max_count`. An empty range is trivially non-decreasing.
pub fn is_non_decreasing_exhaustive<U, F>(function: &F, min_count: i64, max_count: i64) -> bool
where
    U: UtilityNumeric,
    F: CardinalityFunction<U> + ?Sized,
{
    let mut counts = min_count..=max_count;
    let Some(first) = counts.next() else {
        return true;
    };

    let mut previous = function.cost(first);
    for n in counts {
        let current = function.cost(n);
        if !check_non_decreasing(previous, current) {
            debug!(
                function = function.name(),
                count = n,
                "cost decreased as the count grew"
            );
            return false;
        }
        previous = current;
    }
    true
}

/// Checks whether `function` is a hard step at `threshold` over
/// `min_count..=max_count`: every count at or below the threshold must cost
/// exactly zero and every count above it exactly `utility`.
///
/// Every `MaxActiveFunction::new(threshold, utility)` passes this check.
pub fn is_step_function_exhaustive<U, F>(
    function: &F,
    threshold: i64,
    utility: U,
    min_count: i64,
    max_count: i64,
) -> bool
where
    U: UtilityNumeric,
    F: CardinalityFunction<U> + ?Sized,
{
    for n in min_count..=max_count {
        let expected = if n > threshold { utility } else { U::zero() };
        let actual = function.cost(n);
        if actual != expected {
            debug!(
                function = function.name(),
                count = n,
                threshold,
                %expected,
                %actual,
                "cost does not match step shape"
            );
            return false;
        }
    }
    true
}

/// Returns whether `current` does not fall below `previous`.
///
/// Behavior:
/// - If both are comparable, returns `current >= previous`.
/// - If either is `NaN`, returns `false`.
#[inline(always)]
fn check_non_decreasing<U: UtilityNumeric>(previous: U, current: U) -> bool {
    current >= previous
}
