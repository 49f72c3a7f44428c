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

//! Precomputed cost tables.
//!
//! A max-sum cardinality factor with `k` variables evaluates its function for
//! every count in `0..=k` each time it computes an outgoing message. The
//! function is pure, so the factor can tabulate it once and reuse the result
//! for the lifetime of the factor. `CostTable` holds those values for one
//! contiguous, inclusive range of counts.
//!
//! A table is itself a `CardinalityFunction`. Counts outside the tabulated
//! range are clamped to the nearest edge, which reproduces the source
//! function exactly whenever it is constant beyond the range (as every
//! threshold-style function is once the range covers the threshold).

use crate::{function::CardinalityFunction, num::UtilityNumeric};
use tracing::debug;

/// The error type for building a `CostTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostTableError {
    /// The lower end of the range lies above the upper end.
    InvalidRange { min_count: i64, max_count: i64 },
    /// The range holds more counts than can be addressed in memory.
    RangeTooLarge { min_count: i64, max_count: i64 },
}

impl std::fmt::Display for CostTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange {
                min_count,
                max_count,
            } => write!(
                f,
                "Invalid count range: min_count {} is greater than max_count {}",
                min_count, max_count
            ),
            Self::RangeTooLarge {
                min_count,
                max_count,
            } => write!(
                f,
                "Count range [{}, {}] is too large to tabulate",
                min_count, max_count
            ),
        }
    }
}

impl std::error::Error for CostTableError {}

/// The costs of a cardinality function over an inclusive range of counts.
///
/// The table is never empty: a successfully built table covers at least one
/// count.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable<U>
where
    U: UtilityNumeric,
{
    min_count: i64,
    costs: Vec<U>,
}

impl<U> CostTable<U>
where
    U: UtilityNumeric,
{
    /// Tabulates `function` for every count a factor over `num_variables`
    /// variables can observe, that is `0..=num_variables`.
    ///
    /// # Errors
    ///
    /// Returns `CostTableError::RangeTooLarge` if `num_variables` does not fit
    /// in an `i64`, or if the table cannot be allocated. When `num_variables`
    /// does not fit, the reported `max_count` is saturated to `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use maxsum_cardinality::max_active::MaxActiveFunction;
    /// # use maxsum_cardinality::table::CostTable;
    ///
    /// let table = CostTable::new(&MaxActiveFunction::new(1, 4.0), 3).unwrap();
    /// assert_eq!(table.costs(), &[0.0, 0.0, 4.0, 4.0]);
    /// ```
    pub fn new<F>(function: &F, num_variables: usize) -> Result<Self, CostTableError>
    where
        F: CardinalityFunction<U> + ?Sized,
    {
        let max_count = i64::try_from(num_variables).map_err(|_| {
            CostTableError::RangeTooLarge {
                min_count: 0,
                max_count: i64::MAX,
            }
        })?;
        Self::over_range(function, 0, max_count)
    }

    /// Tabulates `function` for every count in `min_count..=max_count`.
    ///
    /// # Errors
    ///
    /// Returns `CostTableError::InvalidRange` if `min_count > max_count`, and
    /// `CostTableError::RangeTooLarge` if the number of counts in the range
    /// does not fit in a `usize` or the table cannot be allocated.
    pub fn over_range<F>(
        function: &F,
        min_count: i64,
        max_count: i64,
    ) -> Result<Self, CostTableError>
    where
        F: CardinalityFunction<U> + ?Sized,
    {
        if min_count > max_count {
            return Err(CostTableError::InvalidRange {
                min_count,
                max_count,
            });
        }

        let too_large = CostTableError::RangeTooLarge {
            min_count,
            max_count,
        };
        let span = max_count.checked_sub(min_count).ok_or(too_large)?;
        let len = usize::try_from(span)
            .ok()
            .and_then(|s| s.checked_add(1))
            .ok_or(too_large)?;

        let mut costs = Vec::new();
        costs.try_reserve_exact(len).map_err(|_| too_large)?;
        costs.extend((min_count..=max_count).map(|n| function.cost(n)));

        debug!(
            function = function.name(),
            min_count, max_count, "tabulated cardinality costs"
        );

        Ok(Self { min_count, costs })
    }

    /// Returns the smallest tabulated count.
    #[inline]
    pub fn min_count(&self) -> i64 {
        self.min_count
    }

    /// Returns the largest tabulated count.
    #[inline]
    pub fn max_count(&self) -> i64 {
        // Fits: the range was validated on construction.
        self.min_count + (self.costs.len() as i64 - 1)
    }

    /// Returns the number of tabulated counts.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Always `false`; provided for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Returns the tabulated costs, ordered by count starting at `min_count`.
    #[inline]
    pub fn costs(&self) -> &[U] {
        &self.costs
    }

    /// Returns the cost of `num_active_variables`, or `None` if the count lies
    /// outside the tabulated range.
    #[inline]
    pub fn get(&self, num_active_variables: i64) -> Option<U> {
        let offset = num_active_variables.checked_sub(self.min_count)?;
        let index = usize::try_from(offset).ok()?;
        self.costs.get(index).copied()
    }

    /// Iterates over `(count, cost)` pairs in ascending count order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (i64, U)> + '_ {
        let min_count = self.min_count;
        self.costs
            .iter()
            .enumerate()
            .map(move |(i, &cost)| (min_count + i as i64, cost))
    }
}

impl<U> CardinalityFunction<U> for CostTable<U>
where
    U: UtilityNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "CostTable"
    }

    #[inline]
    fn cost(&self, num_active_variables: i64) -> U {
        let clamped = num_active_variables.clamp(self.min_count, self.max_count());
        self.costs[(clamped - self.min_count) as usize]
    }
}

impl<U> std::fmt::Display for CostTable<U>
where
    U: UtilityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CostTable(min_count: {}, max_count: {})",
            self.min_count,
            self.max_count()
        )
    }
}
