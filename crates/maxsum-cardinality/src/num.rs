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

//! # Utility Numeric Trait
//!
//! Unified numeric bound for utilities and costs. Max-sum messages are real
//! valued, so every cardinality function is generic over a floating point
//! type rather than tied to `f64`.

use num_traits::Float;

/// A trait alias for numeric types that can be used as a utility or cost.
/// These are usually `f32` and `f64`.
///
/// The sign convention is left to the caller: a maximizing solver reads the
/// value as a utility, a minimizing one as a cost.
pub trait UtilityNumeric:
    Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> UtilityNumeric for T where
    T: Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}
