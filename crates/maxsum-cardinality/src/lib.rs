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

//! # Max-Sum Cardinality
//!
//! Cardinality cost functions for max-sum solvers over factor graphs. A
//! cardinality factor connects a group of boolean variables and prices each
//! configuration purely by how many of them are active; the functions in this
//! crate are the pluggable pricing rules such a factor consults.
//!
//! ## Modules
//!
//! - `num`: the `UtilityNumeric` bound shared by all functions.
//! - `function`: the `CardinalityFunction` capability, blanket impls for
//!   references and smart pointers, and a closure adapter.
//! - `max_active`: `MaxActiveFunction`, a hard step that charges a fixed
//!   utility once more than `k` variables are active.
//! - `composite`: sums several functions into one.
//! - `table`: `CostTable`, the precomputed per-count costs a factor consumes
//!   when computing outgoing messages.
//! - `validation`: exhaustive shape checks for custom functions.
//!
//! ## Guarantees
//!
//! Every function is immutable once built and evaluation is total: `cost`
//! never fails and never panics for any `i64` count. Values are therefore safe
//! to share across solver threads without synchronization.

pub mod composite;
pub mod function;
pub mod max_active;
pub mod num;
pub mod table;
pub mod validation;
