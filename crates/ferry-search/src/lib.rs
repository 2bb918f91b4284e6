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

//! # Ferry Search
//!
//! The feasibility predicate and the parametric capacity search built on it.
//!
//! Given `n` weighted items and `k` trips, the search finds the smallest
//! per-trip capacity for which a greedy largest-fit packing places every item.
//! The predicate is monotone in the capacity, so the answer is found by
//! binary search over `[max weight, total weight]`.
//!
//! ## Modules
//!
//! - `num`: `CapacityNumeric`, the bound collection for weight types.
//! - `feasibility`: The `PackingStrategy` seam, the `GreedyLargestFit`
//!   heuristic, and the `is_feasible` predicate.
//! - `search`: `CapacitySearch` and its builder, running the binary search
//!   under a stack of monitors.
//! - `monitor`: Observers and early-stop controls for the search.
//! - `result` and `stats`: Search outcomes and counters.
//! - `exhaustive`: An exact reference solver for small instances.
//!
//! ## Usage
//!
//! ```rust
//! use ferry_model::instance::Instance;
//! use ferry_search::search::CapacitySearchBuilder;
//!
//! let instance = Instance::<u64>::new(2, vec![1, 2, 3]).unwrap();
//! let mut search = CapacitySearchBuilder::new().build();
//! let outcome = search.solve(&instance);
//! assert!(outcome.is_minimal());
//! assert_eq!(outcome.capacity(), Some(3));
//! ```

pub mod exhaustive;
pub mod feasibility;
pub mod monitor;
pub mod num;
pub mod result;
pub mod search;
pub mod stats;
