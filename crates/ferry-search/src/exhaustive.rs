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

//! # Exhaustive Reference Solver
//!
//! Computes the true minimal capacity over every way of splitting the items
//! into at most `k` trips. The greedy largest-fit search is a heuristic; this
//! solver is the yardstick it is measured against on small instances.
//!
//! Items are placed heaviest first by depth-first search. Two pruning rules
//! keep the tree small:
//!
//! - Trips whose current loads are equal are interchangeable, so an item is
//!   only tried in the first of them.
//! - A branch is cut as soon as some trip reaches the best capacity found so
//!   far.
//!
//! The search starts from the single-trip plan (capacity = total weight) and
//! stops early once it meets `max(max weight, ceil(total / k))`, below which
//! no plan exists. Work still grows exponentially with the item count, so
//! instances are limited to `MAX_ITEMS` items.

use crate::num::CapacityNumeric;
use ferry_model::{
    index::{ItemIndex, TripIndex},
    instance::Instance,
    plan::LoadPlan,
};
use num_traits::NumCast;

/// The largest instance the solver accepts.
pub const MAX_ITEMS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustiveError {
    TooManyItems { num_items: usize, max_items: usize },
}

impl std::fmt::Display for ExhaustiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExhaustiveError::TooManyItems {
                num_items,
                max_items,
            } => write!(
                f,
                "Instance has {} items, exhaustive search supports at most {}",
                num_items, max_items
            ),
        }
    }
}

impl std::error::Error for ExhaustiveError {}

/// Exact minimal-capacity solver for small instances.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    nodes_explored: u64,
}

impl ExhaustiveSolver {
    #[inline]
    pub fn new() -> Self {
        Self { nodes_explored: 0 }
    }

    /// Returns the number of search nodes visited by the last `solve`.
    #[inline]
    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Returns a plan whose capacity is the smallest achievable maximum trip
    /// load for `instance`.
    pub fn solve<T>(&mut self, instance: &Instance<T>) -> Result<LoadPlan<T>, ExhaustiveError>
    where
        T: CapacityNumeric,
    {
        if instance.num_items() > MAX_ITEMS {
            return Err(ExhaustiveError::TooManyItems {
                num_items: instance.num_items(),
                max_items: MAX_ITEMS,
            });
        }

        let mut order: Vec<ItemIndex> = ItemIndex::range(instance.num_items()).collect();
        order.sort_by(|&a, &b| instance.weight(b).cmp(&instance.weight(a)));

        let mut state = DepthFirst {
            instance,
            order,
            loads: vec![T::ZERO; instance.num_trip_slots()],
            assignment: vec![TripIndex::new(0); instance.num_items()],
            best: instance.total_weight(),
            best_assignment: vec![TripIndex::new(0); instance.num_items()],
            lower_bound: lower_bound(instance),
            nodes: 0,
        };
        state.descend(0, T::ZERO);
        self.nodes_explored = state.nodes;

        let mut loads = vec![T::ZERO; instance.num_trip_slots()];
        for (item, weight) in instance.items() {
            let trip = state.best_assignment[item.get()].get();
            loads[trip] = loads[trip] + weight;
        }

        Ok(LoadPlan::new(state.best, state.best_assignment, loads))
    }
}

/// `max(max weight, ceil(total / k))`: no plan does better.
fn lower_bound<T>(instance: &Instance<T>) -> T
where
    T: CapacityNumeric,
{
    let total = instance.total_weight();
    // A trip count beyond the range of `T` exceeds the total weight.
    let average = match <T as NumCast>::from(instance.num_trips()) {
        Some(k) if !(total % k).is_zero() => total / k + T::ONE,
        Some(k) => total / k,
        None => T::ONE,
    };
    average.max(instance.max_weight())
}

struct DepthFirst<'i, T> {
    instance: &'i Instance<T>,
    order: Vec<ItemIndex>,
    loads: Vec<T>,
    assignment: Vec<TripIndex>,
    best: T,
    best_assignment: Vec<TripIndex>,
    lower_bound: T,
    nodes: u64,
}

impl<'i, T> DepthFirst<'i, T>
where
    T: CapacityNumeric,
{
    fn descend(&mut self, depth: usize, current_max: T) {
        self.nodes = self.nodes.saturating_add(1);

        if self.best <= self.lower_bound || current_max >= self.best {
            return;
        }
        if depth == self.order.len() {
            self.best = current_max;
            self.best_assignment.copy_from_slice(&self.assignment);
            return;
        }

        let item = self.order[depth];
        let weight = self.instance.weight(item);

        for t in 0..self.loads.len() {
            let load = self.loads[t];
            if self.loads[..t].contains(&load) {
                continue;
            }
            // Bounded by the total weight, which fits in `T`.
            let new_load = load + weight;
            if new_load >= self.best {
                continue;
            }

            self.loads[t] = new_load;
            self.assignment[item.get()] = TripIndex::new(t);
            self.descend(depth + 1, current_max.max(new_load));
            self.loads[t] = load;

            if self.best <= self.lower_bound {
                return;
            }
        }
    }
}
