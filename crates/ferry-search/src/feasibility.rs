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

//! # Feasibility Predicate
//!
//! Decides whether `k` trips of a given capacity can carry every item, using
//! a greedy largest-fit rule applied trip by trip:
//!
//! 1. Put all weights into an ordered multiset (duplicates kept).
//! 2. For each trip in turn, start with the full capacity and repeatedly take
//!    the heaviest remaining item that still fits, until nothing fits.
//! 3. The capacity is feasible iff the multiset ends up empty.
//!
//! The rule only ever asks for "the greatest weight not exceeding the room
//! left". It never skips a fitting item to try a lighter one first, and it
//! never backtracks. This is not an optimal bin packing: for some weight sets
//! a smarter packing succeeds at a capacity where this rule strands an item.
//! Capacity search results are defined relative to this exact rule, so it is
//! kept as is.
//!
//! The predicate is monotone in the capacity: if a capacity is feasible, so is
//! every larger one. Binary search depends on that; any `PackingStrategy`
//! substituted into the search must preserve it.
//!
//! Each call builds its own working multiset from the instance and drops it
//! on return. Nothing is shared between calls.

use crate::num::CapacityNumeric;
use ferry_core::collections::multiset::BucketMultiset;
use ferry_model::{
    index::{ItemIndex, TripIndex},
    instance::Instance,
    plan::LoadPlan,
};

/// The result of packing an instance under one capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackingOutcome<T> {
    /// Every item was placed; the plan is the witness.
    Packed(LoadPlan<T>),
    /// Some items could not be placed in any trip.
    Stranded {
        /// The items left behind, in ascending weight order.
        unplaced: Vec<ItemIndex>,
    },
}

impl<T> PackingOutcome<T> {
    /// Returns `true` if every item was placed.
    #[inline]
    pub fn is_packed(&self) -> bool {
        matches!(self, PackingOutcome::Packed(_))
    }

    /// Returns the witness plan, if packing succeeded.
    #[inline]
    pub fn plan(&self) -> Option<&LoadPlan<T>> {
        match self {
            PackingOutcome::Packed(plan) => Some(plan),
            PackingOutcome::Stranded { .. } => None,
        }
    }

    /// Consumes the outcome and returns the witness plan, if any.
    #[inline]
    pub fn into_plan(self) -> Option<LoadPlan<T>> {
        match self {
            PackingOutcome::Packed(plan) => Some(plan),
            PackingOutcome::Stranded { .. } => None,
        }
    }
}

/// A rule distributing items over the trips of an instance under a capacity.
///
/// Implementations must be monotone in the capacity and must succeed at the
/// instance's total weight; the capacity search relies on both.
pub trait PackingStrategy<T>
where
    T: CapacityNumeric,
{
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Packs `instance` under `capacity`, producing a witness plan or the
    /// list of stranded items.
    fn pack(&self, instance: &Instance<T>, capacity: T) -> PackingOutcome<T>;

    /// Returns `true` if `capacity` suffices. Implementations may override
    /// this to skip building a plan.
    #[inline]
    fn fits(&self, instance: &Instance<T>, capacity: T) -> bool {
        self.pack(instance, capacity).is_packed()
    }
}

impl<T> std::fmt::Debug for dyn PackingStrategy<T>
where
    T: CapacityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackingStrategy({})", self.name())
    }
}

/// Greedy largest-fit packing, trip by trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GreedyLargestFit;

impl GreedyLargestFit {
    /// Creates the strategy.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the greedy rule, reporting every placement to `place`, and
    /// returns whatever could not be placed.
    fn load_trips<T, F>(
        instance: &Instance<T>,
        capacity: T,
        mut place: F,
    ) -> BucketMultiset<T, ItemIndex>
    where
        T: CapacityNumeric,
        F: FnMut(ItemIndex, TripIndex, T),
    {
        // Inserted back to front so that equal weights leave in item order.
        let mut remaining: BucketMultiset<T, ItemIndex> =
            instance.items().rev().map(|(item, w)| (w, item)).collect();

        // Trips past the n-th are empty: were an item still left by then,
        // some earlier trip took nothing, and every later trip would too.
        for trip in TripIndex::range(instance.num_trip_slots()) {
            if remaining.is_empty() {
                break;
            }

            let mut room = capacity;
            let mut loaded = false;
            while let Some((weight, item)) = remaining.take_greatest_at_most(room) {
                room = room - weight;
                loaded = true;
                place(item, trip, weight);
            }
            if !loaded {
                break;
            }
        }

        remaining
    }
}

impl<T> PackingStrategy<T> for GreedyLargestFit
where
    T: CapacityNumeric,
{
    fn name(&self) -> &str {
        "GreedyLargestFit"
    }

    fn pack(&self, instance: &Instance<T>, capacity: T) -> PackingOutcome<T> {
        let mut trips = vec![TripIndex::new(0); instance.num_items()];
        let mut loads = vec![T::ZERO; instance.num_trip_slots()];

        let remaining = Self::load_trips(instance, capacity, |item, trip, weight| {
            trips[item.get()] = trip;
            loads[trip.get()] = loads[trip.get()] + weight;
        });

        if remaining.is_empty() {
            PackingOutcome::Packed(LoadPlan::new(capacity, trips, loads))
        } else {
            PackingOutcome::Stranded {
                unplaced: remaining.into_values().collect(),
            }
        }
    }

    #[inline]
    fn fits(&self, instance: &Instance<T>, capacity: T) -> bool {
        Self::load_trips(instance, capacity, |_, _, _| {}).is_empty()
    }
}

/// The feasibility predicate: can `instance` be carried in its `k` trips at
/// `capacity` under the greedy largest-fit rule?
///
/// # Examples
///
/// ```rust
/// use ferry_model::instance::Instance;
/// use ferry_search::feasibility::is_feasible;
///
/// let instance = Instance::<u64>::new(2, vec![1, 2, 3]).unwrap();
/// assert!(!is_feasible(&instance, 2));
/// assert!(is_feasible(&instance, 3));
/// ```
#[inline]
pub fn is_feasible<T>(instance: &Instance<T>, capacity: T) -> bool
where
    T: CapacityNumeric,
{
    GreedyLargestFit.fits(instance, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = u64;

    fn instance(k: usize, weights: &[IntegerType]) -> Instance<IntegerType> {
        Instance::new(k, weights.to_vec()).unwrap()
    }

    fn ti(i: usize) -> TripIndex {
        TripIndex::new(i)
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_largest_first_then_fill() {
        // cap 3: trip 0 takes 3, trip 1 takes 2 then 1
        let inst = instance(2, &[1, 2, 3]);
        let outcome = GreedyLargestFit.pack(&inst, 3);
        let plan = outcome.plan().expect("expected a packing at capacity 3");

        assert_eq!(plan.trips(), &[ti(1), ti(1), ti(0)]);
        assert_eq!(plan.loads(), &[3, 3]);
        assert_eq!(plan.validate(&inst), Ok(()));
    }

    #[test]
    fn test_stranded_items_are_reported() {
        // cap 2: trip 0 takes 2, trip 1 takes 1; the 3 never fits
        let inst = instance(2, &[1, 2, 3]);
        let outcome = GreedyLargestFit.pack(&inst, 2);
        assert_eq!(
            outcome,
            PackingOutcome::Stranded {
                unplaced: vec![ii(2)]
            }
        );
        assert!(!outcome.is_packed());
        assert_eq!(outcome.into_plan(), None);
    }

    #[test]
    fn test_capacity_below_max_weight_is_infeasible() {
        let inst = instance(5, &[4, 9, 1]);
        assert!(!is_feasible(&inst, 8));
        assert!(is_feasible(&inst, 9));
    }

    #[test]
    fn test_zero_capacity_is_infeasible() {
        let inst = instance(3, &[1]);
        assert!(!is_feasible(&inst, 0));
    }

    #[test]
    fn test_total_weight_fits_in_first_trip() {
        let inst = instance(3, &[5, 1, 4, 4, 2]);
        let outcome = GreedyLargestFit.pack(&inst, inst.total_weight());
        let plan = outcome.plan().unwrap();
        assert_eq!(plan.num_trips_used(), 1);
        assert_eq!(plan.trip_load(ti(0)), 16);
        assert_eq!(plan.trip_load(ti(2)), 0);
    }

    #[test]
    fn test_does_not_skip_past_fitting_item() {
        // cap 5: trip 0 takes 4 (largest <= 5) then nothing fits the 1 left of room,
        // so 3 and 2 must share trip 1 and trip 0 is not filled with 3 + 2.
        let inst = instance(2, &[4, 3, 2]);
        let plan = GreedyLargestFit.pack(&inst, 5).into_plan().unwrap();
        assert_eq!(plan.trips(), &[ti(0), ti(1), ti(1)]);
        assert_eq!(plan.loads(), &[4, 5]);
    }

    #[test]
    fn test_greedy_can_miss_a_tighter_packing() {
        // {31, 14, 16} and {27, 27, 12} both fit at 66, but largest-fit pairs
        // 31 with 27 in the first trip and strands the 12 until 69.
        let inst = instance(2, &[14, 27, 12, 31, 27, 16]);
        assert!(!is_feasible(&inst, 66));
        assert!(!is_feasible(&inst, 68));
        assert!(is_feasible(&inst, 69));

        let manual = LoadPlan::new(
            66,
            vec![ti(0), ti(1), ti(1), ti(0), ti(1), ti(0)],
            vec![61, 66],
        );
        assert_eq!(manual.validate(&inst), Ok(()));
    }

    #[test]
    fn test_equal_weights_leave_in_item_order() {
        let inst = instance(3, &[10, 10, 10, 10]);
        let plan = GreedyLargestFit.pack(&inst, 20).into_plan().unwrap();
        assert_eq!(plan.trips(), &[ti(0), ti(0), ti(1), ti(1)]);
    }

    #[test]
    fn test_fits_agrees_with_pack_and_is_idempotent() {
        let inst = instance(3, &[7, 3, 3, 2, 9, 1, 5]);
        for cap in 0..=inst.total_weight() + 2 {
            let first = GreedyLargestFit.fits(&inst, cap);
            let second = GreedyLargestFit.fits(&inst, cap);
            assert_eq!(first, second, "predicate changed between calls at {cap}");
            assert_eq!(first, GreedyLargestFit.pack(&inst, cap).is_packed());
        }
        // the instance itself is untouched
        assert_eq!(inst.weights(), &[7, 3, 3, 2, 9, 1, 5]);
    }

    #[test]
    fn test_randomized_monotonicity_and_witnesses() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xfe11);
        for _ in 0..300 {
            let n = rng.gen_range(1..10);
            let k = rng.gen_range(1..5);
            let weights: Vec<IntegerType> = (0..n).map(|_| rng.gen_range(1..25)).collect();
            let inst = instance(k, &weights);

            assert!(!is_feasible(&inst, inst.max_weight() - 1));
            assert!(is_feasible(&inst, inst.total_weight()));

            let mut seen_feasible = false;
            for cap in inst.max_weight()..=inst.total_weight() {
                match GreedyLargestFit.pack(&inst, cap) {
                    PackingOutcome::Packed(plan) => {
                        assert_eq!(plan.validate(&inst), Ok(()));
                        seen_feasible = true;
                    }
                    PackingOutcome::Stranded { unplaced } => {
                        assert!(
                            !seen_feasible,
                            "lost feasibility at {cap} for k={k}, weights={weights:?}"
                        );
                        assert!(!unplaced.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_trip_count_far_above_item_count() {
        let inst = instance(usize::MAX, &[5, 3]);
        assert!(!is_feasible(&inst, 4));
        assert!(is_feasible(&inst, 5));

        let plan = GreedyLargestFit.pack(&inst, 5).into_plan().unwrap();
        assert_eq!(plan.num_trips(), 2);
        assert_eq!(plan.loads(), &[5, 3]);
        assert_eq!(plan.validate(&inst), Ok(()));
    }

    #[test]
    fn test_more_trips_than_items_leaves_surplus_empty() {
        // cap 7: trip 0 takes 7, trip 1 takes 4 then 2
        let inst = instance(10, &[2, 7, 4]);
        let plan = GreedyLargestFit.pack(&inst, 7).into_plan().unwrap();
        assert_eq!(plan.trips(), &[ti(1), ti(0), ti(1)]);
        assert_eq!(plan.loads(), &[7, 6, 0]);
        assert_eq!(plan.num_trips_used(), 2);
    }

    #[test]
    fn test_strategy_name_and_debug() {
        let strategy: &dyn PackingStrategy<IntegerType> = &GreedyLargestFit::new();
        assert_eq!(strategy.name(), "GreedyLargestFit");
        assert_eq!(format!("{:?}", strategy), "PackingStrategy(GreedyLargestFit)");
    }
}
