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

//! Load plans.
//!
//! A `LoadPlan` records which trip carries each item under a given capacity,
//! together with the resulting per-trip loads. The search returns one as the
//! witness for the capacity it reports, so callers can inspect or re-check
//! the packing instead of trusting a bare number.
//!
//! Data is laid out as a Structure of Arrays: `trips[i]` is the trip of item
//! `i`, `loads[t]` is the load of trip `t`. Trips that carry nothing keep a
//! load of zero. A plan has `min(k, n)` load slots: with more trips than
//! items, the surplus trips are empty in every packing and are not stored.

use crate::{
    index::{ItemIndex, TripIndex},
    instance::Instance,
};
use ferry_core::num::ops::CheckedAddVal;
use num_traits::{PrimInt, Unsigned};

/// A reason a plan does not fit an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanViolation<T> {
    /// The plan covers a different number of items than the instance.
    ItemCountMismatch { expected: usize, actual: usize },
    /// The plan has a different number of trip slots than the instance.
    TripCountMismatch { expected: usize, actual: usize },
    /// An item is assigned to a trip that does not exist.
    TripOutOfRange { item: ItemIndex, trip: TripIndex },
    /// A recorded trip load disagrees with the sum of its items.
    LoadMismatch {
        trip: TripIndex,
        recorded: T,
        actual: T,
    },
    /// A trip carries more than the plan's capacity.
    CapacityExceeded {
        trip: TripIndex,
        load: T,
        capacity: T,
    },
}

impl<T> std::fmt::Display for PlanViolation<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemCountMismatch { expected, actual } => {
                write!(f, "Plan covers {} items, instance has {}", actual, expected)
            }
            Self::TripCountMismatch { expected, actual } => {
                write!(f, "Plan has {} trips, instance allows {}", actual, expected)
            }
            Self::TripOutOfRange { item, trip } => {
                write!(f, "{} is assigned to nonexistent {}", item, trip)
            }
            Self::LoadMismatch {
                trip,
                recorded,
                actual,
            } => write!(f, "{} records load {} but carries {}", trip, recorded, actual),
            Self::CapacityExceeded {
                trip,
                load,
                capacity,
            } => write!(f, "{} carries {} which exceeds capacity {}", trip, load, capacity),
        }
    }
}

impl<T> std::error::Error for PlanViolation<T> where T: std::fmt::Display + std::fmt::Debug {}

/// An assignment of every item to a trip under a fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadPlan<T> {
    capacity: T,
    trips: Vec<TripIndex>,
    loads: Vec<T>,
}

impl<T> LoadPlan<T>
where
    T: PrimInt + Unsigned + CheckedAddVal,
{
    /// Constructs a new `LoadPlan`.
    ///
    /// `trips[i]` is the trip of item `i`; `loads[t]` the load of trip `t`.
    /// Consistency with an instance is checked by `validate`, not here.
    #[inline]
    pub fn new(capacity: T, trips: Vec<TripIndex>, loads: Vec<T>) -> Self {
        Self {
            capacity,
            trips,
            loads,
        }
    }

    /// Returns the capacity this plan was packed under.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of items covered by the plan.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.trips.len()
    }

    /// Returns the number of trip slots, used or not.
    #[inline]
    pub fn num_trips(&self) -> usize {
        self.loads.len()
    }

    /// Returns the trip that carries `item_index`.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn trip_for_item(&self, item_index: ItemIndex) -> TripIndex {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `LoadPlan::trip_for_item` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.trips[index]
    }

    /// Returns the load of `trip_index`.
    ///
    /// # Panics
    ///
    /// Panics if `trip_index` is out of bounds.
    #[inline]
    pub fn trip_load(&self, trip_index: TripIndex) -> T {
        let index = trip_index.get();
        debug_assert!(
            index < self.num_trips(),
            "called `LoadPlan::trip_load` with trip index out of bounds: the len is {} but the index is {}",
            self.num_trips(),
            index
        );

        self.loads[index]
    }

    /// Returns the trip of every item, in item order.
    #[inline]
    pub fn trips(&self) -> &[TripIndex] {
        &self.trips
    }

    /// Returns the load of every trip, in trip order.
    #[inline]
    pub fn loads(&self) -> &[T] {
        &self.loads
    }

    /// Returns the number of trips carrying at least one item.
    #[inline]
    pub fn num_trips_used(&self) -> usize {
        self.loads.iter().filter(|l| !l.is_zero()).count()
    }

    /// Returns the heaviest trip load, or zero for a plan without trips.
    #[inline]
    pub fn max_load(&self) -> T {
        self.loads.iter().copied().max().unwrap_or_else(T::zero)
    }

    /// Returns the items carried by `trip_index`, in item order.
    pub fn items_in_trip(&self, trip_index: TripIndex) -> impl Iterator<Item = ItemIndex> + '_ {
        self.trips
            .iter()
            .enumerate()
            .filter(move |&(_, &t)| t == trip_index)
            .map(|(i, _)| ItemIndex::new(i))
    }

    /// Checks that this plan carries every item of `instance` within capacity.
    ///
    /// Loads are recomputed from the instance weights, so a plan built by
    /// hand with wrong bookkeeping is caught as well.
    pub fn validate(&self, instance: &Instance<T>) -> Result<(), PlanViolation<T>> {
        if self.num_items() != instance.num_items() {
            return Err(PlanViolation::ItemCountMismatch {
                expected: instance.num_items(),
                actual: self.num_items(),
            });
        }
        if self.num_trips() != instance.num_trip_slots() {
            return Err(PlanViolation::TripCountMismatch {
                expected: instance.num_trip_slots(),
                actual: self.num_trips(),
            });
        }

        let mut actual = vec![T::zero(); self.num_trips()];
        for (item, weight) in instance.items() {
            let trip = self.trips[item.get()];
            let slot = actual
                .get_mut(trip.get())
                .ok_or(PlanViolation::TripOutOfRange { item, trip })?;
            // Cannot overflow: every partial sum is bounded by the validated total.
            *slot = slot.checked_add_val(weight).unwrap_or_else(T::max_value);
        }

        for (t, (&recorded, &load)) in self.loads.iter().zip(actual.iter()).enumerate() {
            let trip = TripIndex::new(t);
            if recorded != load {
                return Err(PlanViolation::LoadMismatch {
                    trip,
                    recorded,
                    actual: load,
                });
            }
            if load > self.capacity {
                return Err(PlanViolation::CapacityExceeded {
                    trip,
                    load,
                    capacity: self.capacity,
                });
            }
        }

        Ok(())
    }
}

impl<T> std::fmt::Display for LoadPlan<T>
where
    T: PrimInt + Unsigned + CheckedAddVal + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Load Plan")?;
        writeln!(f, "   Capacity: {}", self.capacity)?;
        writeln!(f, "   Trips Used: {} of {}", self.num_trips_used(), self.num_trips())?;
        writeln!(f)?;

        if self.num_items() == 0 {
            writeln!(f, "   (No items assigned)")?;
            return Ok(());
        }

        writeln!(f, "   {:<6} | {:<8} | {:<}", "Trip", "Load", "Items")?;
        writeln!(f, "   {:-<6}-+-{:-<8}-+-{:-<12}", "", "", "")?;
        for t in TripIndex::range(self.num_trips()) {
            let items: Vec<String> = self
                .items_in_trip(t)
                .map(|i| i.get().to_string())
                .collect();
            writeln!(
                f,
                "   {:<6} | {:<8} | {}",
                t.get(),
                self.loads[t.get()],
                items.join(" ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = u64;

    fn ti(i: usize) -> TripIndex {
        TripIndex::new(i)
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn instance(k: usize, weights: &[IntegerType]) -> Instance<IntegerType> {
        Instance::new(k, weights.to_vec()).unwrap()
    }

    #[test]
    fn test_accessors() {
        // weights [1, 2, 3]; trip 0 carries item 2, trip 1 carries items 0 and 1
        let plan = LoadPlan::<IntegerType>::new(3, vec![ti(1), ti(1), ti(0)], vec![3, 3]);
        assert_eq!(plan.capacity(), 3);
        assert_eq!(plan.num_items(), 3);
        assert_eq!(plan.num_trips(), 2);
        assert_eq!(plan.trip_for_item(ii(2)), ti(0));
        assert_eq!(plan.trip_load(ti(1)), 3);
        assert_eq!(plan.num_trips_used(), 2);
        assert_eq!(plan.max_load(), 3);
        let second: Vec<_> = plan.items_in_trip(ti(1)).collect();
        assert_eq!(second, vec![ii(0), ii(1)]);
    }

    #[test]
    fn test_unused_trips_count_as_empty() {
        let plan = LoadPlan::<IntegerType>::new(10, vec![ti(0), ti(0), ti(0)], vec![9, 0, 0]);
        assert_eq!(plan.num_trips_used(), 1);
        assert_eq!(plan.items_in_trip(ti(2)).count(), 0);
        assert!(plan.validate(&instance(3, &[7, 1, 1])).is_ok());
    }

    #[test]
    fn test_validate_accepts_consistent_plan() {
        let plan = LoadPlan::<IntegerType>::new(3, vec![ti(1), ti(1), ti(0)], vec![3, 3]);
        assert_eq!(plan.validate(&instance(2, &[1, 2, 3])), Ok(()));
    }

    #[test]
    fn test_validate_detects_count_mismatches() {
        let plan = LoadPlan::<IntegerType>::new(6, vec![ti(0), ti(0)], vec![3, 0]);
        assert_eq!(
            plan.validate(&instance(2, &[1, 2, 3])),
            Err(PlanViolation::ItemCountMismatch {
                expected: 3,
                actual: 2
            })
        );
        let two_slots = LoadPlan::<IntegerType>::new(6, vec![ti(0), ti(0), ti(0)], vec![6, 0]);
        assert_eq!(
            two_slots.validate(&instance(3, &[1, 2, 3])),
            Err(PlanViolation::TripCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_surplus_trips_need_no_slots() {
        let inst = instance(usize::MAX, &[5, 3]);
        assert_eq!(inst.num_trip_slots(), 2);

        let plan = LoadPlan::<IntegerType>::new(5, vec![ti(0), ti(1)], vec![5, 3]);
        assert_eq!(plan.validate(&inst), Ok(()));

        let padded = LoadPlan::<IntegerType>::new(5, vec![ti(0), ti(1)], vec![5, 3, 0]);
        assert_eq!(
            padded.validate(&inst),
            Err(PlanViolation::TripCountMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_validate_detects_trip_out_of_range() {
        let plan = LoadPlan::<IntegerType>::new(5, vec![ti(0), ti(4)], vec![1, 0]);
        assert_eq!(
            plan.validate(&instance(2, &[1, 2])),
            Err(PlanViolation::TripOutOfRange {
                item: ii(1),
                trip: ti(4)
            })
        );
    }

    #[test]
    fn test_validate_detects_bookkeeping_and_capacity() {
        let wrong_load = LoadPlan::<IntegerType>::new(5, vec![ti(0), ti(1)], vec![1, 3]);
        assert_eq!(
            wrong_load.validate(&instance(2, &[1, 2])),
            Err(PlanViolation::LoadMismatch {
                trip: ti(1),
                recorded: 3,
                actual: 2
            })
        );

        let overloaded = LoadPlan::<IntegerType>::new(2, vec![ti(0), ti(0)], vec![3, 0]);
        assert_eq!(
            overloaded.validate(&instance(2, &[1, 2])),
            Err(PlanViolation::CapacityExceeded {
                trip: ti(0),
                load: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_display_formatting_example() {
        let plan = LoadPlan::<IntegerType>::new(3, vec![ti(1), ti(1), ti(0)], vec![3, 3]);

        let mut expected = String::new();
        expected.push_str("Load Plan\n");
        expected.push_str("   Capacity: 3\n");
        expected.push_str("   Trips Used: 2 of 2\n");
        expected.push('\n');
        expected.push_str("   Trip   | Load     | Items\n");
        expected.push_str("   -------+----------+-------------\n");
        expected.push_str("   0      | 3        | 2\n");
        expected.push_str("   1      | 3        | 0 1\n");

        assert_eq!(format!("{}", plan), expected);
    }

    #[test]
    fn test_violation_messages_name_indices() {
        let v: PlanViolation<IntegerType> = PlanViolation::CapacityExceeded {
            trip: ti(1),
            load: 9,
            capacity: 8,
        };
        assert_eq!(
            format!("{}", v),
            "TripIndex(1) carries 9 which exceeds capacity 8"
        );
    }
}
