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

//! Validated problem instances.
//!
//! An `Instance` owns the item weights and the trip count. Construction goes
//! through `InstanceBuilder::build` (or the `Instance::new` shortcut), which
//! rejects empty instances, a zero trip count, and zero weights, and computes
//! the total weight with checked addition so that an overflowing sum is an
//! error instead of a silently wrapped bound.

use crate::index::ItemIndex;
use ferry_core::num::ops::CheckedAddVal;
use num_traits::{PrimInt, Unsigned};

/// The error type for instance validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceError {
    /// The instance has no items.
    NoItems,
    /// The trip count is zero.
    NoTrips,
    /// An item has weight zero.
    ZeroWeight {
        /// The offending item.
        item: ItemIndex,
    },
    /// The total weight does not fit in the weight type.
    WeightOverflow {
        /// The item whose weight pushed the running sum past the type's maximum.
        item: ItemIndex,
    },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoItems => write!(f, "Instance must contain at least one item"),
            Self::NoTrips => write!(f, "Instance must allow at least one trip"),
            Self::ZeroWeight { item } => {
                write!(f, "Item {} has weight zero; weights must be positive", item.get())
            }
            Self::WeightOverflow { item } => write!(
                f,
                "Total weight overflows the weight type at item {}",
                item.get()
            ),
        }
    }
}

impl std::error::Error for InstanceError {}

/// The closed range `[lower, upper]` of capacities worth searching.
///
/// `lower` is the heaviest single weight: any smaller capacity leaves that item
/// behind. `upper` is the total weight: a single trip carries everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityBounds<T> {
    lower: T,
    upper: T,
}

impl<T> CapacityBounds<T>
where
    T: PrimInt,
{
    /// Creates new bounds.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        assert!(
            lower <= upper,
            "called `CapacityBounds::new` with lower bound above upper bound"
        );
        Self { lower, upper }
    }

    /// Returns the smallest capacity in range.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the largest capacity in range.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if `capacity` lies within the bounds.
    #[inline]
    pub fn contains(&self, capacity: T) -> bool {
        self.lower <= capacity && capacity <= self.upper
    }

    /// Returns `true` if the range holds exactly one capacity.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.lower == self.upper
    }
}

impl<T> std::fmt::Display for CapacityBounds<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// The immutable data of a loading problem.
///
/// - `weights[item]`: the positive weight of each item.
/// - `num_trips`: the number of trips `k` available.
/// - `max_weight` and `total_weight`: cached capacity bounds.
///
/// Construction:
/// - Use `InstanceBuilder` (or `Instance::new`) to obtain a validated `Instance`.
#[derive(Clone, PartialEq, Eq)]
pub struct Instance<T> {
    weights: Vec<T>,
    num_trips: usize,
    max_weight: T,
    total_weight: T,
}

impl<T> Instance<T>
where
    T: PrimInt + Unsigned + CheckedAddVal,
{
    /// Builds a validated instance from a trip count and a weight list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ferry_model::instance::Instance;
    ///
    /// let instance = Instance::<u64>::new(2, vec![1, 2, 3]).unwrap();
    /// assert_eq!(instance.max_weight(), 3);
    /// assert_eq!(instance.total_weight(), 6);
    /// ```
    pub fn new(num_trips: usize, weights: Vec<T>) -> Result<Self, InstanceError> {
        InstanceBuilder::new(num_trips).add_items(weights).build()
    }

    /// Returns the number of items `n`.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Returns the number of trips `k`.
    #[inline]
    pub fn num_trips(&self) -> usize {
        self.num_trips
    }

    /// Returns the number of trips that can ever carry something,
    /// `min(k, n)`. Every nonempty trip holds at least one item, so trips
    /// past the `n`-th stay empty in any plan.
    #[inline]
    pub fn num_trip_slots(&self) -> usize {
        self.num_trips.min(self.weights.len())
    }

    /// Returns the weight of a single item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn weight(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Instance::weight` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.weights[index]
    }

    /// Returns all weights in item order.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns the heaviest item weight.
    #[inline]
    pub fn max_weight(&self) -> T {
        self.max_weight
    }

    /// Returns the sum of all weights.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// Returns the capacity range `[max_weight, total_weight]`.
    #[inline]
    pub fn capacity_bounds(&self) -> CapacityBounds<T> {
        CapacityBounds::new(self.max_weight, self.total_weight)
    }

    /// Returns an iterator over `(ItemIndex, weight)` pairs in item order.
    #[inline]
    pub fn items(
        &self,
    ) -> impl DoubleEndedIterator<Item = (ItemIndex, T)> + ExactSizeIterator + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (ItemIndex::new(i), w))
    }
}

impl<T> std::fmt::Debug for Instance<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("num_items", &self.weights.len())
            .field("num_trips", &self.num_trips)
            .field("max_weight", &self.max_weight)
            .field("total_weight", &self.total_weight)
            .finish()
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(items: {}, trips: {}, max weight: {}, total weight: {})",
            self.weights.len(),
            self.num_trips,
            self.max_weight,
            self.total_weight
        )
    }
}

/// Collects weights and a trip count, then validates them into an `Instance`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InstanceBuilder<T> {
    weights: Vec<T>,
    num_trips: usize,
}

impl<T> InstanceBuilder<T>
where
    T: PrimInt + Unsigned + CheckedAddVal,
{
    /// Creates a builder for an instance with `num_trips` trips and no items.
    #[inline]
    pub fn new(num_trips: usize) -> Self {
        Self {
            weights: Vec::new(),
            num_trips,
        }
    }

    /// Creates a builder with room for `num_items` weights.
    #[inline]
    pub fn with_capacity(num_trips: usize, num_items: usize) -> Self {
        Self {
            weights: Vec::with_capacity(num_items),
            num_trips,
        }
    }

    /// Returns the number of items added so far.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Returns the configured trip count.
    #[inline]
    pub fn num_trips(&self) -> usize {
        self.num_trips
    }

    /// Overrides the trip count.
    #[inline]
    pub fn set_num_trips(&mut self, num_trips: usize) -> &mut Self {
        self.num_trips = num_trips;
        self
    }

    /// Appends an item and returns its index.
    #[inline]
    pub fn push_item(&mut self, weight: T) -> ItemIndex {
        self.weights.push(weight);
        ItemIndex::new(self.weights.len() - 1)
    }

    /// Appends every weight in `weights`.
    #[inline]
    pub fn add_items<I>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.weights.extend(weights);
        self
    }

    /// Validates the collected data and builds the instance.
    ///
    /// Checks run in a fixed order: trips, items, then weights front to back,
    /// so the reported error always names the first offending item.
    pub fn build(self) -> Result<Instance<T>, InstanceError> {
        if self.num_trips == 0 {
            return Err(InstanceError::NoTrips);
        }
        if self.weights.is_empty() {
            return Err(InstanceError::NoItems);
        }

        let mut max_weight = T::zero();
        let mut total_weight = T::zero();
        for (i, &w) in self.weights.iter().enumerate() {
            let item = ItemIndex::new(i);
            if w.is_zero() {
                return Err(InstanceError::ZeroWeight { item });
            }
            total_weight = total_weight
                .checked_add_val(w)
                .ok_or(InstanceError::WeightOverflow { item })?;
            max_weight = max_weight.max(w);
        }

        Ok(Instance {
            weights: self.weights,
            num_trips: self.num_trips,
            max_weight,
            total_weight,
        })
    }
}
