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

//! # Bucketed Ordered Multiset
//!
//! `BucketMultiset<K, V>` stores values grouped by an ordered key, keeping
//! duplicates. Its central query removes one value under the greatest key not
//! exceeding a bound, which is the access pattern of largest-fit packing: a
//! trip with `remaining` capacity asks for the heaviest item that still fits.
//!
//! Keys live in a `BTreeMap`, so every query and removal costs `O(log d)`
//! where `d` is the number of distinct keys. Values sharing a key sit in a
//! bucket and come out last-in, first-out. A bucket is removed as soon as it
//! empties, so every key present in the map has at least one value.

use std::collections::BTreeMap;

/// An ordered multiset of `(key, value)` pairs supporting predecessor
/// extraction.
#[derive(Clone, PartialEq, Eq)]
pub struct BucketMultiset<K, V> {
    buckets: BTreeMap<K, Vec<V>>,
    len: usize,
}

impl<K, V> Default for BucketMultiset<K, V>
where
    K: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BucketMultiset<K, V>
where
    K: Ord + Copy,
{
    /// Creates an empty multiset.
    #[inline]
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// Inserts `value` under `key`. Duplicate keys are kept.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        self.buckets.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// Returns the total number of stored values, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes and returns one value stored under the greatest key that is
    /// `<= bound`, or `None` if every key exceeds `bound`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferry_core::collections::multiset::BucketMultiset;
    /// let mut set: BucketMultiset<u32, char> =
    ///     [(3, 'a'), (7, 'b'), (5, 'c')].into_iter().collect();
    /// assert_eq!(set.take_greatest_at_most(6), Some((5, 'c')));
    /// assert_eq!(set.take_greatest_at_most(6), Some((3, 'a')));
    /// assert_eq!(set.take_greatest_at_most(6), None);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn take_greatest_at_most(&mut self, bound: K) -> Option<(K, V)> {
        let (&key, bucket) = self.buckets.range_mut(..=bound).next_back()?;
        debug_assert!(
            !bucket.is_empty(),
            "called `BucketMultiset::take_greatest_at_most` with an empty bucket left in the map"
        );

        let value = bucket.pop()?;
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        self.len -= 1;
        Some((key, value))
    }

    /// Consumes the multiset, yielding all values in ascending key order.
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.buckets.into_values().flatten()
    }
}

impl<K, V> FromIterator<(K, V)> for BucketMultiset<K, V>
where
    K: Ord + Copy,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for BucketMultiset<K, V>
where
    K: Ord + Copy,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> std::fmt::Debug for BucketMultiset<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketMultiset")
            .field("len", &self.len)
            .field("buckets", &self.buckets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type KeyType = u64;

    fn from_keys(keys: &[KeyType]) -> BucketMultiset<KeyType, usize> {
        keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect()
    }

    #[test]
    fn test_empty_set() {
        let mut set: BucketMultiset<KeyType, ()> = BucketMultiset::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.take_greatest_at_most(KeyType::MAX), None);
    }

    #[test]
    fn test_duplicates_are_counted() {
        let set = from_keys(&[4, 4, 4, 1]);
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_take_picks_exact_or_next_smaller_key() {
        let mut set = from_keys(&[2, 5, 9]);
        assert_eq!(set.take_greatest_at_most(1), None);
        assert_eq!(set.take_greatest_at_most(8), Some((5, 1)));
        assert_eq!(set.take_greatest_at_most(100), Some((9, 2)));
        assert_eq!(set.take_greatest_at_most(2), Some((2, 0)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_take_drains_duplicates_lifo_then_removes_bucket() {
        let mut set = from_keys(&[3, 3, 1]);
        // values are the insertion positions: 3 -> [0, 1], 1 -> [2]
        assert_eq!(set.take_greatest_at_most(3), Some((3, 1)));
        assert_eq!(set.take_greatest_at_most(3), Some((3, 0)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.take_greatest_at_most(3), Some((1, 2)));
        assert!(set.is_empty());
        assert_eq!(format!("{:?}", set), "BucketMultiset { len: 0, buckets: {} }");
    }

    #[test]
    fn test_take_below_minimum_leaves_set_untouched() {
        let mut set = from_keys(&[10, 20]);
        assert_eq!(set.take_greatest_at_most(9), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_into_values_are_ascending() {
        let set = from_keys(&[5, 1, 3]);
        let values: Vec<_> = set.into_values().collect();
        assert_eq!(values, vec![1, 2, 0]);
    }

    #[test]
    fn test_take_matches_sorted_vector_reference() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let n = rng.gen_range(0..40);
            let keys: Vec<KeyType> = (0..n).map(|_| rng.gen_range(1..30)).collect();
            let mut set = from_keys(&keys);
            let mut reference = keys.clone();
            reference.sort_unstable();

            for _ in 0..n {
                let bound = rng.gen_range(0..35);
                let expected = reference
                    .iter()
                    .rposition(|&k| k <= bound)
                    .map(|pos| reference.remove(pos));
                let got = set.take_greatest_at_most(bound).map(|(k, _)| k);
                assert_eq!(got, expected);
                assert_eq!(set.len(), reference.len());
            }
        }
    }
}
