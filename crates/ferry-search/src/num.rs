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

//! # Capacity Numeric Trait
//!
//! Unified numeric bounds for weights and capacities. Search code stays
//! generic over the integer width while relying on the same arithmetic
//! guarantees everywhere: unsigned primitive integers, by-value checked
//! addition for sums, and the unit constants from
//! `ferry_core`.
//!
//! Sums of weights are the widest values the solver handles. Pick a type
//! wide enough for the total weight of an instance; `u64` is the default
//! used by the command line front end. The instance builder rejects totals
//! that overflow, so the search itself never wraps.

use ferry_core::num::{
    constants::{One, Zero},
    ops::{CheckedAddVal, SaturatingAddVal},
};
use num_traits::{PrimInt, Unsigned};
use std::hash::Hash;

/// A trait alias for weight and capacity types usable by the search.
/// These are the unsigned integer types `u8` through `u128` and `usize`.
pub trait CapacityNumeric:
    PrimInt
    + Unsigned
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + One
    + CheckedAddVal
    + SaturatingAddVal
    + Send
    + Sync
    + Hash
{
}

impl<T> CapacityNumeric for T where
    T: PrimInt
        + Unsigned
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + One
        + CheckedAddVal
        + SaturatingAddVal
        + Send
        + Sync
        + Hash
{
}
