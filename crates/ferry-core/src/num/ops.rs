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

//! By-value arithmetic used for weight sums and search counters.
//!
//! `num_traits` exposes checked arithmetic through reference-taking methods
//! (`CheckedAdd::checked_add(&self, &Self)`). The traits here take their
//! operands by value, which keeps generic capacity code free of `&` noise.
//! Only unsigned types are covered: weights and capacities are never
//! negative.

use core::ops::Add;

/// Checked addition by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use ferry_core::num::ops::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Saturating addition by value, clamping at the upper bound of the type.
///
/// # Examples
///
/// ```rust
/// # use ferry_core::num::ops::SaturatingAddVal;
/// let a: u8 = 250;
/// assert_eq!(a.saturating_add_val(10), 255);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

macro_rules! impl_by_value_ops_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_add(self, v)
                }
            }

            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: Self) -> Self {
                    <$t>::saturating_add(self, v)
                }
            }
        )*
    };
}

impl_by_value_ops_for!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_checked<T>(values: &[T]) -> Option<T>
    where
        T: CheckedAddVal + Copy + Default,
    {
        values
            .iter()
            .try_fold(T::default(), |acc, &v| acc.checked_add_val(v))
    }

    #[test]
    fn test_checked_add_detects_overflow_in_fold() {
        assert_eq!(sum_checked::<u8>(&[100, 100, 55]), Some(255));
        assert_eq!(sum_checked::<u8>(&[100, 100, 56]), None);
        assert_eq!(sum_checked::<u64>(&[u64::MAX, 0]), Some(u64::MAX));
        assert_eq!(sum_checked::<u64>(&[u64::MAX, 1]), None);
    }

    #[test]
    fn test_saturating_add_clamps() {
        assert_eq!(u64::MAX.saturating_add_val(1), u64::MAX);
        assert_eq!(3u16.saturating_add_val(4), 7);
    }
}
