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

//! # Strongly Typed Indices
//!
//! A loading problem addresses two index spaces at once: items (one per
//! weight) and trips (one per crossing). Both are plain positions, so mixing
//! them up compiles fine with raw `usize`. `TypedIndex<T>` tags the position
//! with a zero-sized marker type, keeping the two spaces apart at compile time
//! while staying a transparent `usize` at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use ferry_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy)]
//! struct CrateTag;
//! impl TypedIndexTag for CrateTag { const NAME: &'static str = "CrateIndex"; }
//!
//! type CrateIndex = TypedIndex<CrateTag>;
//! let c = CrateIndex::new(3);
//! assert_eq!(c.get(), 3);
//! assert_eq!(format!("{}", c), "CrateIndex(3)");
//! ```

/// Names an index space for `Debug` and `Display` output.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A position within the index space described by the tag `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` wrapping `index`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns an iterator over the first `count` indices of this space.
    ///
    /// ```rust
    /// # use ferry_core::utils::index::{TypedIndex, TypedIndexTag};
    /// # #[derive(Clone, Copy)]
    /// # struct Tag;
    /// # impl TypedIndexTag for Tag { const NAME: &'static str = "Idx"; }
    /// let all: Vec<usize> = TypedIndex::<Tag>::range(3).map(|i| i.get()).collect();
    /// assert_eq!(all, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn range(count: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..count).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct PalletTag;

    impl TypedIndexTag for PalletTag {
        const NAME: &'static str = "PalletIdx";
    }

    type PalletIndex = TypedIndex<PalletTag>;

    #[test]
    fn test_new_get_and_conversions() {
        let idx = PalletIndex::new(10);
        assert_eq!(idx.get(), 10);

        let from_raw: PalletIndex = 42.into();
        let back: usize = from_raw.into();
        assert_eq!(back, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        let idx = PalletIndex::new(7);
        assert_eq!(format!("{}", idx), "PalletIdx(7)");
        assert_eq!(format!("{:?}", idx), "PalletIdx(7)");
    }

    #[test]
    fn test_range_is_ordered_and_sized() {
        let range = PalletIndex::range(4);
        assert_eq!(range.len(), 4);
        let collected: Vec<_> = range.rev().map(|i| i.get()).collect();
        assert_eq!(collected, vec![3, 2, 1, 0]);
        assert_eq!(PalletIndex::range(0).count(), 0);
    }

    #[test]
    fn test_ordering_follows_position() {
        assert!(PalletIndex::new(1) < PalletIndex::new(2));
        assert_eq!(PalletIndex::new(5), PalletIndex::new(5));
    }
}
