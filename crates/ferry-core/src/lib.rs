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

//! # Ferry Core
//!
//! Foundational building blocks for the ferry capacity solver. The crate
//! keeps numeric plumbing, typed indices, and the ordered collection used by
//! the packing heuristic out of the model and search crates so both can share
//! them without depending on each other.
//!
//! ## Modules
//!
//! - `num`: Associated constant traits (`Zero`, `One`) and by-value checked
//!   and saturating arithmetic for unsigned integer weights.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//! - `collections`: `BucketMultiset`, an ordered multiset answering
//!   "greatest key not exceeding a bound" with removal in logarithmic time.

pub mod collections;
pub mod num;
pub mod utils;
