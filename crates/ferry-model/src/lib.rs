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

//! # Ferry Model
//!
//! Problem data for the minimum trip capacity problem: `n` items with
//! positive integer weights must be carried in at most `k` trips, and the
//! goal is the smallest per-trip capacity that makes this possible.
//!
//! ## Modules
//!
//! - `index`: `ItemIndex` and `TripIndex`, typed positions for the two index
//!   spaces of a loading problem.
//! - `instance`: The validated, immutable `Instance` with cached capacity
//!   bounds, and the `InstanceBuilder` that produces it.
//! - `plan`: `LoadPlan`, an item-to-trip assignment that witnesses a
//!   capacity, plus validation against an instance.
//! - `loading`: `InstanceLoader`, reading `n k w_1 ... w_n` token streams
//!   from strings, readers, or files.

pub mod index;
pub mod instance;
pub mod loading;
pub mod plan;
