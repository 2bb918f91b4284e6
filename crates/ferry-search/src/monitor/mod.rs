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

//! # Search Monitors
//!
//! Observers and controllers for the capacity search. Monitors see every
//! probe of the binary search together with the running statistics, and can
//! ask the search to stop before the range has converged.
//!
//! ## Submodules
//!
//! - `search_monitor`: The `SearchMonitor<T>` trait, the `Probe` event and
//!   the `SearchCommand` enum.
//! - `composite`: Fan events out to several monitors.
//! - `no_op`: A monitor that does nothing.
//! - `log`: Emits `tracing` events for the search lifecycle.
//! - `probe_limit`: Stops after a fixed number of probes.
//! - `time_limit`: Stops once a wall-clock budget is spent.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod probe_limit;
pub mod search_monitor;
pub mod time_limit;
