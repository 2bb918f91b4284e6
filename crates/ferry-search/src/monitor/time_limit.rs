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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget on the capacity search. The search probes at
//! most `log2(total weight)` capacities, but each probe is an `O(n log n)`
//! packing, so large instances can still take a while. The clock is read
//! once per `search_command` call, that is once per probe.
//!
//! ## Usage
//!
//! ```rust
//! use ferry_search::monitor::time_limit::TimeLimitMonitor;
//! use ferry_search::monitor::search_monitor::{SearchMonitor, SearchCommand};
//! use std::time::Duration;
//!
//! let mon = TimeLimitMonitor::<u64>::new(Duration::from_secs(5));
//! match mon.search_command() {
//!     SearchCommand::Continue => { /* keep searching */ }
//!     SearchCommand::Terminate(reason) => { /* stop: reason */ }
//! }
//! ```

use crate::{
    monitor::search_monitor::{Probe, SearchCommand, SearchMonitor},
    num::CapacityNumeric,
    stats::SearchStatistics,
};
use ferry_model::instance::{CapacityBounds, Instance};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T> {
    time_limit: Duration,
    start_time: Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            start_time: Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor<T>
where
    T: CapacityNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _instance: &Instance<T>, _bounds: CapacityBounds<T>) {
        self.start_time = Instant::now();
    }

    fn on_probe(&mut self, _probe: &Probe<T>, _statistics: &SearchStatistics) {}

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline]
    fn search_command(&self) -> SearchCommand {
        if self.start_time.elapsed() >= self.time_limit {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = u64;

    #[test]
    fn test_terminates_after_time_limit() {
        let mut mon = TimeLimitMonitor::<IntegerType>::new(Duration::from_millis(10));
        // Make elapsed exceed limit by setting start_time sufficiently in the past.
        mon.start_time = Instant::now() - Duration::from_millis(50);
        match mon.search_command() {
            SearchCommand::Terminate(msg) => {
                assert!(msg.contains("time limit"), "unexpected message: {msg}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_before_time_limit() {
        let mon = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(60));
        assert_eq!(mon.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_zero_limit_terminates_immediately() {
        let mon = TimeLimitMonitor::<IntegerType>::new(Duration::ZERO);
        assert!(matches!(mon.search_command(), SearchCommand::Terminate(_)));
    }

    #[test]
    fn test_enter_search_restarts_clock() {
        let instance = Instance::<IntegerType>::new(1, vec![2]).unwrap();
        let mut mon = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(1));
        mon.start_time = Instant::now() - Duration::from_secs(2);
        assert!(matches!(mon.search_command(), SearchCommand::Terminate(_)));

        mon.on_enter_search(&instance, instance.capacity_bounds());
        assert_eq!(mon.search_command(), SearchCommand::Continue);
        assert_eq!(mon.time_limit(), Duration::from_secs(1));
    }
}
