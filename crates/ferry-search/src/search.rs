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

//! # Capacity Search
//!
//! Binary search over `[max weight, total weight]` for the smallest capacity
//! the packing strategy accepts.
//!
//! The loop keeps two facts true: the strategy accepts `high`, and when
//! `low` has moved above the heaviest weight it rejects `low - 1`. Each probe
//! at `mid = low + (high - low) / 2` either pulls `high` down to `mid` or
//! pushes `low` up to `mid + 1`, so the range halves every step and the
//! search converges after at most `ceil(log2(total - max + 1))` probes with
//! `low == high` being the answer.
//!
//! `min_capacity` is the bare search. `CapacitySearch` runs the same loop
//! with a witness plan, statistics and a monitor stack that may stop it
//! early; it is configured through `CapacitySearchBuilder`.
//!
//! ## Usage
//!
//! ```rust
//! use ferry_model::instance::Instance;
//! use ferry_search::search::{min_capacity, CapacitySearchBuilder};
//!
//! let instance = Instance::<u64>::new(4, vec![10, 10, 10, 10]).unwrap();
//! assert_eq!(min_capacity(&instance), 10);
//!
//! let mut search = CapacitySearchBuilder::new().with_probe_limit(64).build();
//! let outcome = search.solve(&instance);
//! assert_eq!(outcome.capacity(), Some(10));
//! ```

use crate::{
    feasibility::{is_feasible, GreedyLargestFit, PackingStrategy},
    monitor::{
        composite::CompositeMonitor,
        probe_limit::ProbeLimitMonitor,
        search_monitor::{Probe, SearchCommand, SearchMonitor},
        time_limit::TimeLimitMonitor,
    },
    num::CapacityNumeric,
    result::{SearchOutcome, SearchResult, TerminationReason},
    stats::SearchStatistics,
};
use ferry_model::{
    instance::{CapacityBounds, Instance},
    plan::LoadPlan,
};
use std::time::{Duration, Instant};

/// Returns the smallest capacity at which the greedy largest-fit packing
/// carries every item of `instance` in its trips.
///
/// The result always lies in `[instance.max_weight(), instance.total_weight()]`.
pub fn min_capacity<T>(instance: &Instance<T>) -> T
where
    T: CapacityNumeric,
{
    let bounds = instance.capacity_bounds();
    let mut low = bounds.lower();
    let mut high = bounds.upper();

    while low < high {
        let mid = low + ((high - low) >> 1);
        if is_feasible(instance, mid) {
            high = mid;
        } else {
            low = mid + T::ONE;
        }
    }

    low
}

/// A configured capacity search.
pub struct CapacitySearch<'a, T, S = GreedyLargestFit> {
    strategy: S,
    monitor: CompositeMonitor<'a, T>,
    probe_limit: Option<u64>,
    time_limit: Option<Duration>,
}

impl<'a, T, S> std::fmt::Debug for CapacitySearch<'a, T, S>
where
    T: CapacityNumeric,
    S: PackingStrategy<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapacitySearch")
            .field("strategy", &self.strategy.name())
            .field("monitor", &self.monitor)
            .field("probe_limit", &self.probe_limit)
            .field("time_limit", &self.time_limit)
            .finish()
    }
}

impl<'a, T, S> CapacitySearch<'a, T, S>
where
    T: CapacityNumeric + 'a,
    S: PackingStrategy<T>,
{
    /// Returns the packing strategy probed by the search.
    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the probe budget, if one was configured.
    #[inline]
    pub fn probe_limit(&self) -> Option<u64> {
        self.probe_limit
    }

    /// Returns the wall-clock budget, if one was configured.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Runs the binary search on `instance`.
    ///
    /// Monitors are consulted before every probe. If one terminates the
    /// search while the range is still open, the outcome is `Bounded` with
    /// the best plan found so far, or a plan at the upper bound if no probe
    /// had succeeded yet. That fallback packing is not counted as a probe.
    pub fn solve(&mut self, instance: &Instance<T>) -> SearchOutcome<T> {
        let start_time = Instant::now();
        let mut statistics = SearchStatistics::default();

        let bounds = instance.capacity_bounds();
        self.monitor.on_enter_search(instance, bounds);

        let mut low = bounds.lower();
        let mut high = bounds.upper();
        let mut witness: Option<LoadPlan<T>> = None;
        let mut reason = TerminationReason::Converged;

        while low < high {
            if let SearchCommand::Terminate(message) = self.monitor.search_command() {
                reason = TerminationReason::Aborted(message);
                break;
            }

            let mid = low + ((high - low) >> 1);
            let outcome = self.strategy.pack(instance, mid);
            let feasible = outcome.is_packed();
            match outcome.into_plan() {
                Some(plan) => {
                    high = mid;
                    witness = Some(plan);
                }
                None => low = mid + T::ONE,
            }

            statistics.on_probe(feasible);
            let probe = Probe {
                capacity: mid,
                feasible,
                remaining: CapacityBounds::new(low, high),
            };
            self.monitor.on_probe(&probe, &statistics);
        }

        // A witness, when present, always sits at `high`.
        let witness = witness.or_else(|| self.strategy.pack(instance, high).into_plan());

        let result = match (witness, &reason) {
            (None, _) => SearchResult::Unknown,
            (Some(plan), TerminationReason::Converged) => SearchResult::Minimal(plan),
            (Some(plan), TerminationReason::Aborted(_)) => {
                SearchResult::Bounded { plan, lower: low }
            }
        };

        statistics.set_search_duration(start_time.elapsed());
        self.monitor.on_exit_search(&statistics);

        SearchOutcome::new(result, reason, statistics)
    }
}

/// Configures a `CapacitySearch`: the packing strategy, optional probe and
/// time limits, and any number of additional monitors.
///
/// Limit monitors are installed ahead of user monitors, so a limit always
/// gets to terminate the search first.
pub struct CapacitySearchBuilder<'a, T, S = GreedyLargestFit> {
    strategy: S,
    probe_limit: Option<u64>,
    time_limit: Option<Duration>,
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CapacitySearchBuilder<'a, T, GreedyLargestFit>
where
    T: CapacityNumeric + 'a,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CapacitySearchBuilder<'a, T, GreedyLargestFit>
where
    T: CapacityNumeric + 'a,
{
    /// Creates a builder using the greedy largest-fit strategy, no limits
    /// and no monitors.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategy: GreedyLargestFit,
            probe_limit: None,
            time_limit: None,
            monitors: Vec::new(),
        }
    }
}

impl<'a, T, S> CapacitySearchBuilder<'a, T, S>
where
    T: CapacityNumeric + 'a,
    S: PackingStrategy<T>,
{
    /// Replaces the packing strategy. The strategy must be monotone in the
    /// capacity for the search to be meaningful.
    #[inline]
    pub fn with_strategy<U>(self, strategy: U) -> CapacitySearchBuilder<'a, T, U>
    where
        U: PackingStrategy<T>,
    {
        CapacitySearchBuilder {
            strategy,
            probe_limit: self.probe_limit,
            time_limit: self.time_limit,
            monitors: self.monitors,
        }
    }

    /// Stops the search after `limit` probes.
    #[inline]
    pub fn with_probe_limit(mut self, limit: u64) -> Self {
        self.probe_limit = Some(limit);
        self
    }

    /// Stops the search once `limit` has elapsed, checked before each probe.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Adds a monitor that observes every probe of the search.
    #[inline]
    pub fn add_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
        self
    }

    /// Adds an already boxed monitor.
    #[inline]
    pub fn add_monitor_boxed(mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) -> Self {
        self.monitors.push(monitor);
        self
    }

    /// Assembles the monitor stack and returns the configured search.
    pub fn build(self) -> CapacitySearch<'a, T, S> {
        let mut monitor = CompositeMonitor::with_capacity(self.monitors.len() + 2);

        // Limits first so they win the termination check.
        if let Some(limit) = self.probe_limit {
            monitor.add_monitor(ProbeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        for m in self.monitors {
            monitor.add_monitor_boxed(m);
        }

        CapacitySearch {
            strategy: self.strategy,
            monitor,
            probe_limit: self.probe_limit,
            time_limit: self.time_limit,
        }
    }
}
