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

//! # Log Monitor
//!
//! Reports the search lifecycle through `tracing`. Entering and leaving the
//! search are `info` events; every probe is a `debug` event carrying the
//! tested capacity, the verdict and the range still in play. Install a
//! subscriber (for example `tracing_subscriber` with an `EnvFilter`) to see
//! them; without one the monitor costs next to nothing.

use crate::{
    monitor::search_monitor::{Probe, SearchCommand, SearchMonitor},
    num::CapacityNumeric,
    stats::SearchStatistics,
};
use ferry_model::instance::{CapacityBounds, Instance};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    best_capacity: Option<T>,
}

impl<T> LogMonitor<T> {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            best_capacity: None,
        }
    }

    /// Returns the smallest feasible capacity seen in the current search.
    #[inline]
    pub fn best_capacity(&self) -> Option<&T> {
        self.best_capacity.as_ref()
    }
}

impl<T> Default for LogMonitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor")
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: CapacityNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, instance: &Instance<T>, bounds: CapacityBounds<T>) {
        self.start_time = Instant::now();
        self.best_capacity = None;
        info!(
            items = instance.num_items(),
            trips = instance.num_trips(),
            lower = %bounds.lower(),
            upper = %bounds.upper(),
            "capacity search started"
        );
    }

    fn on_probe(&mut self, probe: &Probe<T>, statistics: &SearchStatistics) {
        if probe.feasible {
            self.best_capacity = Some(probe.capacity);
        }
        debug!(
            probe = statistics.probes,
            capacity = %probe.capacity,
            feasible = probe.feasible,
            remaining = %probe.remaining,
            elapsed_ms = self.start_time.elapsed().as_millis() as u64,
            "probe evaluated"
        );
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        match &self.best_capacity {
            Some(best) => info!(
                probes = statistics.probes,
                feasible = statistics.feasible_probes,
                infeasible = statistics.infeasible_probes,
                best = %best,
                elapsed = ?statistics.search_duration,
                "capacity search finished"
            ),
            None => info!(
                probes = statistics.probes,
                elapsed = ?statistics.search_duration,
                "capacity search finished without probing"
            ),
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
