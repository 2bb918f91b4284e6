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

use crate::{
    monitor::search_monitor::{Probe, SearchCommand, SearchMonitor},
    num::CapacityNumeric,
    stats::SearchStatistics,
};
use ferry_model::instance::{CapacityBounds, Instance};

/// A monitor that terminates the search once a fixed number of probes has
/// been evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeLimitMonitor<T> {
    probes: u64,
    probe_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> ProbeLimitMonitor<T> {
    /// Creates a new `ProbeLimitMonitor` allowing `probe_limit` probes.
    #[inline]
    pub fn new(probe_limit: u64) -> Self {
        Self {
            probes: 0,
            probe_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured limit.
    #[inline]
    pub fn probe_limit(&self) -> u64 {
        self.probe_limit
    }

    #[inline]
    fn reached_limit(&self) -> bool {
        self.probes >= self.probe_limit
    }
}

impl<T> SearchMonitor<T> for ProbeLimitMonitor<T>
where
    T: CapacityNumeric,
{
    fn name(&self) -> &str {
        "ProbeLimitMonitor"
    }

    fn on_enter_search(&mut self, _instance: &Instance<T>, _bounds: CapacityBounds<T>) {
        self.probes = 0;
    }

    #[inline(always)]
    fn on_probe(&mut self, _probe: &Probe<T>, _statistics: &SearchStatistics) {
        self.probes = self.probes.saturating_add(1);
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("probe limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}
