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

use ferry_core::num::ops::SaturatingAddVal;
use std::time::Duration;

/// Counters collected during one capacity search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Predicate evaluations made by the binary search.
    pub probes: u64,
    /// Probes whose capacity turned out feasible.
    pub feasible_probes: u64,
    /// Probes whose capacity left items behind.
    pub infeasible_probes: u64,
    /// Wall-clock time spent in the search.
    pub search_duration: Duration,
}

impl SearchStatistics {
    /// Records one probe and its verdict.
    #[inline]
    pub fn on_probe(&mut self, feasible: bool) {
        self.probes = self.probes.saturating_add_val(1);
        if feasible {
            self.feasible_probes = self.feasible_probes.saturating_add_val(1);
        } else {
            self.infeasible_probes = self.infeasible_probes.saturating_add_val(1);
        }
    }

    #[inline]
    pub fn set_search_duration(&mut self, duration: Duration) {
        self.search_duration = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Capacity Search Statistics:")?;
        writeln!(f, "  Probes:               {}", self.probes)?;
        writeln!(f, "  Feasible probes:      {}", self.feasible_probes)?;
        writeln!(f, "  Infeasible probes:    {}", self.infeasible_probes)?;
        writeln!(f, "  Total time:           {:.2?}", self.search_duration)?;
        Ok(())
    }
}
