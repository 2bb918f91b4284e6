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

use crate::{num::CapacityNumeric, stats::SearchStatistics};
use ferry_model::instance::{CapacityBounds, Instance};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// One evaluation of the feasibility predicate during the search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Probe<T> {
    /// The capacity that was tested.
    pub capacity: T,
    /// Whether every item fit under `capacity`.
    pub feasible: bool,
    /// The range still in play after the verdict was applied.
    pub remaining: CapacityBounds<T>,
}

impl<T> std::fmt::Display for Probe<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.feasible {
            "feasible"
        } else {
            "infeasible"
        };
        write!(
            f,
            "Probe(capacity: {}, {}, remaining: {})",
            self.capacity, verdict, self.remaining
        )
    }
}

pub trait SearchMonitor<T>
where
    T: CapacityNumeric,
{
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, instance: &Instance<T>, bounds: CapacityBounds<T>);
    fn on_probe(&mut self, probe: &Probe<T>, statistics: &SearchStatistics);
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    fn search_command(&self) -> SearchCommand;
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: CapacityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: CapacityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_display() {
        assert_eq!(SearchCommand::Continue.to_string(), "Continue");
        assert_eq!(
            SearchCommand::Terminate("done".to_string()).to_string(),
            "Terminate: done"
        );
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
    }

    #[test]
    fn test_probe_display() {
        let probe = Probe {
            capacity: 7u64,
            feasible: false,
            remaining: CapacityBounds::new(8, 12),
        };
        assert_eq!(
            probe.to_string(),
            "Probe(capacity: 7, infeasible, remaining: [8, 12])"
        );
    }
}
