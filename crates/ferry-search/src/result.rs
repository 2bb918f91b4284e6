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
use ferry_model::plan::LoadPlan;

/// What a capacity search established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<T> {
    /// The range converged; the plan's capacity is the minimal feasible one.
    Minimal(LoadPlan<T>),
    /// The search stopped early. The plan is feasible at its capacity, and
    /// no capacity below `lower` is feasible, but the gap was not closed.
    Bounded { plan: LoadPlan<T>, lower: T },
    /// The packing strategy could not place every item even at the total
    /// weight, so no witness exists.
    Unknown,
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: CapacityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Minimal(plan) => write!(f, "Minimal(capacity={})", plan.capacity()),
            SearchResult::Bounded { plan, lower } => {
                write!(f, "Bounded(capacity={}, lower={})", plan.capacity(), lower)
            }
            SearchResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why a capacity search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search range narrowed to a single capacity.
    Converged,
    /// A monitor requested termination; the string names the cause.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Converged => write!(f, "Converged"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The result of a capacity search together with how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    result: SearchResult<T>,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: CapacityNumeric,
{
    #[inline]
    pub fn new(
        result: SearchResult<T>,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_minimal(&self) -> bool {
        matches!(self.result, SearchResult::Minimal(_))
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self.result, SearchResult::Bounded { .. })
    }

    /// Returns the witness plan, if one was found.
    #[inline]
    pub fn plan(&self) -> Option<&LoadPlan<T>> {
        match &self.result {
            SearchResult::Minimal(plan) | SearchResult::Bounded { plan, .. } => Some(plan),
            SearchResult::Unknown => None,
        }
    }

    /// Consumes the outcome and returns the witness plan, if any.
    #[inline]
    pub fn into_plan(self) -> Option<LoadPlan<T>> {
        match self.result {
            SearchResult::Minimal(plan) | SearchResult::Bounded { plan, .. } => Some(plan),
            SearchResult::Unknown => None,
        }
    }

    /// Returns the smallest capacity known to be feasible.
    #[inline]
    pub fn capacity(&self) -> Option<T> {
        self.plan().map(LoadPlan::capacity)
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: CapacityNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}
