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

//! Per-call work budget.
//!
//! `NodeLimitMonitor` pauses a `next_solution` call once it has placed
//! `budget` queens without finding a solution. The budget is re-armed on
//! every enter and resume, so a caller can drive a long enumeration in
//! bounded slices and simply call again after an `Aborted` outcome.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    state::SearchState,
    stats::SearchStatistics,
};
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
    solution::Solution,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLimitMonitor {
    budget: u64,
    nodes_in_call: u64,
}

impl NodeLimitMonitor {
    /// Creates a monitor allowing `budget` placements per call.
    ///
    /// # Panics
    ///
    /// Panics if `budget` is zero, since no call could make progress.
    #[inline]
    pub fn new(budget: u64) -> Self {
        assert!(
            budget > 0,
            "called `NodeLimitMonitor::new` with a zero budget"
        );

        Self {
            budget,
            nodes_in_call: 0,
        }
    }

    #[inline]
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Placements made since the budget was last re-armed.
    #[inline]
    pub fn nodes_in_call(&self) -> u64 {
        self.nodes_in_call
    }
}

impl std::fmt::Display for NodeLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeLimitMonitor(budget: {})", self.budget)
    }
}

impl SearchMonitor for NodeLimitMonitor {
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _size: BoardSize, _statistics: &SearchStatistics) {
        self.nodes_in_call = 0;
    }

    fn on_resume(&mut self, _statistics: &SearchStatistics) {
        self.nodes_in_call = 0;
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(
        &mut self,
        _state: &SearchState,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        if self.nodes_in_call >= self.budget {
            SearchCommand::Terminate(format!("node budget of {} exhausted", self.budget))
        } else {
            SearchCommand::Continue
        }
    }

    fn on_descend(
        &mut self,
        _state: &SearchState,
        _row: RowIndex,
        _column: ColumnIndex,
        _statistics: &SearchStatistics,
    ) {
        self.nodes_in_call = self.nodes_in_call.saturating_add(1);
    }

    fn on_backtrack(&mut self, _state: &SearchState, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, _solution: &Solution, _statistics: &SearchStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_is_rearmed_on_resume() {
        let mut monitor = NodeLimitMonitor::new(2);
        let state = SearchState::new(BoardSize::new(4));
        let stats = SearchStatistics::default();
        let (r, c) = (RowIndex::new(0), ColumnIndex::new(0));

        monitor.on_enter_search(BoardSize::new(4), &stats);
        monitor.on_descend(&state, r, c, &stats);
        assert_eq!(monitor.search_command(&state, &stats), SearchCommand::Continue);
        monitor.on_descend(&state, r, c, &stats);
        assert_eq!(
            monitor.search_command(&state, &stats),
            SearchCommand::Terminate("node budget of 2 exhausted".to_string())
        );

        monitor.on_resume(&stats);
        assert_eq!(monitor.nodes_in_call(), 0);
        assert_eq!(monitor.search_command(&state, &stats), SearchCommand::Continue);
    }

    #[test]
    #[should_panic(expected = "zero budget")]
    fn test_zero_budget_panics() {
        let _ = NodeLimitMonitor::new(0);
    }
}
