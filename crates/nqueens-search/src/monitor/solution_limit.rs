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
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    state::SearchState,
    stats::SearchStatistics,
};
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
    solution::Solution,
};

/// A monitor that terminates the search once a number of solutions has been found.
///
/// The counter is owned by the monitor and restarts on every `on_enter_search`,
/// so a reset engine gets the full allowance again. Once the limit is reached
/// every later call aborts immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLimitMonitor {
    solutions_found: u64,
    solution_limit: u64,
}

impl SolutionLimitMonitor {
    /// Creates a new `SolutionLimitMonitor`.
    #[inline]
    pub fn new(solution_limit: u64) -> Self {
        Self {
            solutions_found: 0,
            solution_limit,
        }
    }

    #[inline]
    pub fn solution_limit(&self) -> u64 {
        self.solution_limit
    }

    #[inline]
    pub fn solutions_found(&self) -> u64 {
        self.solutions_found
    }

    #[inline]
    fn reached_limit(&self) -> bool {
        self.solutions_found >= self.solution_limit
    }
}

impl std::fmt::Display for SolutionLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolutionLimitMonitor({}/{})",
            self.solutions_found, self.solution_limit
        )
    }
}

impl SearchMonitor for SolutionLimitMonitor {
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _size: BoardSize, _statistics: &SearchStatistics) {
        self.solutions_found = 0;
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(
        &mut self,
        _state: &SearchState,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("solution limit reached".to_string())
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
    }

    fn on_backtrack(&mut self, _state: &SearchState, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, _solution: &Solution, _statistics: &SearchStatistics) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }
}
