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

use crate::{monitor::search_monitor::SearchMonitor, state::SearchState, stats::SearchStatistics};
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
    solution::Solution,
};

/// A monitor that ignores every event and always lets the search continue.
///
/// This is the engine's default monitor; all of its callbacks inline away.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self
    }
}

impl SearchMonitor for NoOperationMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _size: BoardSize, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_descend(
        &mut self,
        _state: &SearchState,
        _row: RowIndex,
        _column: ColumnIndex,
        _statistics: &SearchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_backtrack(&mut self, _state: &SearchState, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_solution_found(&mut self, _solution: &Solution, _statistics: &SearchStatistics) {}
}

impl std::fmt::Display for NoOperationMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoOperationMonitor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::search_monitor::SearchCommand;

    #[test]
    fn test_always_continues() {
        let mut monitor = NoOperationMonitor::new();
        let state = SearchState::new(BoardSize::new(4));
        let stats = SearchStatistics::default();

        monitor.on_enter_search(BoardSize::new(4), &stats);
        assert_eq!(monitor.search_command(&state, &stats), SearchCommand::Continue);
        assert_eq!(monitor.name(), "NoOperationMonitor");
    }
}
