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

//! Search monitoring interface
//!
//! Declares the `SearchMonitor` trait and `SearchCommand` for observing and
//! pausing the resumable backtracking search. Callbacks follow the engine's
//! lifecycle, and a monitor can stop the current call via `search_command`
//! (default: Continue).
//!
//! Lifecycle
//! - enter (first call) or resume (later calls)
//! - then repeatedly: command → {conflict* → descend | backtrack}
//! - a complete board reports a solution and suspends the call
//! - exit fires once, when the search space is exhausted
//!
//! Stopping a call never loses work: the engine returns `Aborted` with its
//! state intact and the next call resumes from the same frame.

use crate::{state::SearchState, stats::SearchStatistics};
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
    solution::Solution,
};

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

/// Trait for observing and controlling the search engine.
pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called on the first `next_solution` call after construction or reset.
    fn on_enter_search(&mut self, size: BoardSize, statistics: &SearchStatistics);
    /// Called at the start of every later `next_solution` call.
    fn on_resume(&mut self, _statistics: &SearchStatistics) {}
    /// Called once when the search space is exhausted.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called before every step to decide whether the current call goes on.
    fn search_command(
        &mut self,
        _state: &SearchState,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called after a queen has been placed at `(row, column)`.
    fn on_descend(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    );
    /// Called when `(row, column)` is rejected because a placed queen attacks it.
    fn on_conflict(
        &mut self,
        _state: &SearchState,
        _row: RowIndex,
        _column: ColumnIndex,
        _statistics: &SearchStatistics,
    ) {
    }
    /// Called when a row runs out of columns and its frame is closed.
    fn on_backtrack(&mut self, state: &SearchState, statistics: &SearchStatistics);
    /// Called when a complete board has been assembled.
    fn on_solution_found(&mut self, solution: &Solution, statistics: &SearchStatistics);
}

impl<M> SearchMonitor for &mut M
where
    M: SearchMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, size: BoardSize, statistics: &SearchStatistics) {
        (**self).on_enter_search(size, statistics);
    }

    #[inline(always)]
    fn on_resume(&mut self, statistics: &SearchStatistics) {
        (**self).on_resume(statistics);
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        (**self).on_exit_search(statistics);
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        state: &SearchState,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        (**self).search_command(state, statistics)
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        (**self).on_descend(state, row, column, statistics);
    }

    #[inline(always)]
    fn on_conflict(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        (**self).on_conflict(state, row, column, statistics);
    }

    #[inline(always)]
    fn on_backtrack(&mut self, state: &SearchState, statistics: &SearchStatistics) {
        (**self).on_backtrack(state, statistics);
    }

    #[inline(always)]
    fn on_solution_found(&mut self, solution: &Solution, statistics: &SearchStatistics) {
        (**self).on_solution_found(solution, statistics);
    }
}

impl<M> SearchMonitor for Box<M>
where
    M: SearchMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, size: BoardSize, statistics: &SearchStatistics) {
        (**self).on_enter_search(size, statistics);
    }

    #[inline(always)]
    fn on_resume(&mut self, statistics: &SearchStatistics) {
        (**self).on_resume(statistics);
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        (**self).on_exit_search(statistics);
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        state: &SearchState,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        (**self).search_command(state, statistics)
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        (**self).on_descend(state, row, column, statistics);
    }

    #[inline(always)]
    fn on_conflict(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        (**self).on_conflict(state, row, column, statistics);
    }

    #[inline(always)]
    fn on_backtrack(&mut self, state: &SearchState, statistics: &SearchStatistics) {
        (**self).on_backtrack(state, statistics);
    }

    #[inline(always)]
    fn on_solution_found(&mut self, solution: &Solution, statistics: &SearchStatistics) {
        (**self).on_solution_found(solution, statistics);
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_default_and_display() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
        assert_eq!(SearchCommand::Continue.to_string(), "Continue");
        assert_eq!(
            SearchCommand::Terminate("done".into()).to_string(),
            "Terminate: done"
        );
    }
}
