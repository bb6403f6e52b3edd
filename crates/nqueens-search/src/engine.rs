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

//! Resumable depth-first enumeration of N-Queens solutions.
//!
//! `QueensSearch` places queens row by row, trying columns in ascending
//! order, and suspends as soon as a complete board is assembled. The active
//! call path lives in an explicit `SearchStack` of frames, so a suspended
//! search is plain data: the next `next_solution` call picks up at the
//! frame that produced the previous solution, withdraws its queen and tries
//! the next column. Solutions therefore come out in lexicographic order,
//! each exactly once.
//!
//! Core flow
//! - Construct with a `BoardSize` (or `try_new` from any primitive integer).
//! - Call `next_solution` until it returns `Exhausted`.
//! - Optionally attach a `SearchMonitor`; a `Terminate` command returns
//!   `Aborted` and leaves the search resumable.
//!
//! Invariants
//! - The placed prefix in `SearchState` always has one queen per open frame
//!   that has a placed column, and no two of them attack each other.
//! - Once `Exhausted` has been returned, every later call returns it again
//!   until `reset`.

use crate::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    result::SearchOutcome,
    stack::SearchStack,
    state::SearchState,
    stats::SearchStatistics,
};
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::{BoardSize, InvalidDimensionError},
    solution::Solution,
};
use num_traits::PrimInt;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Nothing has been explored since construction or the last reset.
    Fresh,
    /// Suspended after a solution or an abort.
    Running,
    /// The whole tree has been explored.
    Exhausted,
}

/// A lazily driven N-Queens solution generator.
#[derive(Debug, Clone)]
pub struct QueensSearch<M = NoOperationMonitor>
where
    M: SearchMonitor,
{
    state: SearchState,
    stack: SearchStack,
    stats: SearchStatistics,
    monitor: M,
    phase: Phase,
}

impl QueensSearch<NoOperationMonitor> {
    /// Creates an engine for a board of the given size.
    #[inline]
    pub fn new(size: BoardSize) -> Self {
        Self::with_monitor(size, NoOperationMonitor::new())
    }

    /// Creates an engine from a raw integer dimension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensionError` if `n` is negative.
    ///
    /// ```rust
    /// use nqueens_search::engine::QueensSearch;
    ///
    /// assert_eq!(QueensSearch::try_new(6i32).unwrap().count(), 4);
    /// assert!(QueensSearch::try_new(-1i32).is_err());
    /// ```
    pub fn try_new<I>(n: I) -> Result<Self, InvalidDimensionError>
    where
        I: PrimInt,
    {
        Ok(Self::new(BoardSize::try_from_int(n)?))
    }
}

impl<M> QueensSearch<M>
where
    M: SearchMonitor,
{
    /// Creates an engine that reports to `monitor`.
    pub fn with_monitor(size: BoardSize, monitor: M) -> Self {
        Self {
            state: SearchState::new(size),
            stack: SearchStack::preallocated(size),
            stats: SearchStatistics::default(),
            monitor,
            phase: Phase::Fresh,
        }
    }

    #[inline]
    pub fn board_size(&self) -> BoardSize {
        self.state.board_size()
    }

    /// Returns `true` once the search space has been fully explored.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.stats
    }

    /// Returns the current placement, including partially filled rows
    /// while the search is suspended mid-tree.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    /// Restarts the enumeration from the first solution, keeping allocations.
    pub fn reset(&mut self) {
        self.state.reset();
        self.stack.reset();
        self.stats = SearchStatistics::default();
        self.phase = Phase::Fresh;
    }

    /// Restarts the enumeration on a board of a different size.
    pub fn reset_to(&mut self, size: BoardSize) {
        if size == self.state.board_size() {
            self.reset();
            return;
        }

        self.state = SearchState::new(size);
        self.stack = SearchStack::preallocated(size);
        self.stats = SearchStatistics::default();
        self.phase = Phase::Fresh;
    }

    /// Resumes the search and returns the next solution in lexicographic order.
    ///
    /// Returns `Exhausted` when no further solution exists, and `Aborted`
    /// when the monitor asked to stop; in the latter case the next call
    /// continues where this one left off.
    pub fn next_solution(&mut self) -> SearchOutcome {
        let start = Instant::now();
        let outcome = self.run();
        self.stats.add_time(start.elapsed());
        outcome
    }

    fn run(&mut self) -> SearchOutcome {
        match self.phase {
            Phase::Exhausted => return SearchOutcome::Exhausted,
            Phase::Fresh => {
                self.phase = Phase::Running;
                let size = self.state.board_size();
                self.monitor.on_enter_search(size, &self.stats);

                if size.is_empty() {
                    // The empty board is its own single solution; with no
                    // frame pushed the following call finds the stack empty.
                    return self.emit_solution();
                }
                self.stack.push_frame(RowIndex::new(0));
            }
            Phase::Running => {
                self.stats.on_resume();
                self.monitor.on_resume(&self.stats);
            }
        }

        let n = self.state.board_size().get();
        loop {
            if let SearchCommand::Terminate(reason) =
                self.monitor.search_command(&self.state, &self.stats)
            {
                log::trace!(
                    "search on {} board aborted at depth {}: {}",
                    self.state.board_size(),
                    self.stack.depth(),
                    reason
                );
                return SearchOutcome::Aborted(reason);
            }

            let Some(frame) = self.stack.top_mut() else {
                self.phase = Phase::Exhausted;
                self.monitor.on_exit_search(&self.stats);
                return SearchOutcome::Exhausted;
            };

            let row = frame.row();
            if let Some(previous) = frame.take_placed() {
                self.state.unplace(row, previous);
            }

            let mut candidate = frame.next_column();
            while candidate < n && !self.state.is_safe(row, ColumnIndex::new(candidate)) {
                self.stats.on_conflict();
                self.monitor
                    .on_conflict(&self.state, row, ColumnIndex::new(candidate), &self.stats);
                candidate += 1;
            }

            if candidate == n {
                self.stack.pop_frame();
                self.stats.on_backtrack();
                self.monitor.on_backtrack(&self.state, &self.stats);
                continue;
            }

            let column = ColumnIndex::new(candidate);
            frame.set_placed(column);
            self.state.place(row, column);
            self.stats.on_node_explored();
            self.stats.on_depth_update(self.state.num_placed() as u64);
            self.monitor
                .on_descend(&self.state, row, column, &self.stats);

            if self.state.is_complete() {
                return self.emit_solution();
            }
            self.stack.push_frame(row.next());
        }
    }

    #[inline]
    fn emit_solution(&mut self) -> SearchOutcome {
        let solution = Solution::new(self.state.placed_columns().to_vec());
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&solution, &self.stats);
        SearchOutcome::Found(solution)
    }
}

/// Yields solutions until the engine reports `Exhausted` or `Aborted`.
///
/// An aborted engine can be iterated again and continues where it stopped,
/// so this iterator is not fused.
impl<M> Iterator for QueensSearch<M>
where
    M: SearchMonitor,
{
    type Item = Solution;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution().into_solution()
    }
}

impl<M> std::fmt::Display for QueensSearch<M>
where
    M: SearchMonitor,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "QueensSearch(board: {}, solutions: {}, exhausted: {}, monitor: {})",
            self.state.board_size(),
            self.stats.solutions_found,
            self.is_exhausted(),
            self.monitor.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{node_limit::NodeLimitMonitor, solution_limit::SolutionLimitMonitor};
    use nqueens_model::safety;
    use rustc_hash::FxHashSet;

    fn all_solutions(n: usize) -> Vec<Vec<usize>> {
        QueensSearch::new(BoardSize::new(n))
            .map(|s| s.raw_columns())
            .collect()
    }

    #[test]
    fn test_empty_board_has_one_solution() {
        let mut search = QueensSearch::new(BoardSize::new(0));
        let first = search.next_solution();
        assert!(first.is_found());
        assert_eq!(first.solution().map(Solution::num_queens), Some(0));
        assert!(search.next_solution().is_exhausted());
        assert!(search.is_exhausted());
    }

    #[test]
    fn test_single_queen() {
        assert_eq!(all_solutions(1), vec![vec![0]]);
    }

    #[test]
    fn test_two_and_three_have_no_solution() {
        for n in [2, 3] {
            let mut search = QueensSearch::new(BoardSize::new(n));
            assert!(search.next_solution().is_exhausted(), "n = {}", n);
            assert_eq!(search.statistics().solutions_found, 0);
        }
    }

    #[test]
    fn test_four_queens_in_order() {
        assert_eq!(all_solutions(4), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_eight_queens_count_and_first() {
        let solutions = all_solutions(8);
        assert_eq!(solutions.len(), 92);
        assert_eq!(solutions[0], vec![0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_known_solution_counts() {
        let expected = [(5, 10), (6, 4), (7, 40), (8, 92), (9, 352), (10, 724)];
        for (n, count) in expected {
            assert_eq!(QueensSearch::new(BoardSize::new(n)).count(), count, "n = {}", n);
        }
    }

    #[test]
    fn test_solutions_are_valid_unique_and_increasing() {
        let solutions: Vec<Solution> = QueensSearch::new(BoardSize::new(9)).collect();

        let unique: FxHashSet<&Solution> = solutions.iter().collect();
        assert_eq!(unique.len(), solutions.len());

        for s in &solutions {
            assert!(safety::is_valid_solution(s.columns()), "invalid: {}", s);
        }
        for pair in solutions.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_exhausted_is_sticky() {
        let mut search = QueensSearch::new(BoardSize::new(4));
        assert_eq!(search.by_ref().count(), 2);
        for _ in 0..3 {
            assert_eq!(search.next_solution(), SearchOutcome::Exhausted);
        }
    }

    #[test]
    fn test_try_new_rejects_negative() {
        let err = QueensSearch::try_new(-4i64).unwrap_err();
        assert_eq!(err.value(), -4);
        assert_eq!(QueensSearch::try_new(5u16).unwrap().board_size(), BoardSize::new(5));
    }

    #[test]
    fn test_node_limit_abort_resumes_without_loss() {
        let reference = all_solutions(8);

        let mut search = QueensSearch::with_monitor(BoardSize::new(8), NodeLimitMonitor::new(7));
        let mut collected = Vec::new();
        let mut aborts = 0usize;
        loop {
            match search.next_solution() {
                SearchOutcome::Found(s) => collected.push(s.raw_columns()),
                SearchOutcome::Aborted(_) => aborts += 1,
                SearchOutcome::Exhausted => break,
            }
        }

        assert!(aborts > 0);
        assert_eq!(collected, reference);
        assert!(search.statistics().resumptions >= aborts as u64);
    }

    #[test]
    fn test_solution_limit_aborts_until_reset() {
        let mut search =
            QueensSearch::with_monitor(BoardSize::new(6), SolutionLimitMonitor::new(2));
        assert!(search.next_solution().is_found());
        assert!(search.next_solution().is_found());
        assert!(search.next_solution().is_aborted());
        assert!(search.next_solution().is_aborted());
        assert!(!search.is_exhausted());

        search.reset();
        let first = search.next_solution().into_solution().map(|s| s.raw_columns());
        assert_eq!(first, Some(vec![1, 3, 5, 0, 2, 4]));
    }

    #[test]
    fn test_reset_restarts_and_clears_statistics() {
        let mut search = QueensSearch::new(BoardSize::new(5));
        let first = search.next_solution();
        search.next_solution();
        assert_eq!(search.statistics().solutions_found, 2);

        search.reset();
        assert_eq!(search.statistics(), &SearchStatistics::default());
        assert_eq!(search.next_solution(), first);
    }

    #[test]
    fn test_reset_to_other_size() {
        let mut search = QueensSearch::new(BoardSize::new(4));
        search.next_solution();
        search.reset_to(BoardSize::new(6));
        assert_eq!(search.board_size(), BoardSize::new(6));
        assert_eq!(search.count(), 4);
    }

    #[test]
    fn test_statistics_are_coherent() {
        let mut search = QueensSearch::new(BoardSize::new(6));
        assert_eq!(search.by_ref().count(), 4);

        let stats = search.statistics();
        assert_eq!(stats.solutions_found, 4);
        assert_eq!(stats.max_depth, 6);
        assert_eq!(stats.resumptions, 4);
        assert!(stats.conflicts > 0);
        // Every placement is eventually withdrawn and every frame closed.
        assert!(stats.backtracks > 0);
        assert!(stats.nodes_explored >= stats.solutions_found * 6);
        assert!(search.state().placed_columns().is_empty());
    }

    #[test]
    fn test_display() {
        let search = QueensSearch::new(BoardSize::new(4));
        assert_eq!(
            search.to_string(),
            "QueensSearch(board: 4x4, solutions: 0, exhausted: false, monitor: NoOperationMonitor)"
        );
    }
}
