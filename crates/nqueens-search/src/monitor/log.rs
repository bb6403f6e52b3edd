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

//! Progress reporting through the `log` facade.
//!
//! `LogMonitor` never influences the search. Progress lines go out at `info`
//! level at most once per `log_interval`; the clock is only read when the
//! node counter hits the `clock_check_mask`. Every solution is reported at
//! `debug` level.

use crate::{monitor::search_monitor::SearchMonitor, state::SearchState, stats::SearchStatistics};
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
    solution::Solution,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    board_size: BoardSize,
    lines_logged: u64,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            board_size: BoardSize::default(),
            lines_logged: 0,
        }
    }

    /// Number of progress lines written since the last `on_enter_search`.
    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged
    }

    #[inline(always)]
    fn log_line(&mut self, state: &SearchState, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        log::info!(
            "{:>8.1}s | nodes {:>12} | depth {:>3}/{:<3} | solutions {:>10} | backtracks {:>12}",
            elapsed,
            stats.nodes_explored,
            state.num_placed(),
            self.board_size.get(),
            stats.solutions_found,
            stats.backtracks
        );

        self.lines_logged = self.lines_logged.saturating_add(1);
        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, size: BoardSize, _statistics: &SearchStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.board_size = size;
        self.lines_logged = 0;
        log::info!("starting N-Queens enumeration on a {} board", size);
    }

    fn on_resume(&mut self, statistics: &SearchStatistics) {
        log::trace!(
            "resuming search after {} solutions",
            statistics.solutions_found
        );
    }

    fn on_descend(
        &mut self,
        state: &SearchState,
        _row: RowIndex,
        _column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, statistics);
        }
    }

    fn on_backtrack(&mut self, _state: &SearchState, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, solution: &Solution, statistics: &SearchStatistics) {
        log::debug!(
            "solution #{}: {}",
            statistics.solutions_found,
            solution
        );
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        log::info!(
            "search space exhausted: {} solutions, {} nodes, {:.3}s",
            statistics.solutions_found,
            statistics.nodes_explored,
            statistics.time_total.as_secs_f64()
        );
    }
}
