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

//! Monitoring combinators
//!
//! Provides `CompositeMonitor`, a fan‑out monitor that forwards every event
//! to its children. This lets you mix logging and stop conditions without
//! coupling them to the engine.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short‑circuits on the first non‑`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

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

/// A monitor that aggregates multiple monitors and forwards events to all of them.
#[derive(Default)]
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SearchMonitor + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn SearchMonitor + 'a>> for CompositeMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl std::fmt::Display for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor(")?;
        for (i, monitor) in self.monitors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", monitor.name())?;
        }
        write!(f, ")")
    }
}

impl SearchMonitor for CompositeMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, size: BoardSize, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(size, statistics);
        }
    }

    fn on_resume(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_resume(statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    fn search_command(
        &mut self,
        state: &SearchState,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        for monitor in &mut self.monitors {
            match monitor.search_command(state, statistics) {
                SearchCommand::Continue => {}
                command => return command,
            }
        }
        SearchCommand::Continue
    }

    fn on_descend(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_descend(state, row, column, statistics);
        }
    }

    fn on_conflict(
        &mut self,
        state: &SearchState,
        row: RowIndex,
        column: ColumnIndex,
        statistics: &SearchStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_conflict(state, row, column, statistics);
        }
    }

    fn on_backtrack(&mut self, state: &SearchState, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_backtrack(state, statistics);
        }
    }

    fn on_solution_found(&mut self, solution: &Solution, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(solution, statistics);
        }
    }
}
