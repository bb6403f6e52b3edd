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

use std::time::Duration;

/// Counters collected by the search engine.
///
/// The counters accumulate across `next_solution` calls and are cleared
/// only when the engine is reset. All counters saturate instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Queens placed (nodes of the search tree entered).
    pub nodes_explored: u64,
    /// Candidate squares rejected because an already placed queen attacks them.
    pub conflicts: u64,
    /// Rows abandoned after all of their columns were tried.
    pub backtracks: u64,
    /// Complete boards emitted.
    pub solutions_found: u64,
    /// Times a suspended search was picked up again.
    pub resumptions: u64,
    /// Deepest number of simultaneously placed queens.
    pub max_depth: u64,
    /// Wall-clock time spent inside the engine.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_conflict(&mut self) {
        self.conflicts = self.conflicts.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_resume(&mut self) {
        self.resumptions = self.resumptions.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn add_time(&mut self, elapsed: Duration) {
        self.time_total = self.time_total.saturating_add(elapsed);
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "N-Queens Search Statistics:")?;
        writeln!(f, "  Nodes explored:     {}", self.nodes_explored)?;
        writeln!(f, "  Conflicts:          {}", self.conflicts)?;
        writeln!(f, "  Backtracks:         {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:  {}", self.max_depth)?;
        writeln!(f, "  Solutions found:    {}", self.solutions_found)?;
        writeln!(f, "  Resumptions:        {}", self.resumptions)?;
        writeln!(f, "  Total time:         {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment_and_saturate() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_conflict();
        stats.on_conflict();
        stats.on_backtrack();
        stats.on_solution_found();
        stats.on_resume();
        assert_eq!(stats.nodes_explored, 1);
        assert_eq!(stats.conflicts, 2);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.resumptions, 1);

        stats.nodes_explored = u64::MAX;
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_depth_keeps_maximum() {
        let mut stats = SearchStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_add_time_accumulates() {
        let mut stats = SearchStatistics::default();
        stats.add_time(Duration::from_millis(5));
        stats.add_time(Duration::from_millis(7));
        assert_eq!(stats.time_total, Duration::from_millis(12));
    }

    #[test]
    fn test_display_lists_counters() {
        let mut stats = SearchStatistics::default();
        stats.on_solution_found();
        let rendered = stats.to_string();
        assert!(rendered.contains("Solutions found:    1"));
        assert!(rendered.contains("Nodes explored:     0"));
    }
}
