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

//! Cursor-driven navigation over a lazily produced solution sequence.
//!
//! `SolutionStream` owns one `QueensSearch` engine and a bounded
//! `SolutionHistory`. Moving forward replays retained solutions while the
//! cursor is behind the newest one and only asks the engine for more work
//! at the tail. Moving backward never searches: it stops at the oldest
//! retained solution, so once more than `history_capacity` solutions have
//! been produced the earliest ones are gone for good.

use crate::{
    config::StreamConfig,
    error::StreamError,
    history::SolutionHistory,
    navigation::{Advance, Retreat},
};
use nqueens_model::{board::Board, size::BoardSize, solution::Solution};
use nqueens_search::{
    engine::QueensSearch,
    monitor::{no_op::NoOperationMonitor, search_monitor::SearchMonitor},
    result::SearchOutcome,
    stats::SearchStatistics,
};
use num_traits::PrimInt;

#[derive(Debug, Clone)]
pub struct SolutionStream<M = NoOperationMonitor>
where
    M: SearchMonitor,
{
    engine: QueensSearch<M>,
    history: SolutionHistory,
    config: StreamConfig,
    produced: u64,
}

impl SolutionStream<NoOperationMonitor> {
    /// Creates a stream over the solutions of the `n`-queens problem with
    /// the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidDimension` if `n` is negative.
    ///
    /// ```rust
    /// use nqueens_stream::{navigation::Retreat, stream::SolutionStream};
    ///
    /// let mut stream = SolutionStream::new(4).unwrap();
    /// assert_eq!(stream.retreat(), Retreat::AtOldestRetained);
    ///
    /// let first = stream.advance().solution().map(|s| s.raw_columns());
    /// assert_eq!(first, Some(vec![1, 3, 0, 2]));
    /// ```
    pub fn new<I>(n: I) -> Result<Self, StreamError>
    where
        I: PrimInt,
    {
        Self::with_config(n, StreamConfig::default())
    }

    /// Creates a stream with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidDimension` if `n` is negative.
    pub fn with_config<I>(n: I, config: StreamConfig) -> Result<Self, StreamError>
    where
        I: PrimInt,
    {
        Self::with_monitor(n, config, NoOperationMonitor::new())
    }
}

impl<M> SolutionStream<M>
where
    M: SearchMonitor,
{
    /// Creates a stream whose engine reports to `monitor`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidDimension` if `n` is negative.
    pub fn with_monitor<I>(n: I, config: StreamConfig, monitor: M) -> Result<Self, StreamError>
    where
        I: PrimInt,
    {
        let size = BoardSize::try_from_int(n)?;
        let mut stream = Self {
            engine: QueensSearch::with_monitor(size, monitor),
            history: SolutionHistory::new(config.history_capacity()),
            config,
            produced: 0,
        };

        log::debug!(
            "created solution stream on a {} board with {}",
            size,
            config
        );
        stream.preload();
        Ok(stream)
    }

    /// Moves the cursor to the next solution.
    ///
    /// Replays from the history when the cursor is behind the newest
    /// retained solution; otherwise resumes the engine and appends what it
    /// produces, evicting the oldest entry when the history is full.
    pub fn advance(&mut self) -> Advance<'_> {
        let solution = if self.history.has_newer() {
            match self.history.step_forward() {
                Some(solution) => solution,
                None => return Advance::Exhausted,
            }
        } else {
            let was_exhausted = self.engine.is_exhausted();
            match self.engine.next_solution() {
                SearchOutcome::Found(solution) => {
                    self.produced = self.produced.saturating_add(1);
                    if self.history.is_full() {
                        log::trace!(
                            "history full at {} entries, evicting solution #{}",
                            self.history.capacity(),
                            self.history.num_evicted()
                        );
                    }
                    self.history.push(solution)
                }
                SearchOutcome::Exhausted => {
                    if !was_exhausted {
                        log::debug!(
                            "enumeration on a {} board complete after {} solutions",
                            self.engine.board_size(),
                            self.produced
                        );
                    }
                    return Advance::Exhausted;
                }
                SearchOutcome::Aborted(reason) => {
                    log::debug!("search paused by monitor: {}", reason);
                    return Advance::Aborted(reason);
                }
            }
        };

        Advance::Solution(solution)
    }

    /// Moves the cursor back to the previous retained solution.
    pub fn retreat(&mut self) -> Retreat<'_> {
        match self.history.step_back() {
            Some(solution) => Retreat::Solution(solution),
            None => Retreat::AtOldestRetained,
        }
    }

    /// Returns the board at the cursor, or `n` unplaced rows if nothing
    /// has been produced since the last reset.
    pub fn current(&self) -> Board {
        match self.history.current() {
            Some(solution) => Board::from(solution),
            None => Board::unplaced(self.board_size()),
        }
    }

    #[inline]
    pub fn current_solution(&self) -> Option<&Solution> {
        self.history.current()
    }

    /// Starts over on an `n`-queens board, dropping all cached solutions.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidDimension` if `n` is negative; the
    /// stream is left untouched in that case.
    pub fn reset<I>(&mut self, n: I) -> Result<(), StreamError>
    where
        I: PrimInt,
    {
        let size = BoardSize::try_from_int(n)?;
        self.reset_to(size);
        Ok(())
    }

    /// Starts over on the current board size.
    pub fn restart(&mut self) {
        self.reset_to(self.board_size());
    }

    /// Starts over on a board `delta` rows larger (or smaller).
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidDimension` if the new size would be
    /// negative; the stream is left untouched in that case.
    pub fn resize_by(&mut self, delta: i64) -> Result<(), StreamError> {
        let size = self.board_size().checked_offset(delta)?;
        self.reset_to(size);
        Ok(())
    }

    fn reset_to(&mut self, size: BoardSize) {
        log::debug!(
            "resetting solution stream from a {} to a {} board ({} solutions dropped)",
            self.engine.board_size(),
            size,
            self.history.len()
        );

        self.engine.reset_to(size);
        self.history.clear();
        self.produced = 0;
        self.preload();
    }

    fn preload(&mut self) {
        if !self.config.preload_first() {
            return;
        }

        let size = self.board_size();
        match self.advance() {
            Advance::Solution(solution) => log::trace!("preloaded first solution {}", solution),
            Advance::Exhausted => log::debug!("no solution exists on a {} board", size),
            Advance::Aborted(reason) => log::debug!("preloading paused by monitor: {}", reason),
        }
    }

    #[inline]
    pub fn board_size(&self) -> BoardSize {
        self.engine.board_size()
    }

    /// Number of solutions currently available for navigation.
    #[inline]
    pub fn num_retained(&self) -> usize {
        self.history.len()
    }

    /// Number of solutions pulled from the engine since the last reset,
    /// evicted ones included.
    #[inline]
    pub fn num_produced(&self) -> u64 {
        self.produced
    }

    /// Absolute 0-based index of the solution at the cursor.
    #[inline]
    pub fn position(&self) -> Option<u64> {
        self.history.position()
    }

    /// Returns `true` once the engine has no further solutions. Retained
    /// solutions stay navigable.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.engine.is_exhausted()
    }

    /// Returns `false` only once the enumeration is complete without having
    /// produced anything.
    #[inline]
    pub fn has_solutions(&self) -> bool {
        self.produced > 0 || !self.engine.is_exhausted()
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        self.engine.statistics()
    }

    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    #[inline]
    pub fn history(&self) -> &SolutionHistory {
        &self.history
    }

    #[inline]
    pub fn monitor(&self) -> &M {
        self.engine.monitor()
    }

    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        self.engine.monitor_mut()
    }
}

impl<M> std::fmt::Display for SolutionStream<M>
where
    M: SearchMonitor,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolutionStream(board: {}, produced: {}, {})",
            self.board_size(),
            self.produced,
            self.history
        )
    }
}
