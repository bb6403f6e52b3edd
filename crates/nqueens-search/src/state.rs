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

//! Incremental board state for the backtracking search.
//!
//! `SearchState` holds the placed prefix of the board (rows `0..num_placed`)
//! together with three occupancy bitsets: one over columns, one over the
//! `c - r` diagonals and one over the `c + r` anti-diagonals. A candidate
//! square is safe exactly when none of its three bits is set, so the safety
//! invariant is checked against the whole placed prefix in constant time.
//!
//! Rows are placed and removed strictly in stack order: `place` extends the
//! prefix by one row and `unplace` removes its last row. Debug assertions
//! guard that discipline and cross-check every placement against the
//! pairwise reference predicate in `nqueens_model::safety`.

use fixedbitset::FixedBitSet;
use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    safety,
    size::BoardSize,
};

/// The placed prefix of the board plus attack bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchState {
    placed: Vec<ColumnIndex>,
    occupied_columns: FixedBitSet,
    occupied_diagonals: FixedBitSet,
    occupied_anti_diagonals: FixedBitSet,
    size: BoardSize,
}

impl SearchState {
    /// Creates an empty state for a board of the given size.
    #[inline]
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        Self {
            placed: Vec::with_capacity(n),
            occupied_columns: FixedBitSet::with_capacity(n),
            occupied_diagonals: FixedBitSet::with_capacity(size.num_diagonals()),
            occupied_anti_diagonals: FixedBitSet::with_capacity(size.num_diagonals()),
            size,
        }
    }

    /// Returns the board dimension.
    #[inline]
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of placed rows, which is also the next row to fill.
    #[inline]
    pub fn num_placed(&self) -> usize {
        self.placed.len()
    }

    /// Returns `true` if every row carries a queen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placed.len() == self.size.get()
    }

    /// Returns the columns of the placed rows, indexed by row.
    #[inline]
    pub fn placed_columns(&self) -> &[ColumnIndex] {
        &self.placed
    }

    #[inline(always)]
    fn diagonal(&self, row: RowIndex, column: ColumnIndex) -> usize {
        // c - r shifted into 0..2n-1
        column.get() + (self.size.get() - 1) - row.get()
    }

    #[inline(always)]
    fn anti_diagonal(row: RowIndex, column: ColumnIndex) -> usize {
        column.get() + row.get()
    }

    /// Returns `true` if no placed queen attacks `(row, column)`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the square lies off the board.
    #[inline]
    pub fn is_safe(&self, row: RowIndex, column: ColumnIndex) -> bool {
        debug_assert!(
            self.size.contains_row(row) && self.size.contains_column(column),
            "called `SearchState::is_safe` with a square off the {} board: ({}, {})",
            self.size,
            row.get(),
            column.get()
        );

        let safe = !self.occupied_columns.contains(column.get())
            && !self.occupied_diagonals.contains(self.diagonal(row, column))
            && !self.occupied_anti_diagonals.contains(Self::anti_diagonal(row, column));

        debug_assert_eq!(
            safe,
            safety::is_safe_placement(&self.placed, row, column),
            "occupancy bitsets disagree with the placed prefix at ({}, {})",
            row.get(),
            column.get()
        );

        safe
    }

    /// Places a queen at `(row, column)`, extending the placed prefix.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` is not the next unplaced row or the
    /// square is attacked.
    #[inline]
    pub fn place(&mut self, row: RowIndex, column: ColumnIndex) {
        debug_assert_eq!(
            row.get(),
            self.placed.len(),
            "called `SearchState::place` out of row order: the next row is {} but the row is {}",
            self.placed.len(),
            row.get()
        );
        debug_assert!(
            self.is_safe(row, column),
            "called `SearchState::place` on an attacked square: ({}, {})",
            row.get(),
            column.get()
        );

        let diagonal = self.diagonal(row, column);
        self.occupied_columns.insert(column.get());
        self.occupied_diagonals.insert(diagonal);
        self.occupied_anti_diagonals
            .insert(Self::anti_diagonal(row, column));
        self.placed.push(column);
    }

    /// Removes the queen from `row`, which must be the last placed row.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` is not the last placed row or
    /// `column` is not the column placed there.
    #[inline]
    pub fn unplace(&mut self, row: RowIndex, column: ColumnIndex) {
        debug_assert_eq!(
            self.placed.last().copied(),
            Some(column),
            "called `SearchState::unplace` with a column that is not on top of the placed prefix"
        );
        debug_assert_eq!(
            row.get() + 1,
            self.placed.len(),
            "called `SearchState::unplace` out of row order: the last row is {} but the row is {}",
            self.placed.len().wrapping_sub(1),
            row.get()
        );

        let diagonal = self.diagonal(row, column);
        self.occupied_columns.set(column.get(), false);
        self.occupied_diagonals.set(diagonal, false);
        self.occupied_anti_diagonals
            .set(Self::anti_diagonal(row, column), false);
        self.placed.pop();
    }

    /// Removes every queen.
    #[inline]
    pub fn reset(&mut self) {
        self.placed.clear();
        self.occupied_columns.clear();
        self.occupied_diagonals.clear();
        self.occupied_anti_diagonals.clear();
    }
}

impl std::fmt::Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "State(board: {}, placed: {}/{})",
            self.size,
            self.placed.len(),
            self.size.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn c(i: usize) -> ColumnIndex {
        ColumnIndex::new(i)
    }

    #[test]
    fn test_new_state_is_empty() {
        let s = SearchState::new(BoardSize::new(4));
        assert_eq!(s.num_placed(), 0);
        assert!(!s.is_complete());
        assert!(s.placed_columns().is_empty());
        assert_eq!(format!("{}", s), "State(board: 4x4, placed: 0/4)");
    }

    #[test]
    fn test_zero_board_is_complete_from_the_start() {
        let s = SearchState::new(BoardSize::new(0));
        assert!(s.is_complete());
        assert!(s.placed_columns().is_empty());
    }

    #[test]
    fn test_place_blocks_column_and_both_diagonals() {
        let mut s = SearchState::new(BoardSize::new(4));
        s.place(r(0), c(1));

        assert!(!s.is_safe(r(1), c(1)));
        assert!(!s.is_safe(r(1), c(0)));
        assert!(!s.is_safe(r(1), c(2)));
        assert!(s.is_safe(r(1), c(3)));
        assert!(!s.is_safe(r(3), c(1)));
        assert!(s.is_safe(r(2), c(0)));
    }

    #[test]
    fn test_unplace_restores_occupancy() {
        let mut s = SearchState::new(BoardSize::new(4));
        s.place(r(0), c(1));
        s.place(r(1), c(3));
        assert!(!s.is_safe(r(2), c(2)));

        s.unplace(r(1), c(3));
        assert_eq!(s.placed_columns(), &[c(1)]);
        assert!(s.is_safe(r(1), c(3)));

        s.unplace(r(0), c(1));
        assert_eq!(s.num_placed(), 0);
        assert!(s.is_safe(r(0), c(1)));
    }

    #[test]
    fn test_complete_placement_is_a_valid_solution() {
        let mut s = SearchState::new(BoardSize::new(4));
        for (row, col) in [1, 3, 0, 2].into_iter().enumerate() {
            assert!(s.is_safe(r(row), c(col)));
            s.place(r(row), c(col));
        }
        assert!(s.is_complete());

        assert_eq!(s.placed_columns(), &[c(1), c(3), c(0), c(2)]);
        assert!(safety::is_valid_solution(s.placed_columns()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = SearchState::new(BoardSize::new(5));
        s.place(r(0), c(0));
        s.place(r(1), c(2));
        s.reset();
        assert_eq!(s.num_placed(), 0);
        assert!(s.is_safe(r(0), c(0)));
        assert!(s.is_safe(r(1), c(2)));
    }

    #[test]
    fn test_bitsets_agree_with_reference_predicate() {
        let size = BoardSize::new(6);
        let mut s = SearchState::new(size);
        s.place(r(0), c(1));
        s.place(r(1), c(3));
        s.place(r(2), c(5));

        for column in size.columns() {
            assert_eq!(
                s.is_safe(r(3), column),
                safety::is_safe_placement(s.placed_columns(), r(3), column)
            );
        }
    }
}
