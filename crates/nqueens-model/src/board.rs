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

//! Row-indexed board assignment.
//!
//! A `Board` holds one optional column per row. It is what presentation
//! layers render: either a copy of a `Solution` or the all-unplaced
//! placeholder shown before anything has been produced. Consumers that want
//! the classic integer encoding get it from `to_signed_columns`, where an
//! unplaced row is `-1`.

use crate::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
    solution::Solution,
};
use num_traits::{NumCast, PrimInt, Signed};
use thiserror::Error;

/// Returned when a `Board` cannot be turned into a `Solution`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum BoardConversionError {
    /// Some rows carry no queen.
    #[error("incomplete board: {placed}/{total} queens placed")]
    Incomplete { placed: usize, total: usize },
    /// Every row is placed but two queens attack each other.
    #[error("board places attacking queens")]
    Attacking,
}

/// A board with at most one queen per row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<Option<ColumnIndex>>,
}

impl Board {
    /// Integer value of an unplaced row in `to_signed_columns`.
    pub const UNPLACED_SENTINEL: i8 = -1;

    /// Creates the placeholder board: `size` rows, none placed.
    #[inline]
    pub fn unplaced(size: BoardSize) -> Self {
        Self {
            columns: vec![None; size.get()],
        }
    }

    /// Returns the board dimension.
    #[inline]
    pub fn board_size(&self) -> BoardSize {
        BoardSize::new(self.columns.len())
    }

    /// Returns the column in `row`, or `None` if the row is unplaced.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn column_for_row(&self, row: RowIndex) -> Option<ColumnIndex> {
        let index = row.get();
        debug_assert!(
            index < self.columns.len(),
            "called `Board::column_for_row` with row index out of bounds: the len is {} but the index is {}",
            self.columns.len(),
            index
        );

        self.columns[index]
    }

    /// Places a queen in `row`, replacing any previous one.
    ///
    /// No attack check is performed.
    #[inline]
    pub fn place(&mut self, row: RowIndex, column: ColumnIndex) {
        debug_assert!(
            column.get() < self.columns.len(),
            "called `Board::place` with column index out of bounds: the len is {} but the index is {}",
            self.columns.len(),
            column.get()
        );

        self.columns[row.get()] = Some(column);
    }

    /// Removes the queen from `row`, returning its column.
    #[inline]
    pub fn unplace(&mut self, row: RowIndex) -> Option<ColumnIndex> {
        self.columns[row.get()].take()
    }

    /// Number of rows carrying a queen.
    #[inline]
    pub fn num_placed(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    /// Returns `true` if every row carries a queen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(Option::is_some)
    }

    /// Returns the raw per-row assignment.
    #[inline]
    pub fn columns(&self) -> &[Option<ColumnIndex>] {
        &self.columns
    }

    /// Exports the board as signed integers, `-1` marking unplaced rows.
    ///
    /// # Panics
    ///
    /// Panics if a column does not fit into `T`.
    pub fn to_signed_columns<T>(&self) -> Vec<T>
    where
        T: PrimInt + Signed,
    {
        self.columns
            .iter()
            .map(|c| match c {
                Some(c) => <T as NumCast>::from(c.get())
                    .expect("column index does not fit into the target integer type"),
                None => -T::one(),
            })
            .collect()
    }
}

impl From<&Solution> for Board {
    fn from(solution: &Solution) -> Self {
        Self {
            columns: solution.columns().iter().copied().map(Some).collect(),
        }
    }
}

impl From<Solution> for Board {
    #[inline]
    fn from(solution: Solution) -> Self {
        Self::from(&solution)
    }
}

impl TryFrom<Board> for Solution {
    type Error = BoardConversionError;

    fn try_from(board: Board) -> Result<Self, Self::Error> {
        let placed = board.num_placed();
        let total = board.columns.len();
        if placed != total {
            return Err(BoardConversionError::Incomplete { placed, total });
        }

        let columns = board.columns.into_iter().flatten().map(|c| c.get());
        Solution::from_raw_columns(columns).ok_or(BoardConversionError::Attacking)
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as a grid, `Q` for a queen and `.` for an empty square.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.columns.len();
        for column in &self.columns {
            for c in 0..n {
                let symbol = if column.map(|q| q.get()) == Some(c) { 'Q' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unplaced_placeholder() {
        let board = Board::unplaced(BoardSize::new(4));
        assert_eq!(board.board_size(), BoardSize::new(4));
        assert_eq!(board.num_placed(), 0);
        assert!(!board.is_complete());
        let sentinel = <i32 as From<i8>>::from(Board::UNPLACED_SENTINEL);
        assert_eq!(sentinel, -1);
        assert_eq!(board.to_signed_columns::<i32>(), vec![sentinel; 4]);
        assert_eq!(board.to_signed_columns::<i8>(), vec![Board::UNPLACED_SENTINEL; 4]);
    }

    #[test]
    fn test_place_and_unplace() {
        let mut board = Board::unplaced(BoardSize::new(3));
        board.place(RowIndex::new(1), ColumnIndex::new(2));
        assert_eq!(board.column_for_row(RowIndex::new(1)), Some(ColumnIndex::new(2)));
        assert_eq!(board.num_placed(), 1);
        assert_eq!(board.to_signed_columns::<i64>(), vec![-1, 2, -1]);

        assert_eq!(board.unplace(RowIndex::new(1)), Some(ColumnIndex::new(2)));
        assert_eq!(board.unplace(RowIndex::new(1)), None);
    }

    #[test]
    fn test_round_trip_through_solution() {
        let sol = Solution::from_raw_columns([2, 0, 3, 1]).unwrap();
        let board = Board::from(&sol);
        assert!(board.is_complete());

        let back = Solution::try_from(board).expect("complete board converts");
        assert_eq!(back, sol);
    }

    #[test]
    fn test_incomplete_board_conversion_fails() {
        let mut board = Board::unplaced(BoardSize::new(4));
        board.place(RowIndex::new(0), ColumnIndex::new(1));

        let err = Solution::try_from(board).unwrap_err();
        assert_eq!(
            err,
            BoardConversionError::Incomplete {
                placed: 1,
                total: 4
            }
        );
        assert_eq!(err.to_string(), "incomplete board: 1/4 queens placed");
    }

    #[test]
    fn test_attacking_board_conversion_fails() {
        let mut board = Board::unplaced(BoardSize::new(2));
        board.place(RowIndex::new(0), ColumnIndex::new(0));
        board.place(RowIndex::new(1), ColumnIndex::new(1));

        assert_eq!(
            Solution::try_from(board),
            Err(BoardConversionError::Attacking)
        );
    }

    #[test]
    fn test_display_grid() {
        let sol = Solution::from_raw_columns([1, 3, 0, 2]).unwrap();
        let rendered = Board::from(sol).to_string();
        assert_eq!(rendered, ".Q..\n...Q\nQ...\n..Q.\n");
    }

    #[test]
    fn test_empty_board_is_complete() {
        let board = Board::unplaced(BoardSize::new(0));
        assert!(board.is_complete());
        assert!(Solution::try_from(board).is_ok());
    }
}
