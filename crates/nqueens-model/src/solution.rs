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
    index::{ColumnIndex, RowIndex},
    safety,
    size::BoardSize,
};
use num_traits::{NumCast, PrimInt, Signed};

/// A complete, attack-free placement of one queen per row.
///
/// `columns[r]` is the column of the queen in row `r`.
/// Solutions order lexicographically by their column sequence, which is the
/// order the depth-first search discovers them in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    columns: Vec<ColumnIndex>,
}

impl Solution {
    /// Constructs a new `Solution` from a full column assignment.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if two queens attack each other or a column
    /// lies outside the board.
    pub fn new(columns: Vec<ColumnIndex>) -> Self {
        debug_assert!(
            safety::is_valid_solution(&columns),
            "called `Solution::new` with an attacking or out of range placement: {:?}",
            columns
        );

        Self { columns }
    }

    /// Builds a solution from raw column numbers, validating it.
    ///
    /// Returns `None` if the placement is not a valid solution.
    pub fn from_raw_columns<I>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let columns: Vec<ColumnIndex> = columns.into_iter().map(ColumnIndex::new).collect();
        if safety::is_valid_solution(&columns) {
            Some(Self { columns })
        } else {
            None
        }
    }

    /// Returns the board dimension.
    #[inline]
    pub fn board_size(&self) -> BoardSize {
        BoardSize::new(self.columns.len())
    }

    /// Returns the number of queens, which equals the board dimension.
    #[inline]
    pub fn num_queens(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column of the queen in `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn column_for_row(&self, row: RowIndex) -> ColumnIndex {
        let index = row.get();
        debug_assert!(
            index < self.num_queens(),
            "called `Solution::column_for_row` with row index out of bounds: the len is {} but the index is {}",
            self.num_queens(),
            index
        );

        self.columns[index]
    }

    /// Returns the columns indexed by row.
    #[inline]
    pub fn columns(&self) -> &[ColumnIndex] {
        &self.columns
    }

    /// Returns the columns as plain `usize` values.
    #[inline]
    pub fn raw_columns(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.get()).collect()
    }

    /// Exports the columns as signed integers.
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
            .map(|c| {
                <T as NumCast>::from(c.get())
                    .expect("column index does not fit into the target integer type")
            })
            .collect()
    }

    /// Iterates `(row, column)` pairs top to bottom.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (RowIndex, ColumnIndex)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(r, &c)| (RowIndex::new(r), c))
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", column.get())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_columns_validates() {
        let sol = Solution::from_raw_columns([1, 3, 0, 2]).expect("valid 4-queens solution");
        assert_eq!(sol.num_queens(), 4);
        assert_eq!(sol.board_size(), BoardSize::new(4));
        assert_eq!(sol.raw_columns(), vec![1, 3, 0, 2]);
        assert_eq!(sol.column_for_row(RowIndex::new(2)), ColumnIndex::new(0));

        assert!(Solution::from_raw_columns([0, 1, 2, 3]).is_none());
    }

    #[test]
    fn test_empty_solution() {
        let sol = Solution::from_raw_columns(std::iter::empty()).expect("empty board is valid");
        assert_eq!(sol.num_queens(), 0);
        assert!(sol.board_size().is_empty());
        assert_eq!(sol.to_string(), "[]");
    }

    #[test]
    fn test_to_signed_columns() {
        let sol = Solution::from_raw_columns([2, 0, 3, 1]).unwrap();
        assert_eq!(sol.to_signed_columns::<i32>(), vec![2, 0, 3, 1]);
        assert_eq!(sol.to_signed_columns::<i8>(), vec![2i8, 0, 3, 1]);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Solution::from_raw_columns([1, 3, 0, 2]).unwrap();
        let b = Solution::from_raw_columns([2, 0, 3, 1]).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_iter_and_display() {
        let sol = Solution::from_raw_columns([1, 3, 0, 2]).unwrap();
        let pairs: Vec<(usize, usize)> = sol.iter().map(|(r, c)| (r.get(), c.get())).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
        assert_eq!(sol.to_string(), "[1, 3, 0, 2]");
    }
}
