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

//! Validated board dimension.
//!
//! Callers hand in the board size as whatever integer type their
//! presentation layer uses. `BoardSize` is the single place where that
//! value is checked: a negative number, or one that does not fit into
//! `usize`, is rejected with `InvalidDimensionError`. Zero is a valid
//! dimension (the empty board has exactly one solution).

use crate::index::{ColumnIndex, RowIndex};
use num_traits::PrimInt;
use thiserror::Error;

/// Returned when a board dimension is negative or not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid board dimension {value}: the number of queens must be a non-negative integer")]
pub struct InvalidDimensionError {
    value: i128,
}

impl InvalidDimensionError {
    /// The rejected value. Values outside the `i128` range saturate.
    #[inline]
    pub fn value(&self) -> i128 {
        self.value
    }
}

/// The number of rows, columns and queens on the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a board size from an unsigned value. Never fails.
    #[inline(always)]
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Creates a board size from any primitive integer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensionError` if `value` is negative or does not
    /// fit into `usize`.
    ///
    /// ```rust
    /// use nqueens_model::size::BoardSize;
    ///
    /// assert_eq!(BoardSize::try_from_int(8i32).unwrap().get(), 8);
    /// assert!(BoardSize::try_from_int(-1i64).is_err());
    /// ```
    pub fn try_from_int<I>(value: I) -> Result<Self, InvalidDimensionError>
    where
        I: PrimInt,
    {
        value.to_usize().map(Self).ok_or_else(|| InvalidDimensionError {
            value: value.to_i128().unwrap_or(i128::MAX),
        })
    }

    /// Returns the dimension.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Returns `true` for the zero-sized board.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of diagonals in one direction (`2n - 1`, or zero for the empty board).
    #[inline]
    pub const fn num_diagonals(&self) -> usize {
        (2 * self.0).saturating_sub(1)
    }

    /// Returns `true` if `row` lies on the board.
    #[inline]
    pub fn contains_row(&self, row: RowIndex) -> bool {
        row.get() < self.0
    }

    /// Returns `true` if `column` lies on the board.
    #[inline]
    pub fn contains_column(&self, column: ColumnIndex) -> bool {
        column.get() < self.0
    }

    /// Iterates the rows top to bottom.
    #[inline]
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = RowIndex> + ExactSizeIterator {
        (0..self.0).map(RowIndex::new)
    }

    /// Iterates the columns left to right.
    #[inline]
    pub fn columns(&self) -> impl DoubleEndedIterator<Item = ColumnIndex> + ExactSizeIterator {
        (0..self.0).map(ColumnIndex::new)
    }

    /// Returns the size shifted by `delta`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensionError` if the result would be negative.
    pub fn checked_offset(&self, delta: i64) -> Result<Self, InvalidDimensionError> {
        let current = i128::try_from(self.0).unwrap_or(i128::MAX);
        Self::try_from_int(current.saturating_add(i128::from(delta)))
    }
}

impl From<usize> for BoardSize {
    #[inline]
    fn from(n: usize) -> Self {
        Self(n)
    }
}

impl From<BoardSize> for usize {
    #[inline]
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for BoardSize {
                type Error = InvalidDimensionError;

                #[inline]
                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    Self::try_from_int(value)
                }
            }
        )*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_int_accepts_non_negative() {
        assert_eq!(BoardSize::try_from_int(0i32).unwrap().get(), 0);
        assert_eq!(BoardSize::try_from_int(8i64).unwrap().get(), 8);
        assert_eq!(BoardSize::try_from_int(12u8).unwrap().get(), 12);
    }

    #[test]
    fn test_try_from_int_rejects_negative() {
        let err = BoardSize::try_from_int(-3i32).unwrap_err();
        assert_eq!(err.value(), -3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_try_from_signed_impls() {
        assert_eq!(BoardSize::try_from(4i64), Ok(BoardSize::new(4)));
        assert!(BoardSize::try_from(-1isize).is_err());
    }

    #[test]
    fn test_num_diagonals() {
        assert_eq!(BoardSize::new(0).num_diagonals(), 0);
        assert_eq!(BoardSize::new(1).num_diagonals(), 1);
        assert_eq!(BoardSize::new(8).num_diagonals(), 15);
    }

    #[test]
    fn test_rows_and_columns_iterate_in_order() {
        let size = BoardSize::new(3);
        let rows: Vec<usize> = size.rows().map(|r| r.get()).collect();
        let columns: Vec<usize> = size.columns().rev().map(|c| c.get()).collect();
        assert_eq!(rows, vec![0, 1, 2]);
        assert_eq!(columns, vec![2, 1, 0]);
        assert!(size.contains_row(RowIndex::new(2)));
        assert!(!size.contains_column(ColumnIndex::new(3)));
    }

    #[test]
    fn test_checked_offset() {
        let size = BoardSize::new(2);
        assert_eq!(size.checked_offset(1), Ok(BoardSize::new(3)));
        assert_eq!(size.checked_offset(-2), Ok(BoardSize::new(0)));
        assert!(size.checked_offset(-3).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BoardSize::new(8).to_string(), "8x8");
    }
}
