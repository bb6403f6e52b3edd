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

//! Pairwise attack checks.
//!
//! These are the reference definitions of the safety invariant. The search
//! engine keeps occupancy bitsets for speed and uses these functions only in
//! debug assertions; consumers and tests use them to validate boards.

use crate::index::{ColumnIndex, RowIndex};

/// Returns `true` if queens at `(row_a, column_a)` and `(row_b, column_b)`
/// share a column or either diagonal.
///
/// Rows are assumed to be distinct.
#[inline]
pub fn attacks(row_a: RowIndex, column_a: ColumnIndex, row_b: RowIndex, column_b: ColumnIndex) -> bool {
    let (ra, ca) = (row_a.get(), column_a.get());
    let (rb, cb) = (row_b.get(), column_b.get());

    // `c - r` compared without leaving unsigned arithmetic.
    ca == cb || ca + rb == cb + ra || ca + ra == cb + rb
}

/// Returns `true` if a queen at `(row, column)` is attacked by none of the
/// queens in `placed`, where `placed[i]` is the column of row `i`.
#[inline]
pub fn is_safe_placement(placed: &[ColumnIndex], row: RowIndex, column: ColumnIndex) -> bool {
    placed
        .iter()
        .enumerate()
        .all(|(r, &c)| !attacks(RowIndex::new(r), c, row, column))
}

/// Returns `true` if `columns` is a complete placement of `columns.len()`
/// queens in which no two queens attack each other.
pub fn is_valid_solution(columns: &[ColumnIndex]) -> bool {
    let n = columns.len();
    columns.iter().all(|c| c.get() < n)
        && (0..n).all(|row| is_safe_placement(&columns[..row], RowIndex::new(row), columns[row]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(raw: &[usize]) -> Vec<ColumnIndex> {
        raw.iter().copied().map(ColumnIndex::new).collect()
    }

    #[test]
    fn test_attacks_detects_column_and_diagonals() {
        let r = RowIndex::new;
        let c = ColumnIndex::new;

        assert!(attacks(r(0), c(2), r(3), c(2)));
        // "\" diagonal: column - row equal
        assert!(attacks(r(0), c(0), r(2), c(2)));
        // "/" diagonal: column + row equal
        assert!(attacks(r(1), c(3), r(3), c(1)));
        assert!(!attacks(r(0), c(1), r(1), c(3)));
    }

    #[test]
    fn test_is_safe_placement_against_prefix() {
        let placed = cols(&[1, 3]);
        assert!(is_safe_placement(&placed, RowIndex::new(2), ColumnIndex::new(0)));
        assert!(!is_safe_placement(&placed, RowIndex::new(2), ColumnIndex::new(2)));
        assert!(is_safe_placement(&[], RowIndex::new(0), ColumnIndex::new(0)));
    }

    #[test]
    fn test_is_valid_solution() {
        assert!(is_valid_solution(&cols(&[1, 3, 0, 2])));
        assert!(is_valid_solution(&cols(&[0, 4, 7, 5, 2, 6, 1, 3])));
        assert!(is_valid_solution(&[]));
        assert!(is_valid_solution(&cols(&[0])));

        assert!(!is_valid_solution(&cols(&[0, 1])));
        assert!(!is_valid_solution(&cols(&[1, 3, 0, 0])));
        // Out of range column
        assert!(!is_valid_solution(&cols(&[4, 1, 3, 0])));
    }
}
