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

//! Row and column indices on the board.
//!
//! Both axes of an N-Queens board are plain `0..n` ranges, which makes it
//! trivial to pass a row where a column was expected. `RowIndex` and
//! `ColumnIndex` are distinct zero-cost wrappers around `usize` so the
//! compiler catches such swaps.
//!
//! ```rust
//! use nqueens_model::index::{ColumnIndex, RowIndex};
//!
//! let row = RowIndex::new(2);
//! let column = ColumnIndex::new(5);
//! assert_eq!(row.get(), 2);
//! assert_eq!(format!("{}", column), "ColumnIndex(5)");
//! ```

/// Names an index space for `Debug`/`Display` output.
pub trait IndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index tagged with the axis it belongs to.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Wraps a raw index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the raw index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the index one step further along the axis.
    #[inline(always)]
    pub const fn next(&self) -> Self {
        Self::new(self.index + 1)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: IndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: IndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline]
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

/// Tag for row indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RowIndexTag;

impl IndexTag for RowIndexTag {
    const NAME: &'static str = "RowIndex";
}

/// Index of a board row. Every row carries exactly one queen in a solution.
pub type RowIndex = TypedIndex<RowIndexTag>;

/// Tag for column indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ColumnIndexTag;

impl IndexTag for ColumnIndexTag {
    const NAME: &'static str = "ColumnIndex";
}

/// Index of a board column.
pub type ColumnIndex = TypedIndex<ColumnIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_get_and_next() {
        let row = RowIndex::new(3);
        assert_eq!(row.get(), 3);
        assert_eq!(row.next().get(), 4);
    }

    #[test]
    fn test_conversions() {
        let column: ColumnIndex = 7.into();
        assert_eq!(column.get(), 7);

        let raw: usize = column.into();
        assert_eq!(raw, 7);
    }

    #[test]
    fn test_debug_and_display_use_axis_name() {
        assert_eq!(format!("{}", RowIndex::new(1)), "RowIndex(1)");
        assert_eq!(format!("{:?}", ColumnIndex::new(0)), "ColumnIndex(0)");
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(ColumnIndex::new(1) < ColumnIndex::new(2));
        assert_eq!(RowIndex::new(4), RowIndex::new(4));
    }
}
