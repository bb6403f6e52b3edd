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

use nqueens_model::{
    index::{ColumnIndex, RowIndex},
    size::BoardSize,
};
use smallvec::SmallVec;

/// Frames kept inline before the stack spills to the heap.
const INLINE_FRAMES: usize = 32;

/// One open row on the depth-first path.
///
/// `next_column` is the first column not yet tried in this row and
/// `placed` is the column currently occupied by this row's queen, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    row: RowIndex,
    next_column: usize,
    placed: Option<ColumnIndex>,
}

impl Frame {
    /// Creates a frame that has not tried any column yet.
    #[inline]
    pub fn new(row: RowIndex) -> Self {
        Self {
            row,
            next_column: 0,
            placed: None,
        }
    }

    /// The row this frame is extending.
    #[inline]
    pub fn row(&self) -> RowIndex {
        self.row
    }

    /// The first column that has not been tried yet.
    #[inline]
    pub fn next_column(&self) -> usize {
        self.next_column
    }

    /// The column currently holding this row's queen.
    #[inline]
    pub fn placed(&self) -> Option<ColumnIndex> {
        self.placed
    }

    /// Records that `column` now holds the queen and that the scan resumes after it.
    #[inline]
    pub fn set_placed(&mut self, column: ColumnIndex) {
        self.placed = Some(column);
        self.next_column = column.get() + 1;
    }

    /// Clears the placed column and returns it.
    #[inline]
    pub fn take_placed(&mut self) -> Option<ColumnIndex> {
        self.placed.take()
    }
}

/// The explicit call stack of the resumable depth-first search.
///
/// The bottom frame extends row 0 and every frame above it extends the next
/// row. The search is exhausted when the stack runs empty.
#[derive(Clone, Debug, Default)]
pub struct SearchStack {
    frames: SmallVec<[Frame; INLINE_FRAMES]>,
}

impl SearchStack {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            frames: SmallVec::new(),
        }
    }

    /// Creates a stack able to hold one frame per row without reallocating.
    #[inline]
    pub fn preallocated(size: BoardSize) -> Self {
        Self {
            frames: SmallVec::with_capacity(size.get()),
        }
    }

    /// Returns the number of open frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frame is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Opens a frame for `row`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` does not directly follow the top frame.
    #[inline]
    pub fn push_frame(&mut self, row: RowIndex) {
        debug_assert_eq!(
            row.get(),
            self.frames.len(),
            "called `SearchStack::push_frame` out of row order: the depth is {} but the row is {}",
            self.frames.len(),
            row.get()
        );

        self.frames.push(Frame::new(row));
    }

    /// Closes the top frame.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Returns the top frame.
    #[inline]
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Returns the top frame mutably.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Returns all open frames, bottom first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Clears all frames but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.frames.clear();
    }

    /// Returns `true` if the frames live on the heap.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.frames.spilled()
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchStack(frames: {})", self.frames.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    #[test]
    fn test_new_is_empty() {
        let s = SearchStack::new();
        assert!(s.is_empty());
        assert_eq!(s.depth(), 0);
        assert!(s.top().is_none());
        assert!(s.frames().is_empty());
        assert_eq!(format!("{}", s), "SearchStack(frames: 0)");
    }

    #[test]
    fn test_push_and_pop_frames_in_row_order() {
        let mut s = SearchStack::new();
        s.push_frame(r(0));
        s.push_frame(r(1));
        assert_eq!(s.depth(), 2);
        assert_eq!(s.top().map(|f| f.row()), Some(r(1)));

        let popped = s.pop_frame().unwrap();
        assert_eq!(popped.row(), r(1));
        assert_eq!(s.depth(), 1);
        assert!(s.pop_frame().is_some());
        assert!(s.pop_frame().is_none());
    }

    #[test]
    #[should_panic(expected = "out of row order")]
    #[cfg(debug_assertions)]
    fn test_push_frame_out_of_order_panics_in_debug() {
        let mut s = SearchStack::new();
        s.push_frame(r(1));
    }

    #[test]
    fn test_frame_tracks_placement_and_scan_position() {
        let mut frame = Frame::new(r(2));
        assert_eq!(frame.next_column(), 0);
        assert_eq!(frame.placed(), None);

        frame.set_placed(ColumnIndex::new(3));
        assert_eq!(frame.placed(), Some(ColumnIndex::new(3)));
        assert_eq!(frame.next_column(), 4);

        assert_eq!(frame.take_placed(), Some(ColumnIndex::new(3)));
        assert_eq!(frame.placed(), None);
        assert_eq!(frame.next_column(), 4);
    }

    #[test]
    fn test_reset_clears_frames() {
        let mut s = SearchStack::preallocated(BoardSize::new(4));
        s.push_frame(r(0));
        s.push_frame(r(1));
        s.reset();
        assert!(s.is_empty());
    }

    #[test]
    fn test_small_boards_stay_inline() {
        let mut s = SearchStack::new();
        for i in 0..INLINE_FRAMES {
            s.push_frame(r(i));
        }
        assert!(!s.spilled());

        s.push_frame(r(INLINE_FRAMES));
        assert!(s.spilled());
    }
}
