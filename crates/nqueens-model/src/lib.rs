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

//! # N-Queens Model
//!
//! Domain types shared by the search engine and the solution stream.
//!
//! * **`index`**: strongly typed `RowIndex` and `ColumnIndex`.
//! * **`size`**: `BoardSize`, the validated board dimension, and
//!   `InvalidDimensionError` for negative input.
//! * **`board`**: `Board`, a row-indexed assignment that may contain unplaced
//!   rows (the placeholder shown before any solution exists).
//! * **`solution`**: `Solution`, a complete attack-free placement.
//! * **`safety`**: the pairwise attack predicate every solution satisfies.
//!
//! A queen at `(r, c)` attacks every square in column `c`, on the diagonal
//! `c - r` and on the anti-diagonal `c + r`. A solution places one queen per
//! row so that no two share a column or a diagonal.

pub mod board;
pub mod index;
pub mod safety;
pub mod size;
pub mod solution;
