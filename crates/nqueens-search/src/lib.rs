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

//! NQueens‑Search: resumable backtracking for N‑Queens
//!
//! Enumerates every placement of n non‑attacking queens on an n×n board,
//! lazily and in lexicographic order. The engine is an explicit state
//! machine: it suspends after each complete board and resumes from the
//! exact frame that produced it, so pulling k solutions only costs the
//! search work up to the k‑th one.
//!
//! Core flow
//! - Pick a `nqueens_model::size::BoardSize`.
//! - Build an `engine::QueensSearch`, optionally with a monitor.
//! - Call `next_solution` (or iterate) until `Exhausted`.
//!
//! Design highlights
//! - Tight inner loop: occupancy bitsets give an O(1) safety check per
//!   candidate square; state is mutated in place and undone on backtrack.
//! - Frames live inline on a `SmallVec` for typical board sizes.
//! - Monitors observe every step and may pause a call without losing work.
//!
//! Module map
//! - `engine`: the resumable search.
//! - `monitor`: search monitors (log, composite, limits).
//! - `result`: per-call outcomes.
//! - `stack`: the explicit depth-first frame stack.
//! - `state`: placed prefix and occupancy bitsets.
//! - `stats`: lightweight counters/timing.

pub mod engine;
pub mod monitor;
pub mod result;
pub mod stack;
pub mod state;
pub mod stats;
