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

//! NQueens‑Stream: navigable view over a lazy N‑Queens enumeration
//!
//! Wraps the resumable `nqueens_search` engine in a cursor that can move
//! forward and backward. Forward moves replay cached solutions or pull new
//! ones on demand; backward moves are served from a bounded history and
//! stop at the oldest retained solution.
//!
//! Core flow
//! - Build a `config::StreamConfig` (or use the default).
//! - Create a `stream::SolutionStream` for a board size.
//! - Drive it with `advance`/`retreat`, render `current`, and `reset` to
//!   switch board sizes.
//!
//! Module map
//! - `config`: stream configuration and its builder.
//! - `error`: construction and reset errors.
//! - `history`: the bounded ring buffer with cursor.
//! - `navigation`: `Advance`/`Retreat` outcomes.
//! - `stream`: the stream itself.

pub mod config;
pub mod error;
pub mod history;
pub mod navigation;
pub mod stream;
