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

use nqueens_model::solution::Solution;

/// What a single `next_solution` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search assembled another complete board and suspended after it.
    Found(Solution),
    /// Every branch has been explored. Further calls keep returning this.
    Exhausted,
    /// A monitor asked the engine to stop. The search state is intact and
    /// the next call resumes where this one stopped.
    Aborted(String),
}

impl SearchOutcome {
    /// Returns `true` if a solution was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Returns `true` if the search space is exhausted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SearchOutcome::Exhausted)
    }

    /// Returns `true` if a monitor interrupted the call.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, SearchOutcome::Aborted(_))
    }

    /// Returns the found solution, if any.
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the found solution, if any.
    #[inline]
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }

    /// Returns the found solution.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Found`.
    #[inline]
    pub fn unwrap_found(self) -> Solution {
        match self {
            SearchOutcome::Found(solution) => solution,
            other => panic!(
                "called `SearchOutcome::unwrap_found()` on a `{}` value",
                other
            ),
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Found(solution) => write!(f, "Found({})", solution),
            SearchOutcome::Exhausted => write!(f, "Exhausted"),
            SearchOutcome::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}
