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

//! Outcomes of moving the stream cursor.
//!
//! Both types borrow the solution from the stream's history, so a caller
//! that wants to keep it past the next navigation call clones it.

use nqueens_model::solution::Solution;

/// Result of `SolutionStream::advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance<'a> {
    /// The cursor moved onto this solution.
    Solution(&'a Solution),
    /// The enumeration is complete; the cursor did not move.
    Exhausted,
    /// A monitor paused the search; the cursor did not move and the next
    /// `advance` resumes the search.
    Aborted(String),
}

impl<'a> Advance<'a> {
    #[inline]
    pub fn is_solution(&self) -> bool {
        matches!(self, Advance::Solution(_))
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Advance::Exhausted)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Advance::Aborted(_))
    }

    /// Returns the solution, if the cursor moved.
    #[inline]
    pub fn solution(&self) -> Option<&'a Solution> {
        match *self {
            Advance::Solution(solution) => Some(solution),
            _ => None,
        }
    }
}

impl std::fmt::Display for Advance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advance::Solution(solution) => write!(f, "Solution({})", solution),
            Advance::Exhausted => write!(f, "Exhausted"),
            Advance::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of `SolutionStream::retreat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat<'a> {
    /// The cursor moved back onto this solution.
    Solution(&'a Solution),
    /// The cursor is on the oldest retained solution, or nothing has been
    /// produced yet.
    AtOldestRetained,
}

impl<'a> Retreat<'a> {
    #[inline]
    pub fn is_solution(&self) -> bool {
        matches!(self, Retreat::Solution(_))
    }

    #[inline]
    pub fn is_at_oldest_retained(&self) -> bool {
        matches!(self, Retreat::AtOldestRetained)
    }

    #[inline]
    pub fn solution(&self) -> Option<&'a Solution> {
        match *self {
            Retreat::Solution(solution) => Some(solution),
            Retreat::AtOldestRetained => None,
        }
    }
}

impl std::fmt::Display for Retreat<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Retreat::Solution(solution) => write!(f, "Solution({})", solution),
            Retreat::AtOldestRetained => write!(f, "AtOldestRetained"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_helpers() {
        let sol = Solution::from_raw_columns([1, 3, 0, 2]).unwrap();
        let advance = Advance::Solution(&sol);
        assert!(advance.is_solution());
        assert_eq!(advance.solution(), Some(&sol));
        assert_eq!(advance.to_string(), "Solution([1, 3, 0, 2])");

        assert!(Advance::Exhausted.is_exhausted());
        assert!(Advance::Exhausted.solution().is_none());
        let aborted = Advance::Aborted("node budget".into());
        assert!(aborted.is_aborted());
        assert_eq!(aborted.to_string(), "Aborted: node budget");
    }

    #[test]
    fn test_retreat_helpers() {
        let sol = Solution::from_raw_columns([0]).unwrap();
        assert_eq!(Retreat::Solution(&sol).solution(), Some(&sol));
        assert!(Retreat::AtOldestRetained.is_at_oldest_retained());
        assert_eq!(Retreat::AtOldestRetained.to_string(), "AtOldestRetained");
    }
}
