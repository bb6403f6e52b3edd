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

use nqueens_model::size::InvalidDimensionError;
use thiserror::Error;

/// Errors raised when building or resetting a `SolutionStream`.
///
/// Running out of solutions or reaching the oldest retained entry are
/// navigation outcomes, not errors; see `navigation`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The requested board dimension is negative.
    #[error(transparent)]
    InvalidDimension(#[from] InvalidDimensionError),
    /// A history must retain at least one solution.
    #[error("history capacity must be at least 1")]
    ZeroHistoryCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_model::size::BoardSize;

    #[test]
    fn test_invalid_dimension_converts_and_displays() {
        let inner = BoardSize::try_from_int(-2i32).unwrap_err();
        let err: StreamError = inner.into();
        assert_eq!(err, StreamError::InvalidDimension(inner));
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_zero_capacity_display() {
        assert_eq!(
            StreamError::ZeroHistoryCapacity.to_string(),
            "history capacity must be at least 1"
        );
    }
}
