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

//! Stream configuration.
//!
//! A `StreamConfig` is a plain value handed to the stream constructor. The
//! only way to obtain one is `StreamConfig::default()` or a
//! `StreamConfigBuilder`, which validates it, so a stream never sees a
//! history capacity of zero.

use crate::error::StreamError;

/// Number of solutions a stream retains for backward navigation by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamConfig {
    history_capacity: usize,
    preload_first: bool,
}

impl StreamConfig {
    /// Returns a builder starting from the default configuration.
    #[inline]
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::new()
    }

    /// Maximum number of solutions kept for `retreat`.
    #[inline]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Whether construction and every reset immediately pull the first solution.
    #[inline]
    pub fn preload_first(&self) -> bool {
        self.preload_first
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            preload_first: false,
        }
    }
}

impl std::fmt::Display for StreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StreamConfig(history_capacity: {}, preload_first: {})",
            self.history_capacity, self.preload_first
        )
    }
}

/// Builder for `StreamConfig`.
#[derive(Debug, Clone)]
pub struct StreamConfigBuilder {
    history_capacity: usize,
    preload_first: bool,
}

impl Default for StreamConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamConfigBuilder {
    /// Creates a new `StreamConfigBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        let defaults = StreamConfig::default();
        Self {
            history_capacity: defaults.history_capacity,
            preload_first: defaults.preload_first,
        }
    }

    /// Sets how many solutions are retained for backward navigation.
    #[inline]
    pub fn history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    /// Sets whether the first solution is loaded eagerly.
    #[inline]
    pub fn preload_first(mut self, preload_first: bool) -> Self {
        self.preload_first = preload_first;
        self
    }

    /// Builds the `StreamConfig`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::ZeroHistoryCapacity` if the capacity is zero.
    pub fn build(self) -> Result<StreamConfig, StreamError> {
        if self.history_capacity == 0 {
            return Err(StreamError::ZeroHistoryCapacity);
        }

        Ok(StreamConfig {
            history_capacity: self.history_capacity,
            preload_first: self.preload_first,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.history_capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(!config.preload_first());
        assert_eq!(StreamConfig::builder().build(), Ok(config));
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = StreamConfigBuilder::new()
            .history_capacity(3)
            .preload_first(true)
            .build()
            .unwrap();
        assert_eq!(config.history_capacity(), 3);
        assert!(config.preload_first());
        assert_eq!(
            config.to_string(),
            "StreamConfig(history_capacity: 3, preload_first: true)"
        );
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            StreamConfig::builder().history_capacity(0).build(),
            Err(StreamError::ZeroHistoryCapacity)
        );
    }
}
