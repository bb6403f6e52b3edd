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

//! Bounded history of produced solutions.
//!
//! `SolutionHistory` is a fixed-capacity ring buffer with a cursor. Slots
//! fill up to the capacity and are then overwritten oldest first. The cursor
//! is a logical offset from the oldest retained entry, so eviction never has
//! to move it: new entries are only appended while the cursor sits on the
//! newest one, and appending moves it onto the new tail.

use nqueens_model::solution::Solution;

#[derive(Debug, Clone)]
pub struct SolutionHistory {
    slots: Vec<Solution>,
    capacity: usize,
    head: usize,
    cursor: Option<usize>,
    evicted: u64,
}

impl SolutionHistory {
    /// Creates an empty history retaining at most `capacity` solutions.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity > 0,
            "called `SolutionHistory::new` with zero capacity"
        );

        Self {
            slots: Vec::new(),
            capacity,
            head: 0,
            cursor: None,
            evicted: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained solutions.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Number of solutions dropped to make room since the last `clear`.
    #[inline]
    pub fn num_evicted(&self) -> u64 {
        self.evicted
    }

    /// Cursor as an offset from the oldest retained solution.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Absolute 0-based index of the cursor in the order of production.
    #[inline]
    pub fn position(&self) -> Option<u64> {
        self.cursor
            .map(|c| self.evicted.saturating_add(c as u64))
    }

    /// Returns `true` if the cursor has a retained solution after it.
    #[inline]
    pub fn has_newer(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.slots.len())
    }

    /// Returns `true` if the cursor has a retained solution before it.
    #[inline]
    pub fn has_older(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    #[inline(always)]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity
    }

    /// Returns the solution `offset` places after the oldest retained one.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<&Solution> {
        if offset < self.slots.len() {
            Some(&self.slots[self.slot(offset)])
        } else {
            None
        }
    }

    /// Returns the solution under the cursor.
    #[inline]
    pub fn current(&self) -> Option<&Solution> {
        self.cursor.and_then(|c| self.get(c))
    }

    /// Appends a solution, evicting the oldest one when full, and moves the
    /// cursor onto it.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the cursor is not on the newest entry.
    pub fn push(&mut self, solution: Solution) -> &Solution {
        debug_assert!(
            !self.has_newer(),
            "called `SolutionHistory::push` while the cursor is behind the newest entry: cursor {:?}, len {}",
            self.cursor,
            self.slots.len()
        );

        let index = if self.is_full() {
            let index = self.head;
            self.slots[index] = solution;
            self.head = (self.head + 1) % self.capacity;
            self.evicted = self.evicted.saturating_add(1);
            index
        } else {
            self.slots.push(solution);
            self.slots.len() - 1
        };

        self.cursor = Some(self.slots.len() - 1);
        &self.slots[index]
    }

    /// Moves the cursor one entry towards the newest solution.
    #[inline]
    pub fn step_forward(&mut self) -> Option<&Solution> {
        if !self.has_newer() {
            return None;
        }
        self.cursor = self.cursor.map(|c| c + 1);
        self.current()
    }

    /// Moves the cursor one entry towards the oldest retained solution.
    #[inline]
    pub fn step_back(&mut self) -> Option<&Solution> {
        if !self.has_older() {
            return None;
        }
        self.cursor = self.cursor.map(|c| c - 1);
        self.current()
    }

    /// Drops every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
        self.cursor = None;
        self.evicted = 0;
    }

    /// Iterates the retained solutions oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Solution> + '_ {
        (0..self.slots.len()).map(move |offset| &self.slots[self.slot(offset)])
    }
}

impl std::fmt::Display for SolutionHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(position) => write!(
                f,
                "SolutionHistory(retained: {}/{}, evicted: {}, position: {})",
                self.slots.len(),
                self.capacity,
                self.evicted,
                position
            ),
            None => write!(
                f,
                "SolutionHistory(retained: {}/{}, evicted: {}, position: none)",
                self.slots.len(),
                self.capacity,
                self.evicted
            ),
        }
    }
}
