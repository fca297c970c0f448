//! Bounded linear undo/redo history.
//!
//! The history stores whole snapshots. Position `index` is the snapshot that
//! matches the live state; entries before it are undoable, entries after it
//! are redoable. Committing while not at the tail discards the redo branch.
//! When the list grows past `max_depth`, the oldest snapshot is evicted.
//!
//! ```text
//!   [G0, G1, G2, G3]  index = 3
//!   undo, undo        index = 1
//!   commit(M)         [G0, G1, M]  index = 2
//! ```

use std::collections::VecDeque;

use log::debug;

/// Snapshot history with branch truncation and a depth bound.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    index: usize,
    max_depth: usize,
}

impl<T> History<T> {
    /// Creates a history whose only entry is `initial`.
    ///
    /// `max_depth` is clamped to at least one.
    pub fn new(initial: T, max_depth: usize) -> Self {
        Self {
            entries: VecDeque::from([initial]),
            index: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Returns the snapshot at the current position.
    pub fn current(&self) -> &T {
        // `index` always points at a live entry.
        &self.entries[self.index]
    }

    /// Records a new snapshot after the current position.
    pub fn commit(&mut self, snapshot: T) {
        let discarded = self.entries.len() - (self.index + 1);
        self.entries.truncate(self.index + 1);
        self.entries.push_back(snapshot);

        let mut evicted = 0;
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
            evicted += 1;
        }
        self.index = self.entries.len() - 1;

        debug!(index = self.index, len = self.entries.len(), discarded, evicted; "History commit");
    }

    /// Steps back one snapshot. Returns `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        debug!(index = self.index; "Undo");
        Some(&self.entries[self.index])
    }

    /// Steps forward one snapshot. Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        debug!(index = self.index; "Redo");
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history always holds at least one snapshot.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current snapshot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Iterates snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
