//! Bounded snapshot log with a cursor.

use std::collections::VecDeque;

/// Default number of snapshots retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Fixed-capacity ordered log of snapshots plus a cursor.
///
/// Recording past the capacity discards the oldest snapshot. Recording after
/// an undo discards the redo tail.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: usize,
}

impl<T: Clone> SnapshotHistory<T> {
    /// Creates a history holding `initial`. Capacity `0` is treated as `1`.
    pub fn new(initial: T, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY));
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            capacity,
        }
    }

    /// Appends a snapshot after the cursor and moves the cursor onto it.
    pub fn record(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Steps back one snapshot. Returns `None` at the oldest snapshot.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Steps forward one snapshot. Returns `None` at the newest snapshot.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every snapshot and restarts from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.cursor = 0;
    }
}
