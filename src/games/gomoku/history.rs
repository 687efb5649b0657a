//! Bounded undo history.
//!
//! Holds the most recent [`MAX_HISTORY`] move records. Pushing onto a full
//! stack evicts the oldest record; an evicted move stays on the board but can
//! never be undone.

use super::action::MoveRecord;
use std::collections::VecDeque;
use tracing::debug;

/// Maximum number of moves kept for undo.
pub const MAX_HISTORY: usize = 50;

/// Fixed-capacity stack of move records, oldest at the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    records: VecDeque<MoveRecord>,
    capacity: usize,
}

impl HistoryStack {
    /// Creates an empty history holding up to [`MAX_HISTORY`] records.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Creates an empty history with a custom bound.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a record, returning the evicted oldest record if the stack was full.
    pub fn push(&mut self, record: MoveRecord) -> Option<MoveRecord> {
        let evicted = if self.records.len() == self.capacity {
            self.records.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            debug!(sequence = old.sequence(), "Evicted oldest history record");
        }
        self.records.push_back(record);
        evicted
    }

    /// Removes and returns the most recent record.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Returns the most recent record.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    /// Number of records currently undoable.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing can be undone.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + ExactSizeIterator {
        self.records.iter()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
