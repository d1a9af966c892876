//! Bounded in-memory ring buffer of recent log entries.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::entry::LogEntry;

/// Thread-safe FIFO buffer of [`LogEntry`] values.
///
/// A capacity of zero means unbounded. When a bounded buffer is full, the
/// oldest entry is evicted on each insertion, so the buffer always holds
/// the most recent `capacity` entries in insertion order.
#[derive(Debug)]
pub struct LogBuffer {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl LogBuffer {
    /// Creates a buffer holding at most `capacity` entries (0 = unbounded).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one first when full.
    pub(crate) fn add(&self, entry: LogEntry) {
        let mut entries = self.lock();
        if self.capacity > 0 && entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Configured maximum (0 = unbounded).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy-on-read snapshot in insertion order.
    ///
    /// The snapshot is taken under the buffer lock, so it is internally
    /// consistent even while other threads keep appending.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    // A poisoned lock still guards structurally sound data; recover the
    // guard so logging never panics in the caller.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
