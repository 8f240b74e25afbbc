//! Bounded command history with stateful up/down navigation.
//!
//! Entries are kept oldest-first in a deque; when the ring is full the
//! oldest entry is evicted before the newest is appended, so the back of
//! the deque is always the most recent submission. The navigation index is
//! `None` while the user is not browsing; any direct edit must call
//! [`History::reset_navigation`] so the next browse starts from the most
//! recent entry again.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    nav_index: Option<usize>,
}

impl History {
    /// Create a ring holding at most `capacity` entries. A zero capacity is
    /// bumped to one rather than silently discarding every submission.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            nav_index: None,
        }
    }

    /// Record a submitted line. Empty lines are not recorded. Always ends
    /// any navigation session in progress.
    pub fn push(&mut self, line: &str) {
        self.nav_index = None;
        if line.is_empty() {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Step backward in time. Starting a session jumps to the most recent
    /// entry; further calls walk toward the oldest. Returns the entry at
    /// the new position, or `None` if no movement occurred (empty ring, or
    /// already at the oldest entry).
    pub fn navigate_older(&mut self) -> Option<String> {
        let index = match self.nav_index {
            None => self.entries.len().checked_sub(1)?,
            Some(0) => return None,
            Some(i) => i - 1,
        };
        self.nav_index = Some(index);
        self.entries.get(index).cloned()
    }

    /// Step forward in time. Walking past the most recent entry ends the
    /// session and returns an empty string, signalling "clear the line".
    /// Returns `None` if not currently browsing.
    pub fn navigate_newer(&mut self) -> Option<String> {
        let index = self.nav_index?;
        if index + 1 >= self.entries.len() {
            self.nav_index = None;
            return Some(String::new());
        }
        self.nav_index = Some(index + 1);
        self.entries.get(index + 1).cloned()
    }

    /// End any navigation session without touching the stored entries.
    pub fn reset_navigation(&mut self) {
        self.nav_index = None;
    }

    /// True while an up/down browsing session is active.
    pub fn is_browsing(&self) -> bool {
        self.nav_index.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
