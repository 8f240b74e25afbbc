//! Bounded scrollback of previously displayed rows.
//!
//! Stores every row that has scrolled past the prompt (decorated input rows
//! and command output alike), oldest first, with FIFO eviction at capacity.
//! The pan offset counts rows back from the newest line: 0 is the live
//! view, larger values shift the visible window toward older rows. Panning
//! is entirely independent of history navigation.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct Scrollback {
    lines: VecDeque<String>,
    capacity: usize,
    pan_offset: usize,
}

impl Scrollback {
    /// Create a store holding at most `capacity` rows. A zero capacity is
    /// bumped to one so `append` never has to special-case it.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity.min(256)),
            capacity,
            pan_offset: 0,
        }
    }

    /// Append one row, evicting the oldest row when full. The pan offset is
    /// left alone; the clamps in [`Scrollback::pan`] and
    /// [`Scrollback::window`] absorb the index shift from eviction.
    pub fn append(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// The most recent `height` rows, shifted back by the pan offset:
    /// rows `[len - height - pan, len - pan)`, clamped at the oldest row.
    pub fn window(&self, height: usize) -> impl Iterator<Item = &str> {
        let end = self.lines.len().saturating_sub(self.pan_offset);
        let start = end.saturating_sub(height);
        self.lines.range(start..end).map(String::as_str)
    }

    /// Adjust the pan offset by `delta`, clamped to
    /// `[0, len - view_height]` (saturating) for the window height the
    /// renderer currently displays. Reaching 0 re-enables the live view.
    /// Returns true if the offset actually changed.
    pub fn pan(&mut self, delta: isize, view_height: usize) -> bool {
        let max_pan = self.lines.len().saturating_sub(view_height);
        let target = self.pan_offset as isize + delta;
        let clamped = if target <= 0 {
            0
        } else {
            (target as usize).min(max_pan)
        };
        let changed = clamped != self.pan_offset;
        self.pan_offset = clamped;
        changed
    }

    /// Snap back to the live view. Returns true if the view was panned.
    pub fn reset_pan(&mut self) -> bool {
        let was_panned = self.pan_offset > 0;
        self.pan_offset = 0;
        was_panned
    }

    /// Discard every stored row and return to the live view.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pan_offset = 0;
    }

    pub fn pan_offset(&self) -> usize {
        self.pan_offset
    }

    /// True when the newest rows are visible and appends show up
    /// immediately.
    pub fn is_live(&self) -> bool {
        self.pan_offset == 0
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// How far back the view can pan for a given window height.
    pub fn max_pan(&self, view_height: usize) -> usize {
        self.lines.len().saturating_sub(view_height)
    }
}
