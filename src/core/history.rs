//! Linear undo/redo history.
//!
//! The history records every state entered *after* the initial state. A
//! cursor (`index`) counts how many of those entries are active: at `0`
//! the machine sits on its initial state, which is never stored. The
//! active entry, when there is one, is always `entries[index - 1]`.
//!
//! Recording a new entry while the cursor is behind the tip discards the
//! entries in front of it, so there is only ever one timeline.

use super::ids::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// One state entered by the machine.
///
/// # Example
///
/// ```rust
/// use rewind::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("running", Some("run".into()));
/// assert_eq!(entry.state, "running");
/// assert_eq!(entry.event.as_ref().map(|e| e.as_str()), Some("run"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that was entered
    pub state: StateId,
    /// The event that caused it, `None` for direct state changes
    pub event: Option<EventId>,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(state: impl Into<StateId>, event: Option<EventId>) -> Self {
        Self {
            state: state.into(),
            event,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of entered states with an undo/redo cursor.
///
/// # Example
///
/// ```rust
/// use rewind::core::{History, HistoryEntry};
///
/// let mut history = History::new();
/// history.record(HistoryEntry::new("a", None));
/// history.record(HistoryEntry::new("b", None));
///
/// assert!(history.step_back());
/// assert_eq!(history.current().map(|e| e.state.as_str()), Some("a"));
///
/// // Recording after an undo drops "b".
/// history.record(HistoryEntry::new("c", None));
/// assert_eq!(history.len(), 2);
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    index: usize,
    entries: Vec<HistoryEntry>,
}

/// Errors that can occur when rebuilding a history from serialized form
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    #[error("History cursor {index} is past the last entry (entries: {len})")]
    CursorOutOfRange { index: usize, len: usize },
}

/// Serialized shape of [`History`], checked before it becomes one.
#[derive(Deserialize)]
struct RawHistory {
    index: usize,
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.index > raw.entries.len() {
            return Err(HistoryError::CursorOutOfRange {
                index: raw.index,
                len: raw.entries.len(),
            });
        }
        Ok(Self {
            index: raw.index,
            entries: raw.entries,
        })
    }
}

impl History {
    /// Create an empty history with the cursor on the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active entries; `0` means the initial state is active.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of recorded entries, including redoable ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries up to and including the cursor.
    pub fn active(&self) -> &[HistoryEntry] {
        &self.entries[..self.index]
    }

    /// Entries ahead of the cursor that `step_forward` would replay.
    pub fn redoable(&self) -> &[HistoryEntry] {
        &self.entries[self.index..]
    }

    /// The active entry, or `None` when the cursor is on the initial state.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.index
            .checked_sub(1)
            .and_then(|position| self.entries.get(position))
    }

    /// Record a newly entered state.
    ///
    /// Entries ahead of the cursor are discarded before the new entry is
    /// appended; the cursor then points at the new entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.index);
        self.entries.push(entry);
        self.index += 1;
    }

    /// Whether `step_back` would move the cursor.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    /// Whether `step_forward` would move the cursor.
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index < self.entries.len()
    }

    /// Move the cursor back one entry. Returns `false` if already at the
    /// initial state.
    pub fn step_back(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns `false` if already at
    /// the most recent entry.
    pub fn step_forward(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Forget every entry and return the cursor to the initial state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    /// Time between the first and the last active entries.
    ///
    /// Returns `None` if no entry is active.
    pub fn duration(&self) -> Option<Duration> {
        let active = self.active();
        if let (Some(first), Some(last)) = (active.first(), active.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
