//! The game's running chronicle.
//!
//! Every connect, disconnect, and pipeline stage appends here. The log is
//! a bounded ring: once capacity is reached the oldest entries fall off,
//! so a long-lived process cannot grow without bound.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the chronicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// Bounded append-only event history, oldest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    capacity: usize,
    entries: VecDeque<GameEvent>,
}

impl EventLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(GameEvent {
            at: Utc::now(),
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&GameEvent> {
        self.entries.back()
    }

    /// The texts alone, oldest-first, for the wire.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut log = EventLog::new(8);
        log.record("first");
        log.record("second");
        assert_eq!(log.lines(), vec!["first", "second"]);
        assert_eq!(log.latest().map(|e| e.text.as_str()), Some("second"));
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = EventLog::new(3);
        for text in ["a", "b", "c", "d"] {
            log.record(text);
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.lines(), vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = EventLog::new(0);
        log.record("kept");
        assert_eq!(log.len(), 1);
    }
}
