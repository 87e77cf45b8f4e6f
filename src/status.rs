//! Timestamped status messages shown in the status pane.

use chrono::{Local, NaiveTime};
use std::collections::VecDeque;

/// Oldest entries are dropped past this many.
pub const MAX_STATUS_ENTRIES: usize = 200;

/// Greeting pushed when the app starts.
pub const WELCOME: &str = "Welcome to the plotting app!";

/// One status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Local time the message was pushed.
    pub time: NaiveTime,
    /// Message text.
    pub text: String,
}

impl StatusEntry {
    /// Format as `[HH:MM:SS] text`.
    pub fn line(&self) -> String {
        format!("{} {}", self.time.format("[%H:%M:%S]"), self.text)
    }
}

/// Status log, newest last.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    entries: VecDeque<StatusEntry>,
}

impl StatusLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current local time.
    pub fn push(&mut self, text: impl Into<String>) {
        self.push_at(Local::now().time(), text);
    }

    /// Append a message with an explicit time.
    pub fn push_at(&mut self, time: NaiveTime, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!("status: {}", text);
        self.entries.push_back(StatusEntry { time, text });
        while self.entries.len() > MAX_STATUS_ENTRIES {
            self.entries.pop_front();
        }
    }

    /// Get the newest entry.
    pub fn last(&self) -> Option<&StatusEntry> {
        self.entries.back()
    }

    /// Check if the newest message ends with `text`.
    pub fn ends_with(&self, text: &str) -> bool {
        self.last().is_some_and(|e| e.text.ends_with(text))
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    /// Get the newest `n` formatted lines, oldest first.
    pub fn lines(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).map(StatusEntry::line).collect()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_clock_prefix() {
        let mut log = StatusLog::new();
        log.push_at(NaiveTime::from_hms_opt(9, 5, 7).unwrap(), "Hello");
        assert_eq!(log.lines(1), ["[09:05:07] Hello"]);
        assert!(log.ends_with("Hello"));
    }

    #[test]
    fn oldest_entries_are_dropped() {
        let mut log = StatusLog::new();
        for i in 0..MAX_STATUS_ENTRIES + 3 {
            log.push(format!("msg {}", i));
        }
        assert_eq!(log.len(), MAX_STATUS_ENTRIES);
        assert_eq!(log.iter().next().unwrap().text, "msg 3");
    }

    #[test]
    fn lines_returns_tail() {
        let mut log = StatusLog::new();
        log.push("a");
        log.push("b");
        log.push("c");
        let lines = log.lines(2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" b"));
        assert!(lines[1].ends_with(" c"));
    }
}
