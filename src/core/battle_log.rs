//! User-visible battle log with a fixed number of retained entries.

use super::constants::BATTLE_LOG_MAX_ENTRIES;
use std::collections::VecDeque;

/// Styling category of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Normal,
    Damage,
    Heal,
    LevelUp,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub text: String,
    pub kind: LogKind,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

/// Most recent log lines, oldest first.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, kind: LogKind) {
        if self.entries.len() >= BATTLE_LOG_MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            text: text.into(),
            kind,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
