//! LogState - Log Messages with Ring Buffer

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::constants::LOG_CAPACITY;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgb(0x22c55e),
            LogLevel::Warn => gpui::rgb(0xf59e0b),
            LogLevel::Error => gpui::rgb(0xef4444),
            LogLevel::Debug => gpui::rgb(0x94a3b8),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for log messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new log entry, evicting the oldest at capacity
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            level,
            message: message.into(),
            timestamp,
        });
    }

    /// Get all log entries, oldest first
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}
