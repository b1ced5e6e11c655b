//! AppEvent - Application Event Enum
//!
//! All events that can be sent from the service thread to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::campaign::Campaign;
use crate::domain::creator::Creator;
use crate::domain::payment::Payment;
use crate::domain::stats::AgencyStats;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// A page of creators loaded
    CreatorsLoaded {
        rows: Vec<Creator>,
        total: usize,
        page: usize,
    },

    /// A page of campaigns loaded
    CampaignsLoaded {
        rows: Vec<Campaign>,
        total: usize,
        page: usize,
    },

    /// A page of payments loaded
    PaymentsLoaded {
        rows: Vec<Payment>,
        total: usize,
        page: usize,
    },

    /// Dashboard aggregates loaded
    StatsLoaded { stats: AgencyStats },

    /// A creator record was saved
    CreatorSaved { creator: Creator },

    /// A creator record was deleted
    CreatorDeleted { id: String },

    /// A fetch or mutation failed; loading flags must be cleared
    FetchFailed { context: String, message: String },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}
