//! Creator - Influencer Profile Data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social platform a creator publishes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Tiktok,
    Youtube,
    Twitch,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Twitch => "Twitch",
        }
    }

    /// All platforms, in form/cycle order
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Instagram,
            Platform::Tiktok,
            Platform::Youtube,
            Platform::Twitch,
        ]
    }

    /// The next platform in cycle order (used by the form's cycle control)
    pub fn next(&self) -> Platform {
        match self {
            Platform::Instagram => Platform::Tiktok,
            Platform::Tiktok => Platform::Youtube,
            Platform::Youtube => Platform::Twitch,
            Platform::Twitch => Platform::Instagram,
        }
    }
}

/// Roster status of a creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreatorStatus {
    #[default]
    Active,
    Paused,
    Offboarded,
}

impl CreatorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CreatorStatus::Active => "Active",
            CreatorStatus::Paused => "Paused",
            CreatorStatus::Offboarded => "Offboarded",
        }
    }
}

/// An influencer on the agency roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    /// Unique ID
    pub id: String,
    /// Platform handle, without the leading @
    pub handle: String,
    /// Display name
    pub display_name: String,
    /// Primary platform
    pub platform: Platform,
    /// Follower count
    pub followers: u64,
    /// Average engagement rate, percent
    pub engagement_rate: f64,
    /// Contact email
    pub email: String,
    /// Roster status
    pub status: CreatorStatus,
    /// Signed-on timestamp
    pub created_at: DateTime<Utc>,
}

impl Default for Creator {
    fn default() -> Self {
        Self {
            id: String::new(),
            handle: String::new(),
            display_name: String::new(),
            platform: Platform::default(),
            followers: 0,
            engagement_rate: 0.0,
            email: String::new(),
            status: CreatorStatus::default(),
            created_at: Utc::now(),
        }
    }
}
