//! Live event types.
//!
//! Provides the live event entity and its nested configuration objects.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stream::Stream;

/// Event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Single broadcast; the event completes after it finishes.
    #[serde(rename = "one-time")]
    OneTime,

    /// Reusable event that can go live repeatedly with the same stream key.
    #[serde(rename = "recurring")]
    Recurring,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "one-time"),
            Self::Recurring => write!(f, "recurring"),
        }
    }
}

/// A live event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event ID.
    pub id: String,

    /// Workspace the event belongs to.
    pub workspace_id: String,

    /// Parent folder ID.
    pub parent_id: String,

    /// Event name.
    pub name: String,

    /// Event subtitle.
    pub subtitle: String,

    /// Event type.
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Stream key used by the encoder.
    #[serde(rename = "streamkey")]
    pub stream_key: String,

    /// Whether the broadcast starts automatically on ingest.
    pub auto_start: bool,

    /// Whether playback is access-protected.
    pub protected: bool,

    /// Whether time shift (DVR) is enabled.
    pub time_shift: bool,

    /// Encoder reconnect window in seconds.
    pub reconnect_window: u32,

    /// Viewer-facing playback link.
    pub play_link: String,

    /// RTMP ingest link.
    pub rtmp_link: String,

    /// Scheduled start, if one is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<Scheduled>,

    /// Recording destination, if recording is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,

    /// Current stream, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,

    /// Latency mode.
    pub latency_mode: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Scheduled start time for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    /// When the event is scheduled to start.
    pub time: DateTime<Utc>,
}

/// Recording destination for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Folder the recording is saved into.
    pub parent_id: String,
}
