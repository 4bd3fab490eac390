//! Request payloads for event operations.

use serde::{Deserialize, Serialize};

use super::event::{EventType, Record, Scheduled};
use super::patch::Patch;

/// Request payload for creating a live event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// Event name.
    pub name: String,

    /// Event subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Event type.
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Start the broadcast automatically on ingest.
    #[serde(default)]
    pub auto_start: bool,

    /// Protect playback behind access control.
    #[serde(default)]
    pub protected: bool,

    /// Enable time shift (DVR).
    #[serde(default)]
    pub time_shift: bool,

    /// Parent folder to create the event in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Encoder reconnect window in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconnect_window: Option<u32>,

    /// Scheduled start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<Scheduled>,

    /// Recording destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,

    /// Latency mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_mode: Option<String>,

    /// Restream targets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restreams: Vec<Restream>,
}

impl CreateEventRequest {
    /// Creates a request with the required fields; everything else is unset.
    #[must_use]
    pub fn new(name: impl Into<String>, event_type: EventType) -> Self {
        Self {
            name: name.into(),
            subtitle: None,
            event_type,
            auto_start: false,
            protected: false,
            time_shift: false,
            parent_id: None,
            reconnect_window: None,
            scheduled: None,
            record: None,
            latency_mode: None,
            restreams: Vec::new(),
        }
    }
}

/// Request payload for updating a live event.
///
/// Unset fields are omitted from the document and keep their server-side
/// values. `record` is a [`Patch`] because clearing it requires an explicit
/// `null` on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    /// Event name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Event subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Start the broadcast automatically on ingest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_start: Option<bool>,

    /// Protect playback behind access control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,

    /// Enable time shift (DVR).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_shift: Option<bool>,

    /// Encoder reconnect window in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconnect_window: Option<u32>,

    /// Scheduled start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<Scheduled>,

    /// Recording destination; [`Patch::Null`] disables recording.
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub record: Patch<Record>,

    /// Latency mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_mode: Option<String>,

    /// Chat moderator IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moderators: Vec<String>,

    /// Show the member list to viewers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_members: Option<bool>,

    /// Enable chat preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_preview: Option<bool>,
}

/// A restream target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restream {
    /// Target name.
    pub name: String,

    /// Target RTMP URL.
    pub url: String,

    /// Target stream key.
    pub key: String,

    /// Target description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the target is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
