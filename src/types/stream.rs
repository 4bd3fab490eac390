//! Stream types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled or running stream attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    /// Stream ID.
    pub id: String,

    /// Event the stream belongs to.
    pub event_id: String,

    /// Stream status. The upstream set is open-ended ("pending",
    /// "running", ...), so it is kept as a plain string.
    pub status: String,

    /// When the stream started or is scheduled to start.
    pub started_at: DateTime<Utc>,

    /// When the stream finished, if it has.
    pub finished_at: Option<DateTime<Utc>>,
}
