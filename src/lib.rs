//! Kinescope SDK - Rust client library for the Kinescope Live Events API.
//!
//! This crate provides a typed HTTP client for managing live events:
//! creation, scheduling, stream start times, and recording control.
//!
//! # Client
//!
//! - [`KinescopeClient`] — the API client
//! - [`ClientConfig`] — base URL, timeout, token, and user agent
//! - [`ClientError`] / [`ApiError`] — error taxonomy
//!
//! # Entity Types
//!
//! - [`Event`] — a live event and its configuration
//! - [`Stream`] — a scheduled or running stream
//! - [`Scheduled`], [`Record`] — nested event configuration
//! - [`CreateEventRequest`], [`UpdateEventRequest`] — mutation payloads
//! - [`Patch`] — tri-state field for patch documents (keep / null / value)
//!
//! # Example
//!
//! ```rust
//! use kinescope_sdk::{EventType, Patch, Record, UpdateEventRequest};
//!
//! let request = UpdateEventRequest {
//!     name: Some("Rebranded launch".to_string()),
//!     record: Patch::Value(Record {
//!         parent_id: "folder_1".to_string(),
//!     }),
//!     ..UpdateEventRequest::default()
//! };
//! assert_eq!(EventType::Recurring.to_string(), "recurring");
//! assert!(request.record.value().is_some());
//! ```

pub mod client;
pub mod types;

pub use client::{ApiError, ClientConfig, ClientError, KinescopeClient};
pub use types::{
    CreateEventRequest, Event, EventType, Patch, Record, Restream, Scheduled, Stream,
    UpdateEventRequest,
};
