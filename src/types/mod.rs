//! Types for the Kinescope SDK.
//!
//! Provides the live event entities exchanged with the API and the request
//! payloads for mutating them.

pub mod event;
pub mod patch;
pub mod requests;
pub mod stream;

pub use event::{Event, EventType, Record, Scheduled};
pub use patch::Patch;
pub use requests::{CreateEventRequest, Restream, UpdateEventRequest};
pub use stream::Stream;
