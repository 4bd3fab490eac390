//! HTTP client for the Kinescope Live Events API.
//!
//! This module provides a type-safe HTTP client for interacting with the
//! Kinescope REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinescope_sdk::client::KinescopeClient;
//! use kinescope_sdk::types::{CreateEventRequest, EventType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KinescopeClient::with_token("YOUR_ACCESS_KEY")?;
//!
//!     // Create a demo event
//!     let event = client
//!         .create_event(&CreateEventRequest::new("Demo", EventType::Recurring))
//!         .await?;
//!     println!("created: {} {}", event.id, event.stream_key);
//!
//!     // Enable it and schedule the stream start
//!     client.enable_event(&event.id).await?;
//!     let stream = client
//!         .schedule_stream(&event.id, chrono::Utc::now() + chrono::Duration::minutes(10))
//!         .await?;
//!     println!("scheduled: {}", stream.id);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use http::KinescopeClient;
