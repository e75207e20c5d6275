//! Drumline SDK - Rust Client Library
//!
//! Typed client for the Drumline pattern queue service.
//!
//! # Example
//!
//! ```no_run
//! use drumline_sdk::{DrumlineClient, NewPattern, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DrumlineClient::new("http://127.0.0.1:8080")?;
//!
//!     let outcome = client
//!         .submit(NewPattern {
//!             name: "Billie Jean".to_string(),
//!             pattern: "fwAAAH8AAAB/AAAA".to_string(),
//!         })
//!         .await?;
//!
//!     match outcome {
//!         SubmitOutcome::Queued(queued) => println!("queued as {}", queued.id),
//!         SubmitOutcome::QueueFull => println!("queue full, try again later"),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::DrumlineClient;
pub use error::{Result, SdkError};
pub use types::{DetailedPattern, NewPattern, QueuedPattern, SubmitOutcome};
