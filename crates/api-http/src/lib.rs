//! REST API Layer
//!
//! Exposes the pattern queue over HTTP. Dispatch is an explicit
//! method+path table over the core operations, and this layer alone maps
//! queue outcomes to status codes and fixed message bodies.

pub mod error;
pub mod handler;
pub mod limit;
pub mod server;
pub mod shutdown;
pub mod types;

pub use server::{app, AppState, HttpServer, HttpServerConfig, ServerError};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
