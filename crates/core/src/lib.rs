// Drumline Core - Queue Engine & Ports
// NO infrastructure dependencies: transport and process wiring live elsewhere

pub mod application;
pub mod domain;
pub mod port;

pub use domain::error::{DomainError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
