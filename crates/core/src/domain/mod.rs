// Domain Layer - Pure queue model and admission rules

pub mod error;
pub mod pattern;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use pattern::{PatternCandidate, PatternData, PatternId, PatternRecord, QueueEntry};
pub use queue::PatternQueue;
