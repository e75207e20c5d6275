// Application Layer - Use cases over the queue engine

pub mod pattern_queue;

// Re-exports
pub use pattern_queue::{validate, PatternQueueService};
