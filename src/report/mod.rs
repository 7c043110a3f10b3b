pub mod aggregator;
pub mod models;

pub use aggregator::{gather, DEFAULT_QUEUE};
pub use models::Snapshot;
