//! In-process messaging between input and the systems that react to it.

/// Type-keyed aggregator and the listener trait.
pub mod aggregator;

pub use aggregator::{EventAggregator, Listener};
