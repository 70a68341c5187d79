//! telemetry/mod.rs
//! Unified telemetry module: counters, timers, and immutable run statistics.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
