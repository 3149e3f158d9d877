//! Scheduled job implementations.

pub mod rollover;

pub use rollover::{RolloverJob, RolloverReport};
