//! # seatledger-worker
//!
//! Long-lived background tasks: the change projector (per-partition
//! watchers feeding a single projection worker) and the cron-scheduled
//! monthly rollover job.

pub mod jobs;
pub mod projector;
pub mod scheduler;

pub use jobs::rollover::{RolloverJob, RolloverReport};
pub use projector::ChangeProjector;
pub use scheduler::WorkerScheduler;
