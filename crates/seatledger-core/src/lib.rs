//! # seatledger-core
//!
//! Core crate for SeatLedger. Contains store traits, configuration
//! schemas, the booking/member domain model, change-feed event types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other SeatLedger crates.

pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
