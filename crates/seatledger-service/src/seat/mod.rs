//! Seat allocation operations.

pub mod service;

pub use service::{SeatAllocationService, SeatOccupancy, SeatTransition};
