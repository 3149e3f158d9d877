//! Room membership bookkeeping.

pub mod registry;

pub use registry::RoomRegistry;
