//! Concrete store implementations.

pub mod memory;
pub mod pg;
