//! Store traits implemented by the database crate.

pub mod booking_store;
pub mod member_store;

pub use booking_store::{BookingStore, UpsertOutcome};
pub use member_store::MemberStore;
