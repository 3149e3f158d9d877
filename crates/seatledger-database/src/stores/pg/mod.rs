//! Postgres-backed stores.

pub mod booking;
pub mod member;

pub use booking::PgBookingStore;
pub use member::PgMemberStore;
