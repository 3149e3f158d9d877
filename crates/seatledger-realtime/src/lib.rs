//! # seatledger-realtime
//!
//! Room-based fan-out of seat-state events to connected administrator
//! clients. Purely a relay: nothing here is persisted, delivery is
//! best-effort, and ordering across concurrent senders is not defined.
//! The last delivered event wins on each client's local view.

pub mod connection;
pub mod hub;
pub mod message;
pub mod room;

pub use hub::RealtimeHub;
pub use message::{InboundMessage, OutboundMessage, SeatStatusChange};
