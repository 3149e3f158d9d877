//! Inbound and outbound real-time message definitions.
//!
//! The wire shape is `{"event": ..., "data": ...}` with camelCase event
//! names, matching what the admin clients emit.

use serde::{Deserialize, Serialize};

/// A seat-state transition as relayed between clients.
///
/// Fields are carried verbatim: the hub re-emits exactly what the acting
/// client sent, and receivers re-fetch authoritative state on ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStatusChange {
    /// Member registration number.
    pub id: String,
    /// New seat status.
    pub status: String,
    /// Seat label.
    pub seat: String,
    /// Shift window label.
    pub shift: String,
}

/// Messages sent by the client to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum InboundMessage {
    /// Join a named room (an admin's own room).
    JoinRoom {
        /// Room name.
        room: String,
    },
    /// Join the shared seat-grid room.
    JoinSeatsRoom {
        /// Room name.
        room: String,
    },
    /// Announce a seat-state change to the sender's rooms.
    UpdateSeatStatus(SeatStatusChange),
}

/// Messages sent by the server to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// Room join confirmed.
    RoomJoined {
        /// Room name.
        room: String,
    },
    /// A seat-state change relayed from another client.
    SeatStatusUpdate(SeatStatusChange),
}
