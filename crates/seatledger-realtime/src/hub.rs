//! The real-time hub: connection lifecycle, room joins, and fan-out.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use seatledger_core::config::realtime::RealtimeConfig;

use crate::connection::{ConnectionHandle, ConnectionId, ConnectionPool};
use crate::message::{InboundMessage, OutboundMessage, SeatStatusChange};
use crate::room::RoomRegistry;

/// Central real-time hub.
///
/// A pure fan-out relay: it persists nothing, acknowledges nothing, and
/// retries nothing. A disconnected client simply misses events until its
/// next full refresh read. Room ids are taken from the client as-is;
/// there is no channel-layer authentication beyond the room name.
#[derive(Debug)]
pub struct RealtimeHub {
    connections: ConnectionPool,
    rooms: RoomRegistry,
    config: RealtimeConfig,
}

impl RealtimeHub {
    /// Create a new hub.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            connections: ConnectionPool::new(),
            rooms: RoomRegistry::new(),
            config,
        }
    }

    /// Register a new connection.
    ///
    /// Returns the handle and the receiver end of the connection's
    /// outbox; the transport task forwards received messages to the
    /// client socket.
    pub fn register(&self) -> (Arc<ConnectionHandle>, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(self.config.outbox_buffer_size);
        let handle = Arc::new(ConnectionHandle::new(tx));
        self.connections.add(Arc::clone(&handle));
        info!(conn_id = %handle.id, "Realtime connection registered");
        (handle, rx)
    }

    /// Unregister a connection and clean up its room memberships.
    pub fn unregister(&self, conn_id: ConnectionId) {
        if let Some(handle) = self.connections.remove(&conn_id) {
            handle.mark_closed();
        }
        self.rooms.leave_all(conn_id);
        info!(conn_id = %conn_id, "Realtime connection closed");
    }

    /// Join a connection to a room and confirm to the joining client.
    pub fn join_room(&self, conn_id: ConnectionId, room: &str) {
        self.rooms.join(room, conn_id);
        debug!(conn_id = %conn_id, room, "Joined room");
        if let Some(handle) = self.connections.get(&conn_id) {
            handle.send(OutboundMessage::RoomJoined {
                room: room.to_string(),
            });
        }
    }

    /// Relay a seat-state change to every member of `room`, excluding
    /// `exclude` (usually the sender).
    ///
    /// Best-effort: per-member drops are counted, not errors.
    pub fn broadcast_seat_status(
        &self,
        room: &str,
        change: &SeatStatusChange,
        exclude: Option<ConnectionId>,
    ) {
        let mut delivered = 0usize;
        let mut dropped = 0usize;
        for member in self.rooms.members(room) {
            if Some(member) == exclude {
                continue;
            }
            match self.connections.get(&member) {
                Some(handle) if handle.send(OutboundMessage::SeatStatusUpdate(change.clone())) => {
                    delivered += 1;
                }
                _ => dropped += 1,
            }
        }
        debug!(
            room,
            registration = %change.id,
            delivered,
            dropped,
            "Seat status broadcast"
        );
    }

    /// Dispatch one raw inbound frame from a connected client.
    pub fn handle_inbound(&self, conn_id: ConnectionId, text: &str) {
        let msg: InboundMessage = match serde_json::from_str(text) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(conn_id = %conn_id, error = %e, "Dropping malformed inbound frame");
                return;
            }
        };

        match msg {
            InboundMessage::JoinRoom { room } | InboundMessage::JoinSeatsRoom { room } => {
                self.join_room(conn_id, &room);
            }
            InboundMessage::UpdateSeatStatus(change) => {
                // Re-emit to every room the sender is in, never back to
                // the sender itself.
                for room in self.rooms.rooms_of(conn_id) {
                    self.broadcast_seat_status(&room, &change, Some(conn_id));
                }
            }
        }
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
