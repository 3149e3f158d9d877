//! Room registry — manages all rooms and memberships.

use std::collections::HashSet;

use dashmap::DashMap;

use crate::connection::ConnectionId;

/// Registry of all active rooms.
///
/// A room exists exactly as long as it has members. The reverse index
/// (connection → rooms) makes disconnect cleanup O(rooms-of-connection).
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// Room name → member connection ids.
    rooms: DashMap<String, HashSet<ConnectionId>>,
    /// Connection id → joined room names (reverse index).
    memberships: DashMap<ConnectionId, HashSet<String>>,
}

impl RoomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Join a connection to a room.
    pub fn join(&self, room: impl Into<String>, conn_id: ConnectionId) {
        let room = room.into();
        self.rooms
            .entry(room.clone())
            .or_default()
            .insert(conn_id);
        self.memberships.entry(conn_id).or_default().insert(room);
    }

    /// Remove a connection from one room.
    pub fn leave(&self, room: &str, conn_id: ConnectionId) {
        if let Some(mut members) = self.rooms.get_mut(room) {
            members.remove(&conn_id);
            if members.is_empty() {
                drop(members);
                self.rooms.remove(room);
            }
        }
        if let Some(mut joined) = self.memberships.get_mut(&conn_id) {
            joined.remove(room);
        }
    }

    /// Remove a connection from every room it joined.
    pub fn leave_all(&self, conn_id: ConnectionId) {
        let joined = self
            .memberships
            .remove(&conn_id)
            .map(|(_, rooms)| rooms)
            .unwrap_or_default();
        for room in &joined {
            if let Some(mut members) = self.rooms.get_mut(room) {
                members.remove(&conn_id);
                if members.is_empty() {
                    drop(members);
                    self.rooms.remove(room);
                }
            }
        }
    }

    /// All member connection ids of a room.
    pub fn members(&self, room: &str) -> Vec<ConnectionId> {
        self.rooms
            .get(room)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Rooms a connection has joined.
    pub fn rooms_of(&self, conn_id: ConnectionId) -> Vec<String> {
        self.memberships
            .get(&conn_id)
            .map(|joined| joined.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of active rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
