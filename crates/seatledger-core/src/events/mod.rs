//! Change-feed event types.
//!
//! Every successful insert/update on a booking partition publishes a
//! [`ChangeEvent`] on that partition's feed. Watcher tasks derive typed
//! [`ProjectionEvent`]s from qualifying changes and hand them to the
//! projection worker over an internal channel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Booking;
use crate::types::{Month, Shift};

/// The kind of write a change event describes. Deletes are not fed to the
/// projector; a removed row carries nothing to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeOp {
    Insert,
    Update,
}

/// One observed write to a booking partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Partition the write landed in.
    pub month: Month,
    /// Insert or update.
    pub op: ChangeOp,
    /// The row as stored after the write.
    pub booking: Booking,
}

/// Typed projection input derived from a qualifying change event.
///
/// A change qualifies when its booking carries a registration and a write
/// date; the projector upserts these two derived fields onto the member
/// ledger, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionEvent {
    /// Registration number keying the ledger row.
    pub registration: String,
    /// Becomes the member's `last_payment_date`.
    pub date: NaiveDate,
    /// Becomes the member's current shift.
    pub shift: Shift,
}

impl ProjectionEvent {
    /// Derives a projection event from a change, or `None` when the
    /// changed row does not qualify.
    pub fn from_change(event: &ChangeEvent) -> Option<Self> {
        if event.booking.registration.is_empty() {
            return None;
        }
        Some(ProjectionEvent {
            registration: event.booking.registration.clone(),
            date: event.booking.date,
            shift: event.booking.shift,
        })
    }
}
