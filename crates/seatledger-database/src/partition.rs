//! A monthly booking partition: a store handle plus its change feed.

use std::sync::Arc;

use tokio::sync::broadcast;
use uuid::Uuid;

use seatledger_core::events::{ChangeEvent, ChangeOp};
use seatledger_core::model::{Booking, BookingPatch};
use seatledger_core::result::AppResult;
use seatledger_core::traits::{BookingStore, UpsertOutcome};
use seatledger_core::types::Month;

/// One monthly partition of the booking ledger.
///
/// Wraps the backing store and owns the partition's change feed: every
/// successful insert/update publishes a [`ChangeEvent`] that the
/// projector watchers consume. Deletes publish nothing; a removed row
/// carries nothing to project.
#[derive(Debug)]
pub struct BookingPartition {
    month: Month,
    store: Arc<dyn BookingStore>,
    changes: broadcast::Sender<ChangeEvent>,
}

impl BookingPartition {
    /// Create a partition over `store` with a change feed of the given
    /// buffer size.
    pub fn new(month: Month, store: Arc<dyn BookingStore>, feed_buffer: usize) -> Self {
        let (changes, _) = broadcast::channel(feed_buffer);
        Self {
            month,
            store,
            changes,
        }
    }

    /// The month this partition covers.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Subscribe to this partition's change feed.
    pub fn watch(&self) -> broadcast::Receiver<ChangeEvent> {
        self.changes.subscribe()
    }

    fn publish(&self, op: ChangeOp, booking: &Booking) {
        // No receivers is fine: the feed is best-effort by contract.
        let _ = self.changes.send(ChangeEvent {
            month: self.month,
            op,
            booking: booking.clone(),
        });
    }

    /// Insert a new row and publish the change.
    pub async fn insert(&self, booking: Booking) -> AppResult<Booking> {
        let stored = self.store.insert(booking).await?;
        self.publish(ChangeOp::Insert, &stored);
        Ok(stored)
    }

    /// Upsert the row keyed by `registration` and publish the change.
    pub async fn upsert_by_registration(
        &self,
        registration: &str,
        patch: BookingPatch,
    ) -> AppResult<UpsertOutcome> {
        let outcome = self.store.upsert_by_registration(registration, patch).await?;
        let op = if outcome.created {
            ChangeOp::Insert
        } else {
            ChangeOp::Update
        };
        self.publish(op, &outcome.booking);
        Ok(outcome)
    }

    /// Merge one annotation color and publish the update when the row
    /// exists.
    pub async fn merge_color(
        &self,
        id: Uuid,
        column: &str,
        color: &str,
    ) -> AppResult<Option<Booking>> {
        let updated = self.store.merge_color(id, column, color).await?;
        if let Some(booking) = &updated {
            self.publish(ChangeOp::Update, booking);
        }
        Ok(updated)
    }

    /// Find a row by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        self.store.find_by_id(id).await
    }

    /// Find the row keyed by `registration`.
    pub async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Booking>> {
        self.store.find_by_registration(registration).await
    }

    /// All rows for a seat label.
    pub async fn find_by_seat(&self, seat: &str) -> AppResult<Vec<Booking>> {
        self.store.find_by_seat(seat).await
    }

    /// Full partition scan.
    pub async fn list_all(&self) -> AppResult<Vec<Booking>> {
        self.store.list_all().await
    }

    /// Hard-delete by id.
    pub async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        self.store.delete_by_id(id).await
    }

    /// Hard-delete the row keyed by `registration`.
    pub async fn delete_by_registration(&self, registration: &str) -> AppResult<bool> {
        self.store.delete_by_registration(registration).await
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }
}
