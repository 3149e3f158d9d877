//! In-memory booking store.
//!
//! Rows live in a `DashMap` keyed by registration, the partition's
//! natural key. The per-entry locking of `DashMap` gives the same
//! single-document atomicity contract as the Postgres upsert.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use seatledger_core::model::{Booking, BookingPatch};
use seatledger_core::result::AppResult;
use seatledger_core::traits::{BookingStore, UpsertOutcome};

/// In-memory booking partition store.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    /// Registration → booking row.
    rows: DashMap<String, Booking>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: Booking) -> AppResult<Booking> {
        self.rows
            .insert(booking.registration.clone(), booking.clone());
        Ok(booking)
    }

    async fn upsert_by_registration(
        &self,
        registration: &str,
        patch: BookingPatch,
    ) -> AppResult<UpsertOutcome> {
        match self.rows.entry(registration.to_string()) {
            Entry::Occupied(mut occupied) => {
                patch.apply(occupied.get_mut());
                Ok(UpsertOutcome {
                    booking: occupied.get().clone(),
                    created: false,
                })
            }
            Entry::Vacant(vacant) => {
                let booking = patch.into_booking(registration);
                vacant.insert(booking.clone());
                Ok(UpsertOutcome {
                    booking,
                    created: true,
                })
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self
            .rows
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Booking>> {
        Ok(self.rows.get(registration).map(|entry| entry.value().clone()))
    }

    async fn find_by_seat(&self, seat: &str) -> AppResult<Vec<Booking>> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().seat == seat)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn merge_color(
        &self,
        id: Uuid,
        column: &str,
        color: &str,
    ) -> AppResult<Option<Booking>> {
        for mut entry in self.rows.iter_mut() {
            if entry.value().id == id {
                entry
                    .value_mut()
                    .colors
                    .insert(column.to_string(), color.to_string());
                return Ok(Some(entry.value().clone()));
            }
        }
        Ok(None)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let key = self
            .rows
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.key().clone());
        match key {
            Some(key) => Ok(self.rows.remove(&key).is_some()),
            None => Ok(false),
        }
    }

    async fn delete_by_registration(&self, registration: &str) -> AppResult<bool> {
        Ok(self.rows.remove(registration).is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatledger_core::model::BookingStatus;
    use seatledger_core::types::Shift;

    fn allot_patch(seat: &str) -> BookingPatch {
        BookingPatch {
            name: Some("Asha".into()),
            seat: Some(seat.into()),
            shift: Some(Shift::Morning),
            status: Some(BookingStatus::Paid),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn upsert_reports_created_then_updated() {
        let store = MemoryBookingStore::new();
        let first = store
            .upsert_by_registration("L-101", allot_patch("A3"))
            .await
            .unwrap();
        assert!(first.created);

        let second = store
            .upsert_by_registration("L-101", allot_patch("B1"))
            .await
            .unwrap();
        assert!(!second.created);
        assert_eq!(second.booking.seat, "B1");
        assert_eq!(second.booking.id, first.booking.id);
    }

    #[tokio::test]
    async fn merge_color_preserves_existing_keys() {
        let store = MemoryBookingStore::new();
        let row = store
            .upsert_by_registration("L-101", allot_patch("A3"))
            .await
            .unwrap()
            .booking;

        store.merge_color(row.id, "fee", "red").await.unwrap();
        let updated = store
            .merge_color(row.id, "seat", "green")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.colors.get("fee").map(String::as_str), Some("red"));
        assert_eq!(updated.colors.get("seat").map(String::as_str), Some("green"));
    }

    #[tokio::test]
    async fn delete_by_registration_frees_the_row() {
        let store = MemoryBookingStore::new();
        store
            .upsert_by_registration("L-101", allot_patch("A3"))
            .await
            .unwrap();
        assert!(store.delete_by_registration("L-101").await.unwrap());
        assert!(!store.delete_by_registration("L-101").await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
