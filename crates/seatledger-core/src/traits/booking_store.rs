//! Booking store trait for one monthly partition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Booking, BookingPatch};
use crate::result::AppResult;

/// Result of an upsert-by-registration: the stored row plus whether the
/// call created it.
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    /// The row as stored after the write.
    pub booking: Booking,
    /// `true` when the row did not exist before the call.
    pub created: bool,
}

/// Storage contract for one monthly booking partition.
///
/// All mutation is single-document atomic (upsert/update/delete); that is
/// the correctness boundary. Concurrent writers to the same registration
/// resolve last-write-wins. Two implementations are provided:
/// - Postgres-backed (one table per month, `ON CONFLICT` upsert)
/// - In-memory (`DashMap` keyed by registration)
#[async_trait]
pub trait BookingStore: std::fmt::Debug + Send + Sync + 'static {
    /// Insert a new row. No uniqueness enforcement beyond the natural key
    /// being allowed to overwrite on the next upsert.
    async fn insert(&self, booking: Booking) -> AppResult<Booking>;

    /// Upsert the row keyed by `registration`: apply the patch onto the
    /// existing row, or materialize a new one from it.
    async fn upsert_by_registration(
        &self,
        registration: &str,
        patch: BookingPatch,
    ) -> AppResult<UpsertOutcome>;

    /// Find a row by its id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// Find the row keyed by `registration`.
    async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Booking>>;

    /// All rows for a seat label, across shifts.
    async fn find_by_seat(&self, seat: &str) -> AppResult<Vec<Booking>>;

    /// Full partition scan.
    async fn list_all(&self) -> AppResult<Vec<Booking>>;

    /// Merge one key into the sparse color annotation map without
    /// disturbing other keys. Returns the updated row, or `None` when the
    /// id is absent.
    async fn merge_color(&self, id: Uuid, column: &str, color: &str)
    -> AppResult<Option<Booking>>;

    /// Hard-delete by id. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool>;

    /// Hard-delete the row keyed by `registration`. Returns `true` if a
    /// row was removed.
    async fn delete_by_registration(&self, registration: &str) -> AppResult<bool>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
