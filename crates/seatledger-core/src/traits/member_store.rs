//! Member ledger store trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::Member;
use crate::result::AppResult;
use crate::types::Shift;

/// Storage contract for the single canonical member ledger.
///
/// Two implementations are provided, mirroring the booking store:
/// Postgres-backed and in-memory.
#[async_trait]
pub trait MemberStore: Send + Sync + 'static {
    /// Create a member record (registration flow / seeding).
    async fn create(&self, member: Member) -> AppResult<Member>;

    /// Find a member by registration number.
    async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Member>>;

    /// Full ledger scan.
    async fn list_all(&self) -> AppResult<Vec<Member>>;

    /// Projection upsert: set `last_payment_date` and `shift` on the row
    /// keyed by `registration`, creating a skeleton record when absent.
    /// This is the only ledger mutation the projector performs.
    async fn apply_payment_projection(
        &self,
        registration: &str,
        last_payment_date: NaiveDate,
        shift: Shift,
    ) -> AppResult<()>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
