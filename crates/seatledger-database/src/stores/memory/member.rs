//! In-memory member ledger store.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;

use seatledger_core::model::Member;
use seatledger_core::result::AppResult;
use seatledger_core::traits::MemberStore;
use seatledger_core::types::Shift;

/// In-memory member ledger.
#[derive(Debug, Default)]
pub struct MemoryMemberStore {
    /// Registration → member record.
    rows: DashMap<String, Member>,
}

impl MemoryMemberStore {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for MemoryMemberStore {
    async fn create(&self, member: Member) -> AppResult<Member> {
        self.rows.insert(member.registration.clone(), member.clone());
        Ok(member)
    }

    async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Member>> {
        Ok(self.rows.get(registration).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> AppResult<Vec<Member>> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn apply_payment_projection(
        &self,
        registration: &str,
        last_payment_date: NaiveDate,
        shift: Shift,
    ) -> AppResult<()> {
        let mut entry = self
            .rows
            .entry(registration.to_string())
            .or_insert_with(|| Member::skeleton(registration));
        entry.last_payment_date = Some(last_payment_date);
        entry.shift = Some(shift);
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn projection_creates_skeleton_when_absent() {
        let store = MemoryMemberStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        store
            .apply_payment_projection("L-9", date, Shift::Evening)
            .await
            .unwrap();

        let member = store.find_by_registration("L-9").await.unwrap().unwrap();
        assert_eq!(member.last_payment_date, Some(date));
        assert_eq!(member.shift, Some(Shift::Evening));
        assert!(member.name.is_empty());
    }

    #[tokio::test]
    async fn projection_touches_only_derived_fields() {
        let store = MemoryMemberStore::new();
        let mut member = Member::skeleton("L-10");
        member.name = "Asha".into();
        member.contact = Some("9999999999".into());
        store.create(member).await.unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        store
            .apply_payment_projection("L-10", date, Shift::Morning)
            .await
            .unwrap();

        let stored = store.find_by_registration("L-10").await.unwrap().unwrap();
        assert_eq!(stored.name, "Asha");
        assert_eq!(stored.contact.as_deref(), Some("9999999999"));
        assert_eq!(stored.last_payment_date, Some(date));
    }
}
