//! Postgres member ledger store.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use seatledger_core::error::{AppError, ErrorKind};
use seatledger_core::model::Member;
use seatledger_core::result::AppResult;
use seatledger_core::traits::MemberStore;
use seatledger_core::types::Shift;

/// Raw row shape of the members table.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    registration: String,
    name: String,
    gender: Option<String>,
    date_of_birth: Option<NaiveDate>,
    father_name: Option<String>,
    mother_name: Option<String>,
    contact: Option<String>,
    alternate_contact: Option<String>,
    address: Option<String>,
    aadhaar: Option<String>,
    preparing_for: Option<String>,
    image: Option<String>,
    shift: Option<String>,
    due: f64,
    advance: f64,
    last_payment_date: Option<NaiveDate>,
}

impl MemberRow {
    fn into_member(self) -> AppResult<Member> {
        let shift = self
            .shift
            .as_deref()
            .map(Shift::from_str)
            .transpose()
            .map_err(|e| AppError::new(ErrorKind::Serialization, e.message))?;
        Ok(Member {
            id: self.id,
            registration: self.registration,
            name: self.name,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            father_name: self.father_name,
            mother_name: self.mother_name,
            contact: self.contact,
            alternate_contact: self.alternate_contact,
            address: self.address,
            aadhaar: self.aadhaar,
            preparing_for: self.preparing_for,
            image: self.image,
            shift,
            due: self.due,
            advance: self.advance,
            last_payment_date: self.last_payment_date,
        })
    }
}

/// Postgres store for the canonical member ledger.
#[derive(Debug, Clone)]
pub struct PgMemberStore {
    pool: PgPool,
}

impl PgMemberStore {
    /// Create a new member store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn store_err(context: &str, err: sqlx::Error) -> AppError {
        AppError::with_source(ErrorKind::StoreUnavailable, context.to_string(), err)
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn create(&self, member: Member) -> AppResult<Member> {
        sqlx::query(
            "INSERT INTO members (id, registration, name, gender, date_of_birth, father_name, \
             mother_name, contact, alternate_contact, address, aadhaar, preparing_for, image, \
             shift, due, advance, last_payment_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
        )
        .bind(member.id)
        .bind(&member.registration)
        .bind(&member.name)
        .bind(&member.gender)
        .bind(member.date_of_birth)
        .bind(&member.father_name)
        .bind(&member.mother_name)
        .bind(&member.contact)
        .bind(&member.alternate_contact)
        .bind(&member.address)
        .bind(&member.aadhaar)
        .bind(&member.preparing_for)
        .bind(&member.image)
        .bind(member.shift.map(|s| s.label()))
        .bind(member.due)
        .bind(member.advance)
        .bind(member.last_payment_date)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::store_err("Failed to create member", e))?;
        Ok(member)
    }

    async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, MemberRow>("SELECT * FROM members WHERE registration = $1")
            .bind(registration)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_err("Failed to find member", e))?
            .map(MemberRow::into_member)
            .transpose()
    }

    async fn list_all(&self) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, MemberRow>("SELECT * FROM members ORDER BY registration")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::store_err("Failed to list members", e))?
            .into_iter()
            .map(MemberRow::into_member)
            .collect()
    }

    async fn apply_payment_projection(
        &self,
        registration: &str,
        last_payment_date: NaiveDate,
        shift: Shift,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO members (id, registration, last_payment_date, shift) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (registration) DO UPDATE SET \
             last_payment_date = EXCLUDED.last_payment_date, shift = EXCLUDED.shift",
        )
        .bind(Uuid::new_v4())
        .bind(registration)
        .bind(last_payment_date)
        .bind(shift.label())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::store_err("Failed to apply payment projection", e))?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| Self::store_err("Health check failed", e))
    }
}
