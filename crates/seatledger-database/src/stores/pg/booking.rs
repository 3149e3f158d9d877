//! Postgres booking store — one instance per monthly partition table.

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use seatledger_core::error::{AppError, ErrorKind};
use seatledger_core::model::{Booking, BookingPatch, BookingStatus, PaymentDetail};
use seatledger_core::result::AppResult;
use seatledger_core::traits::{BookingStore, UpsertOutcome};
use seatledger_core::types::{Month, Shift};

/// Raw row shape of a partition table.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    registration: String,
    name: String,
    seat: String,
    shift: String,
    status: String,
    date: NaiveDate,
    cash: f64,
    online: f64,
    fee: f64,
    due: f64,
    advance: f64,
    total_money: f64,
    remarks: Option<String>,
    payment_detail: Option<Json<PaymentDetail>>,
    next_month_status: Option<String>,
    colors: Json<HashMap<String, String>>,
}

impl BookingRow {
    fn into_booking(self) -> AppResult<Booking> {
        Ok(Booking {
            id: self.id,
            registration: self.registration,
            name: self.name,
            seat: self.seat,
            shift: Shift::from_str(&self.shift)
                .map_err(|e| AppError::new(ErrorKind::Serialization, e.message))?,
            status: BookingStatus::from_str(&self.status)
                .map_err(|e| AppError::new(ErrorKind::Serialization, e.message))?,
            date: self.date,
            cash: self.cash,
            online: self.online,
            fee: self.fee,
            due: self.due,
            advance: self.advance,
            total_money: self.total_money,
            remarks: self.remarks,
            payment_detail: self.payment_detail.map(|json| json.0),
            next_month_status: self.next_month_status,
            colors: self.colors.0,
        })
    }
}

/// Postgres store for one monthly partition.
///
/// The table name comes from the typed [`Month`] key, never from caller
/// input.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: PgPool,
    table: String,
}

impl PgBookingStore {
    /// Create a store over the partition table for `month`.
    pub fn new(pool: PgPool, month: Month) -> Self {
        Self {
            pool,
            table: month.table_name(),
        }
    }

    fn store_err(&self, context: &str, err: sqlx::Error) -> AppError {
        AppError::with_source(
            ErrorKind::StoreUnavailable,
            format!("{context} ({})", self.table),
            err,
        )
    }

    async fn write_row(&self, booking: &Booking) -> AppResult<()> {
        let sql = format!(
            "INSERT INTO {t} (id, registration, name, seat, shift, status, date, cash, online, \
             fee, due, advance, total_money, remarks, payment_detail, next_month_status, colors) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             ON CONFLICT (registration) DO UPDATE SET \
             id = EXCLUDED.id, name = EXCLUDED.name, seat = EXCLUDED.seat, \
             shift = EXCLUDED.shift, status = EXCLUDED.status, date = EXCLUDED.date, \
             cash = EXCLUDED.cash, online = EXCLUDED.online, fee = EXCLUDED.fee, \
             due = EXCLUDED.due, advance = EXCLUDED.advance, \
             total_money = EXCLUDED.total_money, remarks = EXCLUDED.remarks, \
             payment_detail = EXCLUDED.payment_detail, \
             next_month_status = EXCLUDED.next_month_status, colors = EXCLUDED.colors",
            t = self.table
        );
        sqlx::query(&sql)
            .bind(booking.id)
            .bind(&booking.registration)
            .bind(&booking.name)
            .bind(&booking.seat)
            .bind(booking.shift.label())
            .bind(booking.status.as_str())
            .bind(booking.date)
            .bind(booking.cash)
            .bind(booking.online)
            .bind(booking.fee)
            .bind(booking.due)
            .bind(booking.advance)
            .bind(booking.total_money)
            .bind(&booking.remarks)
            .bind(booking.payment_detail.as_ref().map(Json))
            .bind(&booking.next_month_status)
            .bind(Json(&booking.colors))
            .execute(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to write booking", e))?;
        Ok(())
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, booking: Booking) -> AppResult<Booking> {
        self.write_row(&booking).await?;
        Ok(booking)
    }

    async fn upsert_by_registration(
        &self,
        registration: &str,
        patch: BookingPatch,
    ) -> AppResult<UpsertOutcome> {
        // Row lock so the read-modify-write is atomic per registration.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| self.store_err("Failed to begin transaction", e))?;

        let select = format!(
            "SELECT * FROM {t} WHERE registration = $1 FOR UPDATE",
            t = self.table
        );
        let existing = sqlx::query_as::<_, BookingRow>(&select)
            .bind(registration)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| self.store_err("Failed to read booking for upsert", e))?;

        let (booking, created) = match existing {
            Some(row) => {
                let mut booking = row.into_booking()?;
                patch.apply(&mut booking);
                (booking, false)
            }
            None => (patch.into_booking(registration), true),
        };

        let sql = format!(
            "INSERT INTO {t} (id, registration, name, seat, shift, status, date, cash, online, \
             fee, due, advance, total_money, remarks, payment_detail, next_month_status, colors) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             ON CONFLICT (registration) DO UPDATE SET \
             name = EXCLUDED.name, seat = EXCLUDED.seat, shift = EXCLUDED.shift, \
             status = EXCLUDED.status, date = EXCLUDED.date, cash = EXCLUDED.cash, \
             online = EXCLUDED.online, fee = EXCLUDED.fee, due = EXCLUDED.due, \
             advance = EXCLUDED.advance, total_money = EXCLUDED.total_money, \
             remarks = EXCLUDED.remarks, payment_detail = EXCLUDED.payment_detail, \
             next_month_status = EXCLUDED.next_month_status, colors = EXCLUDED.colors",
            t = self.table
        );
        sqlx::query(&sql)
            .bind(booking.id)
            .bind(&booking.registration)
            .bind(&booking.name)
            .bind(&booking.seat)
            .bind(booking.shift.label())
            .bind(booking.status.as_str())
            .bind(booking.date)
            .bind(booking.cash)
            .bind(booking.online)
            .bind(booking.fee)
            .bind(booking.due)
            .bind(booking.advance)
            .bind(booking.total_money)
            .bind(&booking.remarks)
            .bind(booking.payment_detail.as_ref().map(Json))
            .bind(&booking.next_month_status)
            .bind(Json(&booking.colors))
            .execute(&mut *tx)
            .await
            .map_err(|e| self.store_err("Failed to upsert booking", e))?;

        tx.commit()
            .await
            .map_err(|e| self.store_err("Failed to commit upsert", e))?;

        Ok(UpsertOutcome { booking, created })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let sql = format!("SELECT * FROM {t} WHERE id = $1", t = self.table);
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to find booking by id", e))?
            .map(BookingRow::into_booking)
            .transpose()
    }

    async fn find_by_registration(&self, registration: &str) -> AppResult<Option<Booking>> {
        let sql = format!(
            "SELECT * FROM {t} WHERE registration = $1",
            t = self.table
        );
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(registration)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to find booking by registration", e))?
            .map(BookingRow::into_booking)
            .transpose()
    }

    async fn find_by_seat(&self, seat: &str) -> AppResult<Vec<Booking>> {
        let sql = format!("SELECT * FROM {t} WHERE seat = $1", t = self.table);
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(seat)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to find bookings by seat", e))?
            .into_iter()
            .map(BookingRow::into_booking)
            .collect()
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        let sql = format!("SELECT * FROM {t} ORDER BY registration", t = self.table);
        sqlx::query_as::<_, BookingRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to list bookings", e))?
            .into_iter()
            .map(BookingRow::into_booking)
            .collect()
    }

    async fn merge_color(
        &self,
        id: Uuid,
        column: &str,
        color: &str,
    ) -> AppResult<Option<Booking>> {
        let sql = format!(
            "UPDATE {t} SET colors = colors || $2::jsonb WHERE id = $1 RETURNING *",
            t = self.table
        );
        let patch = serde_json::json!({ column: color });
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id)
            .bind(Json(patch))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to merge annotation color", e))?
            .map(BookingRow::into_booking)
            .transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let sql = format!("DELETE FROM {t} WHERE id = $1", t = self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to delete booking", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_registration(&self, registration: &str) -> AppResult<bool> {
        let sql = format!(
            "DELETE FROM {t} WHERE registration = $1",
            t = self.table
        );
        let result = sqlx::query(&sql)
            .bind(registration)
            .execute(&self.pool)
            .await
            .map_err(|e| self.store_err("Failed to delete booking by registration", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| self.store_err("Health check failed", e))
    }
}
