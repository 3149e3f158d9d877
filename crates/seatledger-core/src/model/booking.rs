//! Booking entity — one occupancy/payment record per (registration, seat,
//! shift) inside a monthly partition.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::types::Shift;

/// Occupancy/payment state of a booking row.
///
/// `Left` and `Discontinue` are terminal: a row in either state no longer
/// occupies its seat. `"discontinue"` keeps its historical lowercase wire
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Unpaid,
    Paid,
    Confirmed,
    #[serde(rename = "discontinue")]
    Discontinue,
    Left,
}

impl BookingStatus {
    /// Whether a row in this state still occupies its seat.
    pub fn occupies_seat(self) -> bool {
        !matches!(self, BookingStatus::Left | BookingStatus::Discontinue)
    }

    /// The wire form of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Unpaid => "Unpaid",
            BookingStatus::Paid => "Paid",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Discontinue => "discontinue",
            BookingStatus::Left => "Left",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            BookingStatus::Unpaid,
            BookingStatus::Paid,
            BookingStatus::Confirmed,
            BookingStatus::Discontinue,
            BookingStatus::Left,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| AppError::validation(format!("Unknown booking status: '{s}'")))
    }
}

/// Gateway order/payment reference attached to a paid booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetail {
    /// Gateway order id.
    pub order_id: String,
    /// Gateway payment id.
    pub payment_id: String,
}

/// One occupancy/payment record inside a monthly partition.
///
/// The registration number is the natural key within a partition: at most
/// one live booking per registration per month. A row whose status still
/// occupies its seat represents an occupied seat for that shift in that
/// month; deleting the row frees the seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Row id.
    pub id: Uuid,
    /// Member registration number (natural key within the partition).
    pub registration: String,
    /// Member display name, denormalized for the seat grid.
    pub name: String,
    /// Seat label (alphanumeric, e.g. "A3").
    pub seat: String,
    /// Shift window the seat is occupied for.
    pub shift: Shift,
    /// Occupancy/payment state.
    pub status: BookingStatus,
    /// Date of the last write to this row.
    pub date: NaiveDate,
    /// Cash component of the fee payment.
    pub cash: f64,
    /// Online component of the fee payment.
    pub online: f64,
    /// Registration fee.
    pub fee: f64,
    /// Outstanding amount.
    pub due: f64,
    /// Advance credit.
    pub advance: f64,
    /// Total money received for this row.
    pub total_money: f64,
    /// Free-form admin remarks.
    pub remarks: Option<String>,
    /// Gateway order/payment reference, present once paid online.
    pub payment_detail: Option<PaymentDetail>,
    /// Continue/discontinue marker for the next month, written by the
    /// notification flow and compared case-insensitively by the rollover.
    pub next_month_status: Option<String>,
    /// Sparse column-name → color annotation map. UI hinting only, not a
    /// correctness-bearing field.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Fields accepted when creating a booking row directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBooking {
    pub registration: String,
    pub name: String,
    pub seat: String,
    pub shift: Shift,
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub online: f64,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub due: f64,
    #[serde(default)]
    pub advance: f64,
    #[serde(default)]
    pub total_money: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl From<NewBooking> for Booking {
    fn from(new: NewBooking) -> Self {
        Booking {
            id: Uuid::new_v4(),
            registration: new.registration,
            name: new.name,
            seat: new.seat,
            shift: new.shift,
            status: new.status.unwrap_or(BookingStatus::Unpaid),
            date: new.date.unwrap_or_else(today),
            cash: new.cash,
            online: new.online,
            fee: new.fee,
            due: new.due,
            advance: new.advance,
            total_money: new.total_money,
            remarks: new.remarks,
            payment_detail: None,
            next_month_status: None,
            colors: HashMap::new(),
        }
    }
}

/// Partial update applied by upsert-by-registration.
///
/// Absent fields leave the stored row untouched; on create, absent fields
/// take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub seat: Option<String>,
    pub shift: Option<Shift>,
    pub status: Option<BookingStatus>,
    pub date: Option<NaiveDate>,
    pub cash: Option<f64>,
    pub online: Option<f64>,
    pub fee: Option<f64>,
    pub due: Option<f64>,
    pub advance: Option<f64>,
    pub total_money: Option<f64>,
    pub remarks: Option<String>,
    pub payment_detail: Option<PaymentDetail>,
    pub next_month_status: Option<String>,
    /// Annotation keys merged into the stored color map.
    pub colors: Option<HashMap<String, String>>,
}

impl BookingPatch {
    /// Applies the present fields onto an existing row and stamps `date`.
    pub fn apply(&self, booking: &mut Booking) {
        if let Some(name) = &self.name {
            booking.name = name.clone();
        }
        if let Some(seat) = &self.seat {
            booking.seat = seat.clone();
        }
        if let Some(shift) = self.shift {
            booking.shift = shift;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
        if let Some(cash) = self.cash {
            booking.cash = cash;
        }
        if let Some(online) = self.online {
            booking.online = online;
        }
        if let Some(fee) = self.fee {
            booking.fee = fee;
        }
        if let Some(due) = self.due {
            booking.due = due;
        }
        if let Some(advance) = self.advance {
            booking.advance = advance;
        }
        if let Some(total) = self.total_money {
            booking.total_money = total;
        }
        if let Some(remarks) = &self.remarks {
            booking.remarks = Some(remarks.clone());
        }
        if let Some(detail) = &self.payment_detail {
            booking.payment_detail = Some(detail.clone());
        }
        if let Some(marker) = &self.next_month_status {
            booking.next_month_status = Some(marker.clone());
        }
        if let Some(colors) = &self.colors {
            booking
                .colors
                .extend(colors.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        booking.date = self.date.unwrap_or_else(today);
    }

    /// Materializes a fresh row for `registration` from the patch.
    pub fn into_booking(self, registration: &str) -> Booking {
        let mut booking = Booking {
            id: Uuid::new_v4(),
            registration: registration.to_string(),
            name: String::new(),
            seat: String::new(),
            shift: Shift::default(),
            status: BookingStatus::Unpaid,
            date: today(),
            cash: 0.0,
            online: 0.0,
            fee: 0.0,
            due: 0.0,
            advance: 0.0,
            total_money: 0.0,
            remarks: None,
            payment_detail: None,
            next_month_status: None,
            colors: HashMap::new(),
        };
        self.apply(&mut booking);
        booking
    }
}

/// Today's civil date (UTC), the stamp used on every booking write.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
