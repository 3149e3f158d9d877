//! Request DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use seatledger_core::model::{BookingPatch, BookingStatus};
use seatledger_core::types::Shift;

use seatledger_service::FeePayment;

/// Query string for the booking list: `?month=<name|all>`.
#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    /// Month name, `"all"`, or absent for the current month.
    pub month: Option<String>,
}

/// Body of the upsert-by-registration endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    /// Registration keying the row.
    #[validate(length(min = 1))]
    pub registration: String,
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
    pub next_month_status: Option<String>,
}

impl UpdateBookingRequest {
    /// Split into the registration key and the patch body.
    pub fn into_parts(self) -> (String, BookingPatch) {
        let patch = BookingPatch {
            name: self.name,
            seat: self.seat,
            shift: self.shift,
            status: self.status,
            date: self.date,
            cash: self.cash,
            online: self.online,
            fee: self.fee,
            due: self.due,
            advance: self.advance,
            total_money: self.total_money,
            remarks: self.remarks,
            payment_detail: None,
            next_month_status: self.next_month_status,
            colors: None,
        };
        (self.registration, patch)
    }
}

/// Body of the annotation merge endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateColorRequest {
    /// Booking row id.
    pub id: Uuid,
    /// Column name the annotation attaches to.
    #[validate(length(min = 1))]
    pub column: String,
    /// Annotation color value.
    #[validate(length(min = 1))]
    pub color: String,
}

/// Body of the seat allot/release endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSeatStatusRequest {
    /// Seat label.
    #[validate(length(min = 1))]
    pub seat: String,
    /// Requested status; `"Empty"` releases, anything else allots.
    #[validate(length(min = 1))]
    pub status: String,
    /// Shift window.
    pub shift: Shift,
}

/// Body of the continue/discontinue notification endpoint.
#[derive(Debug, Deserialize)]
pub struct NotificationStatusRequest {
    /// `"Confirmed"` or `"discontinue"`.
    pub status: String,
}

/// Body of the gateway order creation endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// Amount in minor units (paise).
    #[validate(range(min = 1))]
    pub amount: i64,
}

/// Body of the gateway-verified fee payment endpoint.
#[derive(Debug, Deserialize)]
pub struct FeePaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    /// The fee form as filled by the admin.
    pub form_data: FeeFormData,
}

/// Fee form fields applied to the booking row once the signature
/// checks out.
#[derive(Debug, Deserialize)]
pub struct FeeFormData {
    pub registration: String,
    pub name: Option<String>,
    pub seat: Option<String>,
    pub shift: Option<Shift>,
    pub cash: Option<f64>,
    pub online: Option<f64>,
    pub fee: Option<f64>,
    pub due: Option<f64>,
    pub advance: Option<f64>,
    pub total_money: Option<f64>,
    pub remarks: Option<String>,
}

impl From<FeePaymentRequest> for FeePayment {
    fn from(req: FeePaymentRequest) -> Self {
        let form = BookingPatch {
            name: req.form_data.name,
            seat: req.form_data.seat,
            shift: req.form_data.shift,
            status: None,
            date: None,
            cash: req.form_data.cash,
            online: req.form_data.online,
            fee: req.form_data.fee,
            due: req.form_data.due,
            advance: req.form_data.advance,
            total_money: req.form_data.total_money,
            remarks: req.form_data.remarks,
            payment_detail: None,
            next_month_status: None,
            colors: None,
        };
        FeePayment {
            order_id: req.order_id,
            payment_id: req.payment_id,
            signature: req.signature,
            registration: req.form_data.registration,
            form,
        }
    }
}
