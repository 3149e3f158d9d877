//! Gateway order creation and fee payment handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use seatledger_core::error::AppError;
use seatledger_core::model::Booking;

use seatledger_service::Order;

use crate::dto::request::{CreateOrderRequest, FeePaymentRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /library/createOrder
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let order = state.gateway.create_order(req.amount).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// POST /library/verifyFeePayment
///
/// Fails closed: an invalid signature performs no writes at all.
pub async fn verify_fee_payment(
    State(state): State<AppState>,
    Json(req): Json<FeePaymentRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.fees.verify_and_record(req.into()).await?;
    Ok(Json(ApiResponse::ok(booking)))
}
