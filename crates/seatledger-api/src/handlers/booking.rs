//! Admin booking spreadsheet handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use seatledger_core::error::AppError;
use seatledger_core::model::{Booking, NewBooking};
use seatledger_core::types::MonthSelector;

use crate::dto::request::{BookingQuery, UpdateBookingRequest, UpdateColorRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /admin_library/getBookingData?month={name|all}
pub async fn get_booking_data(
    State(state): State<AppState>,
    Query(query): Query<BookingQuery>,
) -> Result<Json<ApiResponse<Vec<Booking>>>, ApiError> {
    let selector: MonthSelector = query
        .month
        .as_deref()
        .unwrap_or("current")
        .parse()
        .map_err(ApiError::from)?;
    let bookings = state.seats.list_bookings(selector).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// POST /admin_library/addBooking
pub async fn add_booking(
    State(state): State<AppState>,
    Json(req): Json<NewBooking>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    if req.registration.trim().is_empty() {
        return Err(AppError::validation("registration must not be empty").into());
    }
    let booking = state.seats.create_booking(req).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// POST /admin_library/updatebooking
pub async fn update_booking(
    State(state): State<AppState>,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let (registration, patch) = req.into_parts();
    let booking = state.seats.update_booking(&registration, patch).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// DELETE /admin_library/deleteBooking/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.seats.delete_booking(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Booking deleted" } }),
    ))
}

/// PATCH /admin_library/updateColor
pub async fn update_color(
    State(state): State<AppState>,
    Json(req): Json<UpdateColorRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let booking = state
        .seats
        .set_annotation(req.id, &req.column, &req.color)
        .await?;
    Ok(Json(ApiResponse::ok(booking)))
}
