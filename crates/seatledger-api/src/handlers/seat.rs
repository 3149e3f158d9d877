//! Seat grid and seat transition handlers.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use seatledger_core::error::AppError;
use seatledger_core::model::Booking;
use seatledger_core::types::Shift;

use seatledger_service::{SeatOccupancy, SeatTransition};

use crate::dto::request::UpdateSeatStatusRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /library/getSeatStatus
pub async fn get_seat_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BTreeMap<Shift, Vec<SeatOccupancy>>>>, ApiError> {
    let grid = state.seats.seat_status_by_shift().await?;
    Ok(Json(ApiResponse::ok(grid)))
}

/// GET /library/getSeatBookings/{seat}
///
/// Everyone currently on a seat, across shifts. An empty list is a
/// normal answer, not an error.
pub async fn get_seat_bookings(
    State(state): State<AppState>,
    Path(seat): Path<String>,
) -> Result<Json<ApiResponse<Vec<Booking>>>, ApiError> {
    let bookings = state.seats.list_by_seat(&seat).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /library/getStudentLibSeat/{id}
pub async fn get_student_lib_seat(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.seats.current_seat(&registration).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// PATCH /library/updateSeatStatus/{registration}
///
/// Allot or release a seat. The realtime fan-out is driven by the acting
/// client over its websocket, not by this write.
pub async fn update_seat_status(
    State(state): State<AppState>,
    Path(registration): Path<String>,
    Json(req): Json<UpdateSeatStatusRequest>,
) -> Result<Json<ApiResponse<SeatTransition>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let transition = state
        .seats
        .set_seat_status(&registration, &req.status, &req.seat, req.shift)
        .await?;
    Ok(Json(ApiResponse::ok(transition)))
}
