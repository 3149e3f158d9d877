//! Continue/discontinue notification handler.

use axum::Json;
use axum::extract::{Path, State};

use seatledger_core::model::Booking;

use crate::dto::request::NotificationStatusRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// PATCH /library/updateNotificationStatus/{registration}
pub async fn update_notification_status(
    State(state): State<AppState>,
    Path(registration): Path<String>,
    Json(req): Json<NotificationStatusRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let status = req.status.parse().map_err(ApiError::from)?;
    let booking = state
        .seats
        .set_notification_status(&registration, status)
        .await?;
    Ok(Json(ApiResponse::ok(booking)))
}
