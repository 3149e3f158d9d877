//! Member profile handler.

use axum::Json;
use axum::extract::{Path, State};

use seatledger_core::model::MemberProfile;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /library/getStudentData/{registration}
pub async fn get_student_data(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<Json<ApiResponse<MemberProfile>>, ApiError> {
    let profile = state.seats.get_member(&registration).await?;
    Ok(Json(ApiResponse::ok(profile)))
}
