//! Route definitions for the SeatLedger HTTP API.
//!
//! The paths match what the deployed admin clients call, down to the
//! lowercase `updatebooking`. The router receives `AppState` and passes
//! it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(admin_routes())
        .merge(library_routes())
        .merge(system_routes())
        .with_state(state)
}

/// Admin spreadsheet endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin_library/getBookingData",
            get(handlers::booking::get_booking_data),
        )
        .route(
            "/admin_library/addBooking",
            post(handlers::booking::add_booking),
        )
        .route(
            "/admin_library/updatebooking",
            post(handlers::booking::update_booking),
        )
        .route(
            "/admin_library/deleteBooking/{id}",
            delete(handlers::booking::delete_booking),
        )
        .route(
            "/admin_library/updateColor",
            patch(handlers::booking::update_color),
        )
}

/// Seat grid, member, and payment endpoints.
fn library_routes() -> Router<AppState> {
    Router::new()
        .route("/library/getSeatStatus", get(handlers::seat::get_seat_status))
        .route(
            "/library/getSeatBookings/{seat}",
            get(handlers::seat::get_seat_bookings),
        )
        .route(
            "/library/getStudentLibSeat/{id}",
            get(handlers::seat::get_student_lib_seat),
        )
        .route(
            "/library/getStudentData/{registration}",
            get(handlers::member::get_student_data),
        )
        .route(
            "/library/updateSeatStatus/{registration}",
            patch(handlers::seat::update_seat_status),
        )
        .route(
            "/library/updateNotificationStatus/{registration}",
            patch(handlers::notification::update_notification_status),
        )
        .route("/library/createOrder", post(handlers::fee::create_order))
        .route(
            "/library/verifyFeePayment",
            post(handlers::fee::verify_fee_payment),
        )
}

/// Health and realtime endpoints.
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ws", get(handlers::ws::ws_upgrade))
}
