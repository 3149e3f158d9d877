//! # seatledger-api
//!
//! The HTTP and websocket surface: axum router, request/response DTOs,
//! error mapping, CORS, and the websocket upgrade into the realtime hub.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
