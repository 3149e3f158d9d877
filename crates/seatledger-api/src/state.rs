//! Application state shared across all handlers.

use std::sync::Arc;

use seatledger_core::config::AppConfig;
use seatledger_core::traits::MemberStore;

use seatledger_database::PartitionRegistry;
use seatledger_realtime::RealtimeHub;
use seatledger_service::{FeePaymentService, PaymentGatewayClient, SeatAllocationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Monthly booking partitions.
    pub partitions: Arc<PartitionRegistry>,
    /// Canonical member ledger.
    pub members: Arc<dyn MemberStore>,
    /// Seat allocation business logic.
    pub seats: Arc<SeatAllocationService>,
    /// Signature-gated fee payment flow.
    pub fees: Arc<FeePaymentService>,
    /// Payment gateway order client.
    pub gateway: Arc<PaymentGatewayClient>,
    /// Real-time fan-out hub.
    pub hub: Arc<RealtimeHub>,
}
