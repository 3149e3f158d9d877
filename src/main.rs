//! SeatLedger Server — occupancy and fee billing engine for a study-hall
//! library.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use seatledger_core::config::AppConfig;
use seatledger_core::error::AppError;

use seatledger_api::{AppState, build_app};
use seatledger_realtime::RealtimeHub;
use seatledger_service::{
    FeePaymentService, PaymentGatewayClient, SeatAllocationService, SignatureVerifier,
};
use seatledger_worker::{ChangeProjector, RolloverJob, WorkerScheduler};

#[tokio::main]
async fn main() {
    let env = std::env::var("SEATLEDGER_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SeatLedger v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores (partitions + ledger) ─────────────────────
    let stores =
        seatledger_database::provider::build_stores(&config.store, config.realtime.feed_buffer_size)
            .await?;
    let partitions = Arc::clone(&stores.partitions);
    let members = Arc::clone(&stores.members);

    // ── Step 2: Services ─────────────────────────────────────────
    let seats = Arc::new(SeatAllocationService::new(
        Arc::clone(&partitions),
        Arc::clone(&members),
    ));
    let verifier = SignatureVerifier::new(config.payment.key_secret.clone());
    let fees = Arc::new(FeePaymentService::new(verifier, Arc::clone(&partitions)));
    let gateway = Arc::new(PaymentGatewayClient::new(config.payment.clone()));
    let hub = Arc::new(RealtimeHub::new(config.realtime.clone()));

    // ── Step 3: Background tasks, started once for the process ───
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let projector = ChangeProjector::start(
        &partitions,
        Arc::clone(&members),
        config.worker.projection_buffer_size,
        shutdown_rx,
    );

    let mut scheduler = WorkerScheduler::new().await?;
    scheduler
        .register_monthly_rollover(
            &config.worker.rollover_cron,
            Arc::new(RolloverJob::new(Arc::clone(&partitions))),
        )
        .await?;
    scheduler.start().await?;

    // ── Step 4: HTTP server ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        partitions,
        members,
        seats,
        fees,
        gateway,
        hub,
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 5: Graceful shutdown ────────────────────────────────
    tracing::info!("Shutting down background tasks...");
    let _ = shutdown_tx.send(true);
    scheduler.shutdown().await?;
    projector.join().await;

    tracing::info!("SeatLedger stopped");
    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
