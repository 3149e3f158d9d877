//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tokio::sync::watch;
use tower::ServiceExt;

use seatledger_core::config::AppConfig;
use seatledger_core::model::Member;
use seatledger_core::traits::MemberStore;

use seatledger_api::{AppState, build_app};
use seatledger_realtime::RealtimeHub;
use seatledger_service::{
    FeePaymentService, PaymentGatewayClient, SeatAllocationService, SignatureVerifier,
};
use seatledger_worker::ChangeProjector;

/// Shared secret used to sign test fee payments.
pub const TEST_GATEWAY_SECRET: &str = "test-gateway-secret";

/// Test application context: the wired app over in-memory stores, with
/// the change projector running.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state for direct service access.
    pub state: AppState,
    /// Held so the projector keeps running for the test's lifetime.
    _shutdown: watch::Sender<bool>,
}

impl TestApp {
    /// Create a new test application.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.payment.key_secret = TEST_GATEWAY_SECRET.to_string();

        let stores = seatledger_database::provider::build_stores(
            &config.store,
            config.realtime.feed_buffer_size,
        )
        .await
        .expect("memory stores never fail to build");
        let partitions = Arc::clone(&stores.partitions);
        let members = Arc::clone(&stores.members);

        let seats = Arc::new(SeatAllocationService::new(
            Arc::clone(&partitions),
            Arc::clone(&members),
        ));
        let verifier = SignatureVerifier::new(config.payment.key_secret.clone());
        let fees = Arc::new(FeePaymentService::new(verifier, Arc::clone(&partitions)));
        let gateway = Arc::new(PaymentGatewayClient::new(config.payment.clone()));
        let hub = Arc::new(RealtimeHub::new(config.realtime.clone()));

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        ChangeProjector::start(
            &partitions,
            Arc::clone(&members),
            config.worker.projection_buffer_size,
            shutdown_rx,
        );

        let state = AppState {
            config: Arc::new(config),
            partitions,
            members,
            seats,
            fees,
            gateway,
            hub,
        };
        let router = build_app(state.clone());

        Self {
            router,
            state,
            _shutdown: shutdown_tx,
        }
    }

    /// Seed a member into the ledger.
    pub async fn seed_member(&self, registration: &str, name: &str) {
        let mut member = Member::skeleton(registration);
        member.name = name.to_string();
        self.state
            .members
            .create(member)
            .await
            .expect("seeding a member cannot fail in memory");
    }

    /// Issue a request and return status plus parsed JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder
                    .body(Body::from(json.to_string()))
                    .expect("request builds")
            }
            None => builder.body(Body::empty()).expect("request builds"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router never errors");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is JSON")
        };
        (status, json)
    }
}
