//! Monthly rollover classification tests.

use std::sync::Arc;

use seatledger_core::model::BookingPatch;
use seatledger_core::types::Month;

use seatledger_worker::RolloverJob;

use crate::helpers::TestApp;

async fn seed_previous_month(
    app: &TestApp,
    registration: &str,
    marker: Option<&str>,
    cash: f64,
) {
    let previous = Month::current().previous();
    app.state
        .partitions
        .get(previous)
        .upsert_by_registration(
            registration,
            BookingPatch {
                cash: Some(cash),
                next_month_status: marker.map(String::from),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn rollover_reports_paid_continuing_and_writes_nothing_forward() {
    let app = TestApp::new().await;

    seed_previous_month(&app, "X", Some("Discontinue"), 100.0).await;
    seed_previous_month(&app, "Y", Some("Confirmed"), 200.0).await;

    let job = RolloverJob::new(Arc::clone(&app.state.partitions));
    let report = job.run().await.unwrap();

    assert_eq!(report.month, Month::current().previous());
    assert_eq!(report.total, 2);
    assert_eq!(report.continuing, 1);
    assert_eq!(report.paid_continuing.len(), 1);
    assert_eq!(report.paid_continuing[0].registration, "Y");
    assert_eq!(report.paid_continuing[0].cash, 200.0);

    // Report only: the current month's partition stays untouched.
    let current = app.state.partitions.current().list_all().await.unwrap();
    assert!(current.is_empty());
}

#[tokio::test]
async fn rollover_drops_unpaid_rows_from_the_paid_set() {
    let app = TestApp::new().await;

    seed_previous_month(&app, "A", None, 0.0).await;
    seed_previous_month(&app, "B", None, 50.0).await;

    let job = RolloverJob::new(Arc::clone(&app.state.partitions));
    let report = job.run().await.unwrap();

    assert_eq!(report.continuing, 2);
    assert_eq!(report.paid_continuing.len(), 1);
    assert_eq!(report.paid_continuing[0].registration, "B");
}
