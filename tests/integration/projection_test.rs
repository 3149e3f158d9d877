//! Eventual-consistency tests for the change projector.

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;

use seatledger_core::traits::MemberStore;

use crate::helpers::TestApp;

/// Polls the ledger until the projection lands or the deadline passes.
async fn await_projection(
    app: &TestApp,
    registration: &str,
    date: NaiveDate,
) -> Option<seatledger_core::model::Member> {
    for _ in 0..100 {
        if let Some(member) = app
            .state
            .members
            .find_by_registration(registration)
            .await
            .unwrap()
        {
            if member.last_payment_date == Some(date) {
                return Some(member);
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}

#[tokio::test]
async fn booking_upsert_eventually_projects_into_the_ledger() {
    let app = TestApp::new().await;

    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    app.request(
        "POST",
        "/admin_library/updatebooking",
        Some(json!({
            "registration": "L-401",
            "name": "Meena",
            "seat": "D1",
            "shift": "2 PM to 9:30 PM",
            "status": "Paid",
            "date": date.to_string()
        })),
    )
    .await;

    let member = await_projection(&app, "L-401", date)
        .await
        .expect("projection should land within the timeout");
    assert_eq!(member.last_payment_date, Some(date));
    assert_eq!(
        member.shift,
        Some("2 PM to 9:30 PM".parse().unwrap())
    );
}

#[tokio::test]
async fn projection_creates_the_ledger_row_when_absent() {
    let app = TestApp::new().await;

    // No seeded member: the projector must create the skeleton row.
    let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    app.request(
        "POST",
        "/admin_library/updatebooking",
        Some(json!({
            "registration": "L-402",
            "seat": "D2",
            "shift": "24 Hours",
            "status": "Paid",
            "date": date.to_string()
        })),
    )
    .await;

    let member = await_projection(&app, "L-402", date)
        .await
        .expect("projection should create the member");
    assert_eq!(member.registration, "L-402");
}
