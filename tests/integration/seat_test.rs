//! Seat allotment/release and seat grid tests.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn allotment_always_stores_paid() {
    let app = TestApp::new().await;
    app.seed_member("L-101", "Asha").await;

    // Requesting "Confirmed" through the seat endpoint must still yield
    // a Paid row.
    let (status, body) = app
        .request(
            "PATCH",
            "/library/updateSeatStatus/L-101",
            Some(json!({
                "seat": "A3",
                "status": "Confirmed",
                "shift": "6:30 AM to 2 PM"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Paid");
    assert_eq!(body["data"]["name"], "Asha");
    assert_eq!(body["data"]["seat"], "A3");
    assert_eq!(body["data"]["shift"], "6:30 AM to 2 PM");
}

#[tokio::test]
async fn empty_releases_the_seat() {
    let app = TestApp::new().await;
    app.seed_member("L-102", "Ravi").await;

    app.request(
        "PATCH",
        "/library/updateSeatStatus/L-102",
        Some(json!({ "seat": "A4", "status": "Paid", "shift": "24 Hours" })),
    )
    .await;

    let (status, body) = app
        .request(
            "PATCH",
            "/library/updateSeatStatus/L-102",
            Some(json!({ "seat": "A4", "status": "Empty", "shift": "24 Hours" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["result"], "released");

    let (_, body) = app
        .request("GET", "/admin_library/getBookingData", None)
        .await;
    let rows = body["data"].as_array().unwrap();
    assert!(rows.iter().all(|row| row["registration"] != "L-102"));
}

#[tokio::test]
async fn seat_grid_groups_by_shift() {
    let app = TestApp::new().await;
    app.seed_member("L-103", "Meena").await;
    app.seed_member("L-104", "Vikram").await;

    app.request(
        "PATCH",
        "/library/updateSeatStatus/L-103",
        Some(json!({ "seat": "A1", "status": "Paid", "shift": "6:30 AM to 2 PM" })),
    )
    .await;
    app.request(
        "PATCH",
        "/library/updateSeatStatus/L-104",
        Some(json!({ "seat": "A2", "status": "Paid", "shift": "2 PM to 9:30 PM" })),
    )
    .await;

    let (status, body) = app.request("GET", "/library/getSeatStatus", None).await;
    assert_eq!(status, StatusCode::OK);
    let morning = body["data"]["6:30 AM to 2 PM"].as_array().unwrap();
    assert_eq!(morning.len(), 1);
    assert_eq!(morning[0]["seat"], "A1");
    assert_eq!(morning[0]["status"], "Paid");
    let evening = body["data"]["2 PM to 9:30 PM"].as_array().unwrap();
    assert_eq!(evening[0]["registration"], "L-104");
}

#[tokio::test]
async fn seat_bookings_list_who_is_on_the_seat() {
    let app = TestApp::new().await;
    app.seed_member("L-108", "Asha").await;

    app.request(
        "PATCH",
        "/library/updateSeatStatus/L-108",
        Some(json!({ "seat": "A3", "status": "Paid", "shift": "6:30 AM to 2 PM" })),
    )
    .await;

    let (status, body) = app
        .request("GET", "/library/getSeatBookings/A3", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["registration"], "L-108");
    assert_eq!(rows[0]["status"], "Paid");

    // An empty seat answers with an empty list, not an error.
    let (status, body) = app
        .request("GET", "/library/getSeatBookings/Z9", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn student_seat_lookup_finds_the_current_booking() {
    let app = TestApp::new().await;
    app.seed_member("L-105", "Sana").await;

    app.request(
        "PATCH",
        "/library/updateSeatStatus/L-105",
        Some(json!({ "seat": "B9", "status": "Paid", "shift": "6:30 AM to 9:30 PM" })),
    )
    .await;

    let (status, body) = app
        .request("GET", "/library/getStudentLibSeat/L-105", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["seat"], "B9");

    let (status, _) = app
        .request("GET", "/library/getStudentLibSeat/L-999", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn allotment_for_unknown_member_is_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(
            "PATCH",
            "/library/updateSeatStatus/L-404",
            Some(json!({ "seat": "Z1", "status": "Paid", "shift": "24 Hours" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn notification_status_marks_continue_or_discontinue() {
    let app = TestApp::new().await;
    app.seed_member("L-106", "Asif").await;

    app.request(
        "PATCH",
        "/library/updateSeatStatus/L-106",
        Some(json!({ "seat": "C3", "status": "Paid", "shift": "6:30 AM to 2 PM" })),
    )
    .await;

    let (status, body) = app
        .request(
            "PATCH",
            "/library/updateNotificationStatus/L-106",
            Some(json!({ "status": "discontinue" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "discontinue");
    assert_eq!(body["data"]["next_month_status"], "discontinue");

    // Without a booking the marker endpoint does not upsert.
    let (status, _) = app
        .request(
            "PATCH",
            "/library/updateNotificationStatus/L-407",
            Some(json!({ "status": "Confirmed" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn member_profile_excludes_billing_fields() {
    let app = TestApp::new().await;
    app.seed_member("L-107", "Asha").await;

    let (status, body) = app
        .request("GET", "/library/getStudentData/L-107", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Asha");
    assert!(body["data"].get("due").is_none());
    assert!(body["data"].get("advance").is_none());
    assert!(body["data"].get("last_payment_date").is_none());
}
