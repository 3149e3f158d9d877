//! Admin booking endpoint tests.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn add_then_list_bookings() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            "POST",
            "/admin_library/addBooking",
            Some(json!({
                "registration": "L-201",
                "name": "Vikram",
                "seat": "B7",
                "shift": "2 PM to 9:30 PM",
                "fee": 1000.0
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["registration"], "L-201");

    let (status, body) = app
        .request("GET", "/admin_library/getBookingData", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert!(rows.iter().any(|row| row["registration"] == "L-201"));
}

#[tokio::test]
async fn update_booking_upserts_by_registration() {
    let app = TestApp::new().await;

    // No row yet: the upsert creates one.
    let (status, body) = app
        .request(
            "POST",
            "/admin_library/updatebooking",
            Some(json!({
                "registration": "L-202",
                "name": "Meena",
                "seat": "C1",
                "shift": "6:30 AM to 2 PM",
                "status": "Unpaid"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Unpaid");

    // Second call patches the same row.
    let (status, body) = app
        .request(
            "POST",
            "/admin_library/updatebooking",
            Some(json!({
                "registration": "L-202",
                "cash": 500.0,
                "status": "Paid"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Paid");
    assert_eq!(body["data"]["seat"], "C1");
    assert_eq!(body["data"]["cash"], 500.0);
}

#[tokio::test]
async fn delete_booking_removes_the_row() {
    let app = TestApp::new().await;

    let (_, body) = app
        .request(
            "POST",
            "/admin_library/addBooking",
            Some(json!({
                "registration": "L-203",
                "name": "Ravi",
                "seat": "D2",
                "shift": "24 Hours"
            })),
        )
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .request("DELETE", &format!("/admin_library/deleteBooking/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request("DELETE", &format!("/admin_library/deleteBooking/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_color_merges_one_annotation_key() {
    let app = TestApp::new().await;

    let (_, body) = app
        .request(
            "POST",
            "/admin_library/addBooking",
            Some(json!({
                "registration": "L-204",
                "name": "Sana",
                "seat": "E4",
                "shift": "6:30 AM to 9:30 PM"
            })),
        )
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    app.request(
        "PATCH",
        "/admin_library/updateColor",
        Some(json!({ "id": id, "column": "fee", "color": "#ff0000" })),
    )
    .await;
    let (status, body) = app
        .request(
            "PATCH",
            "/admin_library/updateColor",
            Some(json!({ "id": id, "column": "seat", "color": "#00ff00" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["colors"]["fee"], "#ff0000");
    assert_eq!(body["data"]["colors"]["seat"], "#00ff00");
}

#[tokio::test]
async fn unknown_month_is_a_validation_error() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request("GET", "/admin_library/getBookingData?month=smarch", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "VALIDATION");
}

#[tokio::test]
async fn month_all_scans_every_partition() {
    let app = TestApp::new().await;
    app.request(
        "POST",
        "/admin_library/addBooking",
        Some(json!({
            "registration": "L-205",
            "name": "Asif",
            "seat": "F1",
            "shift": "6:30 AM to 2 PM"
        })),
    )
    .await;

    let (status, body) = app
        .request("GET", "/admin_library/getBookingData?month=all", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert!(rows.iter().any(|row| row["registration"] == "L-205"));
}
