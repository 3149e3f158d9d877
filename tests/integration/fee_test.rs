//! Signature-gated fee payment tests.

use http::StatusCode;
use serde_json::json;

use seatledger_core::traits::MemberStore;
use seatledger_service::SignatureVerifier;

use crate::helpers::{TEST_GATEWAY_SECRET, TestApp};

fn signed(order_id: &str, payment_id: &str) -> String {
    SignatureVerifier::new(TEST_GATEWAY_SECRET).sign(order_id, payment_id)
}

#[tokio::test]
async fn valid_signature_commits_paid() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            "POST",
            "/library/verifyFeePayment",
            Some(json!({
                "order_id": "order_10",
                "payment_id": "pay_10",
                "signature": signed("order_10", "pay_10"),
                "form_data": {
                    "registration": "L-301",
                    "name": "Asha",
                    "seat": "A3",
                    "shift": "6:30 AM to 2 PM",
                    "fee": 1200.0,
                    "online": 1200.0,
                    "total_money": 1200.0
                }
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Paid");
    assert_eq!(body["data"]["payment_detail"]["order_id"], "order_10");
    assert_eq!(body["data"]["payment_detail"]["payment_id"], "pay_10");
}

#[tokio::test]
async fn tampered_signature_fails_closed_with_zero_writes() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            "POST",
            "/library/verifyFeePayment",
            Some(json!({
                "order_id": "order_11",
                "payment_id": "pay_11",
                "signature": "deadbeefdeadbeef",
                "form_data": {
                    "registration": "L-302",
                    "fee": 900.0
                }
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_SIGNATURE");

    // No booking was written.
    let (_, body) = app
        .request("GET", "/admin_library/getBookingData", None)
        .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    // And the ledger saw nothing either.
    let member = app
        .state
        .members
        .find_by_registration("L-302")
        .await
        .unwrap();
    assert!(member.is_none());
}

#[tokio::test]
async fn signature_for_another_order_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(
            "POST",
            "/library/verifyFeePayment",
            Some(json!({
                "order_id": "order_12",
                "payment_id": "pay_12",
                "signature": signed("order_99", "pay_12"),
                "form_data": { "registration": "L-303" }
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
