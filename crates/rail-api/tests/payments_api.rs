//! End-to-end HTTP tests for the payrail API.
//!
//! Each request assembles a fresh service through the builder, so these
//! exercise the factory dispatch, notifier selection, and pipeline semantics
//! through the public HTTP surface.

use axum_test::TestServer;
use rail_api::{create_router, AppConfig, AppState};
use rail_channels::ChannelSettings;
use serde_json::{json, Value};

fn server() -> TestServer {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
    };
    let state = AppState::with_parts(config, ChannelSettings::default());
    TestServer::new(create_router(state)).unwrap()
}

fn card_request() -> Value {
    json!({
        "customer": {
            "name": "Ada Lovelace",
            "contact_info": { "email": "ada@example.com" }
        },
        "payment": {
            "amount": { "amount": 10000, "currency": "usd" },
            "method": "card",
            "token": "tok_visa"
        }
    })
}

#[tokio::test]
async fn health_reports_service_name() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["service"], "payrail");
}

#[tokio::test]
async fn card_payment_succeeds() {
    let server = server();

    let response = server.post("/api/v1/payments").json(&card_request()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert!(body["transaction_id"]
        .as_str()
        .unwrap()
        .starts_with("ch_"));
    assert_eq!(body["amount"]["amount"], 10000);
}

#[tokio::test]
async fn offline_payment_has_no_transaction_id() {
    let server = server();

    let response = server
        .post("/api/v1/payments")
        .json(&json!({
            "customer": {
                "name": "Grace Hopper",
                "contact_info": { "phone": "555-9876" }
            },
            "payment": {
                "amount": { "amount": 2500, "currency": "eur" },
                "method": "offline"
            }
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert!(body.get("transaction_id").is_none());
}

#[tokio::test]
async fn negative_amount_is_rejected_before_processing() {
    let server = server();

    let response = server
        .post("/api/v1/payments")
        .json(&json!({
            "customer": {
                "name": "Ada Lovelace",
                "contact_info": { "email": "ada@example.com" }
            },
            "payment": {
                "amount": { "amount": -500, "currency": "usd" },
                "method": "offline"
            }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["code"], 422);
    assert!(body["error"].as_str().unwrap().contains("invalid payment"));
}

#[tokio::test]
async fn refund_shape_is_refused_on_the_payment_endpoint() {
    let server = server();

    let response = server
        .post("/api/v1/payments")
        .json(&json!({
            "customer": {
                "name": "Ada Lovelace",
                "contact_info": { "email": "ada@example.com" }
            },
            "payment": {
                "amount": { "amount": 10000, "currency": "usd" },
                "method": "refund",
                "reference": "ch_abc123"
            }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("unsupported payment method"));
}

#[tokio::test]
async fn unreachable_customer_cannot_be_served() {
    let server = server();

    let response = server
        .post("/api/v1/payments")
        .json(&json!({
            "customer": { "name": "Hermit" },
            "payment": {
                "amount": { "amount": 100, "currency": "usd" },
                "method": "offline"
            }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("no notification channel"));
}

#[tokio::test]
async fn refund_endpoint_issues_refund() {
    let server = server();

    let response = server
        .post("/api/v1/refunds")
        .json(&json!({
            "customer": {
                "name": "Ada Lovelace",
                "contact_info": { "email": "ada@example.com" }
            },
            "payment": {
                "amount": { "amount": 10000, "currency": "usd" },
                "method": "refund",
                "reference": "ch_abc123"
            }
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["transaction_id"]
        .as_str()
        .unwrap()
        .starts_with("rf_"));
    assert!(body["message"].as_str().unwrap().contains("ch_abc123"));
}

#[tokio::test]
async fn subscription_endpoint_registers_schedule() {
    let server = server();

    let response = server
        .post("/api/v1/subscriptions")
        .json(&json!({
            "customer": {
                "name": "Ada Lovelace",
                "contact_info": { "email": "ada@example.com" }
            },
            "payment": {
                "amount": { "amount": 999, "currency": "usd" },
                "method": "recurring",
                "token": "tok_visa",
                "interval": "monthly"
            }
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["transaction_id"]
        .as_str()
        .unwrap()
        .starts_with("sub_"));
}

#[tokio::test]
async fn unknown_method_fails_deserialization() {
    let server = server();

    let response = server
        .post("/api/v1/payments")
        .json(&json!({
            "customer": {
                "name": "Ada Lovelace",
                "contact_info": { "email": "ada@example.com" }
            },
            "payment": {
                "amount": { "amount": 100, "currency": "usd" },
                "method": "bitcoin"
            }
        }))
        .await;

    assert!(response.status_code().is_client_error());
}
