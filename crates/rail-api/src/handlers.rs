//! # Request Handlers
//!
//! Axum request handlers for the payrail API. Each request assembles a
//! `PaymentService` through the builder, selecting the processing channel
//! from the payment shape and the notifier from the customer's contact
//! channels, then runs the pipeline and maps the outcome to HTTP.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rail_channels::{CardGatewayProcessor, PaymentServiceBuilder};
use rail_core::{
    CustomerData, PaymentData, PaymentError, PaymentResponse, PaymentResult, PaymentService,
    PaymentStatus, Price,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body shared by the payment, refund, and subscription endpoints
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Who is paying
    pub customer: CustomerData,
    /// What to move
    pub payment: PaymentData,
}

/// Outcome returned to the API caller
#[derive(Debug, Serialize)]
pub struct PaymentReceipt {
    /// success or failure as reported by the channel
    pub status: PaymentStatus,
    /// Amount moved
    pub amount: Price,
    /// Channel transaction id, when assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Human-readable outcome
    pub message: String,
    /// Processing timestamp (RFC 3339)
    pub processed_at: String,
}

impl From<PaymentResponse> for PaymentReceipt {
    fn from(response: PaymentResponse) -> Self {
        Self {
            status: response.status,
            amount: response.amount,
            transaction_id: response.transaction_id,
            message: response.message,
            processed_at: response.processed_at.to_rfc3339(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// True when the failure happened after the money already moved
    /// (notification or logging), so the payment itself must not be retried.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub post_payment: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            post_payment: false,
        }
    }
}

fn payment_error_to_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse {
        error: err.to_string(),
        code,
        post_payment: err.is_post_payment(),
    };
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "payrail",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Process a one-shot payment
#[instrument(skip(state, request), fields(method = %request.payment.method))]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentReceipt>, (StatusCode, Json<ErrorResponse>)> {
    let service =
        assemble_payment_service(&state, &request).map_err(payment_error_to_response)?;

    let response = service
        .process_payment(&request.customer, &request.payment)
        .await
        .map_err(|e| {
            error!("payment pipeline failed: {}", e);
            payment_error_to_response(e)
        })?;

    Ok(Json(response.into()))
}

/// Refund a previously captured charge
#[instrument(skip(state, request), fields(method = %request.payment.method))]
pub async fn create_refund(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentReceipt>, (StatusCode, Json<ErrorResponse>)> {
    let service = assemble_refund_service(&state, &request).map_err(payment_error_to_response)?;

    let response = service
        .process_refund(&request.customer, &request.payment)
        .await
        .map_err(|e| {
            error!("refund pipeline failed: {}", e);
            payment_error_to_response(e)
        })?;

    Ok(Json(response.into()))
}

/// Register a recurring billing schedule
#[instrument(skip(state, request), fields(method = %request.payment.method))]
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentReceipt>, (StatusCode, Json<ErrorResponse>)> {
    let service =
        assemble_recurring_service(&state, &request).map_err(payment_error_to_response)?;

    let response = service
        .setup_recurring(&request.customer, &request.payment)
        .await
        .map_err(|e| {
            error!("recurring setup failed: {}", e);
            payment_error_to_response(e)
        })?;

    Ok(Json(response.into()))
}

// =============================================================================
// Service assembly
// =============================================================================

/// Build a service for a one-shot payment: processor selected from the
/// payment shape, notifier from the customer's contact channels.
fn assemble_payment_service(
    state: &AppState,
    request: &PaymentRequest,
) -> PaymentResult<PaymentService> {
    PaymentServiceBuilder::with_settings(state.channels.clone())
        .set_logger()
        .set_customer_validator()
        .set_payment_validator()
        .set_payment_processor(&request.payment)?
        .set_notifier(&request.customer)?
        .build()
}

/// Build a service for a refund. The card gateway backs the required
/// one-shot slot as well as the refund capability.
fn assemble_refund_service(
    state: &AppState,
    request: &PaymentRequest,
) -> PaymentResult<PaymentService> {
    PaymentServiceBuilder::with_settings(state.channels.clone())
        .set_logger()
        .set_customer_validator()
        .set_payment_validator()
        .with_payment_processor(Arc::new(CardGatewayProcessor::default()))
        .set_refund_processor(&request.payment)?
        .set_notifier(&request.customer)?
        .build()
}

/// Build a service for a recurring schedule registration.
fn assemble_recurring_service(
    state: &AppState,
    request: &PaymentRequest,
) -> PaymentResult<PaymentService> {
    PaymentServiceBuilder::with_settings(state.channels.clone())
        .set_logger()
        .set_customer_validator()
        .set_payment_validator()
        .with_payment_processor(Arc::new(CardGatewayProcessor::default()))
        .set_recurring_processor(&request.payment)?
        .set_notifier(&request.customer)?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
        assert!(!err.post_payment);
    }

    #[test]
    fn test_payment_error_conversion() {
        let err = PaymentError::InvalidPayment {
            reason: "amount must be positive".into(),
        };
        let (status, _json) = payment_error_to_response(err);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_post_payment_flag_survives_mapping() {
        let err = PaymentError::NotificationFailed {
            channel: "email".into(),
            reason: "smtp down".into(),
        };
        let (status, Json(body)) = payment_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.post_payment);
    }
}
