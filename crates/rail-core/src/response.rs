//! # Payment Response
//!
//! The immutable outcome of a processing attempt. A response is created once
//! by a processor and passed through the notifier and the transaction log
//! without modification.

use crate::payment::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a processing attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Success,
    Failure,
}

/// Result of a processed payment, refund, or recurring setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Outcome
    pub status: PaymentStatus,

    /// Amount moved (pass-through from the request)
    pub amount: Price,

    /// Provider transaction id, when the channel assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Human-readable outcome message
    pub message: String,

    /// When the channel produced this response
    pub processed_at: DateTime<Utc>,
}

impl PaymentResponse {
    /// A successful response
    pub fn success(
        amount: Price,
        transaction_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: PaymentStatus::Success,
            amount,
            transaction_id,
            message: message.into(),
            processed_at: Utc::now(),
        }
    }

    /// A failed response (the channel reported a decline without raising)
    pub fn failure(amount: Price, message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Failure,
            amount,
            transaction_id: None,
            message: message.into(),
            processed_at: Utc::now(),
        }
    }

    /// True if the attempt succeeded
    pub fn is_success(&self) -> bool {
        matches!(self.status, PaymentStatus::Success)
    }
}
