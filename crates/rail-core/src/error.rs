//! # Payment Error Types
//!
//! Typed error handling for the payrail facade. All operations return
//! `Result<T, PaymentError>`. Assembly-time errors (builder, factory,
//! configuration) must be resolved before a usable service exists; per-call
//! errors abort only that call and never corrupt builder or service state.

use thiserror::Error;

/// Core error type for all payrail operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Builder finished with one or more required slots empty
    #[error("incomplete service, missing dependencies: {missing:?}")]
    IncompleteService { missing: Vec<&'static str> },

    /// No processor mapping exists for this payment shape
    #[error("unsupported payment method: {method}")]
    UnsupportedMethod { method: String },

    /// Customer has neither email nor phone, no notifier can be selected
    #[error("no notification channel available for customer")]
    NoNotificationChannel,

    /// Customer data rejected by the customer validator
    #[error("invalid customer data: {reason}")]
    InvalidCustomer { reason: String },

    /// Payment data rejected by the payment validator
    #[error("invalid payment data: {reason}")]
    InvalidPayment { reason: String },

    /// The processing channel raised while moving the money
    #[error("payment processing failed [{channel}]: {reason}")]
    ProcessingFailed { channel: String, reason: String },

    /// The notifier raised after the payment was already captured
    #[error("notification failed [{channel}]: {reason}")]
    NotificationFailed { channel: String, reason: String },

    /// The transaction log sink raised after the payment was captured
    #[error("transaction logging failed: {reason}")]
    LoggingFailed { reason: String },

    /// Operation requires an optional capability the service was built without
    #[error("capability not configured on this service: {capability}")]
    CapabilityNotConfigured { capability: &'static str },

    /// Configuration errors (missing env vars, unparseable config file)
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::IncompleteService { .. } => 500,
            PaymentError::UnsupportedMethod { .. } => 400,
            PaymentError::NoNotificationChannel => 422,
            PaymentError::InvalidCustomer { .. } => 422,
            PaymentError::InvalidPayment { .. } => 422,
            PaymentError::ProcessingFailed { .. } => 402,
            PaymentError::NotificationFailed { .. } => 502,
            PaymentError::LoggingFailed { .. } => 500,
            PaymentError::CapabilityNotConfigured { .. } => 501,
            PaymentError::Configuration(_) => 500,
        }
    }

    /// True if the money already moved when this error was raised.
    ///
    /// Callers use this to report the failure without treating the payment
    /// itself as failed.
    pub fn is_post_payment(&self) -> bool {
        matches!(
            self,
            PaymentError::NotificationFailed { .. } | PaymentError::LoggingFailed { .. }
        )
    }
}

/// Result type alias for payrail operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidPayment {
                reason: "amount must be positive".into()
            }
            .status_code(),
            422
        );
        assert_eq!(
            PaymentError::UnsupportedMethod {
                method: "refund".into()
            }
            .status_code(),
            400
        );
        assert_eq!(
            PaymentError::ProcessingFailed {
                channel: "card-gateway".into(),
                reason: "declined".into()
            }
            .status_code(),
            402
        );
    }

    #[test]
    fn test_post_payment_severity() {
        assert!(PaymentError::NotificationFailed {
            channel: "email".into(),
            reason: "smtp down".into()
        }
        .is_post_payment());
        assert!(PaymentError::LoggingFailed {
            reason: "disk full".into()
        }
        .is_post_payment());
        assert!(!PaymentError::ProcessingFailed {
            channel: "card-gateway".into(),
            reason: "declined".into()
        }
        .is_post_payment());
    }

    #[test]
    fn test_missing_slots_in_message() {
        let err = PaymentError::IncompleteService {
            missing: vec!["notifier", "logger"],
        };
        let message = err.to_string();
        assert!(message.contains("notifier"));
        assert!(message.contains("logger"));
    }
}
