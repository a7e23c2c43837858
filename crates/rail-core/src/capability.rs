//! # Capability Traits
//!
//! The pluggable seams of the payrail facade. Each collaborator the
//! orchestrator depends on is a capability trait with one or more concrete
//! implementations; the orchestrator only ever holds the trait object.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       PaymentService                         │
//! │  PaymentProcessor │ Notifier │ TransactionLogger │ Validator │
//! └──────────────────────────────────────────────────────────────┘
//!          ▲                ▲
//!  ┌───────┴────────┐ ┌─────┴────────┐
//!  │ CardGateway    │ │ EmailNotifier│   ... concrete channels live in
//!  │ OfflineProc.   │ │ SmsNotifier  │       the rail-channels crate
//!  └────────────────┘ └──────────────┘
//! ```

use crate::customer::CustomerData;
use crate::error::PaymentResult;
use crate::payment::PaymentData;
use crate::response::PaymentResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// One-shot payment processing capability.
///
/// Implementations move the money (or pretend to, in stub channels) and
/// produce a `PaymentResponse`. A declined charge may be reported either as
/// a `Failure` response or as an error; the orchestrator treats both as
/// terminal for the call.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Process a single payment attempt.
    async fn process_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse>;

    /// Channel name (for logging and error context).
    fn channel_name(&self) -> &'static str;
}

/// Refund capability for channels that can reverse a captured charge.
#[async_trait]
pub trait RefundProcessor: Send + Sync {
    /// Refund the charge referenced by `payment`.
    async fn refund(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse>;
}

/// Recurring-billing capability for channels that support schedules.
#[async_trait]
pub trait RecurringPaymentProcessor: Send + Sync {
    /// Register the recurring schedule carried by `payment`.
    async fn schedule(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse>;
}

/// Customer notification capability (email, SMS, ...).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell the customer about the outcome of their payment.
    async fn notify(
        &self,
        customer: &CustomerData,
        response: &PaymentResponse,
    ) -> PaymentResult<()>;

    /// Channel name (for logging and error context).
    fn channel(&self) -> &'static str;
}

/// Transaction log sink.
#[async_trait]
pub trait TransactionLogger: Send + Sync {
    /// Record the full request/response pair.
    async fn log(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
        response: &PaymentResponse,
    ) -> PaymentResult<()>;
}

/// Pure validation capability over a single input type.
///
/// Validators run before any side effect and must not perform I/O. A failing
/// validator returns the error variant matching its subject
/// (`InvalidCustomer` or `InvalidPayment`) with the reason attached.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, subject: &T) -> PaymentResult<()>;
}

impl std::fmt::Debug for dyn PaymentProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentProcessor")
            .field("channel", &self.channel_name())
            .finish()
    }
}

impl std::fmt::Debug for dyn RefundProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RefundProcessor")
    }
}

impl std::fmt::Debug for dyn RecurringPaymentProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RecurringPaymentProcessor")
    }
}

/// Type alias for a shared payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;

/// Type alias for a shared refund processor
pub type BoxedRefundProcessor = Arc<dyn RefundProcessor>;

/// Type alias for a shared recurring processor
pub type BoxedRecurringProcessor = Arc<dyn RecurringPaymentProcessor>;

/// Type alias for a shared notifier
pub type BoxedNotifier = Arc<dyn Notifier>;

/// Type alias for a shared transaction logger
pub type BoxedTransactionLogger = Arc<dyn TransactionLogger>;

/// Type alias for a shared customer validator
pub type BoxedCustomerValidator = Arc<dyn Validator<CustomerData>>;

/// Type alias for a shared payment validator
pub type BoxedPaymentValidator = Arc<dyn Validator<PaymentData>>;
