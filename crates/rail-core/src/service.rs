//! # Payment Service
//!
//! The orchestrator. Runs the fixed pipeline
//! validate → process → notify → log for one request at a time,
//! short-circuiting on the first failing stage. The service holds only
//! capability trait objects and owns no other state; it is immutable once
//! constructed and safe to share across calls.

use crate::capability::{
    BoxedCustomerValidator, BoxedNotifier, BoxedPaymentProcessor, BoxedPaymentValidator,
    BoxedRecurringProcessor, BoxedRefundProcessor, BoxedTransactionLogger,
};
use crate::customer::CustomerData;
use crate::error::{PaymentError, PaymentResult};
use crate::payment::PaymentData;
use crate::response::PaymentResponse;
use tracing::{debug, info, instrument, warn};

/// Pipeline stage, for structured log fields
#[derive(Debug, Clone, Copy)]
enum Stage {
    Validate,
    Process,
    Notify,
    Log,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::Validate => "validate",
            Stage::Process => "process",
            Stage::Notify => "notify",
            Stage::Log => "log",
        }
    }
}

/// Attribute a processor failure to its channel, keeping the channel's own
/// reason.
fn wrap_processing(err: PaymentError, channel: &str) -> PaymentError {
    match err {
        wrapped @ PaymentError::ProcessingFailed { .. } => wrapped,
        other => PaymentError::ProcessingFailed {
            channel: channel.to_string(),
            reason: other.to_string(),
        },
    }
}

/// A fully-assembled payment service.
///
/// Construct one through `PaymentServiceBuilder` (rail-channels) or directly
/// via [`PaymentService::new`] when the host wires its own collaborators.
pub struct PaymentService {
    payment_processor: BoxedPaymentProcessor,
    notifier: BoxedNotifier,
    customer_validator: BoxedCustomerValidator,
    payment_validator: BoxedPaymentValidator,
    logger: BoxedTransactionLogger,
    refund_processor: Option<BoxedRefundProcessor>,
    recurring_processor: Option<BoxedRecurringProcessor>,
}

impl std::fmt::Debug for PaymentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentService")
            .field("channel", &self.payment_processor.channel_name())
            .field("supports_refunds", &self.supports_refunds())
            .field("supports_recurring", &self.supports_recurring())
            .finish()
    }
}

impl PaymentService {
    /// Assemble a service from the five required capabilities.
    pub fn new(
        payment_processor: BoxedPaymentProcessor,
        notifier: BoxedNotifier,
        customer_validator: BoxedCustomerValidator,
        payment_validator: BoxedPaymentValidator,
        logger: BoxedTransactionLogger,
    ) -> Self {
        Self {
            payment_processor,
            notifier,
            customer_validator,
            payment_validator,
            logger,
            refund_processor: None,
            recurring_processor: None,
        }
    }

    /// Builder: attach the optional refund capability
    pub fn with_refund_processor(mut self, processor: BoxedRefundProcessor) -> Self {
        self.refund_processor = Some(processor);
        self
    }

    /// Builder: attach the optional recurring-billing capability
    pub fn with_recurring_processor(mut self, processor: BoxedRecurringProcessor) -> Self {
        self.recurring_processor = Some(processor);
        self
    }

    /// Whether this service can process refunds
    pub fn supports_refunds(&self) -> bool {
        self.refund_processor.is_some()
    }

    /// Whether this service can register recurring schedules
    pub fn supports_recurring(&self) -> bool {
        self.recurring_processor.is_some()
    }

    /// Process one payment request.
    ///
    /// Exactly one processor invocation per call, never retried. A failure in
    /// validation or processing stops the pipeline before notification and
    /// logging; a notification failure is surfaced after the money moved; a
    /// logging failure is downgraded to a warning so it cannot mask a
    /// captured payment.
    #[instrument(
        skip(self, customer, payment),
        fields(payment_id = %payment.id, method = %payment.method)
    )]
    pub async fn process_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        self.validate(customer, payment)?;

        debug!(
            stage = Stage::Process.as_str(),
            channel = self.payment_processor.channel_name(),
            amount = %payment.amount.display(),
            "dispatching to processor"
        );

        let response = self
            .payment_processor
            .process_payment(customer, payment)
            .await
            .map_err(|e| wrap_processing(e, self.payment_processor.channel_name()))?;

        self.deliver_outcome(customer, payment, response).await
    }

    /// Refund a previously captured charge.
    ///
    /// Requires the optional refund capability; otherwise fails with
    /// `CapabilityNotConfigured` before any side effect.
    #[instrument(
        skip(self, customer, payment),
        fields(payment_id = %payment.id, method = %payment.method)
    )]
    pub async fn process_refund(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        let refund_processor =
            self.refund_processor
                .as_ref()
                .ok_or(PaymentError::CapabilityNotConfigured {
                    capability: "refund_processor",
                })?;

        self.validate(customer, payment)?;

        debug!(stage = Stage::Process.as_str(), "dispatching refund");

        let response = refund_processor
            .refund(customer, payment)
            .await
            .map_err(|e| wrap_processing(e, "refund"))?;

        self.deliver_outcome(customer, payment, response).await
    }

    /// Register a recurring billing schedule.
    ///
    /// Requires the optional recurring capability.
    #[instrument(
        skip(self, customer, payment),
        fields(payment_id = %payment.id, method = %payment.method)
    )]
    pub async fn setup_recurring(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        let recurring_processor =
            self.recurring_processor
                .as_ref()
                .ok_or(PaymentError::CapabilityNotConfigured {
                    capability: "recurring_processor",
                })?;

        self.validate(customer, payment)?;

        debug!(stage = Stage::Process.as_str(), "dispatching recurring setup");

        let response = recurring_processor
            .schedule(customer, payment)
            .await
            .map_err(|e| wrap_processing(e, "recurring"))?;

        self.deliver_outcome(customer, payment, response).await
    }

    /// Run both validators. Zero side effects have occurred if this fails.
    fn validate(&self, customer: &CustomerData, payment: &PaymentData) -> PaymentResult<()> {
        debug!(stage = Stage::Validate.as_str(), "validating request");
        self.customer_validator.validate(customer)?;
        self.payment_validator.validate(payment)?;
        Ok(())
    }

    /// Post-processing tail shared by payments, refunds, and recurring
    /// setups: notify the customer, then record the transaction.
    ///
    /// The money has already moved when this runs. Notification failure is
    /// surfaced to the caller; log failure only warns.
    async fn deliver_outcome(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
        response: PaymentResponse,
    ) -> PaymentResult<PaymentResponse> {
        debug!(
            stage = Stage::Notify.as_str(),
            channel = self.notifier.channel(),
            "notifying customer"
        );

        self.notifier
            .notify(customer, &response)
            .await
            .map_err(|e| match e {
                wrapped @ PaymentError::NotificationFailed { .. } => wrapped,
                other => PaymentError::NotificationFailed {
                    channel: self.notifier.channel().to_string(),
                    reason: other.to_string(),
                },
            })?;

        debug!(stage = Stage::Log.as_str(), "recording transaction");

        if let Err(e) = self.logger.log(customer, payment, &response).await {
            warn!(error = %e, "transaction log write failed, payment result preserved");
        }

        info!(
            status = ?response.status,
            transaction_id = response.transaction_id.as_deref().unwrap_or("-"),
            "payment pipeline complete"
        );

        Ok(response)
    }
}
