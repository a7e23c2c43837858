//! # Payment Service Builder
//!
//! Stepwise assembly of a `PaymentService`. Slots are independently
//! settable, in any order, any number of times (last write wins);
//! completeness of the five required slots is checked once, at `build()`,
//! which reports every missing slot by name.
//!
//! The `set_*` methods install the crate's default collaborators (an
//! explicit constructor call each time, nothing global); the `with_*`
//! methods inject host-provided implementations behind the same slots.

use crate::factory::ProcessorFactory;
use crate::loggers::ConsoleTransactionLogger;
use crate::notifiers::{EmailNotifier, SmsNotifier};
use crate::settings::ChannelSettings;
use crate::validators::{CustomerValidator, PaymentDataValidator};
use rail_core::{
    BoxedCustomerValidator, BoxedNotifier, BoxedPaymentProcessor, BoxedPaymentValidator,
    BoxedRecurringProcessor, BoxedRefundProcessor, BoxedTransactionLogger, CustomerData,
    PaymentData, PaymentError, PaymentResult, PaymentService,
};
use std::sync::Arc;

/// Required slot names, in the order `build()` reports them
const REQUIRED_SLOTS: [&str; 5] = [
    "payment_processor",
    "notifier",
    "customer_validator",
    "payment_validator",
    "logger",
];

/// Mutable accumulator for the service's capability slots
#[derive(Default)]
pub struct PaymentServiceBuilder {
    settings: ChannelSettings,
    payment_processor: Option<BoxedPaymentProcessor>,
    notifier: Option<BoxedNotifier>,
    customer_validator: Option<BoxedCustomerValidator>,
    payment_validator: Option<BoxedPaymentValidator>,
    logger: Option<BoxedTransactionLogger>,
    refund_processor: Option<BoxedRefundProcessor>,
    recurring_processor: Option<BoxedRecurringProcessor>,
}

impl std::fmt::Debug for PaymentServiceBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentServiceBuilder")
            .field("payment_processor", &self.payment_processor.is_some())
            .field("notifier", &self.notifier.is_some())
            .field("customer_validator", &self.customer_validator.is_some())
            .field("payment_validator", &self.payment_validator.is_some())
            .field("logger", &self.logger.is_some())
            .field("refund_processor", &self.refund_processor.is_some())
            .field("recurring_processor", &self.recurring_processor.is_some())
            .finish()
    }
}

impl PaymentServiceBuilder {
    /// Empty builder with default channel settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder with explicit channel settings (e.g. loaded from
    /// `config/channels.toml`)
    pub fn with_settings(settings: ChannelSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Install the default transaction logger
    pub fn set_logger(mut self) -> Self {
        self.logger = Some(Arc::new(ConsoleTransactionLogger));
        self
    }

    /// Install the default payment validator
    pub fn set_payment_validator(mut self) -> Self {
        self.payment_validator = Some(Arc::new(PaymentDataValidator));
        self
    }

    /// Install the default customer validator
    pub fn set_customer_validator(mut self) -> Self {
        self.customer_validator = Some(Arc::new(CustomerValidator));
        self
    }

    /// Select and install the processor matching `payment`'s method.
    ///
    /// Propagates `UnsupportedMethod` when the factory has no mapping for
    /// the shape.
    pub fn set_payment_processor(mut self, payment: &PaymentData) -> PaymentResult<Self> {
        self.payment_processor = Some(ProcessorFactory::create_payment_processor(payment)?);
        Ok(self)
    }

    /// Select and install the refund channel matching `payment`'s method
    pub fn set_refund_processor(mut self, payment: &PaymentData) -> PaymentResult<Self> {
        self.refund_processor = Some(ProcessorFactory::create_refund_processor(payment)?);
        Ok(self)
    }

    /// Select and install the recurring channel matching `payment`'s method
    pub fn set_recurring_processor(mut self, payment: &PaymentData) -> PaymentResult<Self> {
        self.recurring_processor = Some(ProcessorFactory::create_recurring_processor(payment)?);
        Ok(self)
    }

    /// Select and install a notifier from the customer's contact channels.
    ///
    /// Email takes strict precedence over phone when both are present; this
    /// tie-break is deliberate. Fails with `NoNotificationChannel` when the
    /// customer is unreachable.
    pub fn set_notifier(mut self, customer: &CustomerData) -> PaymentResult<Self> {
        if customer.contact_info.email.is_some() {
            self.notifier = Some(Arc::new(EmailNotifier::from_settings(&self.settings)));
            return Ok(self);
        }
        if customer.contact_info.phone.is_some() {
            self.notifier = Some(Arc::new(SmsNotifier::from_settings(&self.settings)));
            return Ok(self);
        }

        Err(PaymentError::NoNotificationChannel)
    }

    /// Inject a host-provided processor
    pub fn with_payment_processor(mut self, processor: BoxedPaymentProcessor) -> Self {
        self.payment_processor = Some(processor);
        self
    }

    /// Inject a host-provided notifier
    pub fn with_notifier(mut self, notifier: BoxedNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Inject a host-provided customer validator
    pub fn with_customer_validator(mut self, validator: BoxedCustomerValidator) -> Self {
        self.customer_validator = Some(validator);
        self
    }

    /// Inject a host-provided payment validator
    pub fn with_payment_validator(mut self, validator: BoxedPaymentValidator) -> Self {
        self.payment_validator = Some(validator);
        self
    }

    /// Inject a host-provided transaction logger
    pub fn with_logger(mut self, logger: BoxedTransactionLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Inject a host-provided refund processor
    pub fn with_refund_processor(mut self, processor: BoxedRefundProcessor) -> Self {
        self.refund_processor = Some(processor);
        self
    }

    /// Inject a host-provided recurring processor
    pub fn with_recurring_processor(mut self, processor: BoxedRecurringProcessor) -> Self {
        self.recurring_processor = Some(processor);
        self
    }

    /// Names of the required slots still missing, in declaration order
    fn missing_slots(&self) -> Vec<&'static str> {
        let filled = [
            self.payment_processor.is_some(),
            self.notifier.is_some(),
            self.customer_validator.is_some(),
            self.payment_validator.is_some(),
            self.logger.is_some(),
        ];

        REQUIRED_SLOTS
            .iter()
            .zip(filled)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Snapshot the slots into an immutable `PaymentService`.
    ///
    /// Fails with `IncompleteService` listing every missing required slot.
    /// The builder keeps its slots and may be reused or reconfigured
    /// afterward.
    pub fn build(&self) -> PaymentResult<PaymentService> {
        match (
            self.payment_processor.clone(),
            self.notifier.clone(),
            self.customer_validator.clone(),
            self.payment_validator.clone(),
            self.logger.clone(),
        ) {
            (
                Some(payment_processor),
                Some(notifier),
                Some(customer_validator),
                Some(payment_validator),
                Some(logger),
            ) => {
                let mut service = PaymentService::new(
                    payment_processor,
                    notifier,
                    customer_validator,
                    payment_validator,
                    logger,
                );

                if let Some(refund) = self.refund_processor.clone() {
                    service = service.with_refund_processor(refund);
                }
                if let Some(recurring) = self.recurring_processor.clone() {
                    service = service.with_recurring_processor(recurring);
                }

                Ok(service)
            }
            _ => Err(PaymentError::IncompleteService {
                missing: self.missing_slots(),
            }),
        }
    }
}
