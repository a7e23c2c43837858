//! # Concrete Processors
//!
//! Stub processing channels. They log the attempt and return a canned
//! response with a generated transaction id; real gateway integrations plug
//! in behind the same traits. The card gateway handles one-shot charges,
//! refunds, and recurring schedules; the offline channel only settles
//! one-shot payments.

use async_trait::async_trait;
use rail_core::{
    CustomerData, PaymentData, PaymentMethod, PaymentProcessor, PaymentResponse, PaymentResult,
    RecurringPaymentProcessor, RefundProcessor,
};
use tracing::{info, instrument};
use uuid::Uuid;

/// Card gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Merchant account identifier at the gateway
    pub merchant_id: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `CARD_GATEWAY_MERCHANT_ID`; absent means the development
    /// merchant account.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            merchant_id: std::env::var("CARD_GATEWAY_MERCHANT_ID")
                .unwrap_or_else(|_| "payrail-dev".to_string()),
        }
    }

    /// Create config with an explicit merchant id (for testing)
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Card gateway channel.
///
/// Implements the one-shot, refund, and recurring capabilities, the way a
/// single provider account usually backs all three.
#[derive(Debug, Clone, Default)]
pub struct CardGatewayProcessor {
    config: GatewayConfig,
}

impl CardGatewayProcessor {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PaymentProcessor for CardGatewayProcessor {
    #[instrument(skip(self, customer, payment), fields(merchant = %self.config.merchant_id))]
    async fn process_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        info!(
            customer = %customer.name,
            amount = %payment.amount.display(),
            "charging card"
        );

        let transaction_id = format!("ch_{}", Uuid::new_v4().simple());
        Ok(PaymentResponse::success(
            payment.amount,
            Some(transaction_id),
            "card charge captured",
        ))
    }

    fn channel_name(&self) -> &'static str {
        "card-gateway"
    }
}

#[async_trait]
impl RefundProcessor for CardGatewayProcessor {
    #[instrument(skip(self, customer, payment), fields(merchant = %self.config.merchant_id))]
    async fn refund(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        let reference = match &payment.method {
            PaymentMethod::Refund { reference } => reference.as_str(),
            _ => "unknown",
        };

        info!(
            customer = %customer.name,
            reference,
            amount = %payment.amount.display(),
            "issuing refund"
        );

        let transaction_id = format!("rf_{}", Uuid::new_v4().simple());
        Ok(PaymentResponse::success(
            payment.amount,
            Some(transaction_id),
            format!("refund issued for {}", reference),
        ))
    }
}

#[async_trait]
impl RecurringPaymentProcessor for CardGatewayProcessor {
    #[instrument(skip(self, customer, payment), fields(merchant = %self.config.merchant_id))]
    async fn schedule(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        let interval = match &payment.method {
            PaymentMethod::Recurring { interval, .. } => interval.as_str(),
            _ => "unknown",
        };

        info!(
            customer = %customer.name,
            interval,
            amount = %payment.amount.display(),
            "registering recurring schedule"
        );

        let transaction_id = format!("sub_{}", Uuid::new_v4().simple());
        Ok(PaymentResponse::success(
            payment.amount,
            Some(transaction_id),
            format!("{} schedule registered", interval),
        ))
    }
}

/// Offline settlement channel (bank transfer, cash desk).
///
/// Always reports success with no transaction id; the settlement happens out
/// of band. Tests lean on this as fixture behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProcessor;

#[async_trait]
impl PaymentProcessor for OfflineProcessor {
    #[instrument(skip(self, customer, payment))]
    async fn process_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> PaymentResult<PaymentResponse> {
        info!(
            customer = %customer.name,
            amount = %payment.amount.display(),
            "recording offline payment"
        );

        Ok(PaymentResponse::success(
            payment.amount,
            None,
            "offline payment recorded",
        ))
    }

    fn channel_name(&self) -> &'static str {
        "offline"
    }
}
