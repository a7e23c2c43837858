//! # Transaction Logger
//!
//! Default transaction log sink. Emits one structured record per completed
//! pipeline through tracing; durable sinks implement the same trait.

use async_trait::async_trait;
use rail_core::{
    CustomerData, PaymentData, PaymentResponse, PaymentResult, TransactionLogger,
};
use tracing::info;

/// Structured-log transaction sink
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTransactionLogger;

#[async_trait]
impl TransactionLogger for ConsoleTransactionLogger {
    async fn log(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
        response: &PaymentResponse,
    ) -> PaymentResult<()> {
        info!(
            target: "payrail::transactions",
            customer = %customer.name,
            payment_id = %payment.id,
            method = %payment.method,
            amount = %payment.amount.display(),
            status = ?response.status,
            transaction_id = response.transaction_id.as_deref().unwrap_or("-"),
            message = %response.message,
            "transaction recorded"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_core::{Currency, PaymentMethod, Price};

    #[tokio::test]
    async fn test_log_never_fails() {
        let customer = CustomerData::new("Ada").with_email("ada@example.com");
        let payment = PaymentData::new(Price::new(5.0, Currency::USD), PaymentMethod::Offline);
        let response = PaymentResponse::success(payment.amount, None, "ok");

        assert!(ConsoleTransactionLogger
            .log(&customer, &payment, &response)
            .await
            .is_ok());
    }
}
