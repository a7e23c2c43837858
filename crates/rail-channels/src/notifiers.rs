//! # Concrete Notifiers
//!
//! Email and SMS notification channels. Both are stub sinks that emit the
//! message through tracing; a production host swaps in real delivery behind
//! the same trait.

use crate::settings::ChannelSettings;
use async_trait::async_trait;
use rail_core::{CustomerData, Notifier, PaymentError, PaymentResponse, PaymentResult};
use tracing::{info, instrument};

/// Email notification channel
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    sender: String,
}

impl EmailNotifier {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    /// Construct from channel settings
    pub fn from_settings(settings: &ChannelSettings) -> Self {
        Self::new(settings.email_sender.clone())
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    #[instrument(skip(self, customer, response), fields(sender = %self.sender))]
    async fn notify(
        &self,
        customer: &CustomerData,
        response: &PaymentResponse,
    ) -> PaymentResult<()> {
        let recipient = customer.contact_info.email.as_deref().ok_or_else(|| {
            PaymentError::NotificationFailed {
                channel: self.channel().to_string(),
                reason: format!("customer {} has no email address", customer.name),
            }
        })?;

        info!(
            recipient,
            status = ?response.status,
            amount = %response.amount.display(),
            "sending payment receipt email"
        );

        Ok(())
    }

    fn channel(&self) -> &'static str {
        "email"
    }
}

/// SMS notification channel, delivering through a named gateway
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    gateway: String,
}

impl SmsNotifier {
    pub fn new(gateway: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
        }
    }

    /// Construct from channel settings
    pub fn from_settings(settings: &ChannelSettings) -> Self {
        Self::new(settings.sms_gateway.clone())
    }

    /// Gateway identifier this notifier delivers through
    pub fn gateway(&self) -> &str {
        &self.gateway
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    #[instrument(skip(self, customer, response), fields(gateway = %self.gateway))]
    async fn notify(
        &self,
        customer: &CustomerData,
        response: &PaymentResponse,
    ) -> PaymentResult<()> {
        let recipient = customer.contact_info.phone.as_deref().ok_or_else(|| {
            PaymentError::NotificationFailed {
                channel: self.channel().to_string(),
                reason: format!("customer {} has no phone number", customer.name),
            }
        })?;

        info!(
            recipient,
            status = ?response.status,
            amount = %response.amount.display(),
            "handing payment SMS to gateway"
        );

        Ok(())
    }

    fn channel(&self) -> &'static str {
        "sms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_core::{Currency, Price};

    fn receipt() -> PaymentResponse {
        PaymentResponse::success(Price::new(10.0, Currency::USD), Some("ch_1".into()), "ok")
    }

    #[tokio::test]
    async fn test_email_requires_address() {
        let notifier = EmailNotifier::new("receipts@test");
        let customer = CustomerData::new("No Email").with_phone("555-1234");

        let err = notifier.notify(&customer, &receipt()).await.unwrap_err();
        assert!(matches!(err, PaymentError::NotificationFailed { .. }));
    }

    #[tokio::test]
    async fn test_email_delivers() {
        let notifier = EmailNotifier::new("receipts@test");
        let customer = CustomerData::new("Ada").with_email("ada@example.com");

        assert!(notifier.notify(&customer, &receipt()).await.is_ok());
    }

    #[tokio::test]
    async fn test_sms_requires_phone() {
        let notifier = SmsNotifier::new("mercury-sms");
        let customer = CustomerData::new("No Phone").with_email("a@b.com");

        let err = notifier.notify(&customer, &receipt()).await.unwrap_err();
        assert!(matches!(err, PaymentError::NotificationFailed { .. }));
    }

    #[test]
    fn test_from_settings() {
        let settings = ChannelSettings::default();
        let sms = SmsNotifier::from_settings(&settings);
        assert_eq!(sms.gateway(), crate::settings::DEFAULT_SMS_GATEWAY);
    }
}
