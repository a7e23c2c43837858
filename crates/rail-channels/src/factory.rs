//! # Processor Factory
//!
//! Pure selection of a concrete processing channel from the shape of a
//! payment request. The mapping is a closed match over `PaymentMethod` —
//! adding a variant is a compile-checked change here, and no entry point
//! ever falls back to a default channel.

use crate::processors::{CardGatewayProcessor, OfflineProcessor};
use rail_core::{
    BoxedPaymentProcessor, BoxedRecurringProcessor, BoxedRefundProcessor, PaymentData,
    PaymentError, PaymentMethod, PaymentResult,
};
use std::sync::Arc;

/// Selects concrete processors from payment data
pub struct ProcessorFactory;

impl ProcessorFactory {
    /// Select the one-shot processing channel for `payment`.
    ///
    /// `Refund` and `Recurring` shapes are refused here; they go through
    /// their own entry points below.
    pub fn create_payment_processor(payment: &PaymentData) -> PaymentResult<BoxedPaymentProcessor> {
        match &payment.method {
            PaymentMethod::Card { .. } => Ok(Arc::new(CardGatewayProcessor::default())),
            PaymentMethod::Offline => Ok(Arc::new(OfflineProcessor)),
            other => Err(PaymentError::UnsupportedMethod {
                method: other.as_str().to_string(),
            }),
        }
    }

    /// Select the refund channel for `payment`.
    pub fn create_refund_processor(payment: &PaymentData) -> PaymentResult<BoxedRefundProcessor> {
        match &payment.method {
            PaymentMethod::Refund { .. } => Ok(Arc::new(CardGatewayProcessor::default())),
            other => Err(PaymentError::UnsupportedMethod {
                method: other.as_str().to_string(),
            }),
        }
    }

    /// Select the recurring-billing channel for `payment`.
    pub fn create_recurring_processor(
        payment: &PaymentData,
    ) -> PaymentResult<BoxedRecurringProcessor> {
        match &payment.method {
            PaymentMethod::Recurring { .. } => Ok(Arc::new(CardGatewayProcessor::default())),
            other => Err(PaymentError::UnsupportedMethod {
                method: other.as_str().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_core::{Currency, Price, RecurringInterval};

    fn payment(method: PaymentMethod) -> PaymentData {
        PaymentData::new(Price::new(10.0, Currency::USD), method)
    }

    #[test]
    fn test_card_maps_to_gateway() {
        let processor = ProcessorFactory::create_payment_processor(&payment(
            PaymentMethod::Card {
                token: "tok_visa".into(),
            },
        ))
        .unwrap();

        assert_eq!(processor.channel_name(), "card-gateway");
    }

    #[test]
    fn test_offline_maps_to_offline() {
        let processor =
            ProcessorFactory::create_payment_processor(&payment(PaymentMethod::Offline)).unwrap();

        assert_eq!(processor.channel_name(), "offline");
    }

    #[test]
    fn test_selection_is_stable() {
        // Same discriminator, same channel, every time.
        for _ in 0..3 {
            let processor = ProcessorFactory::create_payment_processor(&payment(
                PaymentMethod::Card {
                    token: "tok_visa".into(),
                },
            ))
            .unwrap();
            assert_eq!(processor.channel_name(), "card-gateway");
        }
    }

    #[test]
    fn test_wrong_shape_is_refused_not_defaulted() {
        let refund_shaped = payment(PaymentMethod::Refund {
            reference: "ch_abc".into(),
        });
        let err = ProcessorFactory::create_payment_processor(&refund_shaped).unwrap_err();
        match err {
            PaymentError::UnsupportedMethod { method } => assert_eq!(method, "refund"),
            other => panic!("expected UnsupportedMethod, got {other:?}"),
        }

        let recurring_shaped = payment(PaymentMethod::Recurring {
            token: "tok_visa".into(),
            interval: RecurringInterval::Monthly,
        });
        assert!(ProcessorFactory::create_payment_processor(&recurring_shaped).is_err());
    }

    #[test]
    fn test_refund_entry_point() {
        assert!(ProcessorFactory::create_refund_processor(&payment(PaymentMethod::Refund {
            reference: "ch_abc".into(),
        }))
        .is_ok());

        let err = ProcessorFactory::create_refund_processor(&payment(PaymentMethod::Offline))
            .unwrap_err();
        assert!(matches!(err, PaymentError::UnsupportedMethod { .. }));
    }

    #[test]
    fn test_recurring_entry_point() {
        assert!(
            ProcessorFactory::create_recurring_processor(&payment(PaymentMethod::Recurring {
                token: "tok_visa".into(),
                interval: RecurringInterval::Yearly,
            }))
            .is_ok()
        );

        let err = ProcessorFactory::create_recurring_processor(&payment(PaymentMethod::Card {
            token: "tok_visa".into(),
        }))
        .unwrap_err();
        assert!(matches!(err, PaymentError::UnsupportedMethod { .. }));
    }
}
