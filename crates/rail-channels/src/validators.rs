//! # Default Validators
//!
//! Pure rule bodies over customer and payment data. They run before any side
//! effect and never perform I/O.

use rail_core::{
    CustomerData, PaymentData, PaymentError, PaymentMethod, PaymentResult, Validator,
};

/// Default customer validation: a customer must have a usable display name.
///
/// Contact-channel presence is deliberately NOT checked here; that rule
/// belongs to the builder's notifier selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerValidator;

impl Validator<CustomerData> for CustomerValidator {
    fn validate(&self, customer: &CustomerData) -> PaymentResult<()> {
        if customer.name.trim().is_empty() {
            return Err(PaymentError::InvalidCustomer {
                reason: "customer name is empty".into(),
            });
        }
        Ok(())
    }
}

/// Default payment validation: positive amount plus the method-specific
/// fields the selected channel cannot work without.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentDataValidator;

impl Validator<PaymentData> for PaymentDataValidator {
    fn validate(&self, payment: &PaymentData) -> PaymentResult<()> {
        if payment.amount.amount <= 0 {
            return Err(PaymentError::InvalidPayment {
                reason: format!("amount must be positive, got {}", payment.amount.amount),
            });
        }

        match &payment.method {
            PaymentMethod::Card { token } | PaymentMethod::Recurring { token, .. } => {
                if token.trim().is_empty() {
                    return Err(PaymentError::InvalidPayment {
                        reason: "card token is empty".into(),
                    });
                }
            }
            PaymentMethod::Refund { reference } => {
                if reference.trim().is_empty() {
                    return Err(PaymentError::InvalidPayment {
                        reason: "refund reference is empty".into(),
                    });
                }
            }
            PaymentMethod::Offline => {}
        }

        Ok(())
    }
}
