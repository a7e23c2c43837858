//! # Payment Types
//!
//! Payment request types for the payrail facade. The `PaymentMethod`
//! discriminator on a request is what the processor factory dispatches on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    MXN,
}

impl Currency {
    /// Lowercase ISO code as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::JPY => "jpy",
            Currency::CAD => "cad",
            Currency::AUD => "aud",
            Currency::CHF => "chf",
            Currency::MXN => "mxn",
        }
    }

    /// Number of decimal places in the currency's major unit
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit (cents, etc.)
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Monetary amount in the smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (cents for USD)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_smallest_unit(amount),
            currency,
        }
    }

    /// Create a price from the smallest unit (cents)
    pub fn from_cents(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_smallest_unit(self.amount)
    }

    /// Format for display (e.g., "$10.00")
    pub fn display(&self) -> String {
        let symbol = match self.currency {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF ",
            Currency::MXN => "MX$",
        };
        if self.currency.decimal_places() == 0 {
            format!("{}{}", symbol, self.amount)
        } else {
            format!("{}{:.2}", symbol, self.as_decimal())
        }
    }
}

/// Billing interval for recurring payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringInterval::Weekly => "weekly",
            RecurringInterval::Monthly => "monthly",
            RecurringInterval::Yearly => "yearly",
        }
    }
}

/// Payment method discriminator.
///
/// The variant selects which concrete processor handles the request; the
/// payload carries the method-specific fields that processor needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card charge through the gateway
    Card {
        /// Tokenized card reference from the vault
        token: String,
    },
    /// Offline settlement (bank transfer, cash desk)
    Offline,
    /// Recurring charge on a schedule
    Recurring {
        /// Tokenized card reference charged on each cycle
        token: String,
        /// Billing cycle
        interval: RecurringInterval,
    },
    /// Refund of a previously captured payment
    Refund {
        /// Transaction id of the original charge
        reference: String,
    },
}

impl PaymentMethod {
    /// Discriminator value as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card { .. } => "card",
            PaymentMethod::Offline => "offline",
            PaymentMethod::Recurring { .. } => "recurring",
            PaymentMethod::Refund { .. } => "refund",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment request submitted by a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentData {
    /// Unique payment id (generated)
    #[serde(default = "generate_payment_id")]
    pub id: String,

    /// Amount to move
    pub amount: Price,

    /// Method discriminator plus method-specific fields
    #[serde(flatten)]
    pub method: PaymentMethod,

    /// Custom metadata passed through to the transaction log
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<String, String>,

    /// Created timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn generate_payment_id() -> String {
    Uuid::new_v4().to_string()
}

impl PaymentData {
    /// Create a new payment request with a generated id
    pub fn new(amount: Price, method: PaymentMethod) -> Self {
        Self {
            id: generate_payment_id(),
            amount,
            method,
            metadata: std::collections::HashMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder: add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_conversion() {
        let usd = Currency::USD;
        assert_eq!(usd.to_smallest_unit(10.99), 1099);
        assert_eq!(usd.from_smallest_unit(1099), 10.99);

        let jpy = Currency::JPY;
        assert_eq!(jpy.to_smallest_unit(1000.0), 1000);
        assert_eq!(jpy.from_smallest_unit(1000), 1000.0);
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(29.99, Currency::USD);
        assert_eq!(price.display(), "$29.99");

        let price_eur = Price::new(19.99, Currency::EUR);
        assert_eq!(price_eur.display(), "€19.99");
    }

    #[test]
    fn test_method_discriminator() {
        let card = PaymentMethod::Card {
            token: "tok_visa".into(),
        };
        assert_eq!(card.as_str(), "card");
        assert_eq!(PaymentMethod::Offline.as_str(), "offline");
    }

    #[test]
    fn test_method_wire_format() {
        let payment = PaymentData::new(
            Price::new(100.0, Currency::USD),
            PaymentMethod::Card {
                token: "tok_visa".into(),
            },
        );

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["method"], "card");
        assert_eq!(json["token"], "tok_visa");
        assert_eq!(json["amount"]["amount"], 10000);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let raw = r#"{
            "amount": { "amount": 500, "currency": "usd" },
            "method": "bitcoin"
        }"#;

        assert!(serde_json::from_str::<PaymentData>(raw).is_err());
    }
}
