//! # Customer Types
//!
//! Customer identity and contact channels for the payrail facade.

use serde::{Deserialize, Serialize};

/// Contact channels for a customer.
///
/// Both channels are optional at the type level; whether at least one is
/// required is decided by the service builder when it selects a notifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address (preferred notification channel)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number in E.164 or local format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Contact info with only an email address
    pub fn email(address: impl Into<String>) -> Self {
        Self {
            email: Some(address.into()),
            phone: None,
        }
    }

    /// Contact info with only a phone number
    pub fn phone(number: impl Into<String>) -> Self {
        Self {
            email: None,
            phone: Some(number.into()),
        }
    }

    /// True if at least one channel is present
    pub fn is_reachable(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }
}

/// A customer submitting a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerData {
    /// Display name
    pub name: String,

    /// Contact channels
    #[serde(default)]
    pub contact_info: ContactInfo,
}

impl CustomerData {
    /// Create a customer with no contact channels
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: ContactInfo::default(),
        }
    }

    /// Builder: set email address
    pub fn with_email(mut self, address: impl Into<String>) -> Self {
        self.contact_info.email = Some(address.into());
        self
    }

    /// Builder: set phone number
    pub fn with_phone(mut self, number: impl Into<String>) -> Self {
        self.contact_info.phone = Some(number.into());
        self
    }
}
