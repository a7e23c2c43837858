//! # rail-core
//!
//! Core types and capability traits for the payrail payment facade.
//!
//! This crate provides:
//! - `CustomerData` / `PaymentData` / `PaymentResponse` value types
//! - Capability traits (`PaymentProcessor`, `Notifier`, `TransactionLogger`,
//!   `Validator`, plus refund and recurring capabilities)
//! - `PaymentService`, the orchestrator running the
//!   validate → process → notify → log pipeline
//! - `PaymentError` for typed error handling
//!
//! Concrete channels and the service builder live in `rail-channels`; HTTP
//! host wiring lives in `rail-api`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rail_core::{CustomerData, PaymentData, PaymentMethod, Price, Currency};
//! use rail_channels::PaymentServiceBuilder;
//!
//! let customer = CustomerData::new("Ada Lovelace").with_email("ada@example.com");
//! let payment = PaymentData::new(
//!     Price::new(100.0, Currency::USD),
//!     PaymentMethod::Card { token: "tok_visa".into() },
//! );
//!
//! let service = PaymentServiceBuilder::new()
//!     .set_logger()
//!     .set_customer_validator()
//!     .set_payment_validator()
//!     .set_payment_processor(&payment)?
//!     .set_notifier(&customer)?
//!     .build()?;
//!
//! let response = service.process_payment(&customer, &payment).await?;
//! ```

pub mod capability;
pub mod customer;
pub mod error;
pub mod payment;
pub mod response;
pub mod service;

// Re-exports for convenience
pub use capability::{
    BoxedCustomerValidator, BoxedNotifier, BoxedPaymentProcessor, BoxedPaymentValidator,
    BoxedRecurringProcessor, BoxedRefundProcessor, BoxedTransactionLogger, Notifier,
    PaymentProcessor, RecurringPaymentProcessor, RefundProcessor, TransactionLogger, Validator,
};
pub use customer::{ContactInfo, CustomerData};
pub use error::{PaymentError, PaymentResult};
pub use payment::{Currency, PaymentData, PaymentMethod, Price, RecurringInterval};
pub use response::{PaymentResponse, PaymentStatus};
pub use service::PaymentService;
