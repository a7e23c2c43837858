//! # rail-channels
//!
//! Concrete channels and service assembly for the payrail facade.
//!
//! This crate provides:
//! - `CardGatewayProcessor` / `OfflineProcessor` stub processing channels
//! - `EmailNotifier` / `SmsNotifier` notification channels
//! - `ConsoleTransactionLogger` transaction sink
//! - `CustomerValidator` / `PaymentDataValidator` default rule bodies
//! - `ProcessorFactory`, the closed method → channel mapping
//! - `PaymentServiceBuilder`, the stepwise service assembler
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rail_channels::PaymentServiceBuilder;
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

pub mod builder;
pub mod factory;
pub mod loggers;
pub mod notifiers;
pub mod processors;
pub mod settings;
pub mod validators;

// Re-exports
pub use builder::PaymentServiceBuilder;
pub use factory::ProcessorFactory;
pub use loggers::ConsoleTransactionLogger;
pub use notifiers::{EmailNotifier, SmsNotifier};
pub use processors::{CardGatewayProcessor, GatewayConfig, OfflineProcessor};
pub use settings::{ChannelSettings, DEFAULT_EMAIL_SENDER, DEFAULT_SMS_GATEWAY};
pub use validators::{CustomerValidator, PaymentDataValidator};
