//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed domain entities and the use-case services
//! operating on them, keeping types immutable and documenting invariants and
//! serialisation contracts (serde) in each type's Rustdoc. Inbound and
//! outbound adapters depend on this module, never the other way round.

pub mod account;
pub mod account_service;
pub mod error;
pub mod payment;
pub mod payment_service;
pub mod ports;
pub mod property;
pub mod property_service;
pub mod tax;

pub use self::account::{AccountValidationError, Credentials, UserId, Username};
pub use self::account_service::AccountService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::payment::{PAYMENT_DATE_FORMAT, Payment, format_payment_date, parse_payment_date};
pub use self::payment_service::PaymentService;
pub use self::property::{
    NewProperty, Property, PropertyId, PropertyKind, PropertyValidationError,
};
pub use self::property_service::PropertyService;
pub use self::tax::{TaxQuote, compute_tax, rate_for};
