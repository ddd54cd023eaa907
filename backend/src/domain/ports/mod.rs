//! Domain ports and supporting types for the hexagonal boundary.

mod account_repository;
mod login_service;
mod payment_command;
mod payment_log;
mod payment_query;
mod property_command;
mod property_query;
mod property_repository;
mod registration_service;
mod tax_query;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountPersistenceError, AccountRepository};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use payment_command::MockPaymentCommand;
pub use payment_command::PaymentCommand;
#[cfg(test)]
pub use payment_log::MockPaymentLog;
pub use payment_log::{PaymentLog, PaymentPersistenceError};
#[cfg(test)]
pub use payment_query::MockPaymentQuery;
pub use payment_query::PaymentQuery;
#[cfg(test)]
pub use property_command::MockPropertyCommand;
pub use property_command::PropertyCommand;
#[cfg(test)]
pub use property_query::MockPropertyQuery;
pub use property_query::PropertyQuery;
#[cfg(test)]
pub use property_repository::MockPropertyRepository;
pub use property_repository::{PropertyPersistenceError, PropertyRepository};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use tax_query::MockTaxQuery;
pub use tax_query::TaxQuery;
