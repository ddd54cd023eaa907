//! Driving port for recording tax payments.

use async_trait::async_trait;

use crate::domain::{Error, Payment, PropertyId};

/// Domain use-case port for recording a payment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentCommand: Send + Sync {
    /// Append a payment with the current server timestamp.
    ///
    /// No check is made that the property exists, that the amount matches a
    /// freshly computed tax, or that the period is unpaid; duplicates are
    /// accepted.
    async fn record_payment(&self, property_id: &PropertyId, amount: f64)
    -> Result<Payment, Error>;
}
