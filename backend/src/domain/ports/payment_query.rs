//! Driving port for payment history reads.

use async_trait::async_trait;

use crate::domain::{Error, Payment, PropertyId};

/// Domain use-case port for reading a property's payment history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentQuery: Send + Sync {
    /// List all payments recorded against `property_id` in insertion order.
    async fn payment_history(&self, property_id: &PropertyId) -> Result<Vec<Payment>, Error>;
}
