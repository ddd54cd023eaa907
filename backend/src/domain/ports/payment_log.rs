//! Port abstraction for the append-only payment log.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::{Payment, PropertyId};

/// Persistence errors raised by payment log adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentPersistenceError {
    /// Repository connection could not be established.
    #[error("payment log connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("payment log query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl PaymentPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the append-only payment log.
///
/// Payments reference properties by business key only; adapters must not
/// verify that the referenced property exists. Duplicate and
/// arbitrary-amount payments are accepted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentLog: Send + Sync {
    /// Append a payment row and return it with its store-assigned id.
    async fn append(
        &self,
        property_id: &PropertyId,
        amount: f64,
        recorded_at: NaiveDateTime,
    ) -> Result<Payment, PaymentPersistenceError>;

    /// List all payments recorded against `property_id` in insertion order.
    async fn history_for(
        &self,
        property_id: &PropertyId,
    ) -> Result<Vec<Payment>, PaymentPersistenceError>;
}
