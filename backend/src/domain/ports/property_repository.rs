//! Port abstraction for property persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewProperty, Property, PropertyId, UserId};

/// Persistence errors raised by property repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyPersistenceError {
    /// Repository connection could not be established.
    #[error("property repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("property repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },

    /// The external property identifier is already registered, possibly
    /// under a different user.
    #[error("property id already exists")]
    DuplicatePropertyId,
}

impl PropertyPersistenceError {
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

/// Port for property storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert a new property owned by `owner` and return the stored row.
    ///
    /// Fails with [`PropertyPersistenceError::DuplicatePropertyId`] when the
    /// external identifier exists anywhere in the store.
    async fn insert(
        &self,
        owner: UserId,
        property: &NewProperty,
    ) -> Result<Property, PropertyPersistenceError>;

    /// List all properties owned by `owner` in insertion order.
    async fn list_for_owner(&self, owner: UserId)
    -> Result<Vec<Property>, PropertyPersistenceError>;

    /// Fetch a property by its external identifier, regardless of owner.
    async fn find_by_property_id(
        &self,
        property_id: &PropertyId,
    ) -> Result<Option<Property>, PropertyPersistenceError>;
}
