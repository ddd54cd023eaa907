//! Driving port for property registration.

use async_trait::async_trait;

use crate::domain::{Error, NewProperty, Property, UserId};

/// Domain use-case port for registering properties.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyCommand: Send + Sync {
    /// Register a property under `owner` and return the stored row.
    ///
    /// Returns a conflict error when the external property identifier is
    /// already registered anywhere in the store.
    async fn register_property(
        &self,
        owner: UserId,
        property: NewProperty,
    ) -> Result<Property, Error>;
}
