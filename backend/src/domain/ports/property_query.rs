//! Driving port for property listings.

use async_trait::async_trait;

use crate::domain::{Error, Property, UserId};

/// Domain use-case port for reading a user's properties.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyQuery: Send + Sync {
    /// List the properties owned by `owner` in insertion order.
    async fn list_properties(&self, owner: UserId) -> Result<Vec<Property>, Error>;
}
