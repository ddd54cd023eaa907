//! Driving port for tax quotes.

use async_trait::async_trait;

use crate::domain::{Error, PropertyId, TaxQuote};

/// Domain use-case port for computing the tax owed on a property.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaxQuery: Send + Sync {
    /// Quote the tax owed on the property for the supplied value.
    ///
    /// The rate is drawn from the property's stored classification; an
    /// unknown property id is a not-found error.
    async fn quote(&self, property_id: &PropertyId, value: f64) -> Result<TaxQuote, Error>;
}
