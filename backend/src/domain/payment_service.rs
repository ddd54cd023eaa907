//! Payment domain service implementing quotes, recording, and history.
//!
//! Recording stamps rows from an injected clock so tests control time. The
//! append path performs no property lookup: the log accepts payments against
//! unknown identifiers and repeated payments for the same property.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    PaymentCommand, PaymentLog, PaymentPersistenceError, PaymentQuery, PropertyRepository,
    TaxQuery,
};
use crate::domain::property_service::map_property_error;
use crate::domain::{Error, Payment, PropertyId, TaxQuote};

/// Payment service implementing the tax and payment driving ports.
#[derive(Clone)]
pub struct PaymentService<L, P> {
    payments: Arc<L>,
    properties: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<L, P> PaymentService<L, P> {
    /// Create a new service over the payment log and property repository.
    pub fn new(payments: Arc<L>, properties: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            payments,
            properties,
            clock,
        }
    }
}

fn map_payment_error(error: PaymentPersistenceError) -> Error {
    match error {
        PaymentPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("payment log unavailable: {message}"))
        }
        PaymentPersistenceError::Query { message } => {
            Error::internal(format!("payment log error: {message}"))
        }
    }
}

#[async_trait]
impl<L, P> TaxQuery for PaymentService<L, P>
where
    L: PaymentLog,
    P: PropertyRepository,
{
    async fn quote(&self, property_id: &PropertyId, value: f64) -> Result<TaxQuote, Error> {
        let property = self
            .properties
            .find_by_property_id(property_id)
            .await
            .map_err(map_property_error)?
            .ok_or_else(|| Error::not_found(format!("no property with id {property_id}")))?;

        Ok(TaxQuote::compute(property_id.clone(), property.kind, value))
    }
}

#[async_trait]
impl<L, P> PaymentCommand for PaymentService<L, P>
where
    L: PaymentLog,
    P: PropertyRepository,
{
    async fn record_payment(
        &self,
        property_id: &PropertyId,
        amount: f64,
    ) -> Result<Payment, Error> {
        let recorded_at = self.clock.utc().naive_utc();
        self.payments
            .append(property_id, amount, recorded_at)
            .await
            .map_err(map_payment_error)
    }
}

#[async_trait]
impl<L, P> PaymentQuery for PaymentService<L, P>
where
    L: PaymentLog,
    P: PropertyRepository,
{
    async fn payment_history(&self, property_id: &PropertyId) -> Result<Vec<Payment>, Error> {
        self.payments
            .history_for(property_id)
            .await
            .map_err(map_payment_error)
    }
}
