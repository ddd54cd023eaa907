//! SQLite-backed `PaymentLog` implementation using Diesel ORM.
//!
//! The log is append-only: rows are inserted with a formatted timestamp and
//! read back primary-key ascending. The property reference is a business key
//! only; the adapter never checks that the referenced property exists.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{PaymentLog, PaymentPersistenceError};
use crate::domain::{Payment, PropertyId, format_payment_date, parse_payment_date};

use super::models::{NewPaymentRow, PaymentRow};
use super::schema::payments;
use super::storage::{Storage, StorageError};

/// Diesel-backed implementation of the `PaymentLog` port.
#[derive(Clone)]
pub struct DieselPaymentLog {
    storage: Storage,
}

impl DieselPaymentLog {
    /// Create a new log over the given storage handle.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

/// Map storage handle errors to domain payment persistence errors.
fn map_storage_error(error: StorageError) -> PaymentPersistenceError {
    PaymentPersistenceError::connection(error.to_string())
}

/// Map Diesel errors to domain payment persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> PaymentPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PaymentPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => PaymentPersistenceError::query("record not found"),
        _ => PaymentPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain Payment.
fn row_to_payment(row: PaymentRow) -> Result<Payment, PaymentPersistenceError> {
    let payment_date = parse_payment_date(&row.payment_date).map_err(|err| {
        tracing::warn!(
            value = %row.payment_date,
            row_id = row.id,
            "unparseable payment date in store"
        );
        PaymentPersistenceError::query(err.to_string())
    })?;
    let property_id = PropertyId::new(row.property_id)
        .map_err(|err| PaymentPersistenceError::query(err.to_string()))?;

    Ok(Payment {
        id: row.id,
        property_id,
        amount: row.amount,
        payment_date,
    })
}

#[async_trait]
impl PaymentLog for DieselPaymentLog {
    async fn append(
        &self,
        property_id: &PropertyId,
        amount: f64,
        recorded_at: NaiveDateTime,
    ) -> Result<Payment, PaymentPersistenceError> {
        // The stored form has second precision; parse it back so the
        // returned payment matches later history reads exactly.
        let stored_date = format_payment_date(recorded_at);
        let payment_date = parse_payment_date(&stored_date)
            .map_err(|err| PaymentPersistenceError::query(err.to_string()))?;

        let row = self
            .storage
            .with_conn(|conn| {
                let new_row = NewPaymentRow {
                    property_id: property_id.as_ref(),
                    amount,
                    payment_date: stored_date.as_str(),
                };

                diesel::insert_into(payments::table)
                    .values(&new_row)
                    .returning(payments::id)
                    .get_result::<i32>(conn)
            })
            .map_err(map_storage_error)?;

        let id = row.map_err(map_diesel_error)?;
        Ok(Payment {
            id,
            property_id: property_id.clone(),
            amount,
            payment_date,
        })
    }

    async fn history_for(
        &self,
        property_id: &PropertyId,
    ) -> Result<Vec<Payment>, PaymentPersistenceError> {
        let rows = self
            .storage
            .with_conn(|conn| {
                payments::table
                    .filter(payments::property_id.eq(property_id.as_ref()))
                    .order(payments::id.asc())
                    .select(PaymentRow::as_select())
                    .load::<PaymentRow>(conn)
            })
            .map_err(map_storage_error)?;

        rows.map_err(map_diesel_error)?
            .into_iter()
            .map(row_to_payment)
            .collect()
    }
}
