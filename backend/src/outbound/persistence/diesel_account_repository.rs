//! SQLite-backed `AccountRepository` implementation using Diesel ORM.
//!
//! Credentials are stored and compared as exact raw strings; the adapter
//! performs no hashing or normalisation. The unique index on `username` is
//! the only integrity check, surfaced as a typed duplicate error.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Credentials, UserId};

use super::models::NewUserRow;
use super::schema::users;
use super::storage::{Storage, StorageError};

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    storage: Storage,
}

impl DieselAccountRepository {
    /// Create a new repository over the given storage handle.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

/// Map storage handle errors to domain account persistence errors.
fn map_storage_error(error: StorageError) -> AccountPersistenceError {
    AccountPersistenceError::connection(error.to_string())
}

/// Map Diesel errors to domain account persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> AccountPersistenceError {
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
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AccountPersistenceError::DuplicateUsername
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AccountPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => AccountPersistenceError::query("record not found"),
        _ => AccountPersistenceError::query("database error"),
    }
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn insert(&self, credentials: &Credentials) -> Result<UserId, AccountPersistenceError> {
        let row = self
            .storage
            .with_conn(|conn| {
                let new_row = NewUserRow {
                    username: credentials.username().as_ref(),
                    password: credentials.password(),
                };

                diesel::insert_into(users::table)
                    .values(&new_row)
                    .returning(users::id)
                    .get_result::<i32>(conn)
            })
            .map_err(map_storage_error)?;

        row.map(UserId::new).map_err(map_diesel_error)
    }

    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<UserId>, AccountPersistenceError> {
        let row = self
            .storage
            .with_conn(|conn| {
                users::table
                    .filter(
                        users::username
                            .eq(credentials.username().as_ref())
                            .and(users::password.eq(credentials.password())),
                    )
                    .select(users::id)
                    .first::<i32>(conn)
                    .optional()
            })
            .map_err(map_storage_error)?;

        Ok(row.map_err(map_diesel_error)?.map(UserId::new))
    }
}
