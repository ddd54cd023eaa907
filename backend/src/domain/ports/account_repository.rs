//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Credentials, UserId};

/// Persistence errors raised by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountPersistenceError {
    /// Repository connection could not be established.
    #[error("account repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("account repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },

    /// The username is already registered.
    #[error("username already exists")]
    DuplicateUsername,
}

impl AccountPersistenceError {
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

/// Port for account storage and credential lookup.
///
/// The store compares credentials as exact raw strings; adapters must not
/// normalise either field. Uniqueness of the username is the only integrity
/// check on insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return its store-assigned id.
    ///
    /// Fails with [`AccountPersistenceError::DuplicateUsername`] when the
    /// username is already taken.
    async fn insert(&self, credentials: &Credentials) -> Result<UserId, AccountPersistenceError>;

    /// Find the account matching both username and password exactly.
    ///
    /// Returns `None` when no row matches; a wrong password and an unknown
    /// username are indistinguishable to the caller.
    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<UserId>, AccountPersistenceError>;
}
