//! Driving port for the account registration use-case.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, UserId};

/// Domain use-case port for registering a new account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account for the supplied credentials and return its id.
    ///
    /// Returns a conflict error when the username is already registered;
    /// this is the only integrity check the operation performs.
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error>;
}
