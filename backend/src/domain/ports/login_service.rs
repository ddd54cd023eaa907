//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// The lookup is an exact, case-sensitive match on both fields; a
    /// non-match surfaces as an unauthorized error. There is no lockout and
    /// no rate limiting.
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error>;
}
