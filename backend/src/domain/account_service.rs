//! Account domain service implementing registration and login.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AccountPersistenceError, AccountRepository, LoginService, RegistrationService,
};
use crate::domain::{Credentials, Error, UserId};

/// Account service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    accounts: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service over the given account repository.
    pub fn new(accounts: Arc<R>) -> Self {
        Self { accounts }
    }
}

fn map_account_error(error: AccountPersistenceError) -> Error {
    match error {
        AccountPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("account repository unavailable: {message}"))
        }
        AccountPersistenceError::Query { message } => {
            Error::internal(format!("account repository error: {message}"))
        }
        AccountPersistenceError::DuplicateUsername => Error::conflict("username already exists"),
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, credentials: &Credentials) -> Result<UserId, Error> {
        self.accounts
            .insert(credentials)
            .await
            .map_err(map_account_error)
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let found = self
            .accounts
            .find_by_credentials(credentials)
            .await
            .map_err(map_account_error)?;

        found.ok_or_else(|| Error::unauthorized("invalid credentials"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockAccountRepository;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials::try_from_parts(username, password).expect("valid test credentials")
    }

    #[tokio::test]
    async fn register_returns_assigned_id() {
        let mut repo = MockAccountRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Ok(UserId::new(1)));

        let service = AccountService::new(Arc::new(repo));
        let id = service
            .register(&credentials("alice", "pw1"))
            .await
            .expect("registration succeeds");

        assert_eq!(id, UserId::new(1));
    }

    #[tokio::test]
    async fn register_surfaces_duplicate_username_as_conflict() {
        let mut repo = MockAccountRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(AccountPersistenceError::DuplicateUsername));

        let service = AccountService::new(Arc::new(repo));
        let err = service
            .register(&credentials("alice", "pw2"))
            .await
            .expect_err("duplicate must fail");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "username already exists");
    }

    #[tokio::test]
    async fn authenticate_returns_matching_identity() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_credentials()
            .times(1)
            .return_once(|_| Ok(Some(UserId::new(7))));

        let service = AccountService::new(Arc::new(repo));
        let id = service
            .authenticate(&credentials("alice", "pw1"))
            .await
            .expect("authentication succeeds");

        assert_eq!(id, UserId::new(7));
    }

    #[tokio::test]
    async fn authenticate_maps_empty_result_to_unauthorized() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_credentials()
            .times(1)
            .return_once(|_| Ok(None));

        let service = AccountService::new(Arc::new(repo));
        let err = service
            .authenticate(&credentials("alice", "wrong"))
            .await
            .expect_err("mismatch must fail");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "invalid credentials");
    }

    #[rstest]
    #[case(
        AccountPersistenceError::connection("database unavailable"),
        ErrorCode::ServiceUnavailable
    )]
    #[case(
        AccountPersistenceError::query("database query failed"),
        ErrorCode::InternalError
    )]
    #[tokio::test]
    async fn authenticate_maps_persistence_failures(
        #[case] failure: AccountPersistenceError,
        #[case] expected_code: ErrorCode,
    ) {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_credentials()
            .times(1)
            .return_once(move |_| Err(failure));

        let service = AccountService::new(Arc::new(repo));
        let err = service
            .authenticate(&credentials("alice", "pw1"))
            .await
            .expect_err("repository failures should surface as domain errors");

        assert_eq!(err.code(), expected_code);
    }
}
