//! Account identity primitives and login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Domain error returned when account payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Username was missing.
    EmptyUsername,
    /// Password was missing.
    EmptyPassword,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Stable user identifier assigned by the store on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a store-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account username.
///
/// ## Invariants
/// - Must not be empty.
/// - Stored and compared as the exact caller-provided string: no trimming,
///   no case folding. Authentication is a case-sensitive match on the raw
///   value, so any normalisation here would change which accounts match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from owned input.
    pub fn new(username: impl Into<String>) -> Result<Self, AccountValidationError> {
        let username = username.into();
        if username.is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated credentials used by registration and authentication.
///
/// ## Invariants
/// - `username` satisfies the [`Username`] invariants.
/// - `password` is required to be non-empty and retains caller-provided
///   whitespace: credential comparison is an exact string match.
///
/// # Examples
/// ```
/// use taxo_backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("alice", "pw1").unwrap();
/// assert_eq!(creds.username().as_ref(), "alice");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, AccountValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for account lookups.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
