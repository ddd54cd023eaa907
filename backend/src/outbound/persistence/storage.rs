//! Shared SQLite storage handle for the persistence layer.
//!
//! The store is a single connection with per-statement auto-commit; there is
//! no pool and no explicit transaction management. The handle is injected
//! into each repository adapter, so tests isolate themselves with an
//! in-memory store per test instead of sharing process-global state.
//!
//! # Design
//!
//! - Embedded migrations run once when the handle is created; a failure
//!   there is fatal at startup.
//! - Statements take the connection mutex for their duration. Operations are
//!   single inserts or selects, so contention is bounded by statement time.
//! - All errors are mapped to [`StorageError`] variants.

use std::sync::{Arc, Mutex};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations compiled into the binary from `migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors that can occur while opening or using the storage handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The database file could not be opened.
    #[error("failed to open database: {message}")]
    Open {
        /// Driver-supplied failure description.
        message: String,
    },

    /// Embedded migrations failed to apply.
    #[error("failed to run migrations: {message}")]
    Migration {
        /// Harness-supplied failure description.
        message: String,
    },

    /// The connection mutex was poisoned by a panicking writer.
    #[error("storage connection poisoned")]
    Poisoned,
}

impl StorageError {
    /// Create an open error with the given message.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }
}

/// Injected handle over the single shared SQLite connection.
///
/// Cloning is cheap and shares the underlying connection.
///
/// # Example
///
/// ```
/// use taxo_backend::outbound::persistence::Storage;
///
/// let storage = Storage::in_memory().expect("in-memory store");
/// let _handle = storage.clone();
/// ```
#[derive(Clone)]
pub struct Storage {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `SqliteConnection` is not `Debug`; expose only the handle's shape.
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Open (creating if necessary) the database at `database_url` and run
    /// pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] when the file cannot be opened and
    /// [`StorageError::Migration`] when the schema cannot be applied. Both
    /// are fatal at startup; no retry policy exists.
    pub fn connect(database_url: &str) -> Result<Self, StorageError> {
        let mut conn = SqliteConnection::establish(database_url)
            .map_err(|err| StorageError::open(err.to_string()))?;

        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| StorageError::migration(err.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a fresh in-memory store with the schema applied.
    ///
    /// Each call creates an independent database, giving tests full
    /// isolation.
    pub fn in_memory() -> Result<Self, StorageError> {
        Self::connect(":memory:")
    }

    /// Run `f` with exclusive access to the connection.
    pub(crate) fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> T,
    ) -> Result<T, StorageError> {
        let mut guard = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(f(&mut guard))
    }
}
