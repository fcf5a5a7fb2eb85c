//! Embedded schema migrations applied at startup.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaMigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {message}")]
    Connect {
        /// Driver detail.
        message: String,
    },
    /// A migration failed to run.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Driver detail.
        message: String,
    },
    /// The blocking task panicked or was cancelled.
    #[error("migration task did not complete: {message}")]
    Task {
        /// Join error detail.
        message: String,
    },
}

/// Apply pending migrations on a blocking connection.
///
/// Returns the versions that were applied by this call.
pub fn migrate_blocking(database_url: &str) -> Result<Vec<String>, SchemaMigrationError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| SchemaMigrationError::Connect {
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaMigrationError::Apply {
            message: err.to_string(),
        })?
        .into_iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>();

    info!(count = applied.len(), versions = ?applied, "schema migrations applied");
    Ok(applied)
}

/// Run [`migrate_blocking`] off the async runtime.
pub async fn apply_migrations(database_url: &str) -> Result<Vec<String>, SchemaMigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || migrate_blocking(&url))
        .await
        .map_err(|err| SchemaMigrationError::Task {
            message: err.to_string(),
        })?
}
