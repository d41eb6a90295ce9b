// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by the reminder core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stored field could not be encoded to or decoded from its text form.
    #[error("field codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// SQLite query failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure.
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// No alarm with the given id.
    #[error("alarm not found: {0}")]
    NotFound(i64),

    /// Invalid configuration value or path.
    #[error("configuration error: {0}")]
    Config(String),
}
