//! SQLite pool construction and schema bootstrap.

use profnet_core::error::{ProfNetError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// The persisted schema. Executed idempotently at every startup.
///
/// `message.msg_id` is assigned by the database itself, so concurrent
/// senders can never compute the same id.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS usr (
        user_id       TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        email         TEXT NOT NULL,
        name          TEXT,
        date_of_birth TEXT
    )",
    "CREATE TABLE IF NOT EXISTS work_expr (
        user_id    TEXT NOT NULL REFERENCES usr(user_id),
        company    TEXT NOT NULL,
        role       TEXT NOT NULL,
        location   TEXT,
        start_date TEXT NOT NULL,
        end_date   TEXT
    )",
    "CREATE TABLE IF NOT EXISTS educational_details (
        user_id          TEXT NOT NULL REFERENCES usr(user_id),
        institution_name TEXT NOT NULL,
        major            TEXT NOT NULL,
        degree           TEXT NOT NULL,
        start_date       TEXT NOT NULL,
        end_date         TEXT
    )",
    "CREATE TABLE IF NOT EXISTS connection_usr (
        user_id       TEXT NOT NULL REFERENCES usr(user_id),
        connection_id TEXT NOT NULL REFERENCES usr(user_id),
        status        TEXT NOT NULL,
        PRIMARY KEY (user_id, connection_id)
    )",
    "CREATE TABLE IF NOT EXISTS message (
        msg_id        INTEGER PRIMARY KEY AUTOINCREMENT,
        sender_id     TEXT NOT NULL REFERENCES usr(user_id),
        receiver_id   TEXT NOT NULL REFERENCES usr(user_id),
        contents      TEXT NOT NULL,
        delete_status INTEGER NOT NULL DEFAULT 0,
        status        TEXT NOT NULL
    )",
];

/// Opens (creating if missing) the database at `path` and ensures the
/// schema exists.
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ProfNetError::storage(format!("cannot create {parent:?}: {e}")))?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    info!(?path, "database ready");
    Ok(pool)
}

/// Opens a private in-memory database, mainly for tests.
///
/// An in-memory SQLite database lives and dies with its connection, so the
/// pool is pinned to a single never-expiring connection.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// `~/.profnet/profnet.db`.
pub fn default_database_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ProfNetError::storage("unable to locate home directory"))?;
    Ok(home.join(".profnet").join("profnet.db"))
}

async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
