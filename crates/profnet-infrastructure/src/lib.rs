//! SQLite-backed repository implementations for ProfNet.

pub mod db;
pub mod sqlite_connection_repository;
pub mod sqlite_message_repository;
pub mod sqlite_user_repository;

pub use db::{connect, connect_in_memory, default_database_path};
pub use sqlx::sqlite::SqlitePool;
pub use sqlite_connection_repository::SqliteConnectionRepository;
pub use sqlite_message_repository::SqliteMessageRepository;
pub use sqlite_user_repository::SqliteUserRepository;
