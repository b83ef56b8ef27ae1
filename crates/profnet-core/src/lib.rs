pub mod auth;
pub mod connection;
pub mod error;
pub mod message;
pub mod profile;
pub mod user;

// Re-export common error type
pub use error::{ProfNetError, Result};
