//! Account creation and credential checking.

pub mod credentials;
pub mod service;

pub use service::AccountService;
