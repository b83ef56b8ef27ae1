//! Account service: creation and authentication.

use super::credentials;
use crate::error::{ProfNetError, Result};
use crate::user::{NewAccount, UserRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Service gating entry into the rest of the application.
///
/// Holds the user repository behind an `Arc<dyn ...>` so the same instance
/// can be shared with the profile service.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates a new account.
    ///
    /// The duplicate-login check is enforced by the store's key constraint,
    /// not a separate read, so concurrent creations cannot race.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: account created
    /// - `Err(DuplicateKey)`: the login is already taken
    pub async fn create_account(&self, account: &NewAccount) -> Result<()> {
        let password_hash = credentials::hash_password(&account.password)?;
        self.users.insert(account, &password_hash).await?;
        info!(login = %account.login, "account created");
        Ok(())
    }

    /// Checks login credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(login)`: exact credential match
    /// - `Err(NotAuthenticated)`: unknown user or wrong password; the two
    ///   cases are indistinguishable to the caller
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<String> {
        match self.users.find_by_id(login).await? {
            Some(user) if credentials::verify_password(password, &user.password_hash) => {
                debug!(login, "authenticated");
                Ok(user.user_id)
            }
            _ => Err(ProfNetError::NotAuthenticated),
        }
    }
}
