//! User repository trait.
//!
//! Defines the interface for account and profile persistence operations.

use super::model::{EducationDetail, NewAccount, Profile, ProfileUpdate, User, WorkExperience};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for user accounts and profile data.
///
/// This trait decouples the application's core logic from the specific
/// storage mechanism. Absence of rows IS the empty state: a fresh account
/// has no work, education, connection, or message rows.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account row.
    ///
    /// `password_hash` must already be a hashed credential string.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: account created
    /// - `Err(DuplicateKey)`: the login already exists
    async fn insert(&self, account: &NewAccount, password_hash: &str) -> Result<()>;

    /// Finds a user by login.
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    /// Overwrites a single profile field. Last writer wins; updating an
    /// unknown user is a silent no-op.
    ///
    /// A `Password` update must carry the hashed credential string by the
    /// time it reaches a repository; services hash before calling.
    async fn update_field(&self, user_id: &str, update: &ProfileUpdate) -> Result<()>;

    /// Reads the visible profile attributes of a user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: user exists
    /// - `Ok(None)`: unknown user (not an error)
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Lists work history, ordered by start date. Empty when none.
    async fn list_work_experience(&self, user_id: &str) -> Result<Vec<WorkExperience>>;

    /// Lists education history, ordered by start date. Empty when none.
    async fn list_education(&self, user_id: &str) -> Result<Vec<EducationDetail>>;

    /// Finds logins whose stored name exactly matches `full_name`.
    async fn search_by_name(&self, full_name: &str) -> Result<Vec<String>>;
}
