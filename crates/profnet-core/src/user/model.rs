//! User domain models.
//!
//! The login (`user_id`) is the natural key for an account; there is no
//! surrogate numeric id. Work and education history are read-only in this
//! contract and may hold multiple rows per user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored user account.
///
/// `password_hash` is an argon2 PHC string, never the raw password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub password_hash: String,
    pub email: String,
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// The data required to create a new account.
///
/// The password is still plaintext here; it is hashed by the account
/// service before it reaches a repository.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub login: String,
    pub password: String,
    pub email: String,
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// The publicly visible profile attributes of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// One work history entry. Multiple per user, ordered by start date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// One education history entry. Multiple per user, ordered by start date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationDetail {
    pub institution_name: String,
    pub major: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// A single-field profile overwrite. Last writer wins; no optimistic
/// concurrency.
#[derive(Debug, Clone)]
pub enum ProfileUpdate {
    /// New plaintext password; hashed by the service before storage.
    Password(String),
    Email(String),
    Name(String),
    DateOfBirth(NaiveDate),
}

impl ProfileUpdate {
    /// The name of the field this update targets, for logging.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Password(_) => "password",
            Self::Email(_) => "email",
            Self::Name(_) => "name",
            Self::DateOfBirth(_) => "date_of_birth",
        }
    }
}
