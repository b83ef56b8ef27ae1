//! SQLite-backed UserRepository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use profnet_core::error::{ProfNetError, Result};
use profnet_core::user::{
    EducationDetail, NewAccount, Profile, ProfileUpdate, User, UserRepository, WorkExperience,
};
use sqlx::FromRow;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

/// A repository implementation storing accounts and profile data in the
/// `usr`, `work_expr`, and `educational_details` tables.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    user_id: String,
    password_hash: String,
    email: String,
    name: Option<String>,
    date_of_birth: Option<NaiveDate>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            password_hash: row.password_hash,
            email: row.email,
            name: row.name,
            date_of_birth: row.date_of_birth,
        }
    }
}

#[derive(FromRow)]
struct WorkRow {
    company: String,
    role: String,
    location: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

#[derive(FromRow)]
struct EducationRow {
    institution_name: String,
    major: String,
    degree: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, account: &NewAccount, password_hash: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO usr (user_id, password_hash, email, name, date_of_birth)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&account.login)
        .bind(password_hash)
        .bind(&account.email)
        .bind(&account.full_name)
        .bind(account.date_of_birth)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ProfNetError::duplicate_key("user", &account.login)
            }
            _ => e.into(),
        })?;
        debug!(login = %account.login, "user row inserted");
        Ok(())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, password_hash, email, name, date_of_birth
             FROM usr WHERE user_id = ?1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn update_field(&self, user_id: &str, update: &ProfileUpdate) -> Result<()> {
        // Unconditional overwrite; an unknown user updates zero rows.
        match update {
            ProfileUpdate::Password(hash) => {
                sqlx::query("UPDATE usr SET password_hash = ?2 WHERE user_id = ?1")
                    .bind(user_id)
                    .bind(hash)
                    .execute(&self.pool)
                    .await?
            }
            ProfileUpdate::Email(email) => {
                sqlx::query("UPDATE usr SET email = ?2 WHERE user_id = ?1")
                    .bind(user_id)
                    .bind(email)
                    .execute(&self.pool)
                    .await?
            }
            ProfileUpdate::Name(name) => {
                sqlx::query("UPDATE usr SET name = ?2 WHERE user_id = ?1")
                    .bind(user_id)
                    .bind(name)
                    .execute(&self.pool)
                    .await?
            }
            ProfileUpdate::DateOfBirth(date) => {
                sqlx::query("UPDATE usr SET date_of_birth = ?2 WHERE user_id = ?1")
                    .bind(user_id)
                    .bind(date)
                    .execute(&self.pool)
                    .await?
            }
        };
        Ok(())
    }

    async fn profile(&self, user_id: &str) -> Result<Option<Profile>> {
        let row: Option<(Option<String>, Option<NaiveDate>)> =
            sqlx::query_as("SELECT name, date_of_birth FROM usr WHERE user_id = ?1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(name, date_of_birth)| Profile {
            name,
            date_of_birth,
        }))
    }

    async fn list_work_experience(&self, user_id: &str) -> Result<Vec<WorkExperience>> {
        let rows = sqlx::query_as::<_, WorkRow>(
            "SELECT company, role, location, start_date, end_date
             FROM work_expr WHERE user_id = ?1 ORDER BY start_date",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| WorkExperience {
                company: r.company,
                role: r.role,
                location: r.location,
                start_date: r.start_date,
                end_date: r.end_date,
            })
            .collect())
    }

    async fn list_education(&self, user_id: &str) -> Result<Vec<EducationDetail>> {
        let rows = sqlx::query_as::<_, EducationRow>(
            "SELECT institution_name, major, degree, start_date, end_date
             FROM educational_details WHERE user_id = ?1 ORDER BY start_date",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| EducationDetail {
                institution_name: r.institution_name,
                major: r.major,
                degree: r.degree,
                start_date: r.start_date,
                end_date: r.end_date,
            })
            .collect())
    }

    async fn search_by_name(&self, full_name: &str) -> Result<Vec<String>> {
        let logins = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM usr WHERE name = ?1 ORDER BY user_id",
        )
        .bind(full_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(logins)
    }
}
