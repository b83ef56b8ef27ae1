//! SQLite-backed ConnectionRepository implementation.

use async_trait::async_trait;
use profnet_core::connection::{ConnectionRepository, ConnectionStatus};
use profnet_core::error::{ProfNetError, Result};
use sqlx::sqlite::SqlitePool;
use std::str::FromStr;
use tracing::debug;

/// A repository implementation over the `connection_usr` table.
///
/// The table holds at most one row per unordered pair: a re-request after
/// a rejection replaces the stale row rather than adding a second one, so
/// the either-direction lookups can stop at the first match.
#[derive(Clone)]
pub struct SqliteConnectionRepository {
    pool: SqlitePool,
}

impl SqliteConnectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn parse_status(raw: &str) -> Result<ConnectionStatus> {
    ConnectionStatus::from_str(raw)
        .map_err(|_| ProfNetError::internal(format!("unknown connection status '{raw}'")))
}

#[async_trait]
impl ConnectionRepository for SqliteConnectionRepository {
    async fn status_between(&self, a: &str, b: &str) -> Result<Option<ConnectionStatus>> {
        let raw: Option<String> = sqlx::query_scalar(
            "SELECT status FROM connection_usr
             WHERE (user_id = ?1 AND connection_id = ?2)
                OR (user_id = ?2 AND connection_id = ?1)",
        )
        .bind(a)
        .bind(b)
        .fetch_optional(&self.pool)
        .await?;
        raw.map(|s| parse_status(&s)).transpose()
    }

    async fn create_request(&self, from: &str, to: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<String> = sqlx::query_scalar(
            "SELECT status FROM connection_usr
             WHERE (user_id = ?1 AND connection_id = ?2)
                OR (user_id = ?2 AND connection_id = ?1)",
        )
        .bind(from)
        .bind(to)
        .fetch_optional(&mut *tx)
        .await?;

        match existing.as_deref().map(parse_status).transpose()? {
            None => {}
            Some(ConnectionStatus::Reject) => {
                // A rejected pair may be re-requested; the new request
                // replaces the stale row whichever direction it was in.
                sqlx::query(
                    "DELETE FROM connection_usr
                     WHERE (user_id = ?1 AND connection_id = ?2)
                        OR (user_id = ?2 AND connection_id = ?1)",
                )
                .bind(from)
                .bind(to)
                .execute(&mut *tx)
                .await?;
                debug!(from, to, "stale rejected row replaced");
            }
            Some(_) => {
                return Err(ProfNetError::duplicate_key("connection", to));
            }
        }

        sqlx::query(
            "INSERT INTO connection_usr (user_id, connection_id, status) VALUES (?1, ?2, ?3)",
        )
        .bind(from)
        .bind(to)
        .bind(ConnectionStatus::Request.to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn set_status(
        &self,
        requester: &str,
        responder: &str,
        status: ConnectionStatus,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE connection_usr SET status = ?3
             WHERE user_id = ?1 AND connection_id = ?2 AND status = ?4",
        )
        .bind(requester)
        .bind(responder)
        .bind(status.to_string())
        .bind(ConnectionStatus::Request.to_string())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn list_accepted(&self, user_id: &str) -> Result<Vec<String>> {
        let others = sqlx::query_scalar::<_, String>(
            "SELECT connection_id FROM connection_usr
             WHERE user_id = ?1 AND status = ?2
             UNION
             SELECT user_id FROM connection_usr
             WHERE connection_id = ?1 AND status = ?2",
        )
        .bind(user_id)
        .bind(ConnectionStatus::Accept.to_string())
        .fetch_all(&self.pool)
        .await?;
        Ok(others)
    }

    async fn list_pending(&self, user_id: &str) -> Result<Vec<String>> {
        let requesters = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM connection_usr
             WHERE connection_id = ?1 AND status = ?2",
        )
        .bind(user_id)
        .bind(ConnectionStatus::Request.to_string())
        .fetch_all(&self.pool)
        .await?;
        Ok(requesters)
    }

    async fn count_accepted(&self, user_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM connection_usr
             WHERE status = ?2 AND (user_id = ?1 OR connection_id = ?1)",
        )
        .bind(user_id)
        .bind(ConnectionStatus::Accept.to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn shares_accepted_connection(&self, user_id: &str, target: &str) -> Result<bool> {
        let found: i64 = sqlx::query_scalar(
            "WITH accepted(a, b) AS (
                 SELECT user_id, connection_id FROM connection_usr WHERE status = ?3
                 UNION ALL
                 SELECT connection_id, user_id FROM connection_usr WHERE status = ?3
             )
             SELECT EXISTS (
                 SELECT 1 FROM accepted x
                 JOIN accepted y ON x.b = y.a
                 WHERE x.a = ?1 AND y.b = ?2
             )",
        )
        .bind(user_id)
        .bind(target)
        .bind(ConnectionStatus::Accept.to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(found != 0)
    }
}
