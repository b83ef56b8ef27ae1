//! SQLite-backed MessageRepository implementation.

use async_trait::async_trait;
use profnet_core::error::{ProfNetError, Result};
use profnet_core::message::{
    DeleteSide, DeleteState, InboxEntry, MessageRepository, MessageStatus, SentEntry,
};
use sqlx::FromRow;
use sqlx::sqlite::SqlitePool;
use std::str::FromStr;
use tracing::debug;

/// A repository implementation over the `message` table.
///
/// Ids come from the table's autoincrement key. The read and delete
/// transitions each run inside one transaction so the lookup and the state
/// change cannot be split by a concurrent caller.
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct InboxRow {
    msg_id: i64,
    sender_id: String,
    status: String,
}

#[derive(FromRow)]
struct SentRow {
    msg_id: i64,
    receiver_id: String,
    status: String,
}

fn parse_status(raw: &str) -> Result<MessageStatus> {
    MessageStatus::from_str(raw)
        .map_err(|_| ProfNetError::internal(format!("unknown message status '{raw}'")))
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, sender_id: &str, receiver_id: &str, contents: &str) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO message (sender_id, receiver_id, contents, delete_status, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(contents)
        .bind(DeleteState::Visible.as_i64())
        .bind(MessageStatus::Delivered.to_string())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_unread(&self, receiver_id: &str) -> Result<Vec<InboxEntry>> {
        let rows = sqlx::query_as::<_, InboxRow>(
            "SELECT msg_id, sender_id, status FROM message
             WHERE receiver_id = ?1 AND status = ?2 AND delete_status IN (?3, ?4)
             ORDER BY msg_id",
        )
        .bind(receiver_id)
        .bind(MessageStatus::Delivered.to_string())
        .bind(DeleteState::Visible.as_i64())
        .bind(DeleteState::SenderDeleted.as_i64())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|r| {
                Ok(InboxEntry {
                    msg_id: r.msg_id,
                    sender_id: r.sender_id,
                    status: parse_status(&r.status)?,
                })
            })
            .collect()
    }

    async fn list_inbox(&self, receiver_id: &str) -> Result<Vec<InboxEntry>> {
        let rows = sqlx::query_as::<_, InboxRow>(
            "SELECT msg_id, sender_id, status FROM message
             WHERE receiver_id = ?1 AND delete_status IN (?2, ?3)
             ORDER BY msg_id",
        )
        .bind(receiver_id)
        .bind(DeleteState::Visible.as_i64())
        .bind(DeleteState::SenderDeleted.as_i64())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|r| {
                Ok(InboxEntry {
                    msg_id: r.msg_id,
                    sender_id: r.sender_id,
                    status: parse_status(&r.status)?,
                })
            })
            .collect()
    }

    async fn list_sent(&self, sender_id: &str) -> Result<Vec<SentEntry>> {
        let rows = sqlx::query_as::<_, SentRow>(
            "SELECT msg_id, receiver_id, status FROM message
             WHERE sender_id = ?1 AND delete_status IN (?2, ?3)
             ORDER BY msg_id",
        )
        .bind(sender_id)
        .bind(DeleteState::Visible.as_i64())
        .bind(DeleteState::ReceiverDeleted.as_i64())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|r| {
                Ok(SentEntry {
                    msg_id: r.msg_id,
                    receiver_id: r.receiver_id,
                    status: parse_status(&r.status)?,
                })
            })
            .collect()
    }

    async fn mark_read(&self, msg_id: i64, receiver_id: &str) -> Result<Option<String>> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(String, String)> = sqlx::query_as(
            "SELECT contents, status FROM message
             WHERE msg_id = ?1 AND receiver_id = ?2 AND delete_status IN (?3, ?4)",
        )
        .bind(msg_id)
        .bind(receiver_id)
        .bind(DeleteState::Visible.as_i64())
        .bind(DeleteState::SenderDeleted.as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        let Some((contents, status)) = row else {
            return Ok(None);
        };

        if parse_status(&status)? == MessageStatus::Delivered {
            sqlx::query("UPDATE message SET status = ?2 WHERE msg_id = ?1")
                .bind(msg_id)
                .bind(MessageStatus::Read.to_string())
                .execute(&mut *tx)
                .await?;
            debug!(msg_id, receiver_id, "message marked read");
        }

        tx.commit().await?;
        Ok(Some(contents))
    }

    async fn sent_contents(&self, msg_id: i64, sender_id: &str) -> Result<Option<String>> {
        let contents: Option<String> = sqlx::query_scalar(
            "SELECT contents FROM message
             WHERE msg_id = ?1 AND sender_id = ?2 AND delete_status IN (?3, ?4)",
        )
        .bind(msg_id)
        .bind(sender_id)
        .bind(DeleteState::Visible.as_i64())
        .bind(DeleteState::ReceiverDeleted.as_i64())
        .fetch_optional(&self.pool)
        .await?;
        Ok(contents)
    }

    async fn soft_delete(&self, msg_id: i64, owner_id: &str, side: DeleteSide) -> Result<bool> {
        // The owner column and the visible states depend on the side; the
        // column name is a fixed string, never caller data.
        let owner_column = match side {
            DeleteSide::Sender => "sender_id",
            DeleteSide::Receiver => "receiver_id",
        };
        let still_visible = match side {
            DeleteSide::Sender => DeleteState::ReceiverDeleted,
            DeleteSide::Receiver => DeleteState::SenderDeleted,
        };

        let mut tx = self.pool.begin().await?;

        let current: Option<i64> = sqlx::query_scalar(&format!(
            "SELECT delete_status FROM message
             WHERE msg_id = ?1 AND {owner_column} = ?2 AND delete_status IN (?3, ?4)"
        ))
        .bind(msg_id)
        .bind(owner_id)
        .bind(DeleteState::Visible.as_i64())
        .bind(still_visible.as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(false);
        };
        let current = DeleteState::from_i64(current)
            .ok_or_else(|| ProfNetError::internal(format!("corrupt delete_status {current}")))?;

        if current == DeleteState::Visible {
            sqlx::query("UPDATE message SET delete_status = ?2 WHERE msg_id = ?1")
                .bind(msg_id)
                .bind(DeleteState::marker(side).as_i64())
                .execute(&mut *tx)
                .await?;
        } else {
            // The other side already deleted it; both sides are done, so
            // the row is physically removed.
            sqlx::query("DELETE FROM message WHERE msg_id = ?1")
                .bind(msg_id)
                .execute(&mut *tx)
                .await?;
            debug!(msg_id, "message row removed");
        }

        tx.commit().await?;
        Ok(true)
    }
}
