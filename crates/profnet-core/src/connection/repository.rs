//! Connection repository trait.

use super::model::ConnectionStatus;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the connection graph.
///
/// Implementations must treat the pair as unordered wherever the contract
/// does: `status_between`, `list_accepted`, `count_accepted`, and
/// `shares_accepted_connection` all consider rows in both directions.
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Looks up the row for the unordered pair, in either direction.
    async fn status_between(&self, a: &str, b: &str) -> Result<Option<ConnectionStatus>>;

    /// Inserts a `Request` row from `from` to `to`.
    ///
    /// The pair lookup, any stale-`Reject` overwrite, and the insert run
    /// as one atomic unit.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: request created (a prior `Reject` row for the pair is
    ///   replaced)
    /// - `Err(DuplicateKey)`: a `Request` or `Accept` row already exists
    ///   for the pair in either direction
    async fn create_request(&self, from: &str, to: &str) -> Result<()>;

    /// Sets the status of the pending `(requester -> responder)` row.
    ///
    /// Only rows currently in `Request` status are updated.
    ///
    /// # Returns
    ///
    /// The number of rows changed (0 when no matching pending row exists).
    async fn set_status(
        &self,
        requester: &str,
        responder: &str,
        status: ConnectionStatus,
    ) -> Result<u64>;

    /// Lists the other endpoint of every accepted row involving `user_id`.
    async fn list_accepted(&self, user_id: &str) -> Result<Vec<String>>;

    /// Lists requester logins of pending requests targeting `user_id`.
    async fn list_pending(&self, user_id: &str) -> Result<Vec<String>>;

    /// Counts accepted rows where `user_id` is either endpoint.
    async fn count_accepted(&self, user_id: &str) -> Result<i64>;

    /// True when `target` holds an accepted connection with one of
    /// `user_id`'s accepted connections.
    async fn shares_accepted_connection(&self, user_id: &str, target: &str) -> Result<bool>;
}
