//! Connection service: the request gate and graph operations.

use super::model::{ConnectionDecision, ConnectionStatus};
use super::repository::ConnectionRepository;
use crate::error::{ProfNetError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Below or at this many accepted connections a user may request anyone;
/// beyond it, only friends-of-friends.
pub const INNER_CIRCLE_LIMIT: i64 = 4;

/// Service owning the connection graph operations.
#[derive(Clone)]
pub struct ConnectionService {
    connections: Arc<dyn ConnectionRepository>,
}

impl ConnectionService {
    pub fn new(connections: Arc<dyn ConnectionRepository>) -> Self {
        Self { connections }
    }

    /// Sends a connection request from `from` to `to`.
    ///
    /// The eligibility gate runs first. A prior `Reject` between the pair
    /// does not block a fresh request; a live `Request` or `Accept` does.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: request stored
    /// - `Err(NotEligible)`: blocked by the gate
    /// - `Err(DuplicateKey)`: a live row already exists for the pair
    pub async fn send_request(&self, from: &str, to: &str) -> Result<()> {
        if !self.is_eligible(from, to).await? {
            return Err(ProfNetError::not_eligible(format!(
                "'{to}' is outside your reachable connection circle"
            )));
        }
        self.connections.create_request(from, to).await?;
        info!(from, to, "connection request sent");
        Ok(())
    }

    /// Decides whether `user_id` may send an unsolicited request to `target`.
    ///
    /// Users with at most [`INNER_CIRCLE_LIMIT`] accepted connections may
    /// request anyone. Beyond that, the target must share an accepted
    /// connection with the requester (friend-of-a-friend).
    pub async fn is_eligible(&self, user_id: &str, target: &str) -> Result<bool> {
        let accepted = self.connections.count_accepted(user_id).await?;
        if accepted <= INNER_CIRCLE_LIMIT {
            return Ok(true);
        }
        let shared = self
            .connections
            .shares_accepted_connection(user_id, target)
            .await?;
        debug!(user_id, target, accepted, shared, "eligibility gate");
        Ok(shared)
    }

    /// Applies the responder's decision to a pending request.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the pending row was updated
    /// - `Err(NotFound)`: no pending request from `requester` to `responder`
    pub async fn respond(
        &self,
        responder: &str,
        requester: &str,
        decision: ConnectionDecision,
    ) -> Result<()> {
        let changed = self
            .connections
            .set_status(requester, responder, ConnectionStatus::from(decision))
            .await?;
        if changed == 0 {
            return Err(ProfNetError::not_found("connection request", requester));
        }
        info!(responder, requester, ?decision, "request answered");
        Ok(())
    }

    /// Lists the logins connected to `user_id`, in either direction.
    pub async fn list_accepted(&self, user_id: &str) -> Result<Vec<String>> {
        self.connections.list_accepted(user_id).await
    }

    /// Lists pending requesters targeting `user_id`.
    pub async fn list_pending(&self, user_id: &str) -> Result<Vec<String>> {
        self.connections.list_pending(user_id).await
    }

    /// True when an accepted row exists for the unordered pair.
    pub async fn are_connected(&self, a: &str, b: &str) -> Result<bool> {
        Ok(matches!(
            self.connections.status_between(a, b).await?,
            Some(ConnectionStatus::Accept)
        ))
    }
}
