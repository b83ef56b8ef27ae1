//! Connection domain models.
//!
//! A relationship between two users is undirected but stored as a single
//! directed row: the requester is `user_id`, the target is `connection_id`.
//! A pair counts as connected when a row in EITHER direction has status
//! `Accept`, so every lookup must check both directions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle status of a connection row. Starts at `Request`, mutated in
/// place by accept/reject; no history of earlier states is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ConnectionStatus {
    Request,
    Accept,
    Reject,
}

/// The responder's verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionDecision {
    Accept,
    Reject,
}

impl From<ConnectionDecision> for ConnectionStatus {
    fn from(decision: ConnectionDecision) -> Self {
        match decision {
            ConnectionDecision::Accept => Self::Accept,
            ConnectionDecision::Reject => Self::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_text_matches_stored_form() {
        assert_eq!(ConnectionStatus::Accept.to_string(), "Accept");
        assert_eq!(
            ConnectionStatus::from_str("Request").unwrap(),
            ConnectionStatus::Request
        );
        assert!(ConnectionStatus::from_str("accepted").is_err());
    }
}
