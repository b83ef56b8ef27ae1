//! Profile service: single-field updates and the composed profile view.

use super::model::ProfileView;
use crate::auth::credentials;
use crate::connection::ConnectionService;
use crate::error::Result;
use crate::user::{Profile, ProfileUpdate, UserRepository};
use std::sync::Arc;
use tracing::debug;

/// Service for profile reads and updates.
///
/// The view composition is the one place where profile, history, and
/// connection data meet; everything else is a thin pass-through.
#[derive(Clone)]
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
    connections: ConnectionService,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserRepository>, connections: ConnectionService) -> Self {
        Self { users, connections }
    }

    /// Overwrites one profile field. Password updates are hashed before
    /// they reach the repository; everything else is stored as given.
    pub async fn update(&self, user_id: &str, update: ProfileUpdate) -> Result<()> {
        debug!(user_id, field = update.field_name(), "profile update");
        let update = match update {
            ProfileUpdate::Password(plain) => {
                ProfileUpdate::Password(credentials::hash_password(&plain)?)
            }
            other => other,
        };
        self.users.update_field(user_id, &update).await
    }

    /// Reads a user's own visible attributes. Unknown user is `None`.
    pub async fn profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.users.profile(user_id).await
    }

    /// Finds logins whose stored name exactly matches `full_name`.
    pub async fn search_by_name(&self, full_name: &str) -> Result<Vec<String>> {
        self.users.search_by_name(full_name).await
    }

    /// Composes the full view of `target_id` as seen by `viewer_id`.
    ///
    /// Profile fields and history are included unconditionally. The
    /// extended actions are gated: viewing the target's connections
    /// requires an existing connection; sending a request requires not
    /// being connected and passing the eligibility gate.
    pub async fn view(&self, viewer_id: &str, target_id: &str) -> Result<ProfileView> {
        let profile = self.users.profile(target_id).await?;
        let work_experience = self.users.list_work_experience(target_id).await?;
        let education = self.users.list_education(target_id).await?;
        let connected = self.connections.are_connected(viewer_id, target_id).await?;
        let can_send_request =
            !connected && self.connections.is_eligible(viewer_id, target_id).await?;

        Ok(ProfileView {
            user_id: target_id.to_string(),
            profile,
            work_experience,
            education,
            connected,
            can_view_connections: connected,
            can_send_request,
        })
    }
}
