//! Composed profile view model.

use crate::user::{EducationDetail, Profile, WorkExperience};
use serde::{Deserialize, Serialize};

/// Everything a viewer learns when opening another user's profile.
///
/// Profile fields and history are shown regardless of connection status;
/// only the extended actions are gated. `can_view_connections` requires an
/// existing connection, `can_send_request` requires the opposite plus a
/// passing eligibility gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub user_id: String,
    /// `None` when the target login is unknown; the view still renders.
    pub profile: Option<Profile>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<EducationDetail>,
    pub connected: bool,
    pub can_view_connections: bool,
    pub can_send_request: bool,
}
