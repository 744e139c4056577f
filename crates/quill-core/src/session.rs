//! The per-browser session payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the session cookie carries: the logged-in user's id, or nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Option<Uuid>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self { id: None }
    }

    pub fn for_user(id: Uuid) -> Self {
        Self { id: Some(id) }
    }
}
