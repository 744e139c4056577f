//! Login and ownership checks shared by every protected route.

use crate::domain::{Post, User};
use crate::error::RepoError;
use crate::ports::UserRepository;
use crate::session::SessionState;

/// Answers "who is logged in" and "may they touch this post" for a session.
///
/// A session pointing at a user that no longer exists counts as logged out.
pub struct AuthGate<'a> {
    users: &'a dyn UserRepository,
}

impl<'a> AuthGate<'a> {
    pub fn new(users: &'a dyn UserRepository) -> Self {
        Self { users }
    }

    pub async fn current_user(&self, session: &SessionState) -> Result<Option<User>, RepoError> {
        let Some(id) = session.id else {
            return Ok(None);
        };
        self.users.find_by_id(id).await
    }

    pub async fn is_logged_in(&self, session: &SessionState) -> Result<bool, RepoError> {
        Ok(self.current_user(session).await?.is_some())
    }

    pub async fn is_owner(&self, session: &SessionState, post: &Post) -> Result<bool, RepoError> {
        Ok(self
            .current_user(session)
            .await?
            .is_some_and(|user| user.owns(post)))
    }
}
