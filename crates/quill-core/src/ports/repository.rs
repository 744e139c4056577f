use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with `NotFound` if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Every user, oldest first.
    async fn all(&self) -> Result<Vec<User>, RepoError>;

    /// Resolve a profile slug back to its user. First match in [`all`](Self::all) order wins.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .find(|user| user.matches_slug(slug)))
    }
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Posts written by `user_id`, oldest first.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Look up a post among `user_id`'s own posts only.
    ///
    /// Another user's post is reported as `None`, same as a missing one.
    async fn find_owned(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<Post>, RepoError>;
}
