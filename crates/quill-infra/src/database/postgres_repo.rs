//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username = %username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .order_by_asc(user::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn all(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_owned(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(post_id)
            .filter(post::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}
