//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// A `HashMap` keyed by id behind an async `RwLock`.
struct Table<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    async fn get(&self, id: Uuid) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn insert(&self, id: Uuid, row: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&id) {
            return Err(RepoError::Constraint(format!("duplicate id {id}")));
        }
        rows.insert(id, row.clone());
        Ok(row)
    }

    async fn replace(&self, id: Uuid, row: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(row)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

/// In-memory user store.
pub struct InMemoryUserRepository {
    table: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, user: User) -> Result<User, RepoError> {
        self.table.insert(user.id, user).await
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        self.table.replace(user.id, user).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.table.remove(id).await
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let mut matches = self.table.select(|u| u.username == username).await;
        matches.sort_by_key(|u| u.created_at);
        Ok(matches.into_iter().next())
    }

    async fn all(&self) -> Result<Vec<User>, RepoError> {
        let mut users = self.table.select(|_| true).await;
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}

/// In-memory post store.
pub struct InMemoryPostRepository {
    table: Table<Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        self.table.insert(post.id, post).await
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        self.table.replace(post.id, post).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.table.remove(id).await
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.table.select(|p| p.user_id == user_id).await;
        posts.sort_by_key(|p| p.created_at);
        Ok(posts)
    }

    async fn find_owned(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self
            .table
            .get(post_id)
            .await
            .filter(|post| post.user_id == user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(name.into(), format!("{name}@aol.com"), "hash".into())
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = InMemoryUserRepository::new();
        let becky = repo.create(user("becky567")).await.unwrap();

        assert_eq!(repo.find_by_id(becky.id).await.unwrap().unwrap().username, "becky567");
        assert_eq!(
            repo.find_by_username("becky567").await.unwrap().unwrap().id,
            becky.id
        );
        assert!(repo.find_by_username("Becky567").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryUserRepository::new();
        let becky = repo.create(user("becky567")).await.unwrap();
        assert!(matches!(repo.create(becky).await, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(Uuid::new_v4(), "post".into(), "posting!".into());

        assert!(matches!(repo.update(post.clone()).await, Err(RepoError::NotFound)));
        assert!(matches!(repo.delete(post.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_all_users_oldest_first() {
        let repo = InMemoryUserRepository::new();
        let becky = repo.create(user("becky567")).await.unwrap();
        let mut jenny = user("jenny");
        jenny.created_at = becky.created_at + chrono::Duration::seconds(1);
        repo.create(jenny).await.unwrap();

        let names: Vec<_> = repo.all().await.unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["becky567", "jenny"]);
    }

    #[tokio::test]
    async fn test_find_owned_hides_other_users_posts() {
        let repo = InMemoryPostRepository::new();
        let becky = Uuid::new_v4();
        let jenny = Uuid::new_v4();
        let post = repo
            .create(Post::new(jenny, "watch me".into(), "look at this post".into()))
            .await
            .unwrap();

        assert!(repo.find_owned(becky, post.id).await.unwrap().is_none());
        assert_eq!(repo.find_owned(jenny, post.id).await.unwrap().unwrap().id, post.id);
        assert!(repo.find_owned(jenny, Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_user_id_filters_author() {
        let repo = InMemoryPostRepository::new();
        let becky = Uuid::new_v4();
        repo.create(Post::new(becky, "post1".into(), "posting!".into()))
            .await
            .unwrap();
        repo.create(Post::new(Uuid::new_v4(), "post2".into(), "other".into()))
            .await
            .unwrap();

        let posts = repo.find_by_user_id(becky).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "post1");
    }
}
