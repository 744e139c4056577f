use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

use super::entity::{post, user};
use super::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn user_model(username: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        email: format!("{username}@aol.com"),
        password_hash: "hash".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn post_model(user_id: Uuid, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_owned(),
        content: "posting!".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = post_model(Uuid::new_v4(), "Test Post");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_find_owned_with_no_row_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo.find_owned(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_by_user_id_maps_rows() {
    let author = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(author, "post1"),
            post_model(author, "post2"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_by_user_id(author).await.unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["post1", "post2"]);
    assert!(posts.iter().all(|p| p.user_id == author));
}

#[tokio::test]
async fn test_find_by_slug_scans_all_users() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model("jenny"), user_model("John Doe")]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let found: Option<User> = repo.find_by_slug("john-doe").await.unwrap();
    assert_eq!(found.unwrap().username, "John Doe");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let ghost = User::new("ghost".into(), "ghost@aol.com".into(), "hash".into());

    assert!(matches!(repo.update(ghost).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(
        BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await,
        Err(RepoError::NotFound)
    ));
}
