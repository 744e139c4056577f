//! Post CRUD.
//!
//! Editing, updating and deleting look the post up among the current user's
//! own posts, so another user's post is indistinguishable from a missing one.

use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_shared::PostForm;

use super::parse_id;
use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{EditPostPage, NewPostPage, PostShowPage, PostsIndexPage, redirect, render};

/// GET /posts - the current user's posts
pub async fn index(current: CurrentUser, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let user = current.into_inner();
    let posts = state.posts.find_by_user_id(user.id).await?;
    render(&PostsIndexPage { user, posts })
}

/// GET /posts/new
pub async fn new_form(_current: CurrentUser) -> AppResult<HttpResponse> {
    render(&NewPostPage)
}

/// POST /posts
pub async fn create(
    current: CurrentUser,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let post = Post::new(current.0.id, form.title, form.content);

    if let Err(e) = post.validate() {
        tracing::debug!("Post rejected: {}", e);
        return Ok(redirect("/posts/new"));
    }

    let post = state.posts.create(post).await?;
    tracing::debug!(post_id = %post.id, user_id = %post.user_id, "Post created");
    Ok(redirect("/posts"))
}

/// GET /posts/:id - any logged-in user may read any post
pub async fn show(
    current: CurrentUser,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = match parse_id(&id) {
        Some(id) => state.posts.find_by_id(id).await?,
        None => None,
    };
    let Some(post) = post else {
        return Ok(redirect("/posts"));
    };

    let author = state
        .users
        .find_by_id(post.user_id)
        .await?
        .map(|u| u.username)
        .unwrap_or_default();
    let can_manage = current.0.owns(&post);

    render(&PostShowPage {
        post,
        author,
        can_manage,
    })
}

/// GET /posts/:id/edit
pub async fn edit_form(
    current: CurrentUser,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    match find_own_post(&state, &current, &id).await? {
        Some(post) => render(&EditPostPage { post }),
        None => Ok(redirect("/posts")),
    }
}

/// POST /posts/:id
pub async fn update(
    current: CurrentUser,
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let Some(mut post) = find_own_post(&state, &current, &id).await? else {
        return Ok(redirect("/posts"));
    };

    let form = form.into_inner();
    post.revise(form.title, form.content);
    if let Err(e) = post.validate() {
        tracing::debug!(post_id = %post.id, "Post update rejected: {}", e);
        return Ok(redirect(format!("/posts/{}/edit", post.id)));
    }

    state.posts.update(post).await?;
    Ok(redirect("/posts"))
}

/// POST /posts/:id/delete
pub async fn destroy(
    current: CurrentUser,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    if let Some(post) = find_own_post(&state, &current, &id).await? {
        state.posts.delete(post.id).await?;
        tracing::debug!(post_id = %post.id, "Post deleted");
    }
    Ok(redirect("/posts"))
}

async fn find_own_post(
    state: &AppState,
    current: &CurrentUser,
    raw_id: &str,
) -> AppResult<Option<Post>> {
    let Some(id) = parse_id(raw_id) else {
        return Ok(None);
    };
    Ok(state.posts.find_owned(current.0.id, id).await?)
}
