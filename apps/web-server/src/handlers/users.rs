//! User directory and profile pages.

use actix_web::{HttpResponse, web};

use quill_shared::UserUpdateForm;

use super::parse_id;
use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{UserEditPage, UserShowPage, UsersIndexPage, redirect, render};

/// GET /users
pub async fn index(_current: CurrentUser, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.all().await?;
    render(&UsersIndexPage { users })
}

/// GET /users/:slug
pub async fn show(
    current: CurrentUser,
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(user) = state.users.find_by_slug(&slug).await? else {
        tracing::debug!(slug = %slug, "No user for slug");
        return Ok(redirect("/posts"));
    };

    let posts = state.posts.find_by_user_id(user.id).await?;
    let own_profile = current.0.id == user.id;
    render(&UserShowPage {
        user,
        posts,
        own_profile,
    })
}

/// GET /users/:slug/edit - own profile only
pub async fn edit(
    current: CurrentUser,
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    match state.users.find_by_slug(&slug).await? {
        Some(user) if user.id == current.0.id => render(&UserEditPage { user }),
        _ => Ok(redirect("/login")),
    }
}

/// POST /users/:id - own profile only
pub async fn update(
    current: CurrentUser,
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<UserUpdateForm>,
) -> AppResult<HttpResponse> {
    let mut user = current.into_inner();
    if parse_id(&id) != Some(user.id) {
        tracing::warn!(user_id = %user.id, target = %id, "Refusing to update another user's profile");
        return Ok(redirect("/login"));
    }

    let form = form.into_inner();
    let edit_page = format!("/users/{}/edit", user.slug_segment());
    let password_hash = match form.password.as_str() {
        "" => None,
        password => Some(state.passwords.hash(password)?),
    };

    user.revise(form.username, form.email, password_hash);
    if let Err(e) = user.validate() {
        tracing::debug!("Profile update rejected: {}", e);
        return Ok(redirect(edit_page));
    }

    let user = state.users.update(user).await?;
    Ok(redirect(format!("/users/{}", user.slug_segment())))
}
