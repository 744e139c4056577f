//! Server-rendered pages and the redirect helper.

use actix_web::{HttpResponse, http::header, http::header::ContentType};
use askama::Template;

use quill_core::domain::{Post, User};

use crate::middleware::error::AppResult;

/// `302 Found` pointing at `location`.
pub fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

pub fn render<T: Template>(page: &T) -> AppResult<HttpResponse> {
    let body = page.render()?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub user: User,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage;

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage;

#[derive(Template)]
#[template(path = "users/index.html")]
pub struct UsersIndexPage {
    pub users: Vec<User>,
}

#[derive(Template)]
#[template(path = "users/show.html")]
pub struct UserShowPage {
    pub user: User,
    pub posts: Vec<Post>,
    pub own_profile: bool,
}

#[derive(Template)]
#[template(path = "users/edit.html")]
pub struct UserEditPage {
    pub user: User,
}

#[derive(Template)]
#[template(path = "posts/index.html")]
pub struct PostsIndexPage {
    pub user: User,
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "posts/new.html")]
pub struct NewPostPage;

#[derive(Template)]
#[template(path = "posts/show.html")]
pub struct PostShowPage {
    pub post: Post,
    pub author: String,
    /// Show the edit and delete controls.
    pub can_manage: bool,
}

#[derive(Template)]
#[template(path = "posts/edit.html")]
pub struct EditPostPage {
    pub post: Post,
}
