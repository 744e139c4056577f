//! Data Transfer Objects - the fields each form is allowed to submit.
//!
//! Missing fields deserialize as empty strings so they fail validation
//! instead of being rejected as malformed. Anything else in the body,
//! such as a `user_id`, is ignored.

use serde::{Deserialize, Serialize};

/// `POST /login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// `POST /signup`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /posts` and `POST /posts/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// `POST /users/:id`. A blank password keeps the current one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdateForm {
    pub username: String,
    pub email: String,
    pub password: String,
}
