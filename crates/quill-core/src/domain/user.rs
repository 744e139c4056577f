use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Post;
use super::validation::require_present;
use crate::error::DomainError;

/// User entity - an author who signs in and owns posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bytes left as-is in a profile path segment.
const SLUG_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// Profile URL key for a username: lowercased, spaces become hyphens.
pub fn slugify(username: &str) -> String {
    username.to_lowercase().replace(' ', "-")
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile edit. `None` keeps the current password hash.
    pub fn revise(&mut self, username: String, email: String, password_hash: Option<String>) {
        self.username = username;
        self.email = email;
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
        self.updated_at = Utc::now();
    }

    pub fn slug(&self) -> String {
        slugify(&self.username)
    }

    /// The slug percent-encoded for use as a single `/users/{slug}` path segment.
    pub fn slug_segment(&self) -> String {
        utf8_percent_encode(&self.slug(), SLUG_SEGMENT).to_string()
    }

    /// Reverses [`slugify`] by turning hyphens back into spaces.
    ///
    /// Usernames that contain their own hyphens can't be told apart from
    /// spaced ones, so `"mary-jane"` and `"Mary Jane"` share a slug.
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.username.to_lowercase() == slug.to_lowercase().replace('-', " ")
    }

    pub fn owns(&self, post: &Post) -> bool {
        post.user_id == self.id
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_present("username", &self.username)?;
        require_present("email", &self.email)
    }
}
