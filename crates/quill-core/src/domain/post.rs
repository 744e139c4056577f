use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::require_present;
use crate::error::DomainError;

/// Post entity - a blog post written by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(user_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content. The author never changes.
    pub fn revise(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_present("title", &self.title)?;
        require_present("content", &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title_and_content() {
        let author = Uuid::new_v4();
        assert!(Post::new(author, "post".into(), "posting!".into()).validate().is_ok());
        assert!(Post::new(author, "".into(), "posting!".into()).validate().is_err());
        assert!(Post::new(author, "post".into(), " ".into()).validate().is_err());
    }

    #[test]
    fn test_revise_keeps_author_and_id() {
        let author = Uuid::new_v4();
        let mut post = Post::new(author, "post".into(), "posting!".into());
        let id = post.id;

        post.revise("love".into(), "i love posting".into());

        assert_eq!(post.id, id);
        assert_eq!(post.user_id, author);
        assert_eq!(post.title, "love");
        assert_eq!(post.content, "i love posting");
        assert!(post.updated_at >= post.created_at);
    }
}
