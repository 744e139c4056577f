//! # Quill Shared
//!
//! Form bodies posted by the blog's HTML pages.

pub mod dto;

pub use dto::{LoginForm, PostForm, SignupForm, UserUpdateForm};
