//! Domain entities - the core business objects.

mod post;
mod user;
pub mod validation;

pub use post::Post;
pub use user::{User, slugify};
