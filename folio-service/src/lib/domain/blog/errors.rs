use thiserror::Error;

use crate::domain::blog::models::BlogId;
use crate::domain::user::models::UserId;

/// Error type for BlogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for blog content validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogContentError {
    #[error("Title and description are required")]
    MissingFields,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TitleTooLong { max: usize, actual: usize },
}

/// Top-level error type for all blog-related operations
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Invalid blog ID: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error("{0}")]
    InvalidContent(#[from] BlogContentError),

    #[error("Search query is required")]
    EmptySearchQuery,

    #[error("Blog not found: {0}")]
    NotFound(BlogId),

    #[error("User {user_id} is not allowed to delete blog {blog_id}")]
    NotOwner { blog_id: BlogId, user_id: UserId },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Author lookup failed: {0}")]
    AuthorLookup(String),
}
