use thiserror::Error;

/// Error type for project type values outside 1..=3
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid project type. Must be 1, 2, or 3.")]
pub struct ProjectTypeError(pub Option<i64>);

/// Error type for project content validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectContentError {
    #[error("Title and description are required")]
    MissingFields,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TitleTooLong { max: usize, actual: usize },

    #[error("End date is not a valid RFC 3339 timestamp: {0}")]
    InvalidEndDate(String),
}

/// Top-level error type for all project-related operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    InvalidType(#[from] ProjectTypeError),

    #[error("{0}")]
    InvalidContent(#[from] ProjectContentError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
