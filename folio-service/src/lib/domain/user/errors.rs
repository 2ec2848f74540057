use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is required")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for profile picture upload validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file uploaded")]
    Missing,

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Only image files are allowed, got {0}")]
    NotAnImage(String),

    #[error("File too large: maximum {max} bytes, got {actual}")]
    TooLarge { max: usize, actual: usize },
}

/// Error for the external image host
#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    #[error("Image host request failed: {0}")]
    RequestFailed(String),

    #[error("Image host rejected the upload with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Image host returned an unexpected response: {0}")]
    InvalidResponse(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password is required")]
    EmptyPassword,

    #[error("Invalid upload: {0}")]
    InvalidUpload(#[from] UploadError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("An account with email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssue(String),

    #[error("{0}")]
    ImageStore(#[from] ImageStoreError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
