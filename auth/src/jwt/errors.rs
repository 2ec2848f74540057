use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Absent, not structurally parseable, or missing a required claim.
    #[error("Token is malformed: {0}")]
    Malformed(String),

    /// Signature does not match the configured secret.
    #[error("Token signature is invalid")]
    InvalidToken,

    #[error("Token is expired")]
    Expired,
}
