use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Validity window of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Identity assertion carried inside a token.
///
/// Binds a subject (user identifier) to a role for a fixed window.
/// `sub`, `role` and `exp` are mandatory: a token missing any of them is malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Role asserted for the subject
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an identity, valid for [`TOKEN_TTL_HOURS`] from now.
    pub fn for_identity(subject: impl ToString, role: Role) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        Self {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Override issued-at and expiration (Unix timestamps).
    pub fn with_window(mut self, iat: i64, exp: i64) -> Self {
        self.iat = iat;
        self.exp = exp;
        self
    }
}
