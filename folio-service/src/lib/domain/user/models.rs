use std::fmt;
use std::str::FromStr;

pub use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::NameError;
use crate::user::errors::UploadError;
use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// `password_hash` is always a PHC hash string, whatever the role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub profile_picture: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Caller identity as resolved by the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Display name value type
///
/// Trimmed, non-empty, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, NameError> {
        let name = name.trim();
        let length = name.chars().count();
        if length == 0 {
            Err(NameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validated with an RFC 5322 parser and normalised to trimmed lowercase,
/// so uniqueness checks are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new account.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password: String,
    pub role: Role,
}

impl RegisterUserCommand {
    /// Construct a register command.
    ///
    /// # Arguments
    /// * `password` - Plain text password (hashed by the service)
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    pub fn new(
        name: DisplayName,
        email: EmailAddress,
        password: String,
        role: Role,
    ) -> Result<Self, UserError> {
        if password.is_empty() {
            return Err(UserError::EmptyPassword);
        }

        Ok(Self {
            name,
            email,
            password,
            role,
        })
    }
}

/// Command to log into an account of a given role.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
    pub role: Role,
}

/// Token issued on successful login, with the account it was issued for.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Partial profile update. Only provided fields change.
///
/// There is no way to reach the password or role through this command.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub description: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
}

impl UpdateProfileCommand {
    pub fn apply(self, user: &mut User) {
        if let Some(description) = self.description {
            user.description = Some(description);
        }
        if let Some(address) = self.address {
            user.address = Some(address);
        }
        if let Some(profile_picture) = self.profile_picture {
            user.profile_picture = Some(profile_picture);
        }
    }
}

/// Validated image file destined for the image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validate an uploaded file.
    ///
    /// # Errors
    /// * `Empty` - No bytes
    /// * `NotAnImage` - Content type is not `image/*`
    /// * `TooLarge` - More than `max_bytes`
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
        max_bytes: usize,
    ) -> Result<Self, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(UploadError::TooLarge {
                max: max_bytes,
                actual: bytes.len(),
            });
        }

        let content_type = content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(UploadError::NotAnImage(if content_type.is_empty() {
                "unknown content type".to_string()
            } else {
                content_type
            }));
        }

        let file_name = file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}
