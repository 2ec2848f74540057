//! Authentication utilities library
//!
//! Provides the credential and identity-assertion primitives of the service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited identity tokens binding a subject to a [`Role`]
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123", Role::User).unwrap();
//!
//! // Validate token
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.role, Role::User);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod role;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TOKEN_TTL_HOURS;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
pub use role::UnknownRole;
