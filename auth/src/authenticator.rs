use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::role::Role;

/// Authentication coordinator combining password verification and token issuance.
///
/// Built once at startup from the configured signing secret and shared
/// read-only across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject` with `role`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to assert
    /// * `role` - Role to assert
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        role: Role,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, role)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    pub fn issue_token(&self, subject: impl ToString, role: Role) -> Result<String, JwtError> {
        self.jwt_handler.encode(&Claims::for_identity(subject, role))
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch
    /// * `Expired` - Validity window has elapsed
    /// * `Malformed` - Token absent or unparseable
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", Role::User)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.role, Role::User);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123", Role::Admin);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_verify_admin_token() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .issue_token("admin1", Role::Admin)
            .expect("Failed to generate token");

        let decoded = authenticator
            .verify_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.sub, "admin1");
        assert!(decoded.role.is_admin());
    }

    #[test]
    fn test_verify_token_from_other_secret() {
        let issuer = Authenticator::new(SECRET);
        let verifier = Authenticator::new(b"another_secret_key_at_least_32_bytes");

        let token = issuer.issue_token("user123", Role::User).unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(JwtError::InvalidToken)
        ));
    }
}
