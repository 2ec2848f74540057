use async_trait::async_trait;

use crate::domain::user::models::ImageUpload;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::ImageStoreError;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account of any role.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Any account already uses this email
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials for the requested role and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, role mismatch, or wrong password
    /// * `TokenIssue` - Token generation failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<Session, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve every user.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Apply a partial profile update.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Push an image to the image host and store its URL as the profile picture.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `ImageStore` - Image host failed
    /// * `DatabaseError` - Database operation failed
    async fn upload_profile_picture(
        &self,
        id: &UserId,
        upload: ImageUpload,
    ) -> Result<User, UserError>;

    /// Delete a user. Blogs created by the user are left in place.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique index on email was violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by (normalised) email address.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Retrieve multiple users by identifiers.
    ///
    /// Missing IDs are skipped without error.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;

    /// Write profile fields (description, address, profile picture).
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}

/// External image hosting.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Store an image and return its durable public URL.
    ///
    /// # Errors
    /// * `RequestFailed` - Host unreachable
    /// * `Rejected` - Host answered with a non-success status
    /// * `InvalidResponse` - Success response without a URL
    async fn upload(&self, upload: ImageUpload) -> Result<String, ImageStoreError>;
}
