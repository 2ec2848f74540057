use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::ImageUpload;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::ImageStore;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns the credential rules: uniform hashing for every role, global email
/// uniqueness, role-scoped login.
pub struct UserService<UR, IS>
where
    UR: UserRepository,
    IS: ImageStore,
{
    repository: Arc<UR>,
    image_store: Arc<IS>,
    authenticator: Arc<Authenticator>,
}

impl<UR, IS> UserService<UR, IS>
where
    UR: UserRepository,
    IS: ImageStore,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `image_store` - Image host used for profile pictures
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(
        repository: Arc<UR>,
        image_store: Arc<IS>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            repository,
            image_store,
            authenticator,
        }
    }

    async fn require_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<UR, IS> UserServicePort for UserService<UR, IS>
where
    UR: UserRepository,
    IS: ImageStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::Hashing(e.to_string()))?
                .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: command.role,
            profile_picture: None,
            description: None,
            address: None,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "Account registered"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .filter(|user| user.role == command.role)
            .ok_or(UserError::InvalidCredentials)?;

        // Argon2 runs on the blocking pool.
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash = user.password_hash.clone();
        let (user_id, role) = (user.id, user.role);
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, user_id, role)
        })
        .await
        .map_err(|e| UserError::Hashing(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => {
                tracing::error!(
                    user_id = %user_id,
                    error = %err,
                    "Stored password is not a valid hash"
                );
                UserError::InvalidCredentials
            }
            AuthenticationError::JwtError(err) => UserError::TokenIssue(err.to_string()),
        })?;

        Ok(Session {
            user,
            token: result.access_token,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.require_user(id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut user = self.require_user(id).await?;
        command.apply(&mut user);

        self.repository.update_profile(user).await
    }

    async fn upload_profile_picture(
        &self,
        id: &UserId,
        upload: ImageUpload,
    ) -> Result<User, UserError> {
        let mut user = self.require_user(id).await?;

        let url = self.image_store.upload(upload).await.map_err(|e| {
            tracing::error!(user_id = %id, error = %e, "Profile picture upload failed");
            UserError::from(e)
        })?;

        UpdateProfileCommand {
            profile_picture: Some(url),
            ..Default::default()
        }
        .apply(&mut user);

        self.repository.update_profile(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
