use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::UserResponseData;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    register(state, body, Role::User).await
}

pub async fn register_admin(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    register(state, body, Role::Admin).await
}

async fn register(
    state: AppState,
    body: RegisterRequest,
    role: Role,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .user_service
        .register(body.try_into_command(role)?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration. Missing fields are reported as 400.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self, role: Role) -> Result<RegisterUserCommand, UserError> {
        let name = DisplayName::new(self.name.unwrap_or_default())?;
        let email = EmailAddress::new(self.email.unwrap_or_default())?;
        RegisterUserCommand::new(name, email, self.password.unwrap_or_default(), role)
    }
}
