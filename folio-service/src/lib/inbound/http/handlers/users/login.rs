use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::UserResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    login(state, body, Role::User).await
}

pub async fn login_admin(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    login(state, body, Role::Admin).await
}

async fn login(
    state: AppState,
    body: LoginRequest,
    role: Role,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    // An address that cannot exist cannot have an account either.
    let email = EmailAddress::new(email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let session = state
        .user_service
        .login(LoginCommand {
            email,
            password,
            role,
        })
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&session.user).into(),
            token: session.token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserResponseData,
    pub token: String,
}
