use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::UserResponseData;
use crate::domain::user::models::UpdateProfileCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Update the caller's own description and address.
pub async fn update_profile_info(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let command = UpdateProfileCommand {
        description: body.description,
        address: body.address,
        profile_picture: None,
    };

    state
        .user_service
        .update_profile(&caller.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// Unknown fields such as `password` or `role` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequest {
    description: Option<String>,
    address: Option<String>,
}
