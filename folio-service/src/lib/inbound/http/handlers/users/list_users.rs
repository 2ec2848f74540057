use axum::extract::State;
use axum::http::StatusCode;

use super::UserResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserResponseData>>, ApiError> {
    let users = state.user_service.list_users().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        users.iter().map(UserResponseData::from).collect(),
    ))
}
