use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::enriched_list;
use super::EnrichedBlogData;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_user_blogs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<Vec<EnrichedBlogData>>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let blogs = state.blog_service.list_user_blogs(&user_id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, enriched_list(&blogs)))
}
