use axum::extract::State;
use axum::http::StatusCode;

use super::enriched_list;
use super::EnrichedBlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EnrichedBlogData>>, ApiError> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(ApiSuccess::new(StatusCode::OK, enriched_list(&blogs)))
}
