use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::enriched_list;
use super::EnrichedBlogData;
use crate::domain::blog::models::SearchQuery;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn search_blogs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<ApiSuccess<Vec<EnrichedBlogData>>, ApiError> {
    let query = SearchQuery::new(params.q)?;
    let blogs = state.blog_service.search_blogs(&query).await?;

    Ok(ApiSuccess::new(StatusCode::OK, enriched_list(&blogs)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}
