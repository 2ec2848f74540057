use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::VoteKind;
use crate::domain::blog::models::VoteOutcome;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn like_blog(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
) -> Result<ApiSuccess<VoteResponseData>, ApiError> {
    toggle(state, caller, &blog_id, VoteKind::Like).await
}

pub async fn dislike_blog(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
) -> Result<ApiSuccess<VoteResponseData>, ApiError> {
    toggle(state, caller, &blog_id, VoteKind::Dislike).await
}

async fn toggle(
    state: AppState,
    caller: AuthenticatedUser,
    blog_id: &str,
    kind: VoteKind,
) -> Result<ApiSuccess<VoteResponseData>, ApiError> {
    let blog_id = BlogId::from_string(blog_id).map_err(BlogError::from)?;

    state
        .blog_service
        .toggle_vote(&blog_id, caller.user_id, kind)
        .await
        .map_err(ApiError::from)
        .map(|ref outcome| ApiSuccess::new(StatusCode::OK, outcome.into()))
}

/// Counts after the toggle and the caller's resulting vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponseData {
    pub blog_id: String,
    pub likes: usize,
    pub dislikes: usize,
    pub liked: bool,
    pub disliked: bool,
}

impl From<&VoteOutcome> for VoteResponseData {
    fn from(outcome: &VoteOutcome) -> Self {
        Self {
            blog_id: outcome.blog.id.to_string(),
            likes: outcome.blog.like_count(),
            dislikes: outcome.blog.dislike_count(),
            liked: outcome.vote == Some(VoteKind::Like),
            disliked: outcome.vote == Some(VoteKind::Dislike),
        }
    }
}
