use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::BlogResponseData;
use crate::blog::errors::BlogError;
use crate::domain::blog::models::CreateBlogCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_blog(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateBlogRequest>,
) -> Result<ApiSuccess<BlogResponseData>, ApiError> {
    let command = CreateBlogCommand::new(body.title, body.description, body.image)
        .map_err(BlogError::from)?;

    state
        .blog_service
        .create_blog(command, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBlogRequest {
    title: Option<String>,
    description: Option<String>,
    image: Option<String>,
}
