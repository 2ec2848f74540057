use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Delete a blog the caller created. Admins may delete any blog here too.
pub async fn delete_blog(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
) -> Result<ApiSuccess<DeleteBlogResponseData>, ApiError> {
    delete(state, caller, &blog_id).await
}

/// Admin route; the admin gate has already run.
pub async fn admin_delete_blog(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
) -> Result<ApiSuccess<DeleteBlogResponseData>, ApiError> {
    delete(state, caller, &blog_id).await
}

async fn delete(
    state: AppState,
    caller: AuthenticatedUser,
    blog_id: &str,
) -> Result<ApiSuccess<DeleteBlogResponseData>, ApiError> {
    let blog_id = BlogId::from_string(blog_id).map_err(BlogError::from)?;

    state
        .blog_service
        .delete_blog(&blog_id, &caller.principal())
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteBlogResponseData {
            message: "Blog deleted".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBlogResponseData {
    pub message: String,
}
