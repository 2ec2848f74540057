use axum::extract::State;
use axum::http::StatusCode;

use super::ProjectResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProjectResponseData>>, ApiError> {
    let projects = state.project_service.list_projects().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        projects.iter().map(ProjectResponseData::from).collect(),
    ))
}
