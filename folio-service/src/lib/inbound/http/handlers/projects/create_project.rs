use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::ProjectResponseData;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::errors::ProjectTypeError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::ProjectType;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<ApiSuccess<ProjectResponseData>, ApiError> {
    state
        .project_service
        .create_project(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::new(StatusCode::CREATED, project.into()))
}

/// HTTP request body for a new project.
///
/// `type` is accepted as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    project_type: Option<Value>,
    images: Option<Vec<String>>,
    end_date: Option<String>,
}

impl CreateProjectRequest {
    fn try_into_command(self) -> Result<CreateProjectCommand, ProjectError> {
        let project_type = parse_project_type(self.project_type.as_ref())?;

        Ok(CreateProjectCommand::new(
            self.title,
            self.description,
            project_type,
            self.images.unwrap_or_default(),
            self.end_date,
        )?)
    }
}

fn parse_project_type(value: Option<&Value>) -> Result<ProjectType, ProjectTypeError> {
    let number = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    number
        .ok_or(ProjectTypeError(None))
        .and_then(ProjectType::try_from)
}
