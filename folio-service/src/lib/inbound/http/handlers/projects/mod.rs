use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::project::models::Project;

pub mod create_project;
pub mod list_projects;

pub use create_project::create_project;
pub use list_projects::list_projects;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponseData {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: u8,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<&Project> for ProjectResponseData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            project_type: project.project_type.value(),
            images: project.images.clone(),
            created_at: project.created_at,
            end_date: project.end_date,
        }
    }
}
