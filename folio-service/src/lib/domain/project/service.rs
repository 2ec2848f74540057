use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::project::ports::ProjectServicePort;

pub struct ProjectService<PR>
where
    PR: ProjectRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProjectService<PR>
where
    PR: ProjectRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProjectServicePort for ProjectService<PR>
where
    PR: ProjectRepository,
{
    async fn create_project(&self, command: CreateProjectCommand) -> Result<Project, ProjectError> {
        let project = Project {
            id: ProjectId::new(),
            title: command.title,
            description: command.description,
            project_type: command.project_type,
            images: command.images,
            created_at: Utc::now(),
            end_date: command.end_date,
        };

        let project = self.repository.create(project).await?;
        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError> {
        self.repository.list_all().await
    }
}
