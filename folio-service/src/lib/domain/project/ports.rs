use async_trait::async_trait;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::Project;

/// Port for project domain service operations.
#[async_trait]
pub trait ProjectServicePort: Send + Sync + 'static {
    async fn create_project(&self, command: CreateProjectCommand) -> Result<Project, ProjectError>;

    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError>;
}

/// Persistence operations for project aggregate.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    async fn create(&self, project: Project) -> Result<Project, ProjectError>;

    async fn list_all(&self) -> Result<Vec<Project>, ProjectError>;
}
