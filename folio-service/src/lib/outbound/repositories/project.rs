use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::models::ProjectType;
use crate::domain::project::ports::ProjectRepository;

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    description: String,
    project_type: i16,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = ProjectError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: ProjectId(row.id),
            title: row.title,
            description: row.description,
            project_type: ProjectType::try_from(i64::from(row.project_type))?,
            images: row.images,
            created_at: row.created_at,
            end_date: row.end_date,
        })
    }
}

pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn create(&self, project: Project) -> Result<Project, ProjectError> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, title, description, project_type, images, created_at, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(project.id.0)
        .bind(&project.title)
        .bind(&project.description)
        .bind(i16::from(project.project_type.value()))
        .bind(&project.images)
        .bind(project.created_at)
        .bind(project.end_date)
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        Ok(project)
    }

    async fn list_all(&self) -> Result<Vec<Project>, ProjectError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, project_type, images, created_at, end_date
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Project::try_from).collect()
    }
}
