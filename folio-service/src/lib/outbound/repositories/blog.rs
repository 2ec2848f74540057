use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::SearchQuery;
use crate::domain::blog::models::VoteKind;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::UserId;

const BLOG_COLUMNS: &str = "id, title, description, image, created_by, created_at, likes, dislikes";

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    description: String,
    image: Option<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    likes: Vec<Uuid>,
    dislikes: Vec<Uuid>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Blog {
            id: BlogId(row.id),
            title: row.title,
            description: row.description,
            image: row.image,
            created_by: UserId(row.created_by),
            created_at: row.created_at,
            likes: row.likes.into_iter().map(UserId).collect(),
            dislikes: row.dislikes.into_iter().map(UserId).collect(),
        }
    }
}

fn database_error(e: sqlx::Error) -> BlogError {
    BlogError::DatabaseError(e.to_string())
}

pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, title, description, image, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(blog.id.0)
        .bind(&blog.title)
        .bind(&blog.description)
        .bind(&blog.image)
        .bind(blog.created_by.0)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(blog)
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Blog::from))
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(&format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs
            WHERE title ILIKE $1 ESCAPE '\' OR description ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC
            "#
        ))
        .bind(query.like_pattern())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn find_by_creator(&self, user_id: &UserId) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn set_vote(
        &self,
        id: &BlogId,
        user_id: &UserId,
        vote: Option<VoteKind>,
    ) -> Result<Option<Blog>, BlogError> {
        // Only this user's entries are rewritten, so concurrent voters never
        // clobber each other.
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            r#"
            UPDATE blogs
            SET likes = array_remove(likes, $2)
                    || CASE WHEN $3 THEN ARRAY[$2]::uuid[] ELSE ARRAY[]::uuid[] END,
                dislikes = array_remove(dislikes, $2)
                    || CASE WHEN $4 THEN ARRAY[$2]::uuid[] ELSE ARRAY[]::uuid[] END
            WHERE id = $1
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(id.0)
        .bind(user_id.0)
        .bind(vote == Some(VoteKind::Like))
        .bind(vote == Some(VoteKind::Dislike))
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Blog::from))
    }

    async fn delete(&self, id: &BlogId) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(*id));
        }

        Ok(())
    }
}
