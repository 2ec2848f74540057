use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::blog::models::Author;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::EnrichedBlog;

pub mod create_blog;
pub mod delete_blog;
pub mod list_blogs;
pub mod list_user_blogs;
pub mod search_blogs;
pub mod toggle_vote;

pub use create_blog::create_blog;
pub use delete_blog::admin_delete_blog;
pub use delete_blog::delete_blog;
pub use list_blogs::list_blogs;
pub use list_user_blogs::list_user_blogs;
pub use search_blogs::search_blogs;
pub use toggle_vote::dislike_blog;
pub use toggle_vote::like_blog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponseData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub likes: usize,
    pub dislikes: usize,
}

impl From<&Blog> for BlogResponseData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            description: blog.description.clone(),
            image: blog.image.clone(),
            created_by: blog.created_by.to_string(),
            created_at: blog.created_at,
            likes: blog.like_count(),
            dislikes: blog.dislike_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorData {
    pub id: String,
    pub name: String,
    pub profile_picture: Option<String>,
}

impl From<&Author> for AuthorData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.clone(),
            profile_picture: author.profile_picture.clone(),
        }
    }
}

/// Blog as listed to readers, with its author resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedBlogData {
    #[serde(flatten)]
    pub blog: BlogResponseData,
    pub author: AuthorData,
}

impl From<&EnrichedBlog> for EnrichedBlogData {
    fn from(enriched: &EnrichedBlog) -> Self {
        Self {
            blog: (&enriched.blog).into(),
            author: (&enriched.author).into(),
        }
    }
}

pub(crate) fn enriched_list(blogs: &[EnrichedBlog]) -> Vec<EnrichedBlogData> {
    blogs.iter().map(EnrichedBlogData::from).collect()
}
