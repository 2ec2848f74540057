use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::EnrichedBlog;
use crate::domain::blog::models::SearchQuery;
use crate::domain::blog::models::VoteKind;
use crate::domain::blog::models::VoteOutcome;
use crate::domain::user::models::Principal;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// Create a blog owned by `created_by`.
    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        created_by: UserId,
    ) -> Result<Blog, BlogError>;

    /// All blogs, newest first, with authors resolved.
    ///
    /// Creators that no longer exist are reported as "Unknown".
    async fn list_blogs(&self) -> Result<Vec<EnrichedBlog>, BlogError>;

    /// Blogs whose title or description contains the query, ignoring case.
    async fn search_blogs(&self, query: &SearchQuery) -> Result<Vec<EnrichedBlog>, BlogError>;

    /// Blogs created by one user, newest first.
    async fn list_user_blogs(&self, user_id: &UserId) -> Result<Vec<EnrichedBlog>, BlogError>;

    /// Toggle a like or dislike of `user_id` on a blog.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn toggle_vote(
        &self,
        blog_id: &BlogId,
        user_id: UserId,
        kind: VoteKind,
    ) -> Result<VoteOutcome, BlogError>;

    /// Delete a blog on behalf of `principal`.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `NotOwner` - Principal is neither the creator nor an admin
    /// * `DatabaseError` - Database operation failed
    async fn delete_blog(&self, blog_id: &BlogId, principal: &Principal) -> Result<(), BlogError>;
}

/// Persistence operations for blog aggregate.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError>;

    /// All blogs, newest first.
    async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;

    /// Blogs matching an ILIKE pattern on title or description, newest first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Blog>, BlogError>;

    /// Blogs created by one user, newest first.
    async fn find_by_creator(&self, user_id: &UserId) -> Result<Vec<Blog>, BlogError>;

    /// Write the vote of one user, leaving other users' entries untouched.
    ///
    /// # Returns
    /// The blog after the write, or None if it no longer exists
    async fn set_vote(
        &self,
        id: &BlogId,
        user_id: &UserId,
        vote: Option<VoteKind>,
    ) -> Result<Option<Blog>, BlogError>;

    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;
}
