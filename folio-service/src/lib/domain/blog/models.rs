use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::errors::BlogContentError;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::errors::BlogIdError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Blog unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, BlogIdError> {
        Uuid::parse_str(s)
            .map(BlogId)
            .map_err(|e| BlogIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BlogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog post aggregate.
///
/// A user id appears in at most one of `likes` and `dislikes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<UserId>,
    pub dislikes: Vec<UserId>,
}

/// Kind of vote a user casts on a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Like,
    Dislike,
}

impl Blog {
    /// Current vote of `user_id`, if any.
    pub fn vote_of(&self, user_id: &UserId) -> Option<VoteKind> {
        if self.likes.contains(user_id) {
            Some(VoteKind::Like)
        } else if self.dislikes.contains(user_id) {
            Some(VoteKind::Dislike)
        } else {
            None
        }
    }

    /// Vote `user_id` ends up with after toggling `kind`.
    ///
    /// Toggling the vote already held clears it; any other toggle replaces it.
    pub fn toggled_vote(&self, user_id: &UserId, kind: VoteKind) -> Option<VoteKind> {
        match self.vote_of(user_id) {
            Some(current) if current == kind => None,
            _ => Some(kind),
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn dislike_count(&self) -> usize {
        self.dislikes.len()
    }
}

/// In-memory mirror of `BlogRepository::set_vote`, for mocks and model tests.
#[cfg(test)]
impl Blog {
    pub fn set_vote(&mut self, user_id: UserId, vote: Option<VoteKind>) {
        self.likes.retain(|id| *id != user_id);
        self.dislikes.retain(|id| *id != user_id);

        match vote {
            Some(VoteKind::Like) => self.likes.push(user_id),
            Some(VoteKind::Dislike) => self.dislikes.push(user_id),
            None => {}
        }
    }
}

/// Command to create a blog with validated content
#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl CreateBlogCommand {
    const MAX_TITLE_LENGTH: usize = 200;

    pub fn new(
        title: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, BlogContentError> {
        let title = title.map(|t| t.trim().to_string()).unwrap_or_default();
        let description = description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        if title.is_empty() || description.is_empty() {
            return Err(BlogContentError::MissingFields);
        }

        let length = title.chars().count();
        if length > Self::MAX_TITLE_LENGTH {
            return Err(BlogContentError::TitleTooLong {
                max: Self::MAX_TITLE_LENGTH,
                actual: length,
            });
        }

        Ok(Self {
            title,
            description,
            image: image.filter(|url| !url.trim().is_empty()),
        })
    }
}

/// Case-insensitive substring search over title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: Option<String>) -> Result<Self, BlogError> {
        let query = query.unwrap_or_default().trim().to_string();
        if query.is_empty() {
            return Err(BlogError::EmptySearchQuery);
        }
        Ok(Self(query))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ILIKE pattern matching the query literally anywhere in a column.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Denormalised author details shown next to a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub name: String,
    pub profile_picture: Option<String>,
}

impl Author {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Placeholder for a creator whose account no longer exists.
    pub fn unknown(id: UserId) -> Self {
        Self {
            id,
            name: Self::UNKNOWN_NAME.to_string(),
            profile_picture: None,
        }
    }
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.as_str().to_string(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}

/// Blog with its author resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBlog {
    pub blog: Blog,
    pub author: Author,
}

/// Result of a like/dislike toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome {
    pub blog: Blog,
    pub vote: Option<VoteKind>,
}
