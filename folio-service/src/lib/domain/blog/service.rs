use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::BlogError;
use super::models::Author;
use super::models::Blog;
use super::models::BlogId;
use super::models::CreateBlogCommand;
use super::models::EnrichedBlog;
use super::models::SearchQuery;
use super::models::VoteKind;
use super::models::VoteOutcome;
use super::ports::BlogRepository;
use super::ports::BlogServicePort;
use crate::domain::user::models::Principal;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Concrete implementation of BlogServicePort.
///
/// Reads authors through the user repository to enrich listings.
/// Generic over repositories for testability.
pub struct BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    blog_repository: Arc<BR>,
    user_repository: Arc<UR>,
}

impl<BR, UR> BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    pub fn new(blog_repository: Arc<BR>, user_repository: Arc<UR>) -> Self {
        Self {
            blog_repository,
            user_repository,
        }
    }

    async fn enrich(&self, blogs: Vec<Blog>) -> Result<Vec<EnrichedBlog>, BlogError> {
        let creator_ids: Vec<UserId> = blogs
            .iter()
            .map(|blog| blog.created_by)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if creator_ids.is_empty() {
            return Ok(Vec::new());
        }

        let authors: HashMap<UserId, Author> = self
            .user_repository
            .find_by_ids(&creator_ids)
            .await
            .map_err(|e| BlogError::AuthorLookup(e.to_string()))?
            .iter()
            .map(|user| (user.id, Author::from(user)))
            .collect();

        Ok(blogs
            .into_iter()
            .map(|blog| {
                let author = authors
                    .get(&blog.created_by)
                    .cloned()
                    .unwrap_or_else(|| Author::unknown(blog.created_by));
                EnrichedBlog { blog, author }
            })
            .collect())
    }
}

#[async_trait]
impl<BR, UR> BlogServicePort for BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        created_by: UserId,
    ) -> Result<Blog, BlogError> {
        let blog = Blog {
            id: BlogId::new(),
            title: command.title,
            description: command.description,
            image: command.image,
            created_by,
            created_at: Utc::now(),
            likes: Vec::new(),
            dislikes: Vec::new(),
        };

        self.blog_repository.create(blog).await
    }

    async fn list_blogs(&self) -> Result<Vec<EnrichedBlog>, BlogError> {
        let blogs = self.blog_repository.list_all().await?;
        self.enrich(blogs).await
    }

    async fn search_blogs(&self, query: &SearchQuery) -> Result<Vec<EnrichedBlog>, BlogError> {
        let blogs = self.blog_repository.search(query).await?;
        self.enrich(blogs).await
    }

    async fn list_user_blogs(&self, user_id: &UserId) -> Result<Vec<EnrichedBlog>, BlogError> {
        let blogs = self.blog_repository.find_by_creator(user_id).await?;
        self.enrich(blogs).await
    }

    // Read-modify-write without a version check: two concurrent toggles by the
    // same user on the same blog are last-write-wins.
    async fn toggle_vote(
        &self,
        blog_id: &BlogId,
        user_id: UserId,
        kind: VoteKind,
    ) -> Result<VoteOutcome, BlogError> {
        let blog = self
            .blog_repository
            .find_by_id(blog_id)
            .await?
            .ok_or(BlogError::NotFound(*blog_id))?;

        let vote = blog.toggled_vote(&user_id, kind);

        let blog = self
            .blog_repository
            .set_vote(blog_id, &user_id, vote)
            .await?
            .ok_or(BlogError::NotFound(*blog_id))?;

        Ok(VoteOutcome { blog, vote })
    }

    async fn delete_blog(&self, blog_id: &BlogId, principal: &Principal) -> Result<(), BlogError> {
        let blog = self
            .blog_repository
            .find_by_id(blog_id)
            .await?
            .ok_or(BlogError::NotFound(*blog_id))?;

        if blog.created_by != principal.user_id && !principal.is_admin() {
            tracing::warn!(
                blog_id = %blog_id,
                user_id = %principal.user_id,
                "Rejected delete of a blog owned by another user"
            );
            return Err(BlogError::NotOwner {
                blog_id: *blog_id,
                user_id: principal.user_id,
            });
        }

        self.blog_repository.delete(blog_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::DisplayName;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Role;
    use crate::domain::user::models::User;

    mock! {
        pub TestBlogRepository {}

        #[async_trait]
        impl BlogRepository for TestBlogRepository {
            async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;
            async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError>;
            async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;
            async fn search(&self, query: &SearchQuery) -> Result<Vec<Blog>, BlogError>;
            async fn find_by_creator(&self, user_id: &UserId) -> Result<Vec<Blog>, BlogError>;
            async fn set_vote(&self, id: &BlogId, user_id: &UserId, vote: Option<VoteKind>) -> Result<Option<Blog>, BlogError>;
            async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
            async fn update_profile(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn blog_by(created_by: UserId) -> Blog {
        Blog {
            id: BlogId::new(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            image: None,
            created_by,
            created_at: Utc::now(),
            likes: Vec::new(),
            dislikes: Vec::new(),
        }
    }

    fn user(id: UserId, name: &str) -> User {
        User {
            id,
            name: DisplayName::new(name.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: Role::User,
            profile_picture: Some(format!("https://img.example.com/{}.png", name)),
            description: None,
            address: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_blog_sets_creator() {
        let mut blog_repository = MockTestBlogRepository::new();
        let creator = UserId::new();

        blog_repository
            .expect_create()
            .withf(move |blog| {
                blog.created_by == creator && blog.likes.is_empty() && blog.dislikes.is_empty()
            })
            .times(1)
            .returning(|blog| Ok(blog));

        let service = BlogService::new(
            Arc::new(blog_repository),
            Arc::new(MockTestUserRepository::new()),
        );

        let command =
            CreateBlogCommand::new(Some("Hello".to_string()), Some("World".to_string()), None)
                .unwrap();
        let blog = service.create_blog(command, creator).await.unwrap();
        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.created_by, creator);
    }

    #[tokio::test]
    async fn test_list_blogs_tolerates_deleted_author() {
        let mut blog_repository = MockTestBlogRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        let alice = UserId::new();
        let ghost = UserId::new();
        let blogs = vec![blog_by(alice), blog_by(ghost), blog_by(alice)];

        blog_repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(blogs.clone()));
        user_repository
            .expect_find_by_ids()
            .withf(move |ids| ids.len() == 2 && ids.contains(&alice) && ids.contains(&ghost))
            .times(1)
            .returning(move |_| Ok(vec![user(alice, "Alice")]));

        let service = BlogService::new(Arc::new(blog_repository), Arc::new(user_repository));

        let enriched = service.list_blogs().await.unwrap();
        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].author.name, "Alice");
        assert_eq!(
            enriched[0].author.profile_picture.as_deref(),
            Some("https://img.example.com/Alice.png")
        );
        assert_eq!(enriched[1].author.name, "Unknown");
        assert_eq!(enriched[1].author.id, ghost);
        assert_eq!(enriched[2].author.name, "Alice");
    }

    #[tokio::test]
    async fn test_list_blogs_empty_skips_author_lookup() {
        let mut blog_repository = MockTestBlogRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        blog_repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(Vec::new()));
        user_repository.expect_find_by_ids().times(0);

        let service = BlogService::new(Arc::new(blog_repository), Arc::new(user_repository));

        assert!(service.list_blogs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_like_on_liked_blog_clears_vote() {
        let mut blog_repository = MockTestBlogRepository::new();

        let voter = UserId::new();
        let mut blog = blog_by(UserId::new());
        blog.likes.push(voter);
        let blog_id = blog.id;

        let stored = blog.clone();
        blog_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        blog_repository
            .expect_set_vote()
            .withf(move |id, user_id, vote| *id == blog_id && *user_id == voter && vote.is_none())
            .times(1)
            .returning(move |_, user_id, vote| {
                let mut updated = blog.clone();
                updated.set_vote(*user_id, vote);
                Ok(Some(updated))
            });

        let service = BlogService::new(
            Arc::new(blog_repository),
            Arc::new(MockTestUserRepository::new()),
        );

        let outcome = service
            .toggle_vote(&blog_id, voter, VoteKind::Like)
            .await
            .unwrap();
        assert_eq!(outcome.vote, None);
        assert_eq!(outcome.blog.like_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_dislike_replaces_like() {
        let mut blog_repository = MockTestBlogRepository::new();

        let voter = UserId::new();
        let mut blog = blog_by(UserId::new());
        blog.likes.push(voter);
        let blog_id = blog.id;

        let stored = blog.clone();
        blog_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        blog_repository
            .expect_set_vote()
            .withf(|_, _, vote| *vote == Some(VoteKind::Dislike))
            .times(1)
            .returning(move |_, user_id, vote| {
                let mut updated = blog.clone();
                updated.set_vote(*user_id, vote);
                Ok(Some(updated))
            });

        let service = BlogService::new(
            Arc::new(blog_repository),
            Arc::new(MockTestUserRepository::new()),
        );

        let outcome = service
            .toggle_vote(&blog_id, voter, VoteKind::Dislike)
            .await
            .unwrap();
        assert_eq!(outcome.vote, Some(VoteKind::Dislike));
        assert_eq!(outcome.blog.like_count(), 0);
        assert_eq!(outcome.blog.dislike_count(), 1);
    }

    #[tokio::test]
    async fn test_toggle_vote_missing_blog() {
        let mut blog_repository = MockTestBlogRepository::new();

        blog_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        blog_repository.expect_set_vote().times(0);

        let service = BlogService::new(
            Arc::new(blog_repository),
            Arc::new(MockTestUserRepository::new()),
        );

        let result = service
            .toggle_vote(&BlogId::new(), UserId::new(), VoteKind::Like)
            .await;
        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_blog_by_non_owner_is_rejected() {
        let mut blog_repository = MockTestBlogRepository::new();

        let blog = blog_by(UserId::new());
        let blog_id = blog.id;
        blog_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(blog.clone())));
        blog_repository.expect_delete().times(0);

        let service = BlogService::new(
            Arc::new(blog_repository),
            Arc::new(MockTestUserRepository::new()),
        );

        let intruder = Principal {
            user_id: UserId::new(),
            role: Role::User,
        };
        let result = service.delete_blog(&blog_id, &intruder).await;
        assert!(matches!(result, Err(BlogError::NotOwner { .. })));
    }

    #[tokio::test]
    async fn test_delete_blog_by_owner_or_admin() {
        let owner = UserId::new();
        let principals = [
            Principal {
                user_id: owner,
                role: Role::User,
            },
            Principal {
                user_id: UserId::new(),
                role: Role::Admin,
            },
        ];

        for principal in principals {
            let mut blog_repository = MockTestBlogRepository::new();

            let blog = blog_by(owner);
            let blog_id = blog.id;
            blog_repository
                .expect_find_by_id()
                .times(1)
                .returning(move |_| Ok(Some(blog.clone())));
            blog_repository
                .expect_delete()
                .withf(move |id| *id == blog_id)
                .times(1)
                .returning(|_| Ok(()));

            let service = BlogService::new(
                Arc::new(blog_repository),
                Arc::new(MockTestUserRepository::new()),
            );

            assert!(service.delete_blog(&blog_id, &principal).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_delete_missing_blog() {
        let mut blog_repository = MockTestBlogRepository::new();
        blog_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BlogService::new(
            Arc::new(blog_repository),
            Arc::new(MockTestUserRepository::new()),
        );

        let admin = Principal {
            user_id: UserId::new(),
            role: Role::Admin,
        };
        let result = service.delete_blog(&BlogId::new(), &admin).await;
        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }
}
