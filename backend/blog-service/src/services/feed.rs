/// Feed service - ordered, paginated post listings
///
/// Repositories hand back the full result ordered newest-first; the pure
/// paginator slices it into the requested page. Pages are not snapshot
/// consistent with each other: a post created between two page fetches may
/// shift offsets, which callers accept for a chronological feed.
use crate::db::{group_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Group, Post, User};
use pagination::{paginate, Page};
use sqlx::PgPool;
use uuid::Uuid;

pub struct FeedService {
    pool: PgPool,
    posts_per_page: usize,
}

impl FeedService {
    pub fn new(pool: PgPool, posts_per_page: usize) -> Self {
        Self {
            pool,
            posts_per_page,
        }
    }

    /// Front page: every post, newest first.
    pub async fn page_all(&self, page_number: u32) -> Result<Page<Post>> {
        let posts = post_repo::list_all(&self.pool).await?;
        Ok(paginate(posts, self.posts_per_page, page_number))
    }

    /// A group's page. Unknown slugs are a not-found error; a group with
    /// no posts is a valid, empty page.
    pub async fn page_by_group(&self, slug: &str, page_number: u32) -> Result<(Group, Page<Post>)> {
        let group = group_repo::find_by_slug(&self.pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("group {slug}")))?;

        let posts = post_repo::list_by_group(&self.pool, group.id).await?;
        Ok((group, paginate(posts, self.posts_per_page, page_number)))
    }

    /// An author's profile page: their posts plus a total count.
    pub async fn page_by_author(
        &self,
        username: &str,
        page_number: u32,
    ) -> Result<(User, Page<Post>)> {
        let author = user_repo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {username}")))?;

        let posts = post_repo::list_by_author(&self.pool, author.id).await?;
        Ok((author, paginate(posts, self.posts_per_page, page_number)))
    }

    /// The personal feed: posts by every author the user follows, newest
    /// first. Following nobody yields an empty page, not an error.
    pub async fn page_following(&self, user_id: Uuid, page_number: u32) -> Result<Page<Post>> {
        let posts = post_repo::list_by_followed(&self.pool, user_id).await?;
        Ok(paginate(posts, self.posts_per_page, page_number))
    }

    /// How many posts an author has published (shown on detail pages).
    pub async fn author_post_count(&self, author_id: Uuid) -> Result<i64> {
        Ok(post_repo::count_by_author(&self.pool, author_id).await?)
    }
}
