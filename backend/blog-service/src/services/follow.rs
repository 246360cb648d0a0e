/// Follow service - the directed "reader follows author" graph
use crate::db::{follow_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::User;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Follow the author named `author_username`. Idempotent: an existing
    /// edge is left alone, and a self-follow is silently dropped rather
    /// than surfaced as an error.
    pub async fn follow(&self, follower_id: Uuid, author_username: &str) -> Result<()> {
        let author = self.resolve_author(author_username).await?;

        if author.id == follower_id {
            debug!(user = %author_username, "ignoring self-follow");
            return Ok(());
        }

        let inserted = follow_repo::create_follow(&self.pool, follower_id, author.id).await?;
        if inserted {
            info!(follower = %follower_id, author = %author.username, "follow created");
        }

        Ok(())
    }

    /// Remove the follow edge toward `author_username` if present.
    pub async fn unfollow(&self, follower_id: Uuid, author_username: &str) -> Result<()> {
        let author = self.resolve_author(author_username).await?;

        let removed = follow_repo::delete_follow(&self.pool, follower_id, author.id).await?;
        if removed {
            info!(follower = %follower_id, author = %author.username, "follow removed");
        }

        Ok(())
    }

    /// Whether `follower_id` currently follows `author_id`.
    pub async fn is_following(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool> {
        Ok(follow_repo::exists(&self.pool, follower_id, author_id).await?)
    }

    /// Every author the given user follows.
    pub async fn followed_authors(&self, user_id: Uuid) -> Result<Vec<User>> {
        Ok(follow_repo::followed_authors(&self.pool, user_id).await?)
    }

    async fn resolve_author(&self, username: &str) -> Result<User> {
        user_repo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {username}")))
    }
}
