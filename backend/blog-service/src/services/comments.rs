/// Comment service - reader responses on posts
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a comment to the post `post_id` published by `username`.
    /// Any signed-in user may comment on any post; there is no ownership
    /// check here.
    pub async fn add_comment(
        &self,
        username: &str,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<Comment> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("text must not be empty".to_string()));
        }

        let post = post_repo::find_by_author_and_id(&self.pool, username, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} by {username}")))?;

        let comment = comment_repo::create_comment(&self.pool, post.id, author_id, trimmed).await?;
        debug!(comment_id = %comment.id, post_id = %post.id, "comment added");

        Ok(comment)
    }

    /// All comments on a post, newest first.
    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        Ok(comment_repo::list_by_post(&self.pool, post_id).await?)
    }
}
