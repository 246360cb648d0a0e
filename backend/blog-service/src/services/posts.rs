/// Post service - creation, retrieval and author-only editing
use crate::db::{group_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Post;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post authored by `author_id`, optionally filed under a
    /// group (by slug) and carrying an opaque image reference.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        text: &str,
        group_slug: Option<&str>,
        image_key: Option<&str>,
    ) -> Result<Post> {
        let text = validated_text(text)?;
        let group_id = self.resolve_group(group_slug).await?;

        let post = post_repo::create_post(&self.pool, author_id, text, group_id, image_key).await?;
        debug!(post_id = %post.id, author = %post.author_username, "post created");

        Ok(post)
    }

    /// Replace the mutable fields of a post. Ownership is enforced here as
    /// well as at the handler guard, so a non-author mutation can never
    /// reach the store; author and creation timestamp are never altered.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        editor_id: Uuid,
        text: &str,
        group_slug: Option<&str>,
        image_key: Option<&str>,
    ) -> Result<Post> {
        let text = validated_text(text)?;
        let group_id = self.resolve_group(group_slug).await?;

        post_repo::update_post(&self.pool, post_id, editor_id, text, group_id, image_key)
            .await?
            .ok_or_else(|| AppError::Forbidden("only the author may edit a post".to_string()))
    }

    /// Fetch a post published by `username`.
    pub async fn get_post(&self, username: &str, post_id: Uuid) -> Result<Post> {
        post_repo::find_by_author_and_id(&self.pool, username, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} by {username}")))
    }

    async fn resolve_group(&self, group_slug: Option<&str>) -> Result<Option<Uuid>> {
        match group_slug {
            None => Ok(None),
            Some(slug) => {
                let group = group_repo::find_by_slug(&self.pool, slug)
                    .await?
                    .ok_or_else(|| AppError::Validation(format!("unknown group: {slug}")))?;
                Ok(Some(group.id))
            }
        }
    }
}

fn validated_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        assert!(matches!(validated_text(""), Err(AppError::Validation(_))));
        assert!(matches!(
            validated_text("   \n\t"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validated_text("  hello \n").unwrap(), "hello");
    }
}
