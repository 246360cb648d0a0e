/// Data models for blog-service
///
/// Persisted entities for the blogging platform:
/// - Group: thematic category a post may belong to
/// - Post: authored text with an optional group and image attachment
/// - Comment: reader response attached to a post
/// - Follow: directed "reader follows author" edge
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - mirrored from the external identity subsystem.
///
/// Only `id` and `username` are read here; account lifecycle belongs to the
/// identity collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Group entity - topical category identified by a unique URL slug
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Post entity - joined with author username and group slug on every read
/// so pages render bylines and group links without extra lookups.
///
/// `author_id` and `created_at` are fixed at creation; only `text`,
/// `group_id` and `image_key` are mutable, and only by the author.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub group_id: Option<Uuid>,
    pub group_slug: Option<String>,
    pub text: String,
    /// Opaque reference into the external image store.
    pub image_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - ordered newest-first within a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// Follow edges never surface as a model: the repository answers with the
// affected-row outcome or the followed authors themselves.
