use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

// Every read goes through the same join so `Post` always carries the
// author's username and the group slug the presentation layer renders.
const POST_COLUMNS: &str = r#"
    p.id, p.author_id, u.username AS author_username,
    p.group_id, g.slug AS group_slug,
    p.text, p.image_key, p.created_at
"#;

fn select_posts(filter: &str) -> String {
    format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        {filter}
        ORDER BY p.created_at DESC
        "#
    )
}

/// Create a new post; the database assigns id and creation timestamp
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    text: &str,
    group_id: Option<Uuid>,
    image_key: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(&format!(
        r#"
        WITH inserted AS (
            INSERT INTO posts (author_id, group_id, text, image_key)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_id, group_id, text, image_key, created_at
        )
        SELECT {POST_COLUMNS}
        FROM inserted p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        "#
    ))
    .bind(author_id)
    .bind(group_id)
    .bind(text)
    .bind(image_key)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Update the mutable columns of a post. The row is keyed on
/// `(id, author_id)` so a non-author update matches nothing; `author_id`
/// and `created_at` are never touched.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    text: &str,
    group_id: Option<Uuid>,
    image_key: Option<&str>,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(&format!(
        r#"
        WITH updated AS (
            UPDATE posts
            SET text = $3, group_id = $4, image_key = $5
            WHERE id = $1 AND author_id = $2
            RETURNING id, author_id, group_id, text, image_key, created_at
        )
        SELECT {POST_COLUMNS}
        FROM updated p
        JOIN users u ON u.id = p.author_id
        LEFT JOIN groups g ON g.id = p.group_id
        "#
    ))
    .bind(post_id)
    .bind(author_id)
    .bind(text)
    .bind(group_id)
    .bind(image_key)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find a post by id under a given author username
pub async fn find_by_author_and_id(
    pool: &PgPool,
    username: &str,
    post_id: Uuid,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(&select_posts("WHERE p.id = $1 AND u.username = $2"))
        .bind(post_id)
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}

/// All posts, newest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(&select_posts(""))
        .fetch_all(pool)
        .await?;

    Ok(posts)
}

/// A group's posts, newest first
pub async fn list_by_group(pool: &PgPool, group_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(&select_posts("WHERE p.group_id = $1"))
        .bind(group_id)
        .fetch_all(pool)
        .await?;

    Ok(posts)
}

/// An author's posts, newest first
pub async fn list_by_author(pool: &PgPool, author_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(&select_posts("WHERE p.author_id = $1"))
        .bind(author_id)
        .fetch_all(pool)
        .await?;

    Ok(posts)
}

/// Posts by every author the given user follows, newest first
pub async fn list_by_followed(pool: &PgPool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(&select_posts(
        "JOIN follows f ON f.author_id = p.author_id WHERE f.user_id = $1",
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Count an author's posts
pub async fn count_by_author(pool: &PgPool, author_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts WHERE author_id = $1")
        .bind(author_id)
        .fetch_one(pool)
        .await?;

    Ok(count.0)
}
