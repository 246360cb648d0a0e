use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Idempotent create follow; returns true if a new edge was inserted.
///
/// Two racing follows from the same user both land here; the unique index
/// resolves the race and the loser observes a no-op.
pub async fn create_follow(
    pool: &PgPool,
    user_id: Uuid,
    author_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_as::<_, (Uuid,)>(
        r#"
        INSERT INTO follows (user_id, author_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, author_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(author_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted.is_some())
}

/// Idempotent delete; returns true if an edge was removed.
pub async fn delete_follow(
    pool: &PgPool,
    user_id: Uuid,
    author_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query(
        r#"
        DELETE FROM follows
        WHERE user_id = $1 AND author_id = $2
        "#,
    )
    .bind(user_id)
    .bind(author_id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(affected > 0)
}

/// Whether `user_id` currently follows `author_id`
pub async fn exists(pool: &PgPool, user_id: Uuid, author_id: Uuid) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2)",
    )
    .bind(user_id)
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Every author the given user follows
pub async fn followed_authors(pool: &PgPool, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
    let authors = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.username, u.created_at
        FROM follows f
        JOIN users u ON u.id = f.author_id
        WHERE f.user_id = $1
        ORDER BY u.username
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(authors)
}
