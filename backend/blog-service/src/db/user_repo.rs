use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Mirror an identity record created by the external auth subsystem
pub async fn create_user(pool: &PgPool, username: &str) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username)
        VALUES ($1)
        RETURNING id, username, created_at
        "#,
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Find a user by username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Drop a mirrored identity record; posts, comments and follow edges go
/// with it through the FK cascades. Returns true if a row was removed.
pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected > 0)
}
