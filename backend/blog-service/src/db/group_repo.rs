use crate::models::Group;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a group (administrative path; the slug must be unique)
pub async fn create_group(
    pool: &PgPool,
    title: &str,
    slug: &str,
    description: &str,
) -> Result<Group, sqlx::Error> {
    let group = sqlx::query_as::<_, Group>(
        r#"
        INSERT INTO groups (title, slug, description)
        VALUES ($1, $2, $3)
        RETURNING id, title, slug, description, created_at
        "#,
    )
    .bind(title)
    .bind(slug)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(group)
}

/// Find a group by its URL slug
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Group>, sqlx::Error> {
    let group = sqlx::query_as::<_, Group>(
        r#"
        SELECT id, title, slug, description, created_at
        FROM groups
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(group)
}

/// Delete a group. Its posts survive with `group_id` cleared by the
/// SET NULL foreign key. Returns true if a row was removed.
pub async fn delete_group(pool: &PgPool, group_id: Uuid) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM groups WHERE id = $1")
        .bind(group_id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected > 0)
}
