/// Comment handlers - adding comments to a post
use crate::error::{AppError, Result};
use crate::middleware::{permissions, Access, Viewer};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

/// Request body for creating a comment
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// POST /{username}/{post_id}/comment - comment on a post (signed-in users
/// only; no ownership check, anyone may comment anywhere)
pub async fn add_comment(
    pool: web::Data<sqlx::PgPool>,
    viewer: Viewer,
    path: web::Path<(String, Uuid)>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let author_id = match permissions::require_authenticated(&viewer) {
        Access::Allowed => viewer.user_id().ok_or(AppError::AuthRequired)?,
        _ => return Err(AppError::AuthRequired),
    };

    let (username, post_id) = path.into_inner();
    let comment = CommentService::new((**pool).clone())
        .add_comment(&username, post_id, author_id, &req.text)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}
