/// Post handlers - the front page, group pages, creation and editing
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::handlers::PageQuery;
use crate::middleware::{permissions, Access, Viewer};
use crate::models::{Comment, Group, Post};
use crate::services::{CommentService, FeedService, PostService};
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};
use pagination::Page;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub text: String,
    /// Group slug the post is filed under, if any.
    pub group: Option<String>,
    /// Opaque reference produced by the external image store.
    pub image_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupPageResponse {
    pub group: Group,
    pub page: Page<Post>,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: Post,
    pub author_post_count: i64,
    pub comments: Vec<Comment>,
}

fn feed_service(pool: &sqlx::PgPool, config: &Config) -> FeedService {
    FeedService::new(pool.clone(), config.feed.posts_per_page)
}

/// GET / - every post, newest first
pub async fn index(
    pool: web::Data<sqlx::PgPool>,
    config: web::Data<Config>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let page = feed_service(&pool, &config).page_all(query.number()).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /group/{slug} - one group's posts
pub async fn group_posts(
    pool: web::Data<sqlx::PgPool>,
    config: web::Data<Config>,
    slug: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let (group, page) = feed_service(&pool, &config)
        .page_by_group(&slug, query.number())
        .await?;

    Ok(HttpResponse::Ok().json(GroupPageResponse { group, page }))
}

/// POST /new - create a post (signed-in users only)
pub async fn new_post(
    pool: web::Data<sqlx::PgPool>,
    viewer: Viewer,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let author_id = match permissions::require_authenticated(&viewer) {
        Access::Allowed => viewer.user_id().ok_or(AppError::AuthRequired)?,
        _ => return Err(AppError::AuthRequired),
    };

    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(
            author_id,
            &req.text,
            req.group.as_deref(),
            req.image_key.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /{username}/{post_id} - post detail with its comments
pub async fn post_detail(
    pool: web::Data<sqlx::PgPool>,
    config: web::Data<Config>,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse> {
    let (username, post_id) = path.into_inner();

    let post = PostService::new((**pool).clone())
        .get_post(&username, post_id)
        .await?;
    let author_post_count = feed_service(&pool, &config)
        .author_post_count(post.author_id)
        .await?;
    let comments = CommentService::new((**pool).clone())
        .list_comments(post.id)
        .await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post,
        author_post_count,
        comments,
    }))
}

/// GET /{username}/{post_id}/edit - the post as edit-form data (author only)
pub async fn edit_post_form(
    pool: web::Data<sqlx::PgPool>,
    viewer: Viewer,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse> {
    if !permissions::require_authenticated(&viewer).is_allowed() {
        return Err(AppError::AuthRequired);
    }

    let (username, post_id) = path.into_inner();
    let post = PostService::new((**pool).clone())
        .get_post(&username, post_id)
        .await?;

    match permissions::require_post_author(&viewer, &post) {
        Access::Allowed => Ok(HttpResponse::Ok().json(post)),
        Access::AuthRequired => Err(AppError::AuthRequired),
        Access::Forbidden => Ok(redirect_to_post(&username, post_id)),
    }
}

/// POST /{username}/{post_id}/edit - apply an edit (author only)
pub async fn edit_post(
    pool: web::Data<sqlx::PgPool>,
    viewer: Viewer,
    path: web::Path<(String, Uuid)>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    if !permissions::require_authenticated(&viewer).is_allowed() {
        return Err(AppError::AuthRequired);
    }

    let (username, post_id) = path.into_inner();
    let service = PostService::new((**pool).clone());
    let post = service.get_post(&username, post_id).await?;

    // The guard decides before any mutation is attempted; a non-author is
    // bounced to the read-only view with the post untouched.
    let editor_id = match permissions::require_post_author(&viewer, &post) {
        Access::Allowed => viewer.user_id().ok_or(AppError::AuthRequired)?,
        Access::AuthRequired => return Err(AppError::AuthRequired),
        Access::Forbidden => return Ok(redirect_to_post(&username, post_id)),
    };

    let updated = service
        .update_post(
            post.id,
            editor_id,
            &req.text,
            req.group.as_deref(),
            req.image_key.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

fn redirect_to_post(username: &str, post_id: Uuid) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, format!("/{username}/{post_id}")))
        .finish()
}
