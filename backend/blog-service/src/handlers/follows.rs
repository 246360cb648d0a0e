/// Follow handlers - the personal feed and follow/unfollow actions
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::handlers::PageQuery;
use crate::middleware::{permissions, Access, Viewer};
use crate::services::{FeedService, FollowService};
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};

/// GET /follow - posts by every author the viewer follows
pub async fn follow_index(
    pool: web::Data<sqlx::PgPool>,
    config: web::Data<Config>,
    viewer: Viewer,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let user_id = match permissions::require_authenticated(&viewer) {
        Access::Allowed => viewer.user_id().ok_or(AppError::AuthRequired)?,
        _ => return Err(AppError::AuthRequired),
    };

    let page = FeedService::new((**pool).clone(), config.feed.posts_per_page)
        .page_following(user_id, query.number())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /{username}/follow - start following the author, then return to
/// their profile
pub async fn profile_follow(
    pool: web::Data<sqlx::PgPool>,
    viewer: Viewer,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let follower_id = match permissions::require_authenticated(&viewer) {
        Access::Allowed => viewer.user_id().ok_or(AppError::AuthRequired)?,
        _ => return Err(AppError::AuthRequired),
    };

    FollowService::new((**pool).clone())
        .follow(follower_id, &username)
        .await?;

    Ok(redirect_to_profile(&username))
}

/// GET /{username}/unfollow - stop following the author, then return to
/// their profile
pub async fn profile_unfollow(
    pool: web::Data<sqlx::PgPool>,
    viewer: Viewer,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let follower_id = match permissions::require_authenticated(&viewer) {
        Access::Allowed => viewer.user_id().ok_or(AppError::AuthRequired)?,
        _ => return Err(AppError::AuthRequired),
    };

    FollowService::new((**pool).clone())
        .unfollow(follower_id, &username)
        .await?;

    Ok(redirect_to_profile(&username))
}

fn redirect_to_profile(username: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, format!("/{username}")))
        .finish()
}
