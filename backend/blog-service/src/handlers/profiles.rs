/// Profile handlers - an author's page of posts
use crate::config::Config;
use crate::error::Result;
use crate::handlers::PageQuery;
use crate::middleware::Viewer;
use crate::models::{Post, User};
use crate::services::{FeedService, FollowService};
use actix_web::{web, HttpResponse};
use pagination::Page;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub author: User,
    pub page: Page<Post>,
    /// Whether the current viewer follows this author (false when
    /// anonymous or viewing their own profile).
    pub following: bool,
}

/// GET /{username} - an author's profile and their posts
pub async fn profile(
    pool: web::Data<sqlx::PgPool>,
    config: web::Data<Config>,
    viewer: Viewer,
    username: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let feed = FeedService::new((**pool).clone(), config.feed.posts_per_page);
    let (author, page) = feed.page_by_author(&username, query.number()).await?;

    let following = match viewer.user_id() {
        Some(viewer_id) => {
            FollowService::new((**pool).clone())
                .is_following(viewer_id, author.id)
                .await?
        }
        None => false,
    };

    Ok(HttpResponse::Ok().json(ProfileResponse {
        author,
        page,
        following,
    }))
}
