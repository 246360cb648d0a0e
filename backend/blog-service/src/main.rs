use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;

use blog_service::handlers;
use blog_service::Config;

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("starting blog-service");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "configuration loaded: env={}, port={}, posts_per_page={}",
        config.app.env, config.app.port, config.feed.posts_per_page
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Failed to verify database connection")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    info!("database ready, migrations applied");

    let bind_addr = (config.app.host.clone(), config.app.port);
    info!("listening on {}:{}", bind_addr.0, bind_addr.1);

    let pool_data = web::Data::new(pool);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .route("/health", web::get().to(health))
            // Literal segments register ahead of the username captures so
            // they are never shadowed.
            .route("/", web::get().to(handlers::index))
            .route("/new", web::post().to(handlers::new_post))
            .route("/follow", web::get().to(handlers::follow_index))
            .route("/group/{slug}", web::get().to(handlers::group_posts))
            .route("/{username}", web::get().to(handlers::profile))
            .route("/{username}/follow", web::get().to(handlers::profile_follow))
            .route(
                "/{username}/unfollow",
                web::get().to(handlers::profile_unfollow),
            )
            .route("/{username}/{post_id}", web::get().to(handlers::post_detail))
            .route(
                "/{username}/{post_id}/comment",
                web::post().to(handlers::add_comment),
            )
            .route(
                "/{username}/{post_id}/edit",
                web::get().to(handlers::edit_post_form),
            )
            .route(
                "/{username}/{post_id}/edit",
                web::post().to(handlers::edit_post),
            )
    })
    .bind(bind_addr)
    .context("Failed to bind HTTP listener")?
    .run()
    .await?;

    Ok(())
}
