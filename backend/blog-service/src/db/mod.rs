/// Database access layer
///
/// One repository module per entity. Repositories are thin: plain async
/// functions over a `PgPool` that own the SQL and nothing else; business
/// rules (validation, ownership, the self-follow guard) live in
/// `crate::services`.
pub mod comment_repo;
pub mod follow_repo;
pub mod group_repo;
pub mod post_repo;
pub mod user_repo;
