/// Business logic layer for blog-service
///
/// - Post service: creation and author-only editing
/// - Comment service: comments on posts
/// - Follow service: the directed follow graph
/// - Feed service: ordered, paginated post listings
pub mod comments;
pub mod feed;
pub mod follow;
pub mod posts;

// Re-export commonly used services
pub use comments::CommentService;
pub use feed::FeedService;
pub use follow::FollowService;
pub use posts::PostService;
