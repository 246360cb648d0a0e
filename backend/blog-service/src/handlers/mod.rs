/// HTTP request handlers for blog-service
///
/// Handlers parse the request, run the access guard, delegate to the
/// services and serialize page data for the presentation layer. Mutating
/// routes answer anonymous callers with a redirect to the login flow and
/// keep the server-rendered navigation of the original site (follow and
/// unfollow bounce back to the profile).
pub mod comments;
pub mod follows;
pub mod posts;
pub mod profiles;

pub use comments::add_comment;
pub use follows::{follow_index, profile_follow, profile_unfollow};
pub use posts::{edit_post, edit_post_form, group_posts, index, new_post, post_detail};
pub use profiles::profile;

use serde::Deserialize;

/// Page selector shared by every listing route (`?page=N`, 1-based).
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn number(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}
