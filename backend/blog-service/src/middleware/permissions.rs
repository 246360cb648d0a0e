/// Authorization checks for blog-service
///
/// Guards are plain functions invoked at the top of each mutating handler
/// and answer with a tagged result the handler turns into a redirect or a
/// refusal. Nothing here intercepts control flow implicitly; a handler
/// that skips its guard is still backstopped by the ownership checks in
/// the service layer.
use crate::middleware::Viewer;
use crate::models::Post;

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Caller may proceed.
    Allowed,
    /// Caller must authenticate first; send them to the login flow.
    AuthRequired,
    /// Caller is authenticated but not permitted; send them to the
    /// resource's read-only view.
    Forbidden,
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allowed)
    }
}

/// Gate for actions any signed-in user may perform: creating posts,
/// commenting, following and the personal feed.
pub fn require_authenticated(viewer: &Viewer) -> Access {
    if viewer.is_authenticated() {
        Access::Allowed
    } else {
        Access::AuthRequired
    }
}

/// Gate for editing a post: only the post's author may pass.
pub fn require_post_author(viewer: &Viewer, post: &Post) -> Access {
    match viewer.user_id() {
        None => Access::AuthRequired,
        Some(id) if id == post.author_id => Access::Allowed,
        Some(_) => Access::Forbidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post_by(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id,
            author_username: "author".to_string(),
            group_id: None,
            group_slug: None,
            text: "hello".to_string(),
            image_key: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn anonymous_callers_are_sent_to_login() {
        assert_eq!(
            require_authenticated(&Viewer::Anonymous),
            Access::AuthRequired
        );
        assert_eq!(
            require_post_author(&Viewer::Anonymous, &post_by(Uuid::new_v4())),
            Access::AuthRequired
        );
    }

    #[test]
    fn only_the_author_may_edit() {
        let author = Uuid::new_v4();
        let post = post_by(author);

        assert_eq!(
            require_post_author(&Viewer::User(author), &post),
            Access::Allowed
        );
        assert_eq!(
            require_post_author(&Viewer::User(Uuid::new_v4()), &post),
            Access::Forbidden
        );
    }

    #[test]
    fn any_signed_in_user_passes_the_authentication_gate() {
        assert_eq!(
            require_authenticated(&Viewer::User(Uuid::new_v4())),
            Access::Allowed
        );
    }
}
