/// Request-scoped caller identity
///
/// The authenticating reverse proxy validates the session and forwards the
/// account id in the `x-user-id` header; requests without a valid header
/// are anonymous. Identity is extracted per request and passed down
/// explicitly, never held in process-global state.
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Header set by the auth gateway after session validation.
pub const IDENTITY_HEADER: &str = "x-user-id";

/// The caller of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    User(Uuid),
}

impl Viewer {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Viewer::User(id) => Some(*id),
            Viewer::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::User(_))
    }
}

impl FromRequest for Viewer {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let viewer = req
            .headers()
            .get(IDENTITY_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(Viewer::User)
            .unwrap_or(Viewer::Anonymous);

        ready(Ok(viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn extracts_user_from_gateway_header() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((IDENTITY_HEADER, id.to_string()))
            .to_http_request();

        let viewer = Viewer::extract(&req).await.unwrap();
        assert_eq!(viewer, Viewer::User(id));
    }

    #[actix_web::test]
    async fn missing_or_malformed_header_is_anonymous() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(Viewer::extract(&req).await.unwrap(), Viewer::Anonymous);

        let req = TestRequest::default()
            .insert_header((IDENTITY_HEADER, "not-a-uuid"))
            .to_http_request();
        assert_eq!(Viewer::extract(&req).await.unwrap(), Viewer::Anonymous);
    }
}
