/// HTTP middleware utilities for blog-service
///
/// Identity extraction and permission checks. Authentication itself is
/// owned by the external auth gateway; this service only consumes the
/// identity it forwards.
pub mod identity;
pub mod permissions;

pub use identity::Viewer;
pub use permissions::*;
