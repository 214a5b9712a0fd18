//! Pure types for request-scoped context.

use uuid::Uuid;

/// Header carrying the caller's user id, set by the upstream authorizer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying an optional client-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated caller of a request.
///
/// Token verification happens upstream; the user id is an opaque string used
/// as the partition component of every todo key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub request_id: RequestId,
}
