//! Axum extractor for CurrentUser.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};
use uuid::Uuid;

use super::types::{CurrentUser, RequestId, REQUEST_ID_HEADER, USER_ID_HEADER};

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

fn extract_user_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = extract_request_id(&parts.headers);

        let Some(user_id) = extract_user_id(&parts.headers) else {
            tracing::warn!(request_id = %request_id, "Request without user identity");
            return Err((StatusCode::UNAUTHORIZED, "Missing user identity"));
        };

        Ok(CurrentUser {
            user_id,
            request_id,
        })
    }
}
