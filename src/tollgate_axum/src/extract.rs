use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use tollgate_core::UserIdentity;

use crate::middleware::access_denied;

/// Extractor for the identity resolved by
/// [`authenticate`](crate::authenticate).
///
/// Rejects with the generic `401` when the middleware did not run on this
/// route or did not authenticate the request.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub UserIdentity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(access_denied)
    }
}
