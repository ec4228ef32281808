use async_trait::async_trait;
use thiserror::Error;

use crate::domain::introspection::IntrospectionResult;

// TokenIntrospector port trait and errors
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Introspection transport failure: {0}")]
    Transport(String),
    #[error("Malformed introspection response: {0}")]
    MalformedResponse(String),
}

/// Port for the identity provider's token introspection endpoint.
///
/// `Ok(None)` means the provider has no token object for the presented
/// credential; callers treat that as an authentication failure of the
/// request, not a failure of the backend itself. An `Err` means the call
/// could not be completed at all (network error, undecodable body) and must
/// propagate to the caller rather than be swallowed.
#[async_trait]
pub trait TokenIntrospector: Send + Sync {
    async fn introspect(
        &self,
        token: &str,
    ) -> Result<Option<IntrospectionResult>, IntrospectionError>;
}
