use tollgate_core::{
    BearerToken, EmailRecord, IntrospectionError, TokenIntrospector, UserIdentity, UserProfile,
};

/// Error types specific to the resolve-identity use case.
///
/// The calling layer is expected to collapse every variant into one generic
/// access-denied response so the client cannot probe which check rejected
/// the token; the variants exist for internal callers and logs, which branch
/// on kind rather than message strings.
#[derive(Debug, thiserror::Error)]
pub enum ResolveIdentityError {
    #[error("Introspection returned no token object")]
    MissingIntrospectionResult,
    #[error("Bearer token is expired")]
    TokenExpired,
    #[error("Token type {0:?} is not an access token")]
    WrongTokenType(String),
    #[error("Token use {0:?} is not an access token")]
    WrongTokenUse(String),
    #[error("Bearer token does not contain a full user profile")]
    IncompleteProfile,
    #[error("Introspection failed: {0}")]
    Introspection(#[from] IntrospectionError),
}

/// Resolve-identity use case - exchanges an `Authorization` header value for
/// a verified user identity.
///
/// The introspection backend is injected so the resolution logic can be
/// exercised against canned results. One resolve performs exactly one
/// introspection call and holds no state between invocations.
#[derive(Clone)]
pub struct ResolveIdentityUseCase<I>
where
    I: TokenIntrospector,
{
    introspector: I,
}

impl<I> ResolveIdentityUseCase<I>
where
    I: TokenIntrospector,
{
    pub fn new(introspector: I) -> Self {
        Self { introspector }
    }

    /// Execute the resolve-identity use case.
    ///
    /// Checks run in a fixed order and the first failure wins; nothing is
    /// retried and no partial identity is ever returned. Expected auth
    /// failures (no token object, inactive token) log at debug; claim
    /// mismatches, which indicate a misconfigured provider, log at error.
    #[tracing::instrument(name = "ResolveIdentityUseCase::execute", skip_all)]
    pub async fn execute(&self, authorization: &str) -> Result<UserIdentity, ResolveIdentityError> {
        let token = BearerToken::from_header_value(authorization);

        let Some(result) = self.introspector.introspect(token.expose()).await? else {
            tracing::debug!("no token object");
            return Err(ResolveIdentityError::MissingIntrospectionResult);
        };

        if !result.active {
            tracing::debug!("bearer token is expired");
            return Err(ResolveIdentityError::TokenExpired);
        }

        if result.token_type != "Bearer" {
            tracing::error!(token_type = %result.token_type, "bearer token is not an access token");
            return Err(ResolveIdentityError::WrongTokenType(result.token_type));
        }

        if result.token_use != "access_token" {
            tracing::error!(token_use = %result.token_use, "bearer token is not an access token");
            return Err(ResolveIdentityError::WrongTokenUse(result.token_use));
        }

        let mut identity = UserIdentity::new(result.subject);

        // The provider attaches profile details in `ext` on initial logins
        // only; later requests carry the bare claims.
        if let Some(ext) = result.extension {
            if !ext.is_complete() {
                tracing::error!("bearer token does not contain user profile");
                return Err(ResolveIdentityError::IncompleteProfile);
            }
            identity.display_name = Some(ext.display_name.clone());
            identity.emails = vec![EmailRecord { address: ext.email }];
            identity.profile = Some(UserProfile {
                display_name: ext.display_name,
                picture_url: ext.picture_url,
            });
        }

        Ok(identity)
    }
}
