use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tollgate_application::ResolveIdentityUseCase;
use tollgate_core::TokenIntrospector;

/// Axum middleware that authenticates a request from its `Authorization`
/// header.
///
/// On success the resolved [`tollgate_core::UserIdentity`] is stored in the
/// request extensions for handlers to pick up via
/// [`CurrentIdentity`](crate::CurrentIdentity). On any failure - missing
/// header, unknown token, expired token, claim mismatch, unreachable
/// provider - the response is the same generic `401`.
pub async fn authenticate<I>(
    State(resolver): State<ResolveIdentityUseCase<I>>,
    mut request: Request,
    next: Next,
) -> Response
where
    I: TokenIntrospector + Clone + Send + Sync + 'static,
{
    let Some(authorization) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        tracing::debug!("missing authorization header");
        return access_denied();
    };

    match resolver.execute(authorization).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(error) => {
            // The use case already logged the specific check that failed.
            tracing::debug!(%error, "request authentication failed");
            access_denied()
        }
    }
}

/// The one response body every authentication failure maps to.
pub(crate) fn access_denied() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "Access Denied" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::Request as HttpRequest,
        middleware::from_fn_with_state,
        routing::get,
    };
    use tollgate_adapters::StaticTokenIntrospector;
    use tollgate_core::{IntrospectionResult, UserIdentity};
    use tower::ServiceExt;

    use super::*;
    use crate::CurrentIdentity;

    fn active_result(subject: &str) -> IntrospectionResult {
        IntrospectionResult {
            active: true,
            subject: subject.to_owned(),
            token_type: "Bearer".to_owned(),
            token_use: "access_token".to_owned(),
            extension: None,
        }
    }

    async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<UserIdentity> {
        Json(identity)
    }

    fn test_app() -> Router {
        let introspector = StaticTokenIntrospector::new()
            .with_token("good-token", active_result("u1"))
            .with_token(
                "expired-token",
                IntrospectionResult {
                    active: false,
                    ..active_result("u1")
                },
            );
        let resolver = ResolveIdentityUseCase::new(introspector);

        Router::new().route("/me", get(me)).layer(from_fn_with_state(
            resolver,
            authenticate::<StaticTokenIntrospector>,
        ))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler_with_its_identity() {
        let response = test_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/me")
                    .header("authorization", "Bearer good-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "id": "u1" }));
    }

    #[tokio::test]
    async fn expired_token_gets_the_generic_denial() {
        let response = test_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/me")
                    .header("authorization", "Bearer expired-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Access Denied" })
        );
    }

    #[tokio::test]
    async fn unknown_token_gets_the_same_generic_denial() {
        let response = test_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/me")
                    .header("authorization", "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Access Denied" })
        );
    }

    #[tokio::test]
    async fn missing_header_gets_the_same_generic_denial() {
        let response = test_app()
            .oneshot(HttpRequest::builder().uri("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Access Denied" })
        );
    }
}
