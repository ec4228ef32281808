use std::collections::HashMap;

use tollgate_core::{IntrospectionError, IntrospectionResult, TokenIntrospector};

/// In-memory introspector backed by a fixed token table.
///
/// Useful in tests and local development where no identity provider is
/// running. Unknown tokens report no token object, matching the HTTP
/// adapter's behavior.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenIntrospector {
    tokens: HashMap<String, IntrospectionResult>,
}

impl StaticTokenIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, result: IntrospectionResult) -> Self {
        self.tokens.insert(token.into(), result);
        self
    }
}

#[async_trait::async_trait]
impl TokenIntrospector for StaticTokenIntrospector {
    async fn introspect(
        &self,
        token: &str,
    ) -> Result<Option<IntrospectionResult>, IntrospectionError> {
        Ok(self.tokens.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_reports_its_canned_result() {
        let introspector = StaticTokenIntrospector::new().with_token(
            "tok",
            IntrospectionResult {
                active: true,
                subject: "u1".to_owned(),
                token_type: "Bearer".to_owned(),
                token_use: "access_token".to_owned(),
                extension: None,
            },
        );

        let result = introspector.introspect("tok").await.unwrap().unwrap();
        assert_eq!(result.subject, "u1");

        assert!(introspector.introspect("other").await.unwrap().is_none());
    }
}
