use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use tollgate_core::{IntrospectionError, IntrospectionResult, TokenIntrospector};

use crate::config::settings::{IntrospectionSettings, SettingsError};

/// Introspection client for an OAuth2 identity provider.
///
/// Posts the bare token to the provider's RFC 7662 introspection endpoint
/// using HTTP Basic client credentials and decodes the reported metadata.
/// A 404 or an empty body means the provider has no token object for the
/// credential and maps to `Ok(None)`; any other non-success status or an
/// undecodable body is an error of the backend and propagates.
#[derive(Clone)]
pub struct Oauth2TokenIntrospector {
    http_client: Client,
    introspection_url: Url,
    client_id: String,
    client_secret: Secret<String>,
}

impl Oauth2TokenIntrospector {
    pub fn new(
        introspection_url: Url,
        client_id: String,
        client_secret: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            introspection_url,
            client_id,
            client_secret,
        }
    }

    /// Build the introspector from loaded settings, with the configured
    /// request timeout applied to the HTTP client.
    pub fn from_settings(settings: &IntrospectionSettings) -> Result<Self, SettingsError> {
        let introspection_url =
            Url::parse(&settings.url).map_err(|e| SettingsError::InvalidUrl(e.to_string()))?;

        let http_client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| SettingsError::HttpClient(e.to_string()))?;

        Ok(Self::new(
            introspection_url,
            settings.client_id.clone(),
            settings.client_secret.clone(),
            http_client,
        ))
    }
}

#[async_trait::async_trait]
impl TokenIntrospector for Oauth2TokenIntrospector {
    #[tracing::instrument(name = "Introspecting token", skip_all)]
    async fn introspect(
        &self,
        token: &str,
    ) -> Result<Option<IntrospectionResult>, IntrospectionError> {
        let request_body = IntrospectionRequest { token };

        let response = self
            .http_client
            .post(self.introspection_url.clone())
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .form(&request_body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .map_err(|e| IntrospectionError::Transport(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| IntrospectionError::Transport(e.to_string()))?;

        if body.is_empty() {
            return Ok(None);
        }

        let result = serde_json::from_slice(&body)
            .map_err(|e| IntrospectionError::MalformedResponse(e.to_string()))?;

        Ok(Some(result))
    }
}

#[derive(serde::Serialize, Debug)]
struct IntrospectionRequest<'a> {
    token: &'a str,
}
