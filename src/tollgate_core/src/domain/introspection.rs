use serde::Deserialize;

/// Token metadata reported by the identity provider for a single
/// introspection call (RFC 7662 shape plus the provider's profile
/// extension).
///
/// The result is transient: it lives for the duration of one resolve call
/// and is never cached or persisted by this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionResult {
    /// Whether the token is currently valid.
    pub active: bool,
    /// Opaque identifier of the token owner.
    #[serde(rename = "sub", default)]
    pub subject: String,
    /// Expected to be `"Bearer"`.
    #[serde(default)]
    pub token_type: String,
    /// Expected to be `"access_token"`.
    #[serde(default)]
    pub token_use: String,
    /// Extra profile information, present only on certain initial-login
    /// exchanges.
    #[serde(rename = "ext")]
    pub extension: Option<TokenExtension>,
}

/// Profile details the provider attaches to a token on initial logins.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExtension {
    #[serde(default)]
    pub email: String,
    #[serde(rename = "id", default)]
    pub external_id: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(rename = "picture", default)]
    pub picture_url: Option<String>,
}

impl TokenExtension {
    /// A complete extension carries every field the platform requires to
    /// create or match a user record. `picture` is optional.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.external_id.is_empty() && !self.display_name.is_empty()
    }
}
