use serde::Serialize;

/// An email address attached to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRecord {
    pub address: String,
}

/// Profile details carried over from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// The minimal internal user record produced by resolving an auth token.
///
/// `display_name`, `emails` and `profile` are populated together, and only
/// when the provider attached a complete profile extension to the token.
/// An identity is constructed fresh on every resolve call and owned by the
/// caller on return; it carries no persistence of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<EmailRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl UserIdentity {
    /// An identity carrying only the subject identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            emails: Vec::new(),
            profile: None,
        }
    }
}
