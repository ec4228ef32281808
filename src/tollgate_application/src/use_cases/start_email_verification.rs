use chrono::Utc;

/// Fixed prefix of generated verification tokens.
const TOKEN_PREFIX: &str = "random-token";

/// Input for starting an email verification.
///
/// `email`, when given, must be an address the user already has; `user_id`
/// is required and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartEmailVerificationInput {
    pub email: Option<String>,
    pub user_id: String,
}

/// A freshly issued verification token, echoing the address it is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailVerification {
    pub email: Option<String>,
    pub token: String,
}

/// Error types specific to the start-email-verification use case.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartEmailVerificationError {
    #[error("userId is required")]
    MissingUserId,
}

/// Start-email-verification use case - issues an opaque verification token
/// tied to one of the user's email addresses. Intended to be called
/// internally by other platform components only.
///
/// This is a known-weak stub: the token is derived from the current
/// timestamp with no randomness, is not persisted to the user record, and
/// nothing verifies it later. Callers must not assume unpredictability or
/// uniqueness beyond timestamp resolution.
// TODO: persist the token on the user record and derive it from a real
// randomness source before exposing this beyond internal callers.
#[derive(Debug, Clone, Default)]
pub struct StartEmailVerificationUseCase;

impl StartEmailVerificationUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the start-email-verification use case.
    #[tracing::instrument(name = "StartEmailVerificationUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        input: StartEmailVerificationInput,
    ) -> Result<EmailVerification, StartEmailVerificationError> {
        if input.user_id.is_empty() {
            return Err(StartEmailVerificationError::MissingUserId);
        }

        let token = format!("{TOKEN_PREFIX}{}", Utc::now().timestamp_millis());
        Ok(EmailVerification {
            email: input.email,
            token,
        })
    }
}
