pub mod resolve_identity;
pub mod start_email_verification;
