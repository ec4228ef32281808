pub mod bearer_token;
pub mod introspection;
pub mod user_identity;
