pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    bearer_token::BearerToken,
    introspection::{IntrospectionResult, TokenExtension},
    user_identity::{EmailRecord, UserIdentity, UserProfile},
};

pub use ports::introspector::{IntrospectionError, TokenIntrospector};
