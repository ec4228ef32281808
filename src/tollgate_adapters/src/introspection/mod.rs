pub mod oauth2_introspector;
pub mod static_introspector;

pub use oauth2_introspector::Oauth2TokenIntrospector;
pub use static_introspector::StaticTokenIntrospector;
