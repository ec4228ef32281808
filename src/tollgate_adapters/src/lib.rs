pub mod config;
pub mod introspection;

pub use introspection::{Oauth2TokenIntrospector, StaticTokenIntrospector};
