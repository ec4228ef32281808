//! Axum integration for the Tollgate identity resolution library.
//!
//! This crate provides an authentication middleware that runs the
//! resolve-identity use case against the `Authorization` header, plus an
//! extractor for the resolved identity.
//!
//! Every authentication failure maps to the same generic `401` body, so a
//! client can never probe which check rejected its token; the underlying
//! cause is only logged.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, middleware::from_fn_with_state, routing::get};
//! use tollgate_application::ResolveIdentityUseCase;
//! use tollgate_axum::{CurrentIdentity, authenticate};
//!
//! let resolver = ResolveIdentityUseCase::new(introspector);
//! let app = Router::new()
//!     .route("/me", get(me))
//!     .layer(from_fn_with_state(resolver, authenticate::<MyIntrospector>));
//!
//! async fn me(CurrentIdentity(identity): CurrentIdentity) -> String {
//!     identity.id
//! }
//! ```

pub mod extract;
pub mod middleware;

// Re-export for convenience
pub use extract::CurrentIdentity;
pub use middleware::authenticate;
