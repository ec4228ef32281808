//! # Tollgate - Bearer-Token Identity Resolution Library
//!
//! This is a facade crate that re-exports all public APIs from the tollgate
//! components. Use this crate to get access to the whole identity resolution
//! stack in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! tollgate = { path = "../tollgate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `BearerToken`, `IntrospectionResult`, `UserIdentity`, etc.
//! - **Port traits**: `TokenIntrospector`
//! - **Use cases**: `ResolveIdentityUseCase`, `StartEmailVerificationUseCase`
//! - **Adapters**: `Oauth2TokenIntrospector`, `StaticTokenIntrospector`, settings loading
//! - **Axum integration**: the `authenticate` middleware and `CurrentIdentity` extractor

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use tollgate_core::*;
}

// Re-export most commonly used core types at the root level
pub use tollgate_core::{
    BearerToken, EmailRecord, IntrospectionResult, TokenExtension, UserIdentity, UserProfile,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use tollgate_core::{IntrospectionError, TokenIntrospector};
}

// Re-export port traits at root level
pub use tollgate_core::{IntrospectionError, TokenIntrospector};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use tollgate_application::*;
}

// Re-export use cases at root level
pub use tollgate_application::{
    EmailVerification, ResolveIdentityError, ResolveIdentityUseCase, StartEmailVerificationError,
    StartEmailVerificationInput, StartEmailVerificationUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Introspection backends
    pub mod introspection {
        pub use tollgate_adapters::introspection::*;
    }

    /// Configuration
    pub mod config {
        pub use tollgate_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use tollgate_adapters::{Oauth2TokenIntrospector, StaticTokenIntrospector};

// ============================================================================
// Axum Integration
// ============================================================================

/// Axum middleware and extractors
pub mod web {
    pub use tollgate_axum::*;
}

pub use tollgate_axum::{CurrentIdentity, authenticate};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the introspector port
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
