pub mod use_cases;

pub use use_cases::{
    resolve_identity::{ResolveIdentityError, ResolveIdentityUseCase},
    start_email_verification::{
        EmailVerification, StartEmailVerificationError, StartEmailVerificationInput,
        StartEmailVerificationUseCase,
    },
};
