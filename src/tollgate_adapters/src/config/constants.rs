/// Prefix of all environment variables read by [`TollgateSettings::load`].
///
/// [`TollgateSettings::load`]: crate::config::settings::TollgateSettings::load
pub const ENV_PREFIX: &str = "TOLLGATE";

/// Separator between nesting levels in environment variable names, e.g.
/// `TOLLGATE_INTROSPECTION__CLIENT_SECRET`.
pub const ENV_SEPARATOR: &str = "__";

pub mod defaults {
    pub const INTROSPECTION_TIMEOUT_IN_MILLIS: u64 = 10_000;
}
