//! Runtime configuration read from the environment.

use std::env;

use tracing::debug;

/// Environment variable that skips the scope question when set to a non-empty value.
pub const NO_SCOPE_ENV_VAR: &str = "COMMITER_NO_SCOPE";

/// Settings for the prompt collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Do not ask for a scope; it stays empty.
    pub skip_scope: bool,
}

impl Config {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Self {
        let skip_scope = matches!(env::var_os(NO_SCOPE_ENV_VAR), Some(v) if !v.is_empty());
        if skip_scope {
            debug!("{} is set, scope question disabled", NO_SCOPE_ENV_VAR);
        }

        Self { skip_scope }
    }
}
