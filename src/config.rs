//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base is
//! baked in at compile time from `OUTCOMES_API_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `OUTCOMES_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Durable storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Durable storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Public login route.
pub const LOGIN_PATH: &str = "/login";

/// Landing route for authenticated users (and for role mismatches).
pub const DEFAULT_PATH: &str = "/dashboard";

/// Client configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Build a config for an explicit base address.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        let api_base = api_base.trim_end_matches('/').to_owned();
        Self { api_base }
    }

    /// Resolve the config from the build environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("OUTCOMES_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Join an API path (e.g. `/courses`) onto the base address.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
