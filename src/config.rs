//! Build-time Supabase configuration.
//!
//! The project URL and anon key are baked into the bundle by the build
//! environment. A missing value aborts startup with a named error instead
//! of issuing requests against an undefined host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

/// Connection settings for the hosted Supabase project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Project base URL, e.g. `https://abcdefgh.supabase.co`. No trailing slash.
    pub supabase_url: String,
    /// Public anon API key; row-level security does the real gating.
    pub anon_key: String,
}

/// Startup configuration failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL is not set; export it before building")]
    MissingUrl,
    #[error("SUPABASE_ANON_KEY is not set; export it before building")]
    MissingKey,
}

impl Config {
    /// Read the values compiled in from the build environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first missing variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    fn from_parts(url: Option<&str>, key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let key = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;
        Ok(Self {
            supabase_url: url.trim_end_matches('/').to_owned(),
            anon_key: key.to_owned(),
        })
    }
}
