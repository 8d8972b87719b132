//! Server configuration read from environment variables.

use std::{fmt::Display, str::FromStr, time::Duration};

use crate::{
    server::{
        error::config::ConfigError, service::retry::RetryPolicy,
        service::translation::DEFAULT_TRANSLATE_API_URL,
    },
    translation::DEFAULT_SOURCE_LANG,
};

/// Default timeout of a single translation request.
pub const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub translate_api_key: String,
    pub translate_api_url: String,
    pub translation_source_lang: String,
    pub translate_timeout: Duration,
    pub db_retry: RetryPolicy,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` and `TRANSLATE_API_KEY` are required, every other variable falls back to
    /// its default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable failed to parse or is out of range
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvVars { lookup };

        let max_attempts: u32 =
            vars.parsed_or("DB_RETRY_MAX_ATTEMPTS", RetryPolicy::DEFAULT_MAX_ATTEMPTS)?;
        if max_attempts == 0 {
            return Err(invalid("DB_RETRY_MAX_ATTEMPTS", "must be at least 1"));
        }

        let backoff_multiplier: f64 = vars.parsed_or(
            "DB_RETRY_BACKOFF_MULTIPLIER",
            RetryPolicy::DEFAULT_BACKOFF_MULTIPLIER,
        )?;
        if !backoff_multiplier.is_finite() || backoff_multiplier < 1.0 {
            return Err(invalid(
                "DB_RETRY_BACKOFF_MULTIPLIER",
                "must be a finite number of at least 1",
            ));
        }

        let initial_delay_ms: u64 = vars.parsed_or(
            "DB_RETRY_INITIAL_DELAY_MS",
            RetryPolicy::DEFAULT_INITIAL_DELAY.as_millis() as u64,
        )?;
        let max_delay_ms: u64 = vars.parsed_or(
            "DB_RETRY_MAX_DELAY_MS",
            RetryPolicy::DEFAULT_MAX_DELAY.as_millis() as u64,
        )?;
        let timeout_secs: u64 =
            vars.parsed_or("TRANSLATE_TIMEOUT_SECS", DEFAULT_TRANSLATE_TIMEOUT_SECS)?;

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            translate_api_key: vars.required("TRANSLATE_API_KEY")?,
            translate_api_url: vars
                .optional("TRANSLATE_API_URL")
                .unwrap_or_else(|| DEFAULT_TRANSLATE_API_URL.to_string()),
            translation_source_lang: vars
                .optional("TRANSLATION_SOURCE_LANG")
                .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
            translate_timeout: Duration::from_secs(timeout_secs),
            db_retry: RetryPolicy::new(
                max_attempts,
                Duration::from_millis(initial_delay_ms),
                Duration::from_millis(max_delay_ms),
                backoff_multiplier,
            ),
        })
    }
}

struct EnvVars<F> {
    lookup: F,
}

impl<F> EnvVars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Value of `var`, treating empty values as unset
    fn optional(&self, var: &str) -> Option<String> {
        (self.lookup)(var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, var: &str) -> Result<String, ConfigError> {
        self.optional(var)
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    }

    fn parsed_or<T>(&self, var: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(var) {
            Some(value) => value.parse().map_err(|e: T::Err| invalid(var, e)),
            None => Ok(default),
        }
    }
}

fn invalid(var: &str, reason: impl Display) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
