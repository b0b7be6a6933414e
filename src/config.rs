// src/config.rs
use std::{env, fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    log_filter: String,
    output_format: OutputFormat,
    skip_empty: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One slug per line.
    #[default]
    Plain,
    /// JSON array of `{ "title", "slug" }` objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid(format!(
                "SITE_SLUG_OUTPUT must be `plain` or `json`, got `{other}`"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Json => "json",
        })
    }
}

fn default_log_filter() -> String {
    "info".into()
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Default tracing filter read straight from the environment, usable
    /// before the full configuration has been validated.
    pub fn log_filter_from_env() -> String {
        env::var("SITE_SLUG_LOG").unwrap_or_else(|_| default_log_filter())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`,
    /// which keeps tests away from the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("SITE_SLUG_LOG").unwrap_or_else(default_log_filter);

        let output_format = match lookup("SITE_SLUG_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        let skip_empty = lookup("SITE_SLUG_SKIP_EMPTY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            log_filter,
            output_format,
            skip_empty,
        })
    }

    /// Default tracing filter, used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn skip_empty(&self) -> bool {
        self.skip_empty
    }
}
