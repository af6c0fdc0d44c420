use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every field has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent key disables the intelligent search strategy and LLM skill extraction.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// `false` runs discovery in offline mode: no reachability checks are made.
    pub validate_resource_urls: bool,
    pub url_validation_timeout_secs: u64,
    pub search_timeout_secs: u64,
    pub provider_strategy_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Config {
            anthropic_api_key,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            validate_resource_urls: parse_bool_or(&lookup, "VALIDATE_RESOURCE_URLS", true)?,
            url_validation_timeout_secs: parse_or(&lookup, "URL_VALIDATION_TIMEOUT_SECS", 5)?,
            search_timeout_secs: parse_or(&lookup, "SEARCH_TIMEOUT_SECS", 15)?,
            provider_strategy_timeout_secs: parse_or(
                &lookup,
                "PROVIDER_STRATEGY_TIMEOUT_SECS",
                5,
            )?,
        })
    }

    pub fn url_validation_timeout(&self) -> Duration {
        Duration::from_secs(self.url_validation_timeout_secs)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    pub fn provider_strategy_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_strategy_timeout_secs)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => anyhow::bail!("Environment variable '{key}' must be a boolean, got '{v}'"),
        },
    }
}
