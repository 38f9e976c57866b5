//! Service configuration loaded from the environment.
//!
//! `main` calls `dotenvy::dotenv()` before `Config::from_env`, so a local
//! `.env` file works the same as real environment variables. The API key is
//! required and held as a [`SecretString`]; everything else has a default.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Default OpenAI-compatible endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Model and sampling temperature the original bot shipped with.
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Number of user/assistant exchanges kept as model context.
const DEFAULT_MEMORY_EXCHANGES: usize = 3;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Which header layout the chat page renders.
///
/// The two variants are configurations of the same page, not separate UIs:
/// `Banner` shows the full banner header, `Classic` a plain title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UiVariant {
    Banner,
    Classic,
}

impl std::str::FromStr for UiVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "banner" => Ok(UiVariant::Banner),
            "classic" => Ok(UiVariant::Classic),
            other => Err(format!("unknown UI variant: {other}")),
        }
    }
}

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the completion provider. Required.
    pub api_key: SecretString,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature sent with every request.
    pub temperature: f32,
    /// Memory window size in exchanges (user+assistant pairs).
    pub memory_exchanges: usize,
    /// Bind address for the web gateway.
    pub host: String,
    pub port: u16,
    /// Chat page header layout.
    pub ui_variant: UiVariant,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails fast when the credential is missing or empty; the gateway must
    /// never come up without one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require_var("OPENAI_API_KEY")?;

        let config = Self {
            api_key: SecretString::from(api_key),
            base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            model: var_or("BORAT_MODEL", DEFAULT_MODEL),
            temperature: parse_var("BORAT_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            memory_exchanges: parse_var("BORAT_MEMORY_K", DEFAULT_MEMORY_EXCHANGES)?,
            host: var_or("BORAT_HOST", DEFAULT_HOST),
            port: parse_var("BORAT_PORT", DEFAULT_PORT)?,
            ui_variant: match std::env::var("BORAT_UI_VARIANT") {
                Ok(v) => v.parse().map_err(|reason| ConfigError::InvalidVar {
                    name: "BORAT_UI_VARIANT",
                    reason,
                })?,
                Err(_) => UiVariant::Banner,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that hold regardless of where values came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::EmptyVar {
                name: "OPENAI_API_KEY",
            });
        }
        if self.memory_exchanges == 0 {
            return Err(ConfigError::InvalidVar {
                name: "BORAT_MEMORY_K",
                reason: "memory window must hold at least one exchange".to_string(),
            });
        }
        Ok(())
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar { name }),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingVar { name }),
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
