//! Error types for the chatbot service.
//!
//! One enum per concern. Configuration problems are fatal at startup,
//! provider problems are fatal for the interaction that hit them.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },

    #[error("environment variable {name} is set but empty")]
    EmptyVar { name: &'static str },

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Errors from the completion provider.
///
/// None of these are retried; the failed turn is surfaced to the user.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("provider {provider} rejected the request (rate/quota limit)")]
    RateLimited { provider: String },

    #[error("request to provider {provider} failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("invalid response from provider {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Errors from the web gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
