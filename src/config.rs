use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Upper bound on an inbound chat body.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Runtime settings for the relay, read once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bearer credential for the gateway. `None` fails every chat request.
    pub api_key: Option<String>,
    pub gateway_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("AI_GATEWAY_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let gateway_url = lookup("AI_GATEWAY_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());

        let model = lookup("AI_GATEWAY_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = match lookup("AI_GATEWAY_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("AI_GATEWAY_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("AI_GATEWAY_TIMEOUT_SECS must be greater than zero");
        }

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => 8080,
        };

        Ok(Self {
            api_key,
            gateway_url,
            model,
            request_timeout: Duration::from_secs(timeout_secs),
            host,
            port,
        })
    }
}
