mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BotError;
use defaults::*;

/// Environment variables carrying the three required secrets.
pub const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Top-level domashka configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub practicum: PracticumConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory where `bot.log` is written.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Fixed delay between poll cycles.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

/// Practicum status API config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticumConfig {
    /// OAuth token for the status endpoint. Usually set via `PRACTICUM_TOKEN`.
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            endpoint: default_endpoint(),
        }
    }
}

/// Telegram delivery config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    /// Bot token. Usually set via `TELEGRAM_TOKEN`.
    #[serde(default)]
    pub bot_token: String,
    /// Destination chat id. Usually set via `TELEGRAM_CHAT_ID`.
    #[serde(default)]
    pub chat_id: String,
}

impl Config {
    /// Overlay secrets from the process environment.
    ///
    /// A non-empty environment variable wins over the config file; the
    /// environment is the authoritative source for operational secrets.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_PRACTICUM_TOKEN).filter(|v| !v.is_empty()) {
            self.practicum.token = token;
        }
        if let Some(token) = lookup(ENV_TELEGRAM_TOKEN).filter(|v| !v.is_empty()) {
            self.telegram.bot_token = token;
        }
        if let Some(chat_id) = lookup(ENV_TELEGRAM_CHAT_ID).filter(|v| !v.is_empty()) {
            self.telegram.chat_id = chat_id;
        }
    }

    /// Preflight check: all three secrets must be present before the loop
    /// starts. Absence is fatal, not retryable.
    pub fn check_credentials(&self) -> Result<(), BotError> {
        let mut missing = Vec::new();
        if self.practicum.token.is_empty() {
            missing.push(ENV_PRACTICUM_TOKEN);
        }
        if self.telegram.bot_token.is_empty() {
            missing.push(ENV_TELEGRAM_TOKEN);
        }
        if self.telegram.chat_id.is_empty() {
            missing.push(ENV_TELEGRAM_CHAT_ID);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BotError::Config(format!(
                "missing required credentials: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist; secrets still arrive
/// via `apply_env`.
pub fn load(path: &str) -> Result<Config, BotError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| BotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
