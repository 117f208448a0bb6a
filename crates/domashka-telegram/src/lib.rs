//! # domashka-telegram
//!
//! Notification delivery via the Telegram Bot API (`sendMessage`).
//! Docs: <https://core.telegram.org/bots/api>


use async_trait::async_trait;
use domashka_core::{config::TelegramConfig, error::BotError, traits::Notifier};
use serde::Deserialize;
use tracing::debug;

/// Telegram notifier bound to a single destination chat.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
}

/// Envelope every Bot API call answers with.
#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramNotifier {
    /// Create a new notifier from config.
    pub fn new(config: TelegramConfig) -> Self {
        let base_url = format!("https://api.telegram.org/bot{}", config.bot_token);
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn deliver(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/sendMessage", self.base_url);
        let body = message_body(&self.config.chat_id, text);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Notify(format!("telegram send failed: {e}")))?;

        let status = resp.status();
        let envelope: TgResponse = resp
            .json()
            .await
            .map_err(|e| BotError::Notify(format!("telegram response parse failed: {e}")))?;

        if !envelope.ok {
            return Err(BotError::Notify(format!(
                "telegram send got {status}: {}",
                envelope.description.unwrap_or_default()
            )));
        }

        debug!("delivered notification to chat {}", self.config.chat_id);
        Ok(())
    }
}

/// Build the `sendMessage` request body.
///
/// Plain text on purpose: the notification strings contain quotes that
/// Markdown parse mode would reject.
fn message_body(chat_id: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "chat_id": chat_id,
        "text": text,
    })
}
