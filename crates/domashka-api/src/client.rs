use async_trait::async_trait;
use domashka_core::{config::PracticumConfig, error::BotError, traits::StatusApi};
use tracing::debug;

/// HTTP client for the Practicum homework-status endpoint.
///
/// One authenticated GET per poll cycle, `from_date` as the query lower
/// bound. Docs: the endpoint echoes a `current_date` watermark that the
/// caller feeds into the next request.
pub struct PracticumClient {
    config: PracticumConfig,
    client: reqwest::Client,
}

impl PracticumClient {
    /// Create a new client from config.
    pub fn new(config: PracticumConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    fn name(&self) -> &str {
        "practicum"
    }

    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, BotError> {
        debug!("querying homework statuses from_date={from_date}");

        let resp = self
            .client
            .get(&self.config.endpoint)
            .header("Authorization", format!("OAuth {}", self.config.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BotError::Http(status.as_u16()));
        }

        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| BotError::Shape(format!("response body is not JSON: {e}")))
    }
}
