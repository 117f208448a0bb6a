use crate::error::BotError;
use async_trait::async_trait;

/// Status API trait — where homework verdicts come from.
///
/// The production implementation queries the Practicum review endpoint;
/// tests substitute scripted payloads.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Fetch all homework updates since `from_date` (seconds since epoch).
    ///
    /// Returns the raw decoded payload. Implementations must keep transport
    /// failures (`BotError::Transport`) distinct from non-success HTTP
    /// statuses (`BotError::Http`).
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, BotError>;
}

/// Notifier trait — where rendered messages go.
///
/// The destination (chat, channel, stream) is fixed per instance.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Deliver `text` to the configured destination.
    async fn deliver(&self, text: &str) -> Result<(), BotError>;
}
