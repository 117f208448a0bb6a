use thiserror::Error;

/// Top-level error type for domashka.
///
/// Transport failures and non-2xx responses are separate variants on purpose:
/// the poll loop degrades on the former and reports the latter.
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration error (fatal at startup).
    #[error("config error: {0}")]
    Config(String),

    /// Transport-level failure talking to the status API.
    #[error("request error: {0}")]
    Transport(String),

    /// The status API answered with a non-success HTTP status.
    #[error("API returned status {0}")]
    Http(u16),

    /// The decoded API response does not have the expected shape.
    #[error("malformed API response: {0}")]
    Shape(String),

    /// A homework record is missing a required key.
    #[error("homework record is missing key `{0}`")]
    MissingField(&'static str),

    /// A homework status outside the documented verdict set.
    #[error("unknown homework status `{0}`")]
    UnknownVerdict(String),

    /// Failure delivering a notification.
    #[error("notify error: {0}")]
    Notify(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
