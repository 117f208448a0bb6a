//! The bot loop — poll the status API, diff against the last notification,
//! deliver changes to Telegram.
//!
//! One cooperative task: a cycle runs to completion before the next starts,
//! with a fixed sleep in between. The poll cursor and the last-sent message
//! are owned here and mutated only between cycles.


use domashka_api::response::{check_response, first_homework, next_cursor, parse_status};
use domashka_core::{
    error::BotError,
    traits::{Notifier, StatusApi},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Candidate message when a cycle completes with nothing new to report.
pub const NO_NEWS: &str = "Бот начал работу. Новые работы отсутствуют.";

/// Outcome of one poll cycle.
///
/// `FetchFailed` is its own arm so an API outage is never mistaken for
/// "no new work": the loop skips notification entirely instead of sending
/// the quiet sentinel.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The most recent submission changed status.
    Update { message: String, next_cursor: i64 },
    /// Valid response, empty `homeworks`.
    Quiet { next_cursor: i64 },
    /// Transport-level fetch failure; cursor stays put.
    FetchFailed,
}

/// The long-running poller.
pub struct Bot {
    api: Arc<dyn StatusApi>,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    /// Lower bound of the next query window, seconds since epoch. Advanced
    /// only from the server's echoed `current_date`.
    cursor: i64,
    /// The one message already delivered (or attempted). Dedup key.
    last_sent: String,
}

impl Bot {
    /// Create a new bot. `start_cursor` is usually the current time.
    pub fn new(
        api: Arc<dyn StatusApi>,
        notifier: Arc<dyn Notifier>,
        poll_interval_secs: u64,
        start_cursor: i64,
    ) -> Self {
        Self {
            api,
            notifier,
            poll_interval: Duration::from_secs(poll_interval_secs),
            cursor: start_cursor,
            last_sent: String::new(),
        }
    }

    /// Run forever. Only process termination stops the loop.
    pub async fn run(mut self) {
        info!(
            "bot loop running | api: {} | notifier: {} | interval: {}s",
            self.api.name(),
            self.notifier.name(),
            self.poll_interval.as_secs(),
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One iteration: poll, pick a candidate message, pass it through the
    /// dedup gate. Every failure past the credential preflight lands here
    /// and is converted to text; the loop itself never dies.
    pub async fn tick(&mut self) {
        let candidate = match self.poll_cycle(self.cursor).await {
            Ok(CycleOutcome::Update {
                message,
                next_cursor,
            }) => {
                self.cursor = next_cursor;
                Some(message)
            }
            Ok(CycleOutcome::Quiet { next_cursor }) => {
                self.cursor = next_cursor;
                debug!("{NO_NEWS}");
                Some(NO_NEWS.to_string())
            }
            Ok(CycleOutcome::FetchFailed) => None,
            Err(e) => {
                error!("cycle failed: {e}");
                Some(format!("Сбой в работе программы: {e}"))
            }
        };

        if let Some(candidate) = candidate {
            self.notify_if_changed(candidate).await;
        }
    }

    /// One fetch-validate-interpret pass against the given cursor.
    ///
    /// Transport failures degrade to `FetchFailed`; everything else
    /// (non-2xx, shape, interpretation) propagates for `tick` to report.
    async fn poll_cycle(&self, cursor: i64) -> Result<CycleOutcome, BotError> {
        let payload = match self.api.fetch(cursor).await {
            Ok(payload) => payload,
            Err(BotError::Transport(e)) => {
                error!("fetch failed, skipping cycle: {e}");
                return Ok(CycleOutcome::FetchFailed);
            }
            Err(e) => return Err(e),
        };

        check_response(&payload)?;
        let next_cursor = next_cursor(&payload, cursor);

        match first_homework(&payload) {
            Some(homework) => Ok(CycleOutcome::Update {
                message: parse_status(homework)?,
                next_cursor,
            }),
            None => Ok(CycleOutcome::Quiet { next_cursor }),
        }
    }

    /// Dedup gate: deliver the candidate only when it differs from the last
    /// message sent. Last-sent advances even when delivery fails — an
    /// attempted send counts, so a flapping channel does not retry the same
    /// text forever.
    async fn notify_if_changed(&mut self, candidate: String) {
        if candidate == self.last_sent {
            info!("no change since last notification");
            return;
        }

        if let Err(e) = self.notifier.deliver(&candidate).await {
            error!("notification delivery failed: {e}");
        } else {
            debug!("notification delivered");
        }
        self.last_sent = candidate;
    }
}
