//! The notifier: resolve the target thread, validate the reading, compose the
//! message, post it.

pub mod compose;
pub mod handler;

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::clients::slack_client::ChatApi;
use crate::clients::thread_store::ThreadStore;
use crate::core::config::AppConfig;
use crate::core::models::{ReadingEvent, ThreadRecord};
use crate::core::response;
use crate::errors::NotifyError;

/// Terminal outcome of a successfully executed pipeline.
enum Outcome {
    /// The reading (or alert) was posted into the active thread.
    Posted,
    /// The payload was rejected; the reject reply was posted instead.
    Rejected(String),
}

/// Stateless per-invocation notifier.
///
/// Every invocation re-resolves the active thread from the store; no state
/// survives between calls.
pub struct Notifier {
    config: AppConfig,
    chat: Arc<dyn ChatApi>,
    store: Arc<dyn ThreadStore>,
}

impl Notifier {
    pub fn new(config: AppConfig, chat: Arc<dyn ChatApi>, store: Arc<dyn ThreadStore>) -> Self {
        Self {
            config,
            chat,
            store,
        }
    }

    /// Handle one reading event, returning the `{statusCode, body}` result.
    ///
    /// Errors never escape: every failure is folded into a 400 or 500 result
    /// here, so the invoker always receives a structured response.
    pub async fn handle(&self, event: &ReadingEvent) -> Value {
        match self.run(event).await {
            Ok(Outcome::Posted) => response::ok("Success"),
            Ok(Outcome::Rejected(text)) => response::client_error(&text),
            Err(NotifyError::NoThreadAvailable) => {
                info!("No thread record found in {}", self.config.threads_table);
                response::client_error("No thread record found")
            }
            Err(e) => {
                error!("Notification failed: {e}");
                response::server_error(&format!("Internal server error: {e}"))
            }
        }
    }

    async fn run(&self, event: &ReadingEvent) -> Result<Outcome, NotifyError> {
        let thread_ts = if event.create_thread() {
            self.create_thread().await?
        } else {
            self.latest_thread().await?
        };

        // Validation applies on both resolution paths: an explicit error text
        // or a missing reading becomes a reject reply in the active thread.
        let (temperature, humidity) =
            match (&event.temperature, &event.humidity, event.override_message()) {
                (Some(temperature), Some(humidity), None) => (temperature, humidity),
                (_, _, override_text) => {
                    let reply = override_text.unwrap_or(compose::INVALID_PAYLOAD);
                    self.chat
                        .post_reply(&self.config.slack_channel, &thread_ts, reply, false)
                        .await?;
                    return Ok(Outcome::Rejected(compose::INVALID_PAYLOAD.to_string()));
                }
            };

        let temperature = temperature.as_f64()?;
        let broadcast = compose::is_alert(temperature);
        let text = if broadcast {
            compose::alert_message(temperature)
        } else {
            compose::reading_message(
                event.current_time.as_deref().unwrap_or_default(),
                temperature,
                humidity,
            )
        };

        self.chat
            .post_reply(&self.config.slack_channel, &thread_ts, &text, broadcast)
            .await?;

        Ok(Outcome::Posted)
    }

    /// Post the thread banner and persist the service-issued ts.
    async fn create_thread(&self) -> Result<String, NotifyError> {
        let ts = self
            .chat
            .post_message(&self.config.slack_channel, compose::THREAD_BANNER)
            .await?;

        self.store.put_record(&ThreadRecord::new(ts.clone())).await?;

        Ok(ts)
    }

    /// Resolve the active thread as the stored record with the maximum
    /// creation timestamp, independent of scan order.
    async fn latest_thread(&self) -> Result<String, NotifyError> {
        let records = self.store.scan_records().await?;

        records
            .into_iter()
            .max_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.thread_id.cmp(&b.thread_id))
            })
            .map(|record| record.thread_id)
            .ok_or(NotifyError::NoThreadAvailable)
    }
}
