use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use crate::errors::NotifyError;

/// A sensor reading event as forwarded by the IoT rule.
///
/// Every field is optional on the wire; presence is checked by the notifier,
/// not enforced by the schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingEvent {
    #[serde(default)]
    pub temperature: Option<Scalar>,
    #[serde(default)]
    pub humidity: Option<Scalar>,
    #[serde(default)]
    pub create_thread: Option<bool>,
    #[serde(default)]
    pub current_time: Option<String>,
    /// Override error text; a non-empty value forces the reject path.
    #[serde(default, rename = "message")]
    pub error_message: Option<String>,
}

impl ReadingEvent {
    pub fn create_thread(&self) -> bool {
        self.create_thread.unwrap_or(false)
    }

    /// Override error text, treating an empty string as absent.
    pub fn override_message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }
}

/// A payload value that may arrive as a JSON number or a numeric string.
///
/// IoT rules forward either depending on how the SQL statement is written, so
/// parsing to `f64` is deferred until the value is actually needed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Result<f64, NotifyError> {
        match self {
            Scalar::Number(n) => Ok(*n),
            Scalar::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| NotifyError::Internal(format!("invalid numeric value {s:?}: {e}"))),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One persisted thread per "new day" event.
///
/// Records accumulate without expiry; the current thread is the record with
/// the maximum `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    /// Service-issued identifier of the thread's root message.
    pub thread_id: String,
    /// UTC ISO-8601 creation instant; lexicographic order is creation order.
    pub created_at: String,
}

impl ThreadRecord {
    pub fn new(thread_id: String) -> Self {
        Self {
            thread_id,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
