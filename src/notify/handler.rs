//! Lambda handler for the notifier entrypoint. Parses the reading event,
//! wires the clients, and runs the pipeline.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::Notifier;
use crate::clients::slack_client::SlackClient;
use crate::clients::thread_store::DynamoThreadStore;
use crate::core::config::AppConfig;
use crate::core::models::ReadingEvent;
use crate::core::response;

/// Lambda handler for the notifier.
///
/// # Errors
///
/// Returns an error only when configuration is missing; every other failure
/// is folded into a `{statusCode, body}` response payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!("Notifier received event: {:?}", event.payload);

    let reading: ReadingEvent = match serde_json::from_value(event.payload) {
        Ok(reading) => reading,
        Err(e) => {
            error!("Failed to parse reading event: {}", e);
            return Ok(response::server_error(&format!(
                "Internal server error: {e}"
            )));
        }
    };

    let chat = Arc::new(SlackClient::new(config.slack_bot_token.clone()));
    let store = Arc::new(DynamoThreadStore::new(config.threads_table.clone()).await);
    let notifier = Notifier::new(config, chat, store);

    Ok(notifier.handle(&reading).await)
}

pub use self::function_handler as handler;
