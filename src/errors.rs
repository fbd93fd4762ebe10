use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Slack API error: {0}")]
    ExternalService(String),

    #[error("no thread record found")]
    NoThreadAvailable,

    #[error("Failed to interact with AWS services: {0}")]
    Store(String),

    #[error("{0}")]
    Internal(String),
}

impl From<SlackClientError> for NotifyError {
    fn from(error: SlackClientError) -> Self {
        // Surface the service-reported error code (e.g. "invalid_auth") when
        // the API answered with ok=false; other failures keep their full text.
        match error {
            SlackClientError::ApiError(api) => NotifyError::ExternalService(api.code),
            other => NotifyError::ExternalService(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for NotifyError {
    fn from(error: anyhow::Error) -> Self {
        NotifyError::Internal(error.to_string())
    }
}
