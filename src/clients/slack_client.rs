//! Slack API client module
//!
//! Encapsulates the one Slack operation the relay consumes: chat.postMessage,
//! optionally threaded and optionally broadcast back to the channel feed.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::*;
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackTs,
};

use crate::errors::NotifyError;

static SLACK_CLIENT: Lazy<SlackHyperClient> = Lazy::new(|| {
    SlackHyperClient::new(
        SlackClientHyperConnector::new().expect("Failed to create Slack client connector"),
    )
});

/// Chat operations consumed by the notifier.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Post a top-level channel message; returns the service-issued ts.
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, NotifyError>;

    /// Post a threaded reply; returns the service-issued ts of the reply.
    ///
    /// `broadcast` makes the reply also appear in the main channel feed.
    async fn post_reply(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
        broadcast: bool,
    ) -> Result<String, NotifyError>;
}

/// Slack implementation of [`ChatApi`] over a process-wide hyper client.
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }
}

#[async_trait]
impl ChatApi for SlackClient {
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, NotifyError> {
        let session = SLACK_CLIENT.open_session(&self.token);

        let request = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );

        let response = session.chat_post_message(&request).await?;

        Ok(response.ts.0)
    }

    async fn post_reply(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
        broadcast: bool,
    ) -> Result<String, NotifyError> {
        let session = SLACK_CLIENT.open_session(&self.token);

        let request = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        )
        .with_thread_ts(SlackTs(thread_ts.to_string()))
        .with_reply_broadcast(broadcast);

        let response = session.chat_post_message(&request).await?;

        Ok(response.ts.0)
    }
}
