//! DynamoDB-backed thread lookup table.
//!
//! One item per created thread, keyed by the Slack message ts (`MessageID`)
//! with a string `Timestamp` attribute. Resolution is a full-table scan; the
//! table holds one item per day so the scan stays trivial.

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client as DynamoClient, types::AttributeValue};

use crate::core::models::ThreadRecord;
use crate::errors::NotifyError;

const MESSAGE_ID_ATTR: &str = "MessageID";
const TIMESTAMP_ATTR: &str = "Timestamp";

/// Store operations consumed by the notifier.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Persist a new thread record. Records are never mutated or deleted.
    async fn put_record(&self, record: &ThreadRecord) -> Result<(), NotifyError>;

    /// Read every stored thread record.
    async fn scan_records(&self) -> Result<Vec<ThreadRecord>, NotifyError>;
}

/// DynamoDB implementation of [`ThreadStore`].
pub struct DynamoThreadStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoThreadStore {
    pub async fn new(table_name: String) -> Self {
        let shared = aws_config::from_env().load().await;
        Self {
            client: DynamoClient::new(&shared),
            table_name,
        }
    }
}

#[async_trait]
impl ThreadStore for DynamoThreadStore {
    async fn put_record(&self, record: &ThreadRecord) -> Result<(), NotifyError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(MESSAGE_ID_ATTR, AttributeValue::S(record.thread_id.clone()))
            .item(TIMESTAMP_ATTR, AttributeValue::S(record.created_at.clone()))
            .send()
            .await
            .map_err(|e| NotifyError::Store(format!("dynamodb put_item: {e}")))?;

        Ok(())
    }

    async fn scan_records(&self) -> Result<Vec<ThreadRecord>, NotifyError> {
        let mut records = Vec::new();
        let mut start_key = None;

        // A single scan page is capped at 1 MB, so follow LastEvaluatedKey.
        loop {
            let response = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| NotifyError::Store(format!("dynamodb scan: {e}")))?;

            for item in response.items() {
                let thread_id = item.get(MESSAGE_ID_ATTR).and_then(|v| v.as_s().ok());
                let created_at = item.get(TIMESTAMP_ATTR).and_then(|v| v.as_s().ok());

                if let (Some(thread_id), Some(created_at)) = (thread_id, created_at) {
                    records.push(ThreadRecord {
                        thread_id: thread_id.clone(),
                        created_at: created_at.clone(),
                    });
                }
            }

            start_key = response.last_evaluated_key().cloned();
            if start_key.is_none() {
                break;
            }
        }

        Ok(records)
    }
}
