use async_trait::async_trait;

use crate::error::Result;
use crate::types::JobEvent;

/// Key-value bookkeeping owned by the hosting runtime.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<serde_json::Value>>;
    async fn set(&self, namespace: &str, key: &str, value: serde_json::Value) -> Result<()>;
}

/// Downstream channel for parsed postings.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, topic: &str, event: &JobEvent) -> Result<()>;
}
