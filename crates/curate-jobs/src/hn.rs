//! Hacker News Firebase API: item model, the `ItemSource` seam and its
//! reqwest-backed client.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::FetchError;

/// A story or comment as served by `/v0/item/<id>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HnItem {
    pub id: u64,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub kids: Vec<u64>,
}

impl HnItem {
    /// Comments worth handing to the posting parser.
    pub fn is_candidate(&self) -> bool {
        !self.deleted && self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Anything that can look up items by id. `Ok(None)` means the API has no
/// such item.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn item(&self, id: u64) -> Result<Option<HnItem>, FetchError>;
}

pub struct HnClient {
    api_base: String,
    client: reqwest::Client,
}

impl HnClient {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("curate/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn item_url(&self, id: u64) -> String {
        format!("{}/item/{}.json", self.api_base, id)
    }
}

#[async_trait]
impl ItemSource for HnClient {
    async fn item(&self, id: u64) -> Result<Option<HnItem>, FetchError> {
        let resp = self.client.get(self.item_url(id)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                id,
                status: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        // Unknown ids come back as a literal `null`.
        serde_json::from_str::<Option<HnItem>>(&body)
            .map_err(|e| FetchError::Malformed {
                id,
                message: e.to_string(),
            })
    }
}
