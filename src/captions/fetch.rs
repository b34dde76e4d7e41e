use log::{debug, error, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::captions::models::TimedWord;
use crate::errors::CaptionError;

/// HTTP client for caption/transcript payloads
#[derive(Debug, Clone)]
pub struct CaptionFetcher {
    /// HTTP client for making requests
    client: Client,
}

impl Default for CaptionFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl CaptionFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse the JSON document at `url`.
    ///
    /// Network errors, non-success statuses and malformed bodies are logged
    /// and yield `None`. There is no retry.
    pub async fn fetch_caption_data(&self, url: &str) -> Option<Value> {
        match self.try_fetch(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error fetching caption data: {}", e);
                None
            }
        }
    }

    /// Like `fetch_caption_data`, but reports why the fetch failed
    pub async fn try_fetch(&self, url: &str) -> Result<Value, CaptionError> {
        debug!("Fetching caption data from {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CaptionError::Status {
                status_code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Extract timed words from a caption payload.
///
/// Accepts either a bare array of words or an object with a `words` array.
/// Entries that are not valid words are skipped.
pub fn words_from_payload(payload: &Value) -> Vec<TimedWord> {
    let entries = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("words") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                warn!("Caption payload has no 'words' array");
                return Vec::new();
            }
        },
        _ => {
            warn!("Caption payload is neither an array nor an object");
            return Vec::new();
        }
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<TimedWord>(entry.clone()) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping caption word {}: {}", i, e);
                None
            }
        })
        .collect()
}
