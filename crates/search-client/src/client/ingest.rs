use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use super::{Client, PATH_RECEIVER_SIMPLE, PATH_SEARCH_JOBS};

#[derive(Debug, Default, Deserialize)]
pub(super) struct OneshotResults {
    #[serde(default)]
    pub(super) results: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl Client {
    /// Upload raw event data into an index. One call, one file's worth of
    /// events; the platform splits lines and timestamps per its sourcetype
    /// configuration.
    pub async fn submit_event_data(
        &self,
        index: &str,
        data: Vec<u8>,
        sourcetype: &str,
        source: &str,
        host: &str,
    ) -> Result<()> {
        let url = self.url_for(PATH_RECEIVER_SIMPLE);
        let bytes = data.len();
        self.with_retry_loop("submit_event_data", || {
            let url = url.clone();
            let body = data.clone();
            async move {
                let response = self
                    .http
                    .post(&url)
                    .basic_auth(&self.credentials.username, Some(&self.credentials.password))
                    .query(&[
                        ("index", index),
                        ("sourcetype", sourcetype),
                        ("source", source),
                        ("host", host),
                    ])
                    .body(body)
                    .send()
                    .await
                    .with_context(|| format!("failed uploading event data to index {index}"))?;
                response
                    .error_for_status()
                    .with_context(|| format!("event upload to index {index} rejected"))?;
                Ok(())
            }
        })
        .await?;
        info!(index, sourcetype, bytes, "submitted event data");
        Ok(())
    }

    /// Poll until the event count for the sourcetype/index pair is nonzero
    /// and unchanged across two consecutive polls. Returns false once the
    /// configured timeout elapses without the count settling.
    pub async fn wait_for_indexing_to_complete(
        &self,
        sourcetype: &str,
        index: &str,
    ) -> Result<bool> {
        let query = format!("search index={index} sourcetype=\"{sourcetype}\" | stats count");
        let deadline = Instant::now() + self.ingest_timeout;
        let mut previous: Option<u64> = None;
        loop {
            let count = self.count_events(&query).await?;
            debug!(index, sourcetype, count, "ingestion poll");
            if count > 0 && previous == Some(count) {
                return Ok(true);
            }
            previous = Some(count);
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(self.ingest_poll).await;
        }
    }

    /// Remove everything a test replayed. Runs a delete search per index;
    /// the credentials must carry the platform's delete capability.
    pub async fn delete_attack_data(&self, indices: &BTreeSet<String>) -> Result<()> {
        for index in indices {
            let query = format!("search index={index} | delete");
            self.oneshot_search(&query)
                .await
                .with_context(|| format!("failed deleting replayed data from index {index}"))?;
            info!(index, "deleted replayed attack data");
        }
        Ok(())
    }

    async fn count_events(&self, query: &str) -> Result<u64> {
        let results = self.oneshot_search(query).await?;
        Ok(leading_count(&results))
    }

    async fn oneshot_search(&self, query: &str) -> Result<OneshotResults> {
        let url = self.url_for(PATH_SEARCH_JOBS);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .form(&[
                ("search", query),
                ("exec_mode", "oneshot"),
                ("output_mode", "json"),
            ])
            .send()
            .await
            .context("failed submitting oneshot search")?
            .error_for_status()
            .context("oneshot search rejected")?;
        response
            .json::<OneshotResults>()
            .await
            .context("failed decoding oneshot search results")
    }
}

pub(super) fn leading_count(results: &OneshotResults) -> u64 {
    results
        .results
        .first()
        .and_then(|row| row.get("count"))
        .map(count_value)
        .unwrap_or(0)
}

pub(super) fn count_value(value: &serde_json::Value) -> u64 {
    match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
