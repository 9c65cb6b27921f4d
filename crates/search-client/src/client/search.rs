use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::types::JobResult;

use super::{Client, PATH_SEARCH_JOBS};

#[derive(Debug, Deserialize)]
struct DispatchResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct JobStatusResponse {
    pub(super) entry: Vec<JobStatusEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JobStatusEntry {
    pub(super) content: JobContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JobContent {
    #[serde(default)]
    pub(super) is_done: bool,
    #[serde(default)]
    pub(super) is_failed: bool,
    #[serde(default)]
    pub(super) event_count: Option<u64>,
    #[serde(default)]
    pub(super) result_count: Option<u64>,
    #[serde(default)]
    pub(super) scan_count: Option<u64>,
    #[serde(default)]
    pub(super) run_duration: Option<f64>,
    #[serde(default)]
    pub(super) performance: Option<serde_json::Value>,
}

impl Client {
    /// Run a detection or baseline search with its pass-condition suffix over
    /// the given time window and wait for the job to finish.
    ///
    /// Execution failures come back as an error *record* (`status: false`
    /// plus a message) rather than an `Err`, so a broken search downgrades to
    /// a failed test instead of tearing the harness down.
    pub async fn run_search(
        &self,
        search: &str,
        pass_condition: &str,
        earliest_time: &str,
        latest_time: &str,
    ) -> JobResult {
        let query = build_query(search, pass_condition);
        match self
            .run_search_inner(&query, earliest_time, latest_time)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "search execution failed");
                JobResult::failure(format!("{err:#}"))
            }
        }
    }

    async fn run_search_inner(
        &self,
        query: &str,
        earliest_time: &str,
        latest_time: &str,
    ) -> Result<JobResult> {
        let sid = self.dispatch_search(query, earliest_time, latest_time).await?;
        loop {
            let content = self.job_status(&sid).await?;
            if content.is_failed {
                return Ok(JobResult::failure(format!(
                    "search job {sid} failed on the platform"
                )));
            }
            if content.is_done {
                return Ok(JobResult {
                    status: None,
                    message: None,
                    event_count: content.event_count,
                    result_count: content.result_count,
                    scan_count: content.scan_count,
                    run_duration: content.run_duration,
                    performance: content.performance,
                    search: Some(query.to_string()),
                });
            }
            sleep(self.search_poll).await;
        }
    }

    async fn dispatch_search(
        &self,
        query: &str,
        earliest_time: &str,
        latest_time: &str,
    ) -> Result<String> {
        let url = self.url_for(PATH_SEARCH_JOBS);
        let dispatched: DispatchResponse = self
            .with_retry_loop("dispatch_search", || {
                let url = url.clone();
                async move {
                    let response = self
                        .http
                        .post(&url)
                        .basic_auth(&self.credentials.username, Some(&self.credentials.password))
                        .form(&[
                            ("search", query),
                            ("earliest_time", earliest_time),
                            ("latest_time", latest_time),
                            ("output_mode", "json"),
                        ])
                        .send()
                        .await
                        .context("failed submitting search job")?;
                    let response = response
                        .error_for_status()
                        .context("search job submission rejected")?;
                    response
                        .json::<DispatchResponse>()
                        .await
                        .context("failed decoding search dispatch response")
                }
            })
            .await?;
        debug!(sid = %dispatched.sid, "search job dispatched");
        Ok(dispatched.sid)
    }

    async fn job_status(&self, sid: &str) -> Result<JobContent> {
        let url = self.url_for(&format!("{PATH_SEARCH_JOBS}/{sid}"));
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .query(&[("output_mode", "json")])
            .send()
            .await
            .with_context(|| format!("failed polling search job {sid}"))?
            .error_for_status()
            .with_context(|| format!("search job {sid} status request rejected"))?;
        let mut status: JobStatusResponse = response
            .json()
            .await
            .with_context(|| format!("failed decoding status of search job {sid}"))?;
        if status.entry.is_empty() {
            anyhow::bail!("search job {sid} has no status entry");
        }
        Ok(status.entry.swap_remove(0).content)
    }
}

/// Prefix bare queries with the search command and append the pass
/// condition. Piped and already-prefixed queries go through untouched.
pub(super) fn build_query(search: &str, pass_condition: &str) -> String {
    let search = search.trim();
    let base = if search.starts_with('|') || search.starts_with("search ") {
        search.to_string()
    } else {
        format!("search {search}")
    };
    let condition = pass_condition.trim();
    if condition.is_empty() {
        base
    } else {
        format!("{base} {condition}")
    }
}
