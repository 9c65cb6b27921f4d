use search_client::JobResult;
use serde::Serialize;

/// Uniform record produced for every detection test and every baseline.
///
/// The optional fields are the full allow-list of what may be carried over
/// from a `JobResult`; anything else the platform returns never reaches the
/// emitted record because there is no field for it to land in.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub file: String,
    pub logic: bool,
    pub noise: bool,
    pub status: bool,
    #[serde(rename = "runDuration", skip_serializing_if = "Option::is_none")]
    pub run_duration: Option<f64>,
    #[serde(rename = "scanCount", skip_serializing_if = "Option::is_none")]
    pub scan_count: Option<u64>,
    #[serde(rename = "eventCount", skip_serializing_if = "Option::is_none")]
    pub event_count: Option<u64>,
    #[serde(rename = "resultCount", skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baselines: Option<Vec<TestResult>>,
}

impl TestResult {
    /// Classify a job outcome. An explicit `status` on the job (the error
    /// record path) is copied verbatim; otherwise exactly one matching event
    /// passes, zero or several fail.
    pub fn from_job(job: &JobResult, name: &str, file: &str, logic: bool, noise: bool) -> Self {
        let status = match job.status {
            Some(explicit) => explicit,
            None => job.event_count == Some(1),
        };
        Self {
            name: name.to_string(),
            file: file.to_string(),
            logic,
            noise,
            status,
            run_duration: job.run_duration,
            scan_count: job.scan_count,
            event_count: job.event_count,
            result_count: job.result_count,
            performance: job.performance.clone(),
            search: job.search.clone(),
            message: job.message.clone(),
            baselines: None,
        }
    }
}
