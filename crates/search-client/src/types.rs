/// Index that replayed data lands in when a test does not name its own.
pub const DEFAULT_DATA_INDEX: &str = "main";

/// Host tag stamped onto every replayed event.
pub const DEFAULT_EVENT_HOST: &str = "detcheck";

/// Outcome of one search-job execution.
///
/// Either an error record (`status` set, usually with a `message`) or a
/// success record carrying the job statistics. A populated `status` always
/// wins over any statistics when the result is classified downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobResult {
    pub status: Option<bool>,
    pub message: Option<String>,
    pub event_count: Option<u64>,
    pub result_count: Option<u64>,
    pub scan_count: Option<u64>,
    pub run_duration: Option<f64>,
    pub performance: Option<serde_json::Value>,
    pub search: Option<String>,
}

impl JobResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Some(false),
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests;
