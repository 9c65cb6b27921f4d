use super::types::HarnessConfig;
use super::util::env_u64;

impl HarnessConfig {
    /// Timing knobs only; the connection settings take their env fallbacks
    /// through the CLI layer.
    pub(super) fn apply_env_overrides(&mut self) {
        if let Some(v) = env_u64("DETCHECK_INGEST_POLL_SECS") {
            self.ingest_poll_secs = v;
        }
        if let Some(v) = env_u64("DETCHECK_INGEST_TIMEOUT_SECS") {
            self.ingest_timeout_secs = v;
        }
        if let Some(v) = env_u64("DETCHECK_SEARCH_POLL_SECS") {
            self.search_poll_secs = v;
        }
    }
}
