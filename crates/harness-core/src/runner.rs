pub mod baselines;
pub mod prompt;
pub mod replay;
pub mod results;
pub mod suite;

use std::path::Path;

use search_client::Platform;

use self::prompt::OperatorPrompt;

pub use self::suite::test_detection;

/// Collaborators and flags one suite run threads through every phase.
/// Built once per invocation; nothing in here is process-global.
pub struct RunContext<'a, P: Platform> {
    pub platform: &'a P,
    pub http: &'a reqwest::Client,
    pub content_root: &'a Path,
    pub prompt: &'a dyn OperatorPrompt,
    pub wait_on_failure: bool,
    pub wait_on_completion: bool,
}
