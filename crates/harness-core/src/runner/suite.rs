use std::path::Path;

use anyhow::{Context, Result};
use content::TestSuite;
use search_client::Platform;
use tracing::info;

use crate::config::HarnessConfig;

use super::prompt::OperatorPrompt;
use super::results::TestResult;
use super::test;
use super::RunContext;

/// Entry point for one harness invocation: load the suite named by the
/// config and run it against the platform.
pub async fn test_detection<P: Platform>(
    platform: &P,
    config: &HarnessConfig,
    prompt: &dyn OperatorPrompt,
) -> Result<Vec<TestResult>> {
    let suite: TestSuite = content::load_first_document(&config.test_file)?;
    info!(
        test_file = %config.test_file.display(),
        tests = suite.tests.len(),
        "loaded test suite"
    );

    let http = reqwest::Client::new();
    let ctx = RunContext {
        platform,
        http: &http,
        content_root: &config.content_root,
        prompt,
        wait_on_failure: config.wait_on_failure,
        wait_on_completion: config.wait_on_completion,
    };
    run_suite(&ctx, &suite, &config.attack_data_root).await
}

/// Run every test in declared order inside a scoped working directory.
///
/// The directory is removed when the `TempDir` goes out of scope, on the
/// error paths included, which reclaims every staged attack-data file the
/// suite produced. A failing test aborts the rest of the suite; the error
/// names the test so the operator can find the fixture.
pub async fn run_suite<P: Platform>(
    ctx: &RunContext<'_, P>,
    suite: &TestSuite,
    attack_data_root: &Path,
) -> Result<Vec<TestResult>> {
    let working_dir = tempfile::Builder::new()
        .prefix("DATA_")
        .tempdir_in(attack_data_root)
        .with_context(|| {
            format!(
                "failed creating working directory under {}",
                attack_data_root.display()
            )
        })?;

    let mut results = Vec::with_capacity(suite.tests.len());
    for test_case in &suite.tests {
        let result = test::run_test(ctx, test_case, working_dir.path())
            .await
            .with_context(|| {
                format!(
                    "error executing test {} ({})",
                    test_case.name, test_case.file
                )
            })?;
        info!(test = %test_case.name, status = result.status, "test finished");
        results.push(result);
    }
    Ok(results)
}
