use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::runner::results::TestResult;

/// Log a per-test verdict line, print the full result list as JSON for
/// downstream tooling, and return how many tests failed.
pub fn emit(results: &[TestResult]) -> Result<usize> {
    let mut failed = 0usize;
    for result in results {
        if result.status {
            info!(test = %result.name, file = %result.file, "PASS");
        } else {
            failed += 1;
            warn!(
                test = %result.name,
                file = %result.file,
                message = result.message.as_deref().unwrap_or(""),
                "FAIL"
            );
        }
    }

    let rendered = serde_json::to_string_pretty(results).context("failed serializing results")?;
    println!("{rendered}");

    info!(total = results.len(), failed, "detection testing finished");
    Ok(failed)
}
