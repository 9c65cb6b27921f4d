use anyhow::Result;
use content::{BaselineSpec, DetectionDoc};
use search_client::Platform;
use tracing::{debug, warn};

use super::results::TestResult;
use super::RunContext;

/// Outcome of the baseline phase. `Tripped` carries the results produced up
/// to and including the first failing baseline; everything after it was
/// skipped.
pub enum BaselineGate {
    Clear(Vec<TestResult>),
    Tripped(Vec<TestResult>),
}

impl BaselineGate {
    pub fn into_results(self) -> Vec<TestResult> {
        match self {
            Self::Clear(results) | Self::Tripped(results) => results,
        }
    }
}

/// Run the baselines strictly in declared order, stopping at the first
/// failure: baselines establish preconditions, and once one does not hold the
/// rest are assumed broken too.
pub async fn run_baselines<P: Platform>(
    ctx: &RunContext<'_, P>,
    baselines: &[BaselineSpec],
) -> Result<BaselineGate> {
    let mut results = Vec::with_capacity(baselines.len());
    for baseline in baselines {
        let result = run_baseline(ctx, baseline).await?;
        let failed = !result.status;
        results.push(result);
        if failed {
            warn!(baseline = %baseline.name, "baseline failed, skipping the rest");
            return Ok(BaselineGate::Tripped(results));
        }
    }
    Ok(BaselineGate::Clear(results))
}

async fn run_baseline<P: Platform>(
    ctx: &RunContext<'_, P>,
    baseline: &BaselineSpec,
) -> Result<TestResult> {
    // Loading the document surfaces a missing or malformed baseline file
    // before any search runs; the search text itself comes from the suite.
    let document_path = ctx.content_root.join(&baseline.file);
    let _document: DetectionDoc = content::load_first_document(&document_path)?;

    debug!(baseline = %baseline.name, "running baseline search");
    let job = ctx
        .platform
        .run_search(
            &baseline.search,
            &baseline.pass_condition,
            &baseline.earliest_time,
            &baseline.latest_time,
        )
        .await?;
    Ok(TestResult::from_job(
        &job,
        &baseline.name,
        &baseline.file,
        false,
        false,
    ))
}
