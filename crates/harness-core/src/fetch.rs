use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Download a remote attack-data file to `destination`, failing on any
/// non-success status.
pub async fn download_file_from_http(
    http: &reqwest::Client,
    url: &str,
    destination: &Path,
) -> Result<()> {
    let response = http
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("download of {url} failed"))?;
    let body = response
        .bytes()
        .await
        .with_context(|| format!("failed reading body of {url}"))?;
    tokio::fs::write(destination, &body)
        .await
        .with_context(|| format!("failed writing {}", destination.display()))?;
    debug!(url, bytes = body.len(), destination = %destination.display(), "downloaded attack data");
    Ok(())
}
