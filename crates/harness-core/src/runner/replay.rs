use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use content::AttackDataItem;
use search_client::{Platform, DEFAULT_DATA_INDEX, DEFAULT_EVENT_HOST};
use tracing::info;

use crate::fetch;
use crate::timestamp::TimestampRewriter;

use super::RunContext;

/// Replay every attack-data item in order, failing fast on the first error.
///
/// Touched indices are recorded into `touched` before each upload, so the
/// caller can reclaim partial platform state even when a replay dies halfway
/// through the list.
pub async fn replay_all<P: Platform>(
    ctx: &RunContext<'_, P>,
    items: &[AttackDataItem],
    working_folder: &Path,
    touched: &mut BTreeSet<String>,
) -> Result<()> {
    for item in items {
        replay_one(ctx, item, working_folder, touched)
            .await
            .with_context(|| format!("error replaying attack data file {}", item.file_name))?;
    }
    Ok(())
}

async fn replay_one<P: Platform>(
    ctx: &RunContext<'_, P>,
    item: &AttackDataItem,
    working_folder: &Path,
    touched: &mut BTreeSet<String>,
) -> Result<()> {
    let target_index = item
        .custom_index
        .clone()
        .unwrap_or_else(|| DEFAULT_DATA_INDEX.to_string());

    // Stage into a uniquely named file inside the suite's working folder.
    // keep() detaches it from its handle; the folder owns cleanup in bulk.
    let staging = tempfile::Builder::new()
        .prefix("ATTACK_DATA_FILE_")
        .tempfile_in(working_folder)
        .context("failed creating attack data staging file")?;
    let (_, data_path) = staging
        .keep()
        .context("failed detaching attack data staging file")?;

    if is_remote_url(&item.file_name) {
        fetch::download_file_from_http(ctx.http, &item.file_name, &data_path).await?;
    } else {
        // Copy-on-read isolation: the timestamp rewrite below mutates the
        // staged copy, never the recorded original.
        tokio::fs::copy(&item.file_name, &data_path)
            .await
            .with_context(|| format!("failed copying local attack data {}", item.file_name))?;
    }

    if item.update_timestamp {
        TimestampRewriter::new().rewrite(&data_path, &item.sourcetype, &item.source)?;
    }

    touched.insert(target_index.clone());

    let data = tokio::fs::read(&data_path)
        .await
        .with_context(|| format!("failed reading staged attack data {}", data_path.display()))?;
    ctx.platform
        .submit_event_data(
            &target_index,
            data,
            &item.sourcetype,
            &item.source,
            DEFAULT_EVENT_HOST,
        )
        .await?;

    if !ctx
        .platform
        .wait_for_indexing_to_complete(&item.sourcetype, &target_index)
        .await?
    {
        bail!(
            "timed out waiting for ingestion of sourcetype {} into index {}",
            item.sourcetype,
            target_index
        );
    }

    info!(file = %item.file_name, index = %target_index, "replayed attack data");
    Ok(())
}

fn is_remote_url(file_name: &str) -> bool {
    file_name.starts_with("https://") || file_name.starts_with("http://")
}
