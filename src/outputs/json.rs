//! JSON snapshot output.
//!
//! Serializes the flat deduplicated article list for downstream consumers.
//! The snapshot is written to a `.tmp` sibling first and renamed into
//! place, so a reader never observes a half-written file and an
//! interrupted run leaves the previous snapshot untouched. A timestamped
//! backup copy is written alongside.
//!
//! An empty run still produces a valid `[]` snapshot.

use crate::models::Briefing;
use chrono::Local;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `latest_news.json` (atomically) and its timestamped backup.
///
/// Returns the backup path.
#[instrument(level = "info", skip_all, fields(data_output_dir = %data_output_dir))]
pub async fn write_snapshot(
    briefing: &Briefing,
    data_output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&briefing.articles)?;

    if let Err(e) = fs::create_dir_all(data_output_dir).await {
        error!(%data_output_dir, error = %e, "Failed to create data dir");
        return Err(e.into());
    }

    let snapshot_path = format!("{}/latest_news.json", data_output_dir);
    let tmp_path = format!("{}.tmp", snapshot_path);

    fs::write(&tmp_path, &json).await?;
    fs::rename(&tmp_path, &snapshot_path).await?;
    info!(path = %snapshot_path, articles = briefing.articles.len(), "Wrote JSON snapshot");

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = format!("{}/drone_intelligence_{}.json", data_output_dir, timestamp);
    fs::write(&backup_path, &json).await?;
    info!(path = %backup_path, "Wrote backup snapshot");

    Ok(backup_path)
}
