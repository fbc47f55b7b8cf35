//! # Drone Intel Brief
//!
//! A drone and UAS news collection pipeline that walks a fixed plan of
//! Google News searches, normalizes and deduplicates the results, buckets
//! them into thematic intelligence categories, and writes a JSON snapshot
//! plus a static HTML brief.
//!
//! ## Usage
//!
//! ```sh
//! drone_intel_brief -d ./data -s ./docs
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Collection**: Fetch each search phrase sequentially, with a random
//!    delay between queries
//! 2. **Normalization**: Filter navigation chrome and complete URLs
//! 3. **Processing**: Deduplicate by title similarity, categorize by
//!    keyword rules, rank categories
//! 4. **Output**: Write the JSON snapshot (atomically) and the HTML brief

use chrono::Local;
use clap::Parser;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod models;
mod outputs;
mod pipeline;
mod queries;
mod scrapers;
mod utils;

use cli::Cli;
use config::RunConfig;
use pipeline::PipelineRun;
use scrapers::google_news::GoogleNewsClient;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(date = %Local::now().date_naive(), "drone_intel_brief starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.data_output_dir, ?args.site_output_dir, priority = args.priority, "Parsed CLI arguments");

    let config = RunConfig::load(args.config.as_deref()).await?;
    debug!(?config, "Effective configuration");

    // Early check: ensure both output dirs are writable
    if let Err(e) = ensure_writable_dir(&args.data_output_dir).await {
        error!(
            path = %args.data_output_dir,
            error = %e,
            "Data output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }
    if let Err(e) = ensure_writable_dir(&args.site_output_dir).await {
        error!(
            path = %args.site_output_dir,
            error = %e,
            "Site output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Collect search results ----
    let plan = queries::plan(args.priority);
    info!(
        queries = plan.len(),
        mode = if args.priority { "priority" } else { "comprehensive" },
        "Executing intelligence searches"
    );

    let client = GoogleNewsClient::new(&config)?;
    let outcomes = client.collect_all(plan, &config).await;

    let mut run = PipelineRun::new();
    for outcome in &outcomes {
        match &outcome.records {
            Some(records) => run.absorb_query(&outcome.entry, records, &outcome.search_url),
            None => run.record_failure(&outcome.entry),
        }
    }
    info!(articles = run.article_count(), "Collection complete");

    // ---- Dedup, categorize, rank ----
    let briefing = run.finish();

    // Category and source breakdown for run logs
    let top_categories = briefing
        .sections
        .iter()
        .sorted_by(|a, b| b.articles.len().cmp(&a.articles.len()))
        .take(10)
        .map(|s| format!("{}: {}", s.label, s.articles.len()))
        .join(", ");
    let top_sources = briefing
        .articles
        .iter()
        .counts_by(|a| a.source.as_str())
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(8)
        .map(|(source, count)| format!("{}: {}", source, count))
        .join(", ");
    info!(%top_categories, "Top categories");
    info!(%top_sources, "Top sources");

    // ---- Outputs ----
    let json_ok = match outputs::json::write_snapshot(&briefing, &args.data_output_dir).await {
        Ok(backup_path) => {
            info!(backup = %backup_path, "JSON snapshot written");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to write JSON snapshot");
            false
        }
    };

    let html_ok = match outputs::html::write_brief(&briefing, &args.site_output_dir).await {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Failed to write HTML brief");
            false
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        articles = briefing.articles.len(),
        queries_succeeded = briefing.summary.queries_succeeded,
        queries_failed = briefing.summary.queries_failed,
        duplicates_removed = briefing.summary.duplicates_removed,
        "Execution complete"
    );

    if !json_ok && !html_ok {
        return Err("all output phases failed".into());
    }
    Ok(())
}
