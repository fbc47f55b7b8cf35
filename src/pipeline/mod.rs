//! The collection pipeline: normalize, deduplicate, categorize, rank.
//!
//! A [`PipelineRun`] owns everything one run accumulates: the growing
//! article list and the per-query counters. Raw records are normalized as
//! they are absorbed; the expensive whole-set passes (dedup, categorize,
//! rank) happen once in [`PipelineRun::finish`], which consumes the run
//! and returns the [`Briefing`] handed to the outputs.

pub mod categorize;
pub mod dedup;
pub mod normalize;
pub mod rank;

use crate::models::{Article, Briefing, QueryPlanEntry, RawRecord, RunSummary};
use chrono::Local;
use itertools::Itertools;
use tracing::{debug, info};

/// Accumulating state for one collection run.
#[derive(Debug, Default)]
pub struct PipelineRun {
    articles: Vec<Article>,
    raw_records: usize,
    queries_attempted: usize,
    queries_succeeded: usize,
    queries_failed: usize,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb the records one successful query produced. Each record is
    /// normalized immediately; rejects are dropped here.
    pub fn absorb_query(&mut self, entry: &QueryPlanEntry, records: &[RawRecord], search_url: &str) {
        self.queries_attempted += 1;
        self.queries_succeeded += 1;
        self.raw_records += records.len();

        let before = self.articles.len();
        for record in records {
            if let Some(article) = normalize::normalize_record(record, entry, search_url) {
                self.articles.push(article);
            }
        }
        debug!(
            label = entry.label,
            records = records.len(),
            kept = self.articles.len() - before,
            "Absorbed query results"
        );
    }

    /// Record a query whose fetch or parse failed. The run carries on.
    pub fn record_failure(&mut self, entry: &QueryPlanEntry) {
        self.queries_attempted += 1;
        self.queries_failed += 1;
        debug!(label = entry.label, "Recorded failed query");
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Run the whole-set passes and assemble the [`Briefing`].
    ///
    /// An empty run produces a valid empty brief, never an error.
    pub fn finish(self) -> Briefing {
        let raw_count = self.articles.len();
        let (mut articles, duplicates_removed) = dedup::remove_duplicates(self.articles);
        categorize::assign_categories(&mut articles);
        let sections = rank::rank_categories(&articles);

        let category_count = articles.iter().map(|a| a.category.as_str()).unique().count();
        let source_count = articles.iter().map(|a| a.source.as_str()).unique().count();

        info!(
            raw = raw_count,
            unique = articles.len(),
            duplicates_removed,
            categories = category_count,
            sources = source_count,
            "Pipeline finished"
        );

        let now = Local::now();
        Briefing {
            local_date: now.date_naive().to_string(),
            local_time: now.format("%H:%M").to_string(),
            sections,
            articles,
            summary: RunSummary {
                raw_records: self.raw_records,
                total_articles: raw_count - duplicates_removed,
                duplicates_removed,
                category_count,
                source_count,
                queries_attempted: self.queries_attempted,
                queries_succeeded: self.queries_succeeded,
                queries_failed: self.queries_failed,
            },
        }
    }
}
