//! Google News search-results extractor.
//!
//! Fetches the results page for a search phrase and pulls loosely-typed
//! records out of its `article` elements. Field extraction is best-effort:
//! the first anchor's text is the title, the first `div a[href]` is the
//! link, the `time` element is the published label, and the anchor sitting
//! next to the timestamp is the publisher. Everything stays optional; the
//! normalizer decides what survives.
//!
//! # URL Pattern
//!
//! Search pages look like
//! `https://news.google.com/search?q=military%20drone%20when%3A24h&hl=en`.

use crate::config::RunConfig;
use crate::models::{QueryPlanEntry, RawRecord};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use rand::{rng, Rng};
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

static ARTICLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div a[href]").unwrap());
static TIME_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("time").unwrap());
static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// What one plan entry produced: the records, or `None` when the fetch or
/// parse failed.
#[derive(Debug)]
pub struct QueryOutcome {
    pub entry: QueryPlanEntry,
    pub search_url: String,
    pub records: Option<Vec<RawRecord>>,
}

/// The results-page URL for a search phrase.
pub fn search_url(phrase: &str) -> String {
    format!(
        "https://news.google.com/search?q={}&hl=en",
        urlencoding::encode(phrase)
    )
}

/// HTTP client configured for polite, sequential collection.
pub struct GoogleNewsClient {
    client: reqwest::Client,
    max_articles_per_query: usize,
}

impl GoogleNewsClient {
    pub fn new(config: &RunConfig) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            max_articles_per_query: config.max_articles_per_query,
        })
    }

    /// Fetch and extract one plan entry's results page.
    #[instrument(level = "info", skip_all, fields(label = entry.label))]
    pub async fn search_query(
        &self,
        entry: &QueryPlanEntry,
    ) -> Result<Vec<RawRecord>, Box<dyn Error>> {
        let url = search_url(entry.phrase);
        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let records = extract_records(&html, self.max_articles_per_query);
        if records.is_empty() {
            debug!(
                %url,
                page_preview = %truncate_for_log(&html, 300),
                "No records extracted from results page"
            );
        } else {
            debug!(%url, count = records.len(), "Extracted records from results page");
        }
        Ok(records)
    }

    /// Walk the whole plan sequentially.
    ///
    /// A bounded random delay elapses before every query after the first.
    /// Failures are logged and recorded as outcomes with no records; the
    /// walk always completes.
    #[instrument(level = "info", skip_all, fields(queries = plan.len()))]
    pub async fn collect_all(&self, plan: &[QueryPlanEntry], config: &RunConfig) -> Vec<QueryOutcome> {
        let delay_min = config.delay_min_ms;
        let delay_max = config.delay_max_ms;

        let outcomes: Vec<QueryOutcome> = stream::iter(plan.iter().copied().enumerate())
            .then(|(i, entry)| async move {
                if i > 0 {
                    let delay_ms = rng().random_range(delay_min..=delay_max);
                    sleep(Duration::from_millis(delay_ms)).await;
                }

                let search_url = search_url(entry.phrase);
                match self.search_query(&entry).await {
                    Ok(records) => {
                        info!(label = entry.label, count = records.len(), "Query succeeded");
                        QueryOutcome {
                            entry,
                            search_url,
                            records: Some(records),
                        }
                    }
                    Err(e) => {
                        error!(label = entry.label, error = %e, "Query failed");
                        QueryOutcome {
                            entry,
                            search_url,
                            records: None,
                        }
                    }
                }
            })
            .collect()
            .await;

        info!(
            attempted = outcomes.len(),
            failed = outcomes.iter().filter(|o| o.records.is_none()).count(),
            "Completed plan walk"
        );
        outcomes
    }
}

/// Pull records out of a results page, at most `max` of them.
///
/// Scans up to `2 * max` article elements so a page padded with titleless
/// promo cards still fills the quota.
fn extract_records(html: &str, max: usize) -> Vec<RawRecord> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for element in document.select(&ARTICLE_SELECTOR).take(max * 2) {
        if records.len() >= max {
            break;
        }
        let record = extract_record(element);
        if record.title.is_some() {
            records.push(record);
        }
    }
    records
}

fn extract_record(element: ElementRef) -> RawRecord {
    let title = element
        .select(&ANCHOR_SELECTOR)
        .next()
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let link = element
        .select(&LINK_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|h| h.to_string());

    let mut published = None;
    let mut source = None;
    if let Some(time_el) = element.select(&TIME_SELECTOR).next() {
        let label = time_el.text().collect::<String>().trim().to_string();
        if !label.is_empty() {
            published = Some(label);
        }
        // the publisher anchor sits beside the timestamp
        if let Some(parent) = time_el.parent().and_then(ElementRef::wrap) {
            source = parent
                .select(&ANCHOR_SELECTOR)
                .next()
                .map(|a| a.text().collect::<String>().trim().to_string())
                .filter(|s| !s.is_empty());
        }
    }

    let image = element
        .select(&IMAGE_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|s| s.to_string());

    RawRecord {
        title,
        link,
        source,
        published,
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
<html><body>
<article>
  <h3><a href="./articles/abc">China unveils advanced drone program</a></h3>
  <div><a href="./articles/abc">Full coverage</a></div>
  <div><time datetime="2025-05-06T12:00:00Z">3 hours ago</time> <a href="./publications/x">Reuters</a></div>
  <img src="//img.example.com/thumb.jpg">
</article>
<article>
  <h3><a href="./articles/def">Drone delivery service expands across rural areas</a></h3>
  <div><a href="./articles/def">Full coverage</a></div>
</article>
<article>
  <div></div>
</article>
</body></html>
"#;

    #[test]
    fn test_search_url_encodes_phrase() {
        let url = search_url("military drone when:24h");
        assert_eq!(
            url,
            "https://news.google.com/search?q=military%20drone%20when%3A24h&hl=en"
        );
    }

    #[test]
    fn test_extract_records_pulls_all_fields() {
        let records = extract_records(RESULTS_PAGE, 8);
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(
            first.title.as_deref(),
            Some("China unveils advanced drone program")
        );
        assert_eq!(first.link.as_deref(), Some("./articles/abc"));
        assert_eq!(first.published.as_deref(), Some("3 hours ago"));
        assert_eq!(first.source.as_deref(), Some("Reuters"));
        assert_eq!(first.image.as_deref(), Some("//img.example.com/thumb.jpg"));
    }

    #[test]
    fn test_titleless_elements_are_skipped() {
        let records = extract_records(RESULTS_PAGE, 8);
        assert!(records.iter().all(|r| r.title.is_some()));
    }

    #[test]
    fn test_missing_fields_stay_none() {
        let records = extract_records(RESULTS_PAGE, 8);
        let second = &records[1];
        assert_eq!(
            second.title.as_deref(),
            Some("Drone delivery service expands across rural areas")
        );
        assert!(second.published.is_none());
        assert!(second.source.is_none());
        assert!(second.image.is_none());
    }

    #[test]
    fn test_per_query_cap_respected() {
        let mut page = String::from("<html><body>");
        for i in 0..20 {
            page.push_str(&format!(
                "<article><a href=\"./articles/{i}\">Story number {i} about drones</a></article>"
            ));
        }
        page.push_str("</body></html>");

        let records = extract_records(&page, 8);
        assert_eq!(records.len(), 8);
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        assert!(extract_records("<html><body></body></html>", 8).is_empty());
    }
}
