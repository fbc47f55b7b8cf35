//! Raw record filtering and normalization.
//!
//! Turns the loosely-typed [`RawRecord`]s pulled off a results page into
//! fully-populated [`Article`]s, or drops them. All decisions are pure
//! string work; no I/O happens here.
//!
//! # Rejection Rules
//!
//! - No title, or a trimmed title shorter than 15 characters
//! - Titles that are Google News navigation chrome ("Home", "For you", ...)
//!
//! # URL Completion
//!
//! Relative links and images resolve against the Google News origin.
//! Protocol-relative `//` URLs get `https:` prepended. A link that cannot
//! be resolved at all falls back to the search-results page URL so the
//! reader still lands somewhere useful. `data:` image URIs are discarded.

use crate::models::{Article, QueryPlanEntry, RawRecord};
use chrono::{SecondsFormat, Utc};
use tracing::debug;
use url::Url;

/// Minimum trimmed title length for a record to survive.
pub const MIN_TITLE_LEN: usize = 15;

/// Publisher labels longer than this are treated as page noise.
pub const MAX_SOURCE_LEN: usize = 50;

/// Navigation chrome the results page mixes in with real headlines.
const NAV_TERMS: &[&str] = &[
    "home",
    "for you",
    "following",
    "world",
    "local",
    "business",
    "technology",
    "entertainment",
    "sports",
    "science",
    "health",
];

const GOOGLE_NEWS_ORIGIN: &str = "https://news.google.com";

/// Normalize one raw record into an [`Article`].
///
/// Returns `None` when the record has no usable title. `search_url` is the
/// results-page URL the record came from, used as the link of last resort.
pub fn normalize_record(
    record: &RawRecord,
    entry: &QueryPlanEntry,
    search_url: &str,
) -> Option<Article> {
    let title = record.title.as_deref().unwrap_or("").trim().to_string();
    if title.len() < MIN_TITLE_LEN {
        debug!(%title, "Rejected record: title too short");
        return None;
    }
    if NAV_TERMS.contains(&title.to_lowercase().as_str()) {
        debug!(%title, "Rejected record: navigation chrome");
        return None;
    }

    let link = record
        .link
        .as_deref()
        .and_then(complete_url)
        .unwrap_or_else(|| search_url.to_string());

    let source = match record.source.as_deref() {
        Some(s) if !s.is_empty() && s.len() <= MAX_SOURCE_LEN => s.to_string(),
        _ => entry.label.to_string(),
    };

    let published = match record.published.as_deref() {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => "Recent".to_string(),
    };

    let image = record.image.as_deref().and_then(complete_image_url);

    Some(Article {
        title,
        link,
        source,
        published,
        category: entry.label.to_string(),
        image,
        collected_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Resolve a scraped href into an absolute URL.
///
/// `./x` and `/x` resolve against the Google News origin, `//x` gets the
/// scheme completed, absolute `http...` passes through. Anything else is
/// unresolvable.
fn complete_url(href: &str) -> Option<String> {
    if href.starts_with("//") {
        return Some(format!("https:{}", href));
    }
    if href.starts_with("./") || href.starts_with('/') {
        let base = Url::parse(GOOGLE_NEWS_ORIGIN).ok()?;
        return base.join(href).ok().map(|u| u.to_string());
    }
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    None
}

/// Same completion rules as links, with two differences: `data:` URIs are
/// rejected outright and bare relative paths still resolve against the
/// origin.
fn complete_image_url(src: &str) -> Option<String> {
    if src.is_empty() || src.starts_with("data:") {
        return None;
    }
    if src.starts_with("//") {
        return Some(format!("https:{}", src));
    }
    if src.starts_with("http") {
        return Some(src.to_string());
    }
    let base = Url::parse(GOOGLE_NEWS_ORIGIN).ok()?;
    base.join(src.trim_start_matches('/'))
        .ok()
        .map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: QueryPlanEntry = QueryPlanEntry {
        phrase: "military drone when:24h",
        label: "Military Drones",
    };

    const SEARCH_URL: &str = "https://news.google.com/search?q=military%20drone%20when%3A24h&hl=en";

    fn record_with_title(title: &str) -> RawRecord {
        RawRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_rejects_short_title() {
        let record = record_with_title("Too short");
        assert!(normalize_record(&record, &ENTRY, SEARCH_URL).is_none());
    }

    #[test]
    fn test_rejects_missing_title() {
        let record = RawRecord::default();
        assert!(normalize_record(&record, &ENTRY, SEARCH_URL).is_none());
    }

    #[test]
    fn test_rejects_navigation_chrome() {
        for nav in ["Home", "World", "Entertainment  "] {
            let padded = format!("{:<16}", nav);
            let record = record_with_title(&padded);
            assert!(
                normalize_record(&record, &ENTRY, SEARCH_URL).is_none(),
                "should reject {:?}",
                nav
            );
        }
    }

    #[test]
    fn test_accepts_real_headline() {
        let record = record_with_title("Military drone strike reported near contested border");
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(
            article.title,
            "Military drone strike reported near contested border"
        );
        assert_eq!(article.category, "Military Drones");
        assert_eq!(article.published, "Recent");
        assert!(!article.collected_at.is_empty());
    }

    #[test]
    fn test_relative_link_resolves_against_origin() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.link = Some("./articles/abc123".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.link, "https://news.google.com/articles/abc123");
    }

    #[test]
    fn test_protocol_relative_link_completed() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.link = Some("//example.com/story".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.link, "https://example.com/story");
    }

    #[test]
    fn test_unresolvable_link_falls_back_to_search_url() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.link = Some("javascript:void(0)".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.link, SEARCH_URL);
    }

    #[test]
    fn test_data_image_uri_rejected() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.image = Some("data:image/gif;base64,R0lGOD".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.image, None);
    }

    #[test]
    fn test_relative_image_resolves_against_origin() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.image = Some("/api/attachments/thumb.png".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(
            article.image.as_deref(),
            Some("https://news.google.com/api/attachments/thumb.png")
        );
    }

    #[test]
    fn test_absolute_image_passes_through() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.image = Some("https://cdn.example.com/img.jpg".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.image.as_deref(), Some("https://cdn.example.com/img.jpg"));
    }

    #[test]
    fn test_long_source_falls_back_to_plan_label() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.source = Some("x".repeat(51));
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.source, "Military Drones");
    }

    #[test]
    fn test_short_source_is_kept() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.source = Some("Reuters".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.source, "Reuters");
    }

    #[test]
    fn test_published_label_kept_when_present() {
        let mut record = record_with_title("Military drone strike reported near contested border");
        record.published = Some("3 hours ago".to_string());
        let article = normalize_record(&record, &ENTRY, SEARCH_URL).unwrap();
        assert_eq!(article.published, "3 hours ago");
    }
}
