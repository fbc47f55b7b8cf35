//! Data models for collected articles and the assembled brief.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawRecord`]: Loosely-typed fields pulled straight out of a results page
//! - [`Article`]: A normalized, categorized article ready for output
//! - [`Briefing`]: Everything one run produces: ranked sections, the flat
//!   article list, and the run summary
//!
//! [`Article`] uses PascalCase wire names to stay compatible with the JSON
//! snapshot consumed downstream, hence the serde renames.

use serde::{Deserialize, Serialize};

/// Raw fields extracted from one search-result element.
///
/// Everything is optional. A record with no title is useless and gets
/// dropped by the normalizer; every other missing field degrades to a
/// default there.
#[derive(Debug, Default, Clone)]
pub struct RawRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub published: Option<String>,
    pub image: Option<String>,
}

/// One entry of the static query plan: the search phrase sent to Google
/// News and the category label suggested for its results.
#[derive(Debug, Clone, Copy)]
pub struct QueryPlanEntry {
    pub phrase: &'static str,
    pub label: &'static str,
}

/// A normalized article that survived filtering.
///
/// # JSON Schema
///
/// The wire names are the PascalCase keys of the snapshot file that
/// downstream consumers already read, so they are preserved verbatim.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    /// The headline text.
    #[serde(rename = "Title")]
    pub title: String,
    /// Absolute article URL, or the search-results page when the real
    /// link could not be resolved.
    #[serde(rename = "Link")]
    pub link: String,
    /// Publisher name, or the query label when no publisher was found.
    #[serde(rename = "Source")]
    pub source: String,
    /// Free-text recency label, e.g. "3 hours ago". Defaults to "Recent".
    #[serde(rename = "Published")]
    pub published: String,
    /// The thematic category assigned by the categorizer.
    #[serde(rename = "Category")]
    pub category: String,
    /// Absolute thumbnail URL, if one was found.
    #[serde(rename = "Image")]
    pub image: Option<String>,
    /// RFC 3339 UTC timestamp set when the record was normalized.
    #[serde(rename = "Collected_At")]
    pub collected_at: String,
}

/// One ranked category bucket with its full article list.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub label: String,
    pub articles: Vec<Article>,
}

/// Counters describing one collection run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub raw_records: usize,
    pub total_articles: usize,
    pub duplicates_removed: usize,
    pub category_count: usize,
    pub source_count: usize,
    pub queries_attempted: usize,
    pub queries_succeeded: usize,
    pub queries_failed: usize,
}

/// The complete product of one run: ranked sections for the renderer,
/// the flat deduplicated article list for the JSON snapshot, and the
/// run summary.
#[derive(Debug, Serialize)]
pub struct Briefing {
    /// The date of collection in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of collection in `HH:MM` format.
    pub local_time: String,
    /// Category buckets in display order.
    pub sections: Vec<CategorySection>,
    /// Every surviving article, in discovery order.
    pub articles: Vec<Article>,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            title: "Military drone strike reported near border".to_string(),
            link: "https://news.google.com/articles/abc".to_string(),
            source: "Reuters".to_string(),
            published: "2 hours ago".to_string(),
            category: "Military & Defense".to_string(),
            image: None,
            collected_at: "2025-05-06T14:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_article_wire_field_names() {
        let json = serde_json::to_string(&sample_article()).unwrap();
        assert!(json.contains("\"Title\""));
        assert!(json.contains("\"Link\""));
        assert!(json.contains("\"Source\""));
        assert!(json.contains("\"Published\""));
        assert!(json.contains("\"Category\""));
        assert!(json.contains("\"Image\""));
        assert!(json.contains("\"Collected_At\""));
    }

    #[test]
    fn test_article_round_trip() {
        let json = serde_json::to_string(&sample_article()).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Military drone strike reported near border");
        assert_eq!(back.source, "Reuters");
        assert_eq!(back.category, "Military & Defense");
        assert_eq!(back.image, None);
    }

    #[test]
    fn test_raw_record_defaults_to_all_none() {
        let record = RawRecord::default();
        assert!(record.title.is_none());
        assert!(record.link.is_none());
        assert!(record.source.is_none());
        assert!(record.published.is_none());
        assert!(record.image.is_none());
    }

    #[test]
    fn test_empty_briefing_serializes() {
        let briefing = Briefing {
            local_date: "2025-05-06".to_string(),
            local_time: "20:30".to_string(),
            sections: vec![],
            articles: vec![],
            summary: RunSummary {
                raw_records: 0,
                total_articles: 0,
                duplicates_removed: 0,
                category_count: 0,
                source_count: 0,
                queries_attempted: 0,
                queries_succeeded: 0,
                queries_failed: 0,
            },
        };

        let json = serde_json::to_string(&briefing).unwrap();
        assert!(json.contains("2025-05-06"));
        assert!(json.contains("\"articles\":[]"));
    }
}
