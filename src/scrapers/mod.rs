//! Search-result extraction from Google News.
//!
//! The single extractor lives in [`google_news`]. It follows a two-phase
//! pattern per query:
//!
//! 1. **Fetching**: Download the results page for a search phrase
//! 2. **Extraction**: Pull loosely-typed [`crate::models::RawRecord`]s out
//!    of the page's `article` elements
//!
//! Failed fetches are logged and yield zero records so one bad query never
//! takes down the rest of the plan.

pub mod google_news;
