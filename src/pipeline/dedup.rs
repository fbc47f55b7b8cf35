//! Near-duplicate collapse over article titles.
//!
//! The same story shows up under several search phrases with slightly
//! different headlines. Titles are compared as lower-cased word sets using
//! Jaccard similarity; anything strictly above the threshold against an
//! already-kept title is dropped. First seen wins, discovery order is
//! preserved, nothing is merged.
//!
//! Quadratic over the run's article count, which tops out at a few hundred.

use crate::models::Article;
use std::collections::HashSet;
use tracing::info;

/// Similarity above this (strictly) marks a duplicate.
pub const DUPLICATE_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Collapse near-duplicates, keeping the first occurrence of each story.
///
/// Returns the survivors and the number of articles removed.
pub fn remove_duplicates(articles: Vec<Article>) -> (Vec<Article>, usize) {
    let total = articles.len();
    let mut unique: Vec<Article> = Vec::with_capacity(total);
    let mut seen: Vec<HashSet<String>> = Vec::with_capacity(total);

    for article in articles {
        let words = title_words(&article.title);
        let is_duplicate = seen
            .iter()
            .any(|kept| jaccard(&words, kept) > DUPLICATE_SIMILARITY_THRESHOLD);
        if !is_duplicate {
            seen.push(words);
            unique.push(article);
        }
    }

    let removed = total - unique.len();
    if removed > 0 {
        info!(removed, kept = unique.len(), "Removed duplicate articles");
    }
    (unique, removed)
}

fn title_words(title: &str) -> HashSet<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
