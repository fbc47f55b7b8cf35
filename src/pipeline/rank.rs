//! Category ordering for the brief.
//!
//! Buckets articles by category (first-encountered order) and emits the
//! fixed priority categories first, skipping empty ones, then the rest by
//! descending article count. `sort_by` is stable, so equal-count buckets
//! keep their first-encountered order. Article lists are carried whole;
//! display truncation belongs to the renderer.

use crate::models::{Article, CategorySection};

/// Categories always shown first, in this order, when non-empty.
pub const PRIORITY_CATEGORIES: &[&str] = &[
    "Military & Defense",
    "Autonomous Systems",
    "Geopolitical Intelligence",
    "Counter-Drone Technology",
    "Commercial & Civilian",
    "Surveillance & Security",
    "Regulation & Policy",
];

/// Group categorized articles into ranked sections.
pub fn rank_categories(articles: &[Article]) -> Vec<CategorySection> {
    let mut buckets: Vec<CategorySection> = Vec::new();
    for article in articles {
        match buckets.iter_mut().find(|b| b.label == article.category) {
            Some(bucket) => bucket.articles.push(article.clone()),
            None => buckets.push(CategorySection {
                label: article.category.clone(),
                articles: vec![article.clone()],
            }),
        }
    }

    let mut sections: Vec<CategorySection> = Vec::with_capacity(buckets.len());
    for priority in PRIORITY_CATEGORIES {
        if let Some(pos) = buckets.iter().position(|b| b.label == *priority) {
            sections.push(buckets.remove(pos));
        }
    }

    buckets.sort_by(|a, b| b.articles.len().cmp(&a.articles.len()));
    sections.extend(buckets);
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, category: &str) -> Article {
        Article {
            title: title.to_string(),
            link: "https://news.google.com/articles/x".to_string(),
            source: "Reuters".to_string(),
            published: "Recent".to_string(),
            category: category.to_string(),
            image: None,
            collected_at: "2025-05-06T14:30:00Z".to_string(),
        }
    }

    fn labels(sections: &[CategorySection]) -> Vec<&str> {
        sections.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn test_priority_categories_come_first() {
        let mut articles = Vec::new();
        for i in 0..10 {
            articles.push(article(&format!("commercial {}", i), "Commercial & Civilian"));
        }
        for i in 0..3 {
            articles.push(article(&format!("military {}", i), "Military & Defense"));
        }
        for i in 0..3 {
            articles.push(article(&format!("geo {}", i), "Geopolitical Intelligence"));
        }

        let sections = rank_categories(&articles);
        assert_eq!(
            labels(&sections),
            vec![
                "Military & Defense",
                "Geopolitical Intelligence",
                "Commercial & Civilian",
            ]
        );
    }

    #[test]
    fn test_empty_priority_categories_skipped() {
        let articles = vec![article("solo quadcopter review published", "Quadcopters")];
        let sections = rank_categories(&articles);
        assert_eq!(labels(&sections), vec!["Quadcopters"]);
    }

    #[test]
    fn test_remainder_sorted_by_descending_count() {
        let mut articles = Vec::new();
        articles.push(article("q1", "Quadcopters"));
        for i in 0..3 {
            articles.push(article(&format!("fpv {}", i), "FPV Systems"));
        }
        for i in 0..2 {
            articles.push(article(&format!("stealth {}", i), "Stealth Technology"));
        }

        let sections = rank_categories(&articles);
        assert_eq!(
            labels(&sections),
            vec!["FPV Systems", "Stealth Technology", "Quadcopters"]
        );
    }

    #[test]
    fn test_count_ties_keep_first_encountered_order() {
        let articles = vec![
            article("vtol prototype flies", "VTOL Aircraft"),
            article("fpv racing finals held", "FPV Systems"),
            article("vtol order announced", "VTOL Aircraft"),
            article("fpv goggles reviewed", "FPV Systems"),
        ];
        let sections = rank_categories(&articles);
        assert_eq!(labels(&sections), vec!["VTOL Aircraft", "FPV Systems"]);
    }

    #[test]
    fn test_full_article_lists_preserved() {
        let mut articles = Vec::new();
        for i in 0..9 {
            articles.push(article(&format!("military story {}", i), "Military & Defense"));
        }
        let sections = rank_categories(&articles);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].articles.len(), 9);
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        assert!(rank_categories(&[]).is_empty());
    }
}
