//! Thematic categorization via an ordered keyword-rule table.
//!
//! Each rule pairs a keyword set with a category label. The lower-cased
//! concatenation of title, query label, and source is scanned against the
//! rules in declared order; the first rule with any substring hit wins.
//! Rules are ordered most-specific-first, so "military drone delivery"
//! lands in Military & Defense, not Commercial & Civilian. No hit yields
//! the default bucket, so every article always gets a category.

use crate::models::Article;

/// Category for articles no rule claims.
pub const DEFAULT_CATEGORY: &str = "General Intelligence";

/// Ordered rule table. Keyword matching is plain substring search over the
/// combined lower-cased text.
pub const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (
        &["military", "warfare", "strike", "combat", "defense", "weapon", "armed"],
        "Military & Defense",
    ),
    (
        &["autonomous", "ai", "artificial intelligence", "swarm", "ml", "machine learning"],
        "Autonomous Systems",
    ),
    (
        &["china", "chinese", "russia", "russian", "iran", "iranian", "north korea", "dprk"],
        "Geopolitical Intelligence",
    ),
    (
        &["counter", "anti-drone", "defense", "c-uas", "jammer"],
        "Counter-Drone Technology",
    ),
    (
        &["delivery", "commercial", "civilian", "agriculture", "agri", "farm"],
        "Commercial & Civilian",
    ),
    (
        &["surveillance", "security", "monitoring", "reconnaissance", "isr"],
        "Surveillance & Security",
    ),
    (
        &["regulation", "faa", "regulatory", "legal", "law", "policy"],
        "Regulation & Policy",
    ),
    (&["fpv", "first person"], "FPV Systems"),
    (&["vtol", "vertical takeoff"], "VTOL Aircraft"),
    (&["quadcopter", "multirotor"], "Quadcopters"),
    (&["stealth", "invisible"], "Stealth Technology"),
    (&["electronic", "cyber", "5g", "communication"], "Electronic Systems"),
    (
        &["janes", "defense news", "warzone", "breaking defense"],
        "Defense Publications",
    ),
    (
        &["reuters", "bloomberg", "cnn", "bbc", "wsj", "financial times"],
        "Major News",
    ),
    (&["wired", "techcrunch", "ars technica"], "Tech Publications"),
    (
        &["israel", "turkey", "ukraine", "usa", "america"],
        "Regional Intelligence",
    ),
    (&["uav", "uas"], "UAV/UAS Systems"),
    (&["drone"], "General Drones"),
];

/// Pick the category for one article's text fields.
pub fn categorize(title: &str, label: &str, source: &str) -> &'static str {
    let combined = format!("{} {} {}", title, label, source).to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|k| combined.contains(k)) {
            return category;
        }
    }
    DEFAULT_CATEGORY
}

/// Rewrite each article's category (the query label up to this point) with
/// the thematic category derived from its text.
pub fn assign_categories(articles: &mut [Article]) {
    for article in articles {
        article.category = categorize(&article.title, &article.category, &article.source).to_string();
    }
}
