//! Static HTML brief renderer.
//!
//! Renders the `Briefing` into a single self-contained `index.html`: a
//! header with the collection date, four summary counters, one section per
//! ranked category showing at most [`MAX_ARTICLES_PER_CATEGORY`] article
//! cards, and a footer with run stats. All scraped text is HTML-escaped
//! before it lands in the page.

use crate::models::{Briefing, CategorySection};
use crate::utils::html_escape;
use std::error::Error;
use std::fmt::Write;
use tokio::fs;
use tracing::{info, instrument};

/// Display cap per category section. Full lists stay in the JSON snapshot.
pub const MAX_ARTICLES_PER_CATEGORY: usize = 6;

/// Render and write `{site_output_dir}/index.html`.
#[instrument(level = "info", skip_all, fields(site_output_dir = %site_output_dir))]
pub async fn write_brief(briefing: &Briefing, site_output_dir: &str) -> Result<(), Box<dyn Error>> {
    let html = render_brief(briefing);
    fs::create_dir_all(site_output_dir).await?;

    let path = format!("{}/index.html", site_output_dir);
    fs::write(&path, html).await?;
    info!(path = %path, sections = briefing.sections.len(), "Wrote HTML brief");
    Ok(())
}

fn section_count_matching(sections: &[CategorySection], terms: &[&str]) -> usize {
    sections
        .iter()
        .filter(|s| {
            let label = s.label.to_lowercase();
            terms.iter().any(|t| label.contains(t))
        })
        .map(|s| s.articles.len())
        .sum()
}

fn render_brief(briefing: &Briefing) -> String {
    let total = briefing.articles.len();
    let military = section_count_matching(
        &briefing.sections,
        &["military", "warfare", "defense", "combat"],
    );
    let geopolitical = section_count_matching(
        &briefing.sections,
        &["geopolitical", "china", "russia", "iran"],
    );

    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>").unwrap();
    writeln!(out, "<html lang=\"en\">").unwrap();
    writeln!(out, "<head>").unwrap();
    writeln!(out, "<meta charset=\"UTF-8\">").unwrap();
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )
    .unwrap();
    writeln!(
        out,
        "<title>Drone Intelligence Brief - {}</title>",
        html_escape(&briefing.local_date)
    )
    .unwrap();
    writeln!(out, "<style>").unwrap();
    writeln!(
        out,
        "body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; background: #10141c; color: #e8e8e8; }}"
    )
    .unwrap();
    writeln!(out, "h1 {{ border-bottom: 2px solid #3a4a66; padding-bottom: .5rem; }}").unwrap();
    writeln!(out, "h2 {{ color: #8fb4ff; margin-top: 2rem; }}").unwrap();
    writeln!(
        out,
        ".summary {{ display: flex; gap: 1rem; flex-wrap: wrap; margin: 1rem 0; }}"
    )
    .unwrap();
    writeln!(
        out,
        ".stat {{ background: #1a2233; border-radius: 8px; padding: .75rem 1.25rem; }}"
    )
    .unwrap();
    writeln!(out, ".stat b {{ display: block; font-size: 1.5rem; }}").unwrap();
    writeln!(
        out,
        ".card {{ background: #161d2b; border-radius: 8px; padding: .75rem 1rem; margin: .5rem 0; }}"
    )
    .unwrap();
    writeln!(out, ".card a {{ color: #e8e8e8; text-decoration: none; }}").unwrap();
    writeln!(
        out,
        ".meta {{ color: #93a1b8; font-size: .85rem; margin-top: .25rem; }}"
    )
    .unwrap();
    writeln!(
        out,
        ".badge {{ background: #2a3850; border-radius: 4px; padding: .1rem .4rem; }}"
    )
    .unwrap();
    writeln!(out, "img.thumb {{ max-height: 64px; border-radius: 4px; float: right; }}").unwrap();
    writeln!(out, "footer {{ margin-top: 2rem; color: #93a1b8; font-size: .85rem; }}").unwrap();
    writeln!(out, "</style>").unwrap();
    writeln!(out, "</head>").unwrap();
    writeln!(out, "<body>").unwrap();
    writeln!(out, "<h1>Drone Intelligence Brief</h1>").unwrap();
    writeln!(
        out,
        "<p>Collected {} at {}</p>",
        html_escape(&briefing.local_date),
        html_escape(&briefing.local_time)
    )
    .unwrap();

    writeln!(out, "<div class=\"summary\">").unwrap();
    writeln!(out, "<div class=\"stat\"><b>{}</b>Total reports</div>", total).unwrap();
    writeln!(
        out,
        "<div class=\"stat\"><b>{}</b>Military &amp; defense</div>",
        military
    )
    .unwrap();
    writeln!(out, "<div class=\"stat\"><b>{}</b>Geopolitical</div>", geopolitical).unwrap();
    writeln!(
        out,
        "<div class=\"stat\"><b>{}</b>Categories</div>",
        briefing.sections.len()
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();

    if briefing.articles.is_empty() {
        writeln!(
            out,
            "<p>No intelligence collected in this run. Check back after the next collection cycle.</p>"
        )
        .unwrap();
    }

    for section in &briefing.sections {
        writeln!(out, "<h2>{}</h2>", html_escape(&section.label)).unwrap();
        for article in section.articles.iter().take(MAX_ARTICLES_PER_CATEGORY) {
            writeln!(out, "<div class=\"card\">").unwrap();
            if let Some(image) = &article.image {
                writeln!(
                    out,
                    "<img class=\"thumb\" src=\"{}\" alt=\"\">",
                    html_escape(image)
                )
                .unwrap();
            }
            writeln!(
                out,
                "<a href=\"{}\">{}</a>",
                html_escape(&article.link),
                html_escape(&article.title)
            )
            .unwrap();
            writeln!(
                out,
                "<div class=\"meta\"><span class=\"badge\">{}</span> {}</div>",
                html_escape(&article.source),
                html_escape(&article.published)
            )
            .unwrap();
            writeln!(out, "</div>").unwrap();
        }
        if section.articles.len() > MAX_ARTICLES_PER_CATEGORY {
            writeln!(
                out,
                "<p class=\"meta\">+{} more in this category</p>",
                section.articles.len() - MAX_ARTICLES_PER_CATEGORY
            )
            .unwrap();
        }
    }

    writeln!(out, "<footer>").unwrap();
    writeln!(
        out,
        "{} queries attempted, {} succeeded, {} failed. {} raw records, {} duplicates removed.",
        briefing.summary.queries_attempted,
        briefing.summary.queries_succeeded,
        briefing.summary.queries_failed,
        briefing.summary.raw_records,
        briefing.summary.duplicates_removed
    )
    .unwrap();
    writeln!(out, "</footer>").unwrap();
    writeln!(out, "</body>").unwrap();
    writeln!(out, "</html>").unwrap();
    out
}
