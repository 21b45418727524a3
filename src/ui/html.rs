//! # HTML Export
//!
//! Renders the current results as a standalone HTML page.
//!
//! Every value that came from the backend goes through
//! [`v_htmlescape::escape`], attributes included, so markup in a posting
//! always shows up as literal text.

use crate::ui::app::ResultsView;
use crate::ui::card::{CardView, Logo, EMPTY_RESULTS_MESSAGE, LOGO_PLACEHOLDER};
use crate::ui::particles::Particle;
use std::fmt::Write;
use v_htmlescape::escape;

/// Render one card. `index` drives the staggered fade-in.
pub fn render_card(card: &CardView, index: usize) -> String {
    let logo = match &card.logo {
        Logo::Thumbnail(url) => format!(
            r#"<img src="{src}" alt="{alt}" onerror="this.parentElement.textContent='{placeholder}'">"#,
            src = escape(url),
            alt = escape(&card.company),
            placeholder = LOGO_PLACEHOLDER,
        ),
        Logo::Placeholder => LOGO_PLACEHOLDER.to_string(),
    };

    let mut tags = String::new();
    for tag in &card.tags {
        let class = match tag.kind.css_modifier() {
            Some(modifier) => format!("job-tag {modifier}"),
            None => "job-tag".to_string(),
        };
        let _ = write!(
            tags,
            r#"<span class="{class}">{icon} {text}</span>"#,
            icon = tag.kind.icon(),
            text = escape(&tag.text),
        );
    }

    format!(
        r#"<div class="job-card" style="animation-delay: {delay:.2}s">
    <div class="job-header">
        <div class="job-logo">{logo}</div>
        <div class="job-info">
            <h3 class="job-title">{title}</h3>
            <p class="job-company">{company}</p>
        </div>
    </div>
    <div class="job-meta">{tags}</div>
    <p class="job-description">{description}</p>
    <div class="job-actions">
        <button class="btn btn-ai" data-result-set="{set}" data-position="{position}">✨ AI Summary</button>
        <a href="{href}" target="_blank" rel="noopener" class="btn btn-secondary">Apply Now →</a>
    </div>
</div>
"#,
        delay = index as f32 * 0.05,
        title = escape(&card.title),
        company = escape(&card.company),
        description = escape(&card.description),
        set = card.job.set,
        position = card.job.position,
        href = escape(card.apply_href()),
    )
}

/// Render the results section: header, then one card per job or the
/// empty-state message.
pub fn render_results(results: &ResultsView, cards: &[CardView]) -> String {
    let mut grid = String::new();
    if cards.is_empty() {
        let _ = write!(
            grid,
            r#"<div class="no-results"><p>{EMPTY_RESULTS_MESSAGE}</p></div>"#
        );
    } else {
        for (index, card) in cards.iter().enumerate() {
            grid.push_str(&render_card(card, index));
        }
    }

    format!(
        r#"<section class="results-section active" id="resultsSection">
    <div class="results-header">
        <span class="results-count">{total}</span>
        <p class="results-query">{query_line}</p>
    </div>
    <div class="jobs-grid" id="jobsGrid">
{grid}    </div>
</section>
"#,
        total = results.total,
        query_line = escape(&results.query_line()),
    )
}

fn render_particles(particles: &[Particle]) -> String {
    let mut out = String::new();
    for p in particles {
        let _ = writeln!(
            out,
            r#"<div class="particle" style="left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s"></div>"#,
            p.left,
            p.top,
            p.delay.as_secs_f32(),
            p.duration.as_secs_f32(),
        );
    }
    out
}

/// Render a complete page for `results`.
pub fn render_page(results: &ResultsView, cards: &[CardView], particles: &[Particle]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Jobs: {title}</title>
    <style>
        body {{ font-family: Inter, system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; }}
        .particles {{ position: fixed; inset: 0; pointer-events: none; overflow: hidden; }}
        .particle {{ position: absolute; width: 4px; height: 4px; border-radius: 50%; background: rgba(139, 92, 246, 0.4); animation: float linear infinite; }}
        @keyframes float {{ from {{ transform: translateY(0); }} to {{ transform: translateY(-100vh); }} }}
        .results-section {{ max-width: 1200px; margin: 0 auto; padding: 2rem; position: relative; }}
        .results-count {{ font-size: 2rem; font-weight: 700; }}
        .jobs-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.5rem; }}
        .job-card {{ background: rgba(30, 41, 59, 0.8); border-radius: 12px; padding: 1.25rem; animation: fadeIn 0.4s ease both; }}
        @keyframes fadeIn {{ from {{ opacity: 0; transform: translateY(10px); }} to {{ opacity: 1; }} }}
        .job-header {{ display: flex; gap: 1rem; align-items: center; }}
        .job-logo {{ width: 48px; height: 48px; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; }}
        .job-logo img {{ max-width: 100%; max-height: 100%; border-radius: 8px; }}
        .job-tag {{ display: inline-block; margin: 0.25rem 0.25rem 0 0; padding: 0.2rem 0.6rem; border-radius: 999px; background: #1e293b; font-size: 0.8rem; }}
        .job-tag.remote {{ color: #34d399; }}
        .job-tag.salary {{ color: #fbbf24; }}
        .job-description {{ color: #94a3b8; display: -webkit-box; -webkit-line-clamp: 4; -webkit-box-orient: vertical; overflow: hidden; }}
        .btn {{ padding: 0.5rem 1rem; border-radius: 8px; border: none; color: inherit; text-decoration: none; }}
        .btn-ai {{ background: #7c3aed; }}
        .btn-secondary {{ background: #334155; }}
    </style>
</head>
<body>
<div class="particles" id="particles">
{particles}</div>
{results}</body>
</html>
"#,
        title = escape(&results.search_query),
        particles = render_particles(particles),
        results = render_results(results, cards),
    )
}
