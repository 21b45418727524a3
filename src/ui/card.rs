//! # Job Cards
//!
//! [`CardView`] is what a single posting looks like on screen, independent
//! of whether it ends up in the terminal or in an HTML page.

use crate::api::JobPosting;
use crate::jobs::JobRef;

/// Shown instead of a company logo.
pub const LOGO_PLACEHOLDER: &str = "💼";
pub const NO_DESCRIPTION: &str = "No description available";
/// Target of the apply link when the posting has no apply option.
pub const APPLY_PLACEHOLDER: &str = "#";
pub const EMPTY_RESULTS_MESSAGE: &str = "No jobs found. Try different keywords or location.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    Thumbnail(String),
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Location,
    Remote,
    Salary,
    Schedule,
    Posted,
}

impl TagKind {
    pub fn icon(self) -> &'static str {
        match self {
            TagKind::Location => "📍",
            TagKind::Remote => "🏠",
            TagKind::Salary => "💰",
            TagKind::Schedule => "⏰",
            TagKind::Posted => "📅",
        }
    }

    /// Extra CSS class for the HTML chip.
    pub fn css_modifier(self) -> Option<&'static str> {
        match self {
            TagKind::Remote => Some("remote"),
            TagKind::Salary => Some("salary"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub text: String,
}

impl Tag {
    fn new(kind: TagKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.kind.icon(), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Handle the summary action is bound to.
    pub job: JobRef,
    pub logo: Logo,
    pub title: String,
    pub company: String,
    pub tags: Vec<Tag>,
    pub description: String,
    pub apply_url: Option<String>,
}

impl CardView {
    pub fn new(job_ref: JobRef, job: &JobPosting) -> Self {
        let mut tags = Vec::new();
        if let Some(location) = job.location() {
            tags.push(Tag::new(TagKind::Location, location));
        }
        if job.is_remote() {
            tags.push(Tag::new(TagKind::Remote, "Remote"));
        }
        if let Some(salary) = job.salary() {
            tags.push(Tag::new(TagKind::Salary, salary));
        }
        if let Some(schedule) = job.schedule() {
            tags.push(Tag::new(TagKind::Schedule, schedule));
        }
        if let Some(posted) = job.posted() {
            tags.push(Tag::new(TagKind::Posted, posted));
        }

        Self {
            job: job_ref,
            logo: job
                .thumbnail()
                .map_or(Logo::Placeholder, |url| Logo::Thumbnail(url.to_string())),
            title: job.title.clone(),
            company: job.company.clone(),
            tags,
            description: job.description().unwrap_or(NO_DESCRIPTION).to_string(),
            apply_url: job.primary_apply_url().map(str::to_string),
        }
    }

    /// Apply link target, `#` when there is none.
    pub fn apply_href(&self) -> &str {
        self.apply_url.as_deref().unwrap_or(APPLY_PLACEHOLDER)
    }

    pub fn has_apply_link(&self) -> bool {
        self.apply_url.is_some()
    }
}
