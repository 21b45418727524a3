//! # Summary Modal
//!
//! Overlay showing the AI summary of one posting.
//!
//! ```text
//! Hidden ──open()──▶ Open(Loading) ──resolve()──▶ Open(Loaded | Failed)
//!   ▲                                                   │
//!   └──────────── close(Escape | Backdrop | Explicit) ◀─┘
//! ```
//!
//! Only one modal exists; opening it again replaces its content.

use crate::api::{JobPosting, SummaryResponse};
use crate::jobs::JobRef;

pub const SUMMARY_LOADING_MESSAGE: &str = "Analyzing job with AI...";
pub const SUMMARY_CONFIG_HINT: &str = "Make sure GROQ_API_KEY is configured in your .env file";
pub const NO_SUMMARY: &str = "No summary available";
pub const NO_SKILLS: &str = "No specific skills extracted";
pub const NO_BENEFITS: &str = "No benefits mentioned";

/// What closed the modal. All triggers end in the same hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Escape,
    Backdrop,
    Explicit,
}

/// Summary content with every fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub title: String,
    pub company: String,
    pub summary: String,
    pub key_skills: Vec<String>,
    pub benefits: Vec<String>,
}

fn or_placeholder(items: &[String], placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items.to_vec()
    }
}

impl SummaryView {
    pub fn new(job: &JobPosting, response: &SummaryResponse) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            summary: response.summary().unwrap_or(NO_SUMMARY).to_string(),
            key_skills: or_placeholder(response.key_skills(), NO_SKILLS),
            benefits: or_placeholder(response.benefits(), NO_BENEFITS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    Loading,
    Loaded(SummaryView),
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal {
    pub job: JobRef,
    /// Snapshot taken when the modal opened; later searches do not touch it.
    pub posting: JobPosting,
    pub content: ModalContent,
    pub scroll: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryModal {
    #[default]
    Hidden,
    Open(OpenModal),
}

impl SummaryModal {
    pub fn is_open(&self) -> bool {
        matches!(self, SummaryModal::Open(_))
    }

    /// Show the modal in its loading state for `job`.
    pub fn open(&mut self, job: JobRef, posting: &JobPosting) {
        *self = SummaryModal::Open(OpenModal {
            job,
            posting: posting.clone(),
            content: ModalContent::Loading,
            scroll: 0,
        });
    }

    pub fn close(&mut self, trigger: CloseTrigger) {
        if self.is_open() {
            tracing::debug!(?trigger, "closing summary modal");
        }
        *self = SummaryModal::Hidden;
    }

    /// Replace the content if the modal is still open. Returns whether it was.
    pub fn resolve(&mut self, content: ModalContent) -> bool {
        match self {
            SummaryModal::Open(open) => {
                open.content = content;
                open.scroll = 0;
                true
            }
            SummaryModal::Hidden => false,
        }
    }

    pub fn job(&self) -> Option<JobRef> {
        match self {
            SummaryModal::Open(open) => Some(open.job),
            SummaryModal::Hidden => None,
        }
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match self {
            SummaryModal::Open(open) => Some(&open.content),
            SummaryModal::Hidden => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            SummaryModal::Open(open) => open.scroll,
            SummaryModal::Hidden => 0,
        }
    }

    pub fn scroll_down(&mut self) {
        if let SummaryModal::Open(open) = self {
            open.scroll = open.scroll.saturating_add(1);
        }
    }

    pub fn scroll_up(&mut self) {
        if let SummaryModal::Open(open) = self {
            open.scroll = open.scroll.saturating_sub(1);
        }
    }
}
