//! # Search Form
//!
//! Input captured before a search: job title, location, how many results to
//! ask for, and whether to restrict to remote postings.

use crate::api::SearchRequest;
use thiserror::Error;

/// Result counts offered by the selector.
pub const NUM_JOBS_OPTIONS: [u32; 4] = [10, 20, 30, 50];

/// Result count used when nothing else is configured.
pub const DEFAULT_NUM_JOBS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both job title and location")]
    MissingQueryOrLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Query,
    Location,
    NumJobs,
    RemoteOnly,
    SearchButton,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Query,
        FormField::Location,
        FormField::NumJobs,
        FormField::RemoteOnly,
        FormField::SearchButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Query | FormField::Location)
    }
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    pub query: String,
    pub location: String,
    pub remote_only: bool,
    num_jobs_index: usize,
    pub focused: FormField,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_JOBS)
    }
}

impl SearchForm {
    /// Create an empty form with `num_jobs` preselected. Values not on
    /// the selector fall back to the closest option at or above it.
    pub fn new(num_jobs: u32) -> Self {
        let num_jobs_index = NUM_JOBS_OPTIONS
            .iter()
            .position(|&n| n >= num_jobs)
            .unwrap_or(NUM_JOBS_OPTIONS.len() - 1);
        Self {
            query: String::new(),
            location: String::new(),
            remote_only: false,
            num_jobs_index,
            focused: FormField::Query,
        }
    }

    pub fn num_jobs(&self) -> u32 {
        NUM_JOBS_OPTIONS[self.num_jobs_index]
    }

    pub fn next_num_jobs(&mut self) {
        self.num_jobs_index = (self.num_jobs_index + 1) % NUM_JOBS_OPTIONS.len();
    }

    pub fn previous_num_jobs(&mut self) {
        let len = NUM_JOBS_OPTIONS.len();
        self.num_jobs_index = (self.num_jobs_index + len - 1) % len;
    }

    pub fn toggle_remote(&mut self) {
        self.remote_only = !self.remote_only;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Type a character into the focused text field. Ignored elsewhere.
    pub fn push_char(&mut self, c: char) {
        match self.focused {
            FormField::Query => self.query.push(c),
            FormField::Location => self.location.push(c),
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focused {
            FormField::Query => {
                self.query.pop();
            }
            FormField::Location => {
                self.location.pop();
            }
            _ => {}
        }
    }

    /// Build a fresh request from the current input.
    ///
    /// Query and location are trimmed; either being empty afterwards is a
    /// validation error and no request must be sent.
    pub fn to_request(&self) -> Result<SearchRequest, ValidationError> {
        let query = self.query.trim();
        let location = self.location.trim();
        if query.is_empty() || location.is_empty() {
            return Err(ValidationError::MissingQueryOrLocation);
        }
        Ok(SearchRequest {
            query: query.to_string(),
            location: location.to_string(),
            num_jobs: self.num_jobs(),
            remote_only: self.remote_only,
        })
    }
}
