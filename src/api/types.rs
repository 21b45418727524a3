//! # Wire Types
//!
//! JSON bodies exchanged with the job search backend.
//!
//! The backend fills missing fields with empty strings (`""`) rather than
//! omitting them, so every optional text field is read through an accessor
//! that treats an empty or whitespace-only value as absent.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub location: String,
    pub num_jobs: u32,
    pub remote_only: bool,
}

/// Successful response of `POST /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

/// One apply option attached to a posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// Highlight bullets extracted by the backend from the posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHighlights {
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl JobHighlights {
    pub fn is_empty(&self) -> bool {
        self.qualifications.is_empty() && self.responsibilities.is_empty() && self.benefits.is_empty()
    }
}

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_from_home: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_links: Option<Vec<ApplyLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<JobHighlights>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl JobPosting {
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_ref())
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(self.location.as_ref())
    }

    pub fn salary(&self) -> Option<&str> {
        non_empty(self.salary.as_ref())
    }

    pub fn schedule(&self) -> Option<&str> {
        non_empty(self.schedule.as_ref())
    }

    pub fn posted(&self) -> Option<&str> {
        non_empty(self.posted.as_ref())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(self.thumbnail.as_ref())
    }

    pub fn is_remote(&self) -> bool {
        self.work_from_home.unwrap_or(false)
    }

    /// URL of the first apply option, if the backend returned one.
    pub fn primary_apply_url(&self) -> Option<&str> {
        self.apply_links
            .as_ref()
            .and_then(|links| links.first())
            .map(|link| link.url.as_str())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Body of `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub description: String,
}

/// Successful response of `POST /api/summarize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl SummaryResponse {
    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_ref())
    }

    pub fn key_skills(&self) -> &[String] {
        self.key_skills.as_deref().unwrap_or_default()
    }

    pub fn benefits(&self) -> &[String] {
        self.benefits.as_deref().unwrap_or_default()
    }
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of a non-2xx response. Only a string `detail` is meaningful to us;
/// validation errors carry a list there, which is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}
