//! # Result-Set Store
//!
//! Holds the postings of the most recent successful search.
//!
//! Every replacement mints a fresh [`ResultSetId`]. Cards capture a
//! [`JobRef`] (set id + position) by value, so an action rendered for an
//! older search resolves to nothing instead of to whatever now sits at the
//! same position.

use crate::api::JobPosting;
use uuid::Uuid;

/// Identifier of one search's result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultSetId(Uuid);

impl ResultSetId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ResultSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable handle to one posting in one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobRef {
    pub set: ResultSetId,
    pub position: usize,
}

#[derive(Debug, Default)]
pub struct JobStore {
    current: Option<(ResultSetId, Vec<JobPosting>)>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list. Refs from the previous set stop resolving.
    pub fn replace(&mut self, jobs: Vec<JobPosting>) -> ResultSetId {
        let id = ResultSetId::generate();
        self.current = Some((id, jobs));
        id
    }

    pub fn current_set(&self) -> Option<ResultSetId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    pub fn jobs(&self) -> &[JobPosting] {
        self.current
            .as_ref()
            .map(|(_, jobs)| jobs.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.jobs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs().is_empty()
    }

    pub fn get(&self, job: JobRef) -> Option<&JobPosting> {
        match &self.current {
            Some((id, jobs)) if *id == job.set => jobs.get(job.position),
            _ => None,
        }
    }

    /// Handle for the posting at `position` in the current set.
    pub fn job_ref(&self, position: usize) -> Option<JobRef> {
        let (set, jobs) = self.current.as_ref()?;
        (position < jobs.len()).then_some(JobRef {
            set: *set,
            position,
        })
    }

    /// Iterate the current set with the handle for each posting.
    pub fn iter(&self) -> impl Iterator<Item = (JobRef, &JobPosting)> {
        self.current.iter().flat_map(|(set, jobs)| {
            jobs.iter().enumerate().map(move |(position, job)| {
                (
                    JobRef {
                        set: *set,
                        position,
                    },
                    job,
                )
            })
        })
    }
}
