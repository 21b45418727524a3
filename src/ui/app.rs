use crate::api::{ApiError, SearchRequest, SearchResponse, SummaryRequest, SummaryResponse};
use crate::jobs::{JobRef, JobStore, ResultSetId};
use crate::ui::card::CardView;
use crate::ui::feedback::{ButtonState, Toast};
use crate::ui::form::SearchForm;
use crate::ui::html;
use crate::ui::modal::{CloseTrigger, ModalContent, SummaryModal, SummaryView};
use crate::ui::particles::{self, Particle};
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Form,
    Results,
}

/// Header of the results section for the current result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub set: ResultSetId,
    pub total: u32,
    pub search_query: String,
    pub location: String,
}

impl ResultsView {
    pub fn query_line(&self) -> String {
        format!(
            "Showing results for \"{}\" in {}",
            self.search_query, self.location
        )
    }
}

/// A search the event loop must send. Carries the generation its result
/// has to be reported back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTicket {
    pub generation: u64,
    pub job: JobRef,
    pub request: SummaryRequest,
}

/// Completion of a backend call, delivered back to the UI thread.
#[derive(Debug)]
pub enum BackendEvent {
    SearchSettled {
        generation: u64,
        result: Result<SearchResponse, ApiError>,
    },
    SummarySettled {
        generation: u64,
        job: JobRef,
        result: Result<SummaryResponse, ApiError>,
    },
}

pub struct App {
    pub form: SearchForm,
    pub focus: FocusPane,
    pub store: JobStore,
    /// `None` until the first successful search reveals the results section.
    pub results: Option<ResultsView>,
    pub cards: Vec<CardView>,
    pub selected_card: usize,
    pub loading_overlay: bool,
    pub button: ButtonState,
    pub toast: Toast,
    pub modal: SummaryModal,
    /// Results scrolling is suppressed while the modal is open.
    pub scroll_locked: bool,
    pub particles: Vec<Particle>,
    pub theme: Theme,
    pub should_quit: bool,
    pub tick: u64,
    search_generation: u64,
    summary_generation: u64,
    started_at: Instant,
}

impl App {
    pub fn new(form: SearchForm, theme: Theme) -> Self {
        Self {
            form,
            focus: FocusPane::Form,
            store: JobStore::new(),
            results: None,
            cards: Vec::new(),
            selected_card: 0,
            loading_overlay: false,
            button: ButtonState::default(),
            toast: Toast::default(),
            modal: SummaryModal::default(),
            scroll_locked: false,
            particles: particles::generate(),
            theme,
            should_quit: false,
            tick: 0,
            search_generation: 0,
            summary_generation: 0,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn search_in_flight(&self) -> bool {
        self.button.is_loading()
    }

    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::warn!(%message, "showing error toast");
        self.toast.show(message, now);
    }

    pub fn show_notice(&mut self, message: impl Into<String>, now: Instant) {
        self.toast.notify(message, now);
    }

    /// Advance animations and fire due toast hides.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.toast.tick(now);
    }

    /// Validate the form and, if it passes, enter the loading state.
    ///
    /// Returns the request to send, or `None` when nothing must be sent
    /// (invalid input, or a search already running with the button disabled).
    pub fn submit_search(&mut self, now: Instant) -> Option<SearchTicket> {
        if self.button.is_disabled() {
            return None;
        }

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.show_error(e.to_string(), now);
                return None;
            }
        };

        self.loading_overlay = true;
        self.button.set_loading(true);
        self.search_generation += 1;
        tracing::debug!(
            generation = self.search_generation,
            query = %request.query,
            location = %request.location,
            "dispatching search"
        );

        Some(SearchTicket {
            generation: self.search_generation,
            request,
        })
    }

    /// Apply a settled search. Results of superseded searches are dropped.
    pub fn apply_search(
        &mut self,
        generation: u64,
        result: Result<SearchResponse, ApiError>,
        now: Instant,
    ) {
        if generation != self.search_generation {
            tracing::debug!(generation, current = self.search_generation, "dropping stale search result");
            return;
        }

        match result {
            Ok(response) => self.show_results(response),
            Err(e) => self.show_error(e.to_string(), now),
        }

        self.loading_overlay = false;
        self.button.set_loading(false);
    }

    fn show_results(&mut self, response: SearchResponse) {
        let SearchResponse {
            total,
            search_query,
            location,
            jobs,
        } = response;

        let set = self.store.replace(jobs);
        self.cards = self
            .store
            .iter()
            .map(|(job_ref, job)| CardView::new(job_ref, job))
            .collect();
        tracing::info!(total, cards = self.cards.len(), %set, "search results received");

        self.results = Some(ResultsView {
            set,
            total,
            search_query,
            location,
        });
        self.selected_card = 0;
        self.focus = FocusPane::Results;
    }

    /// Open the modal for `job` and produce the summary request.
    ///
    /// A ref from an older result set resolves to nothing and is ignored.
    pub fn request_summary(&mut self, job: JobRef) -> Option<SummaryTicket> {
        let Some(posting) = self.store.get(job) else {
            tracing::debug!(?job, "ignoring summary request for stale job");
            return None;
        };

        let request = SummaryRequest {
            description: posting.description.clone().unwrap_or_default(),
        };
        self.modal.open(job, posting);
        self.scroll_locked = true;
        self.summary_generation += 1;
        tracing::debug!(generation = self.summary_generation, position = job.position, "dispatching summary");

        Some(SummaryTicket {
            generation: self.summary_generation,
            job,
            request,
        })
    }

    pub fn summarize_selected(&mut self) -> Option<SummaryTicket> {
        let job = self.selected_card()?.job;
        self.request_summary(job)
    }

    /// Apply a settled summary. Only the latest request for the job the
    /// modal currently shows may change it.
    pub fn apply_summary(
        &mut self,
        generation: u64,
        job: JobRef,
        result: Result<SummaryResponse, ApiError>,
    ) {
        if generation != self.summary_generation || self.modal.job() != Some(job) {
            tracing::debug!(generation, current = self.summary_generation, "dropping stale summary");
            return;
        }

        let content = match (&self.modal, result) {
            (SummaryModal::Open(open), Ok(response)) => {
                ModalContent::Loaded(SummaryView::new(&open.posting, &response))
            }
            (_, Err(e)) => {
                tracing::warn!(error = %e, "summary failed");
                ModalContent::Failed {
                    message: e.to_string(),
                }
            }
            (SummaryModal::Hidden, Ok(_)) => return,
        };
        self.modal.resolve(content);
    }

    pub fn apply_backend_event(&mut self, event: BackendEvent, now: Instant) {
        match event {
            BackendEvent::SearchSettled { generation, result } => {
                self.apply_search(generation, result, now);
            }
            BackendEvent::SummarySettled {
                generation,
                job,
                result,
            } => self.apply_summary(generation, job, result),
        }
    }

    pub fn close_modal(&mut self, trigger: CloseTrigger) {
        self.modal.close(trigger);
        self.scroll_locked = false;
    }

    pub fn selected_card(&self) -> Option<&CardView> {
        self.cards.get(self.selected_card)
    }

    pub fn next_card(&mut self) {
        if self.scroll_locked || self.cards.is_empty() {
            return;
        }
        self.selected_card = (self.selected_card + 1) % self.cards.len();
    }

    pub fn previous_card(&mut self) {
        if self.scroll_locked || self.cards.is_empty() {
            return;
        }
        if self.selected_card > 0 {
            self.selected_card -= 1;
        } else {
            self.selected_card = self.cards.len() - 1;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Form if self.results.is_some() => FocusPane::Results,
            FocusPane::Form => FocusPane::Form,
            FocusPane::Results => FocusPane::Form,
        };
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
    }

    /// Apply link of the selected card, if it has a real one.
    pub fn selected_apply_url(&self) -> Option<&str> {
        self.selected_card().and_then(|card| card.apply_url.as_deref())
    }

    /// HTML page for the current results, or `None` before the first search.
    pub fn export_html(&self) -> Option<String> {
        let results = self.results.as_ref()?;
        Some(html::render_page(results, &self.cards, &self.particles))
    }
}
