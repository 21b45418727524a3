//! Application state tests
//!
//! Tests for the search and summary flows as seen by [`App`]: loading
//! state, result sets, stale results, the modal lifecycle and the toast.

use jobscout::api::{
    ApiError, JobPosting, Operation, SearchResponse, SummaryResponse, RATE_LIMIT_MESSAGE,
};
use jobscout::ui::app::{FocusPane, SearchTicket};
use jobscout::ui::feedback::TOAST_DURATION;
use jobscout::ui::modal::{CloseTrigger, ModalContent, NO_BENEFITS, NO_SUMMARY};
use jobscout::ui::form::SearchForm;
use jobscout::ui::theme::Theme;
use jobscout::ui::App;
use std::time::{Duration, Instant};

/// Helper to create a test app with a valid form
fn create_test_app() -> App {
    let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
    app.form.query = "rust developer".to_string();
    app.form.location = "Berlin".to_string();
    app
}

fn jobs(titles: &[&str]) -> SearchResponse {
    SearchResponse {
        total: titles.len() as u32,
        search_query: "rust developer".to_string(),
        location: "Berlin".to_string(),
        jobs: titles
            .iter()
            .map(|title| JobPosting {
                title: (*title).to_string(),
                company: "Acme".to_string(),
                description: Some(format!("About {title}")),
                ..JobPosting::default()
            })
            .collect(),
    }
}

fn submit(app: &mut App) -> SearchTicket {
    app.submit_search(Instant::now()).expect("form is valid")
}

#[test]
fn test_success_renders_one_card_per_job() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["A", "B", "C"])), Instant::now());

    assert_eq!(app.cards.len(), 3);
    assert_eq!(app.results.as_ref().unwrap().total, 3);
    assert_eq!(app.focus, FocusPane::Results);
    assert_eq!(app.selected_card, 0);
}

#[test]
fn test_empty_success_reveals_results_without_cards() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&[])), Instant::now());

    assert!(app.results.is_some());
    assert!(app.cards.is_empty());
    assert!(app.export_html().unwrap().contains("No jobs found"));
}

#[test]
fn test_loading_cleared_after_every_settle() {
    let outcomes: Vec<Result<SearchResponse, ApiError>> = vec![
        Ok(jobs(&["A"])),
        Err(ApiError::from_status(Operation::Search, 429, "")),
        Err(ApiError::from_status(Operation::Search, 500, r#"{"detail": "Scraper down"}"#)),
    ];

    for outcome in outcomes {
        let mut app = create_test_app();
        let ticket = submit(&mut app);
        assert!(app.loading_overlay);
        assert!(app.button.is_loading());

        app.apply_search(ticket.generation, outcome, Instant::now());
        assert!(!app.loading_overlay);
        assert!(!app.button.is_loading());
        assert!(!app.button.is_disabled());
    }
}

#[test]
fn test_rate_limit_toast() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(
        ticket.generation,
        Err(ApiError::from_status(Operation::Search, 429, r#"{"detail": "ignored"}"#)),
        Instant::now(),
    );

    assert!(app.toast.is_visible());
    assert_eq!(app.toast.message(), RATE_LIMIT_MESSAGE);
}

#[test]
fn test_failed_search_keeps_previous_results() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["A", "B"])), Instant::now());

    let ticket = submit(&mut app);
    app.apply_search(
        ticket.generation,
        Err(ApiError::from_status(Operation::Search, 500, "")),
        Instant::now(),
    );

    assert_eq!(app.cards.len(), 2);
    assert_eq!(app.toast.message(), "Search failed");
}

#[test]
fn test_stale_card_action_after_new_search_is_inert() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["Old 0", "Old 1"])), Instant::now());
    let old_ref = app.cards[1].job;

    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["New 0", "New 1"])), Instant::now());

    assert!(app.request_summary(old_ref).is_none());
    assert!(!app.modal.is_open());

    let fresh = app.cards[1].job;
    let ticket = app.request_summary(fresh).unwrap();
    assert_eq!(ticket.request.description, "About New 1");
}

#[test]
fn test_summary_for_job_without_description_sends_empty_string() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    let response = SearchResponse {
        jobs: vec![JobPosting {
            title: "Bare".to_string(),
            ..JobPosting::default()
        }],
        ..SearchResponse::default()
    };
    app.apply_search(ticket.generation, Ok(response), Instant::now());

    let ticket = app.summarize_selected().unwrap();
    assert_eq!(ticket.request.description, "");
}

#[test]
fn test_summary_result_after_close_is_dropped() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["A"])), Instant::now());

    let summary = app.summarize_selected().unwrap();
    app.close_modal(CloseTrigger::Backdrop);
    app.apply_summary(summary.generation, summary.job, Ok(SummaryResponse::default()));

    assert!(!app.modal.is_open());
    assert!(!app.scroll_locked);
}

#[test]
fn test_summary_fallbacks_in_modal() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["A"])), Instant::now());

    let summary = app.summarize_selected().unwrap();
    app.apply_summary(summary.generation, summary.job, Ok(SummaryResponse::default()));

    match app.modal.content() {
        Some(ModalContent::Loaded(view)) => {
            assert_eq!(view.summary, NO_SUMMARY);
            assert_eq!(view.benefits, vec![NO_BENEFITS.to_string()]);
        }
        other => panic!("expected loaded modal, got {other:?}"),
    }
}

#[test]
fn test_modal_snapshot_survives_new_search() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["First"])), Instant::now());
    let summary = app.summarize_selected().unwrap();

    // A new search lands while the summary is still loading
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["Other"])), Instant::now());
    app.apply_summary(summary.generation, summary.job, Ok(SummaryResponse::default()));

    match app.modal.content() {
        Some(ModalContent::Loaded(view)) => assert_eq!(view.title, "First"),
        other => panic!("expected loaded modal, got {other:?}"),
    }
}

#[test]
fn test_every_close_trigger_converges() {
    for trigger in [CloseTrigger::Escape, CloseTrigger::Backdrop, CloseTrigger::Explicit] {
        let mut app = create_test_app();
        let ticket = submit(&mut app);
        app.apply_search(ticket.generation, Ok(jobs(&["A", "B"])), Instant::now());
        app.summarize_selected();
        assert!(app.scroll_locked);

        app.close_modal(trigger);
        assert!(!app.modal.is_open());
        assert!(!app.scroll_locked);
    }
}

#[test]
fn test_toast_earlier_timer_hides_newer_message() {
    let mut app = create_test_app();
    let start = Instant::now();
    app.show_error("first", start);
    app.show_error("second", start + Duration::from_secs(3));

    app.on_tick(start + TOAST_DURATION + Duration::from_millis(1));
    assert!(!app.toast.is_visible());
    assert_eq!(app.toast.message(), "second");
}

#[test]
fn test_toast_visible_before_deadline() {
    let mut app = create_test_app();
    let start = Instant::now();
    app.show_error("boom", start);
    app.on_tick(start + Duration::from_secs(4));
    assert!(app.toast.is_visible());
}

#[test]
fn test_card_navigation_wraps() {
    let mut app = create_test_app();
    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["A", "B", "C"])), Instant::now());

    app.previous_card();
    assert_eq!(app.selected_card, 2);
    app.next_card();
    assert_eq!(app.selected_card, 0);
}

#[test]
fn test_toggle_focus_needs_results() {
    let mut app = create_test_app();
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Form);

    let ticket = submit(&mut app);
    app.apply_search(ticket.generation, Ok(jobs(&["A"])), Instant::now());
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Form);
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Results);
}

#[test]
fn test_cycle_theme() {
    let mut app = create_test_app();
    let before = app.theme.name;
    app.cycle_theme();
    assert_ne!(app.theme.name, before);
}

#[test]
fn test_particles_generated_once() {
    let app = create_test_app();
    assert_eq!(app.particles.len(), 30);
}
