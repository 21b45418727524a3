//! # Input Handling
//!
//! Maps terminal events onto [`App`] state changes.
//!
//! Anything that needs I/O (HTTP calls, writing to the terminal or to disk)
//! is returned as a [`Command`] for the event loop to carry out, which keeps
//! this module free of side effects and testable without a terminal.
//!
//! ## Key Bindings
//!
//! ### Search form
//! - `Tab` / `Down` and `Shift+Tab` / `Up` - Move between fields
//! - `Enter` - Submit the search (toggles the checkbox when it is focused)
//! - `Space` - Toggle "remote only" when focused
//! - `Left` / `Right` - Change the number of jobs when focused
//! - `Esc` - Jump to the results
//!
//! ### Results
//! - `j` / `Down` and `k` / `Up` - Select card
//! - `Enter` / `s` - AI summary of the selected card
//! - `y` - Copy the apply link
//! - `t` - Next theme
//! - `/` / `Tab` / `Esc` - Back to the form
//! - `q` - Quit
//!
//! ### Summary modal
//! - `Esc`, `q`, `x` or a click outside the modal - Close
//! - `j` / `k` - Scroll
//!
//! `Ctrl+C` quits and `Ctrl+E` exports the results as HTML from anywhere.

use crate::ui::app::{App, FocusPane, SearchTicket, SummaryTicket};
use crate::ui::form::FormField;
use crate::ui::modal::CloseTrigger;
use crate::ui::render::modal_area;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Side effect requested by an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(SearchTicket),
    Summarize(SummaryTicket),
    CopyToClipboard(String),
    ExportHtml,
    SaveTheme,
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('e') => return Some(Command::ExportHtml),
            _ => {}
        }
        return None;
    }

    if app.modal.is_open() {
        handle_modal_key(app, key);
        return None;
    }

    match app.focus {
        FocusPane::Form => handle_form_key(app, key, now),
        FocusPane::Results => handle_results_key(app, key, now),
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_modal(CloseTrigger::Escape),
        KeyCode::Char('q') | KeyCode::Char('x') => app.close_modal(CloseTrigger::Explicit),
        KeyCode::Char('j') | KeyCode::Down => app.modal.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.modal.scroll_up(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Command> {
    let focused = app.form.focused;
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
        KeyCode::Esc => app.toggle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') if focused == FormField::RemoteOnly => {
            app.form.toggle_remote();
        }
        KeyCode::Enter => return app.submit_search(now).map(Command::Search),
        KeyCode::Left if focused == FormField::NumJobs => app.form.previous_num_jobs(),
        KeyCode::Right if focused == FormField::NumJobs => app.form.next_num_jobs(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    None
}

fn handle_results_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.next_card(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_card(),
        KeyCode::Enter | KeyCode::Char('s') => {
            return app.summarize_selected().map(Command::Summarize);
        }
        KeyCode::Char('y') => match app.selected_apply_url() {
            Some(url) => return Some(Command::CopyToClipboard(url.to_string())),
            None if !app.cards.is_empty() => {
                app.show_error("This job has no apply link", now);
            }
            None => {}
        },
        KeyCode::Char('t') => {
            app.cycle_theme();
            return Some(Command::SaveTheme);
        }
        KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
            app.focus = FocusPane::Form;
        }
        _ => {}
    }
    None
}

/// Handle a mouse event. `frame_area` is the full terminal area the last
/// frame was drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, frame_area: Rect) -> Option<Command> {
    if app.modal.is_open() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let inside = modal_area(frame_area).contains(Position::new(mouse.column, mouse.row));
                if !inside {
                    app.close_modal(CloseTrigger::Backdrop);
                }
            }
            MouseEventKind::ScrollDown => app.modal.scroll_down(),
            MouseEventKind::ScrollUp => app.modal.scroll_up(),
            _ => {}
        }
        return None;
    }

    if app.focus == FocusPane::Results {
        match mouse.kind {
            MouseEventKind::ScrollDown => app.next_card(),
            MouseEventKind::ScrollUp => app.previous_card(),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::SearchForm;
    use crate::ui::theme::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        App::new(SearchForm::default(), Theme::default_theme().clone())
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = app();
        for c in "rust".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), Instant::now());
        }
        handle_key(&mut app, key(KeyCode::Tab), Instant::now());
        for c in "Oslo".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), Instant::now());
        }
        handle_key(&mut app, key(KeyCode::Backspace), Instant::now());
        assert_eq!(app.form.query, "rust");
        assert_eq!(app.form.location, "Osl");
    }

    #[test]
    fn test_q_in_form_is_text_not_quit() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('q')), Instant::now());
        assert!(!app.should_quit);
        assert_eq!(app.form.query, "q");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release, Instant::now());
        assert!(app.form.query.is_empty());
    }

    #[test]
    fn test_enter_with_empty_form_sends_nothing() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, key(KeyCode::Enter), Instant::now()), None);
        assert!(app.toast.is_visible());
    }

    #[test]
    fn test_num_jobs_and_remote_controls() {
        let mut app = app();
        app.form.focused = FormField::NumJobs;
        handle_key(&mut app, key(KeyCode::Right), Instant::now());
        assert_eq!(app.form.num_jobs(), 30);
        app.form.focused = FormField::RemoteOnly;
        handle_key(&mut app, key(KeyCode::Char(' ')), Instant::now());
        assert!(app.form.remote_only);
        handle_key(&mut app, key(KeyCode::Enter), Instant::now());
        assert!(!app.form.remote_only);
    }
}
