//! # Transient Feedback
//!
//! Loading overlay, search button loading state and the toast.
//!
//! Time is passed in explicitly (`now: Instant`) so the auto-hide behaviour
//! can be driven from tests without sleeping.

use std::time::{Duration, Instant};

/// How long a toast stays up after it is shown.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// What a toast is reporting; picks its colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Error,
    Notice,
}

/// Toast for errors and short notices.
///
/// Every show schedules its own hide. Hides are never cancelled, so a timer
/// left over from an earlier message can hide a newer one.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    visible: bool,
    pending_hides: Vec<Instant>,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.show_kind(ToastKind::Error, message, now);
    }

    /// Show a non-error message, e.g. a confirmation.
    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.show_kind(ToastKind::Notice, message, now);
    }

    fn show_kind(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.pending_hides.push(now + TOAST_DURATION);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Fire every hide whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let before = self.pending_hides.len();
        self.pending_hides.retain(|deadline| *deadline > now);
        if self.pending_hides.len() < before {
            self.hide();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn pending_hides(&self) -> usize {
        self.pending_hides.len()
    }
}

/// The search button: a text label, or a spinner while disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    loading: bool,
}

impl ButtonState {
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_disabled(&self) -> bool {
        self.loading
    }
}

/// Braille spinner frames, advanced once per rendered tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}
