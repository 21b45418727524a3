//! # UI Module
//!
//! Terminal user interface for jobscout.
//!
//! ## Components
//!
//! - [`App`] - Application state (form, results, modal, toast, loading state)
//! - [`mod@input`] - Maps key and mouse events onto the state
//! - [`mod@render`] - Draws the state with ratatui
//! - [`mod@html`] - Renders the same cards as a standalone HTML page
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├──────────┬─────────┬──────┬──────────┬──────────┤
//! │ Job title│ Location│ Jobs │ Remote   │  Search  │
//! ├──────────┴─────────┴──────┴──────────┴──────────┤
//! │  N jobs found                                    │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │ 💼 Title / Company / tags / description   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ...                                             │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The loading overlay, the summary modal and the error toast are drawn on
//! top of this layout.

pub mod app;
pub mod card;
pub mod clipboard;
pub mod config;
pub mod feedback;
pub mod form;
pub mod html;
pub mod input;
pub mod modal;
pub mod particles;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
