//! Plan renderer
//!
//! Builds a read-only display model from an itinerary and renders it for
//! the terminal. The TUI draws the same model with ratatui widgets.

pub mod classify;
mod text;
mod view;

pub use classify::{ActivityCategory, classify};
pub use text::render_text;
pub use view::{DaySection, PlanView, TimelineEntry};
