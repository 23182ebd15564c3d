//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library,
//! including:
//! - Terminal rendering and layout
//! - Widget components (spinner, styling)
//! - View rendering (sidebar, kanban, list, forms, setup screen)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
