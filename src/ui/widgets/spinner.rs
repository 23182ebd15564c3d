use crate::state::State;
use ratatui::layout::Alignment;
use ratatui::widgets::Paragraph;

/// Braille spinner animation frames, advanced on each terminal tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a loading paragraph showing the current spinner frame, roughly
/// vertically centered for the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let padding = "\n".repeat((height / 2).saturating_sub(1) as usize);
    Paragraph::new(format!(
        "{}{} Loading...",
        padding,
        FRAMES[state.get_spinner_index() % FRAMES.len()]
    ))
    .alignment(Alignment::Center)
}
