use super::main::centered_rect;
use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the new project form as a modal over the board.
///
pub fn create_project(frame: &mut Frame, size: Rect, state: &State) {
    let area = centered_rect(50, 25, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New Project")
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .margin(2)
        .split(area);

    let name = state.project_name_input();
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("Name")
        .border_style(styling::active_block_border_style());
    let input = if name.is_empty() {
        Paragraph::new("Project name...").style(styling::muted_text_style())
    } else {
        Paragraph::new(name.to_owned()).style(styling::normal_text_style())
    };
    frame.render_widget(input.block(input_block), chunks[0]);

    let hint = Paragraph::new("Enter: create  Esc: cancel")
        .style(styling::muted_text_style())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}
