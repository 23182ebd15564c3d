use super::main::centered_rect;
use super::Frame;
use crate::state::{State, TaskFormField};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the new task form as a modal over the board.
///
pub fn create_task(frame: &mut Frame, size: Rect, state: &State) {
    let form = state.task_form();
    let area = centered_rect(60, 60, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New Task")
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    render_input(
        frame,
        chunks[0],
        "Title",
        &form.title,
        "What needs doing?",
        form.field == TaskFormField::Title,
    );

    let priority_block = Block::default()
        .borders(Borders::ALL)
        .title("Priority")
        .border_style(if form.field == TaskFormField::Priority {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });
    let priority_text = Paragraph::new(Line::from(Span::styled(
        format!("< {} >", form.priority.label()),
        styling::priority_style(form.priority),
    )))
    .block(priority_block);
    frame.render_widget(priority_text, chunks[1]);

    render_input(
        frame,
        chunks[2],
        "Due Date",
        &form.due_date,
        "YYYY-MM-DD",
        form.field == TaskFormField::DueDate,
    );

    let hint = Paragraph::new("Tab: next field  Enter: create  Esc: cancel")
        .style(styling::muted_text_style())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

fn render_input(
    frame: &mut Frame,
    size: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    active: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(if active {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });

    let paragraph = if value.is_empty() {
        Paragraph::new(placeholder.to_owned()).style(styling::muted_text_style())
    } else {
        Paragraph::new(value.to_owned()).style(styling::normal_text_style())
    };

    frame.render_widget(paragraph.block(block), size);
}
